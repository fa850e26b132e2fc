use std::path::PathBuf;

use clap::{CommandFactory, Parser};

#[derive(Parser)]
#[command(
    name = "remove_bg",
    about = "Erase the flat background around a sprite and save it as a transparent PNG"
)]
pub struct Cli {
    /// Image to clean
    pub input: Option<PathBuf>,

    /// Where to write the transparent PNG
    pub output: Option<PathBuf>,

    /// Maximum RGB distance from the background color [default: 40]
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Fill erased pixels with the color of their nearest visible neighbors
    /// (alpha stays 0), which avoids dark edges when the sprite is resized
    #[arg(long)]
    pub bleed: bool,

    /// Report what would be erased without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Path to a TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}
