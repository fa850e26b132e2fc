use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::cli::{usage, Cli};
use crate::color::format_rgba;
use crate::config::Config;
use crate::remove::clean_file;

pub fn run(cli: &Cli) -> Result<()> {
    let (input, output): (&Path, Option<&Path>) = match (&cli.input, &cli.output) {
        (Some(input), Some(output)) => (input.as_path(), Some(output.as_path())),
        (Some(input), None) if cli.dry_run => (input.as_path(), None),
        _ => {
            println!("{}", usage());
            return Ok(());
        }
    };

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let options = config.options(cli.tolerance, cli.bleed);

    println!("Processing {}...", input.display());

    let output = if cli.dry_run { None } else { output };
    let report = clean_file(input, output, &options)?;

    println!(
        "Detected background color: {}",
        format_rgba(report.background)
    );
    println!(
        "Erased {} of {} pixels ({} kept, tolerance {})",
        report.erased,
        report.total,
        report.kept(),
        options.tolerance
    );

    if report.erased == 0 {
        println!(
            "{} Nothing matched the background from the corners; try a higher --tolerance.",
            "!".yellow()
        );
    }

    match output {
        Some(output) => println!(
            "{} Successfully saved cleaned image to {}",
            "✓".green(),
            output.display()
        ),
        None => println!("\n{} Dry run — no image written.", "ℹ".blue()),
    }

    Ok(())
}
