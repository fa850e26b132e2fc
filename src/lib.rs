pub mod alpha_bleed;
pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod fill;
pub mod image_io;
pub mod mask;
pub mod remove;
