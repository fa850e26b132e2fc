use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use remove_bg::cli::Cli;
use remove_bg::commands;
use remove_bg::error::Error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::remove::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{} Error: {:#}", "✗".red(), err);
            let code = err.downcast_ref::<Error>().map_or(1, Error::exit_code);
            ExitCode::from(code)
        }
    }
}
