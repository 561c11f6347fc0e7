mod analyze;
mod categories;
mod cli;
mod error;
mod input;
mod run;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            message,
            json,
            verbose,
        } => analyze::execute(message, json, verbose),
        Commands::Run {
            params,
            file,
            verbose,
        } => run::execute(params, file, verbose),
        Commands::Categories { category, json } => categories::execute(category, json),
    };

    if let Err(err) = result {
        ui::error_message(&format!("Error: {}", err.user_message()));
        process::exit(1);
    }
}
