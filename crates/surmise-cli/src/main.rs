//! Surmise CLI - schema inference and import preview for tabular data.

mod cli;
mod commands;
mod server;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Infer {
            file,
            json,
            sample_size,
            no_header,
        } => commands::infer::run(file, json, sample_size, no_header, cli.verbose),

        Commands::Extract { file, json } => commands::extract::run(file, json),

        Commands::Preview { file, no_header } => commands::preview::run(file, no_header),

        Commands::Serve { port } => commands::serve::run(port),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
