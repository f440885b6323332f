//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Surmise: schema inference and import preview for tabular data
#[derive(Parser)]
#[command(name = "surmise")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Infer the column schema of a delimited data file
    Infer {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output the schema as JSON
        #[arg(long)]
        json: bool,

        /// Rows sampled for inference
        #[arg(long, default_value = "200")]
        sample_size: usize,

        /// Treat the first row as data, not a header
        #[arg(long)]
        no_header: bool,
    },

    /// Extract table-like row records from a plain-text file
    Extract {
        /// Path to the text file (e.g. OCR output)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output the extracted rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a full import preview (sample, schema, warnings) as JSON
    Preview {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Treat the first row as data, not a header
        #[arg(long)]
        no_header: bool,
    },

    /// Run the import/inference HTTP API
    Serve {
        /// Port for the HTTP server
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
}
