//! CLI argument definitions using clap
//!
//! Commands:
//! - musterscan decode [--input <path>] [--verbose]
//! - musterscan forms
//! - musterscan schema --code <code> [--form-version <version>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// musterscan - decoder for German Muster form barcode payloads
#[derive(Parser, Debug)]
#[command(name = "musterscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode one payload and print the result as JSON
    Decode {
        /// Read the payload from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,

        /// Log decode events to stderr
        #[arg(long)]
        verbose: bool,
    },

    /// List the supported forms
    Forms,

    /// Print the schema for a form code
    Schema {
        /// Form code, zero-padded or not
        #[arg(long)]
        code: String,

        /// Version variant; the code's default variant when omitted
        #[arg(long = "form-version")]
        form_version: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
