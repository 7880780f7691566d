//! CLI module for musterscan
//!
//! Provides the command-line interface for:
//! - decode: decode one payload from a file or stdin
//! - forms: list supported forms as `{code, name}` pairs
//! - schema: print the full schema for one form code

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{decode, forms, run, run_command, schema};
pub use errors::{CliError, CliResult};
pub use io::{read_payload, write_response};
