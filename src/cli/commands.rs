//! CLI command implementations
//!
//! Commands are thin: they read input, call the decoder library, and print
//! one JSON object. An invalid payload is a normal decode outcome and exits
//! zero; only I/O problems and unknown form codes on `schema` exit non-zero.

use std::path::Path;

use crate::observability::Logger;
use crate::parser::BarcodeParser;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_payload, write_response};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch an already-parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Decode { input, verbose } => decode(input.as_deref(), verbose),
        Command::Forms => forms(),
        Command::Schema { code, form_version } => schema(&code, form_version.as_deref()),
    }
}

/// Decode one payload and print the result.
pub fn decode(input: Option<&Path>, verbose: bool) -> CliResult<()> {
    let payload = read_payload(input)?;
    let parser = BarcodeParser::new();
    let result = parser.parse(&payload);

    if verbose {
        let field_count = result.data.len().to_string();
        let error_count = result.errors.len().to_string();
        if result.is_valid {
            Logger::info(
                "DECODE_COMPLETE",
                &[("fields", field_count.as_str()), ("form", result.form_type.as_str())],
            );
        } else {
            Logger::warn(
                "DECODE_REJECTED",
                &[("errors", error_count.as_str()), ("form", result.form_type.as_str())],
            );
        }
    }

    write_response(serde_json::to_value(&result)?)
}

/// List the supported forms as `{code, name}` pairs.
pub fn forms() -> CliResult<()> {
    let parser = BarcodeParser::new();
    let listing = parser.registry().list();
    write_response(serde_json::to_value(listing)?)
}

/// Print the schema for a form code, or fail with a coded error.
pub fn schema(code: &str, form_version: Option<&str>) -> CliResult<()> {
    let parser = BarcodeParser::new();
    let registry = parser.registry();

    let schema = match form_version {
        Some(version) => registry.get_version(code, version),
        None => registry.get(code),
    }
    .ok_or_else(|| CliError::UnknownForm(code.to_string()))?;

    write_response(serde_json::to_value(schema)?)
}
