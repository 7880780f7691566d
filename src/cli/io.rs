//! Payload input and JSON output for the CLI
//!
//! - Input: one raw payload, from a file or all of stdin
//! - Output: a single JSON object on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::CliResult;

/// Reads the raw payload from a file, or from stdin when no path is given.
pub fn read_payload(input: Option<&Path>) -> CliResult<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut payload = String::new();
            io::stdin().read_to_string(&mut payload)?;
            Ok(payload)
        }
    }
}

/// Writes a success response envelope to stdout.
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
