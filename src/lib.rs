//! musterscan - A strict, deterministic decoder for German Muster form
//! barcode payloads
//!
//! The decoder consumes a tab-delimited string recovered from a 2D barcode,
//! resolves the form schema by the leading form-code/version tokens, projects
//! the positional tokens into a named record, and validates the record
//! against per-form rules.

pub mod cli;
pub mod dates;
pub mod mapping;
pub mod observability;
pub mod parser;
pub mod sanitize;
pub mod schema;
pub mod validation;
