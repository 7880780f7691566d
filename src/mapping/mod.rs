//! Field mapping subsystem
//!
//! Projects the flat token array of a payload into a named record using a
//! resolved form schema.
//!
//! # Design Principles
//!
//! - Mapping is a pure function of `(tokens, schema)` (M1)
//! - An out-of-range index reads as an empty token, never a failure (M2)
//! - Absent values are absent keys, never empty-string values (M3)
//! - Placeholders consume their position and are not emitted (M4)

mod mapper;

pub use mapper::map_tokens;
