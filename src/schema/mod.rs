//! Form schema subsystem for musterscan
//!
//! A schema is the ordered list of field definitions for one Muster form
//! variant, keyed by `(form code, version)`.
//!
//! # Design Principles
//!
//! - One schema variant per `(form code, version)` pair (F1)
//! - The registry is immutable after construction (F2)
//! - Field indices are unique within a schema (F3)
//! - Absence of a form code is a normal outcome, not an error (F4)
//! - Deterministic lookup and listing

mod errors;
mod forms;
mod registry;
mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::{FormInfo, SchemaRegistry, DEFAULT_FORM_CODE};
pub use types::{FieldDef, FieldType, FormSchema, Transform};
