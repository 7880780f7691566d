//! Schema registry
//!
//! In-memory registry of all supported form schemas, built eagerly at
//! construction and read-only afterwards (F2). Because nothing mutates the
//! registry after construction, concurrent lookups from multiple threads
//! need no synchronization.
//!
//! Form codes appear in barcodes with inconsistent zero-padding across
//! printers, so lookup normalizes the supplied code by stripping leading
//! zeros. A code that becomes empty after stripping falls back to the
//! original value: only zero-padding variants of the same numeric code may
//! collapse to one identity.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::errors::{SchemaError, SchemaResult};
use super::forms;
use super::types::FormSchema;

/// Form code a result defaults to when the payload is too short to carry one.
pub const DEFAULT_FORM_CODE: &str = "10";

/// A `{code, name}` pair for supported-forms listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInfo {
    pub code: String,
    pub name: String,
}

/// Registry of form schema variants indexed by `(form code, version)`
pub struct SchemaRegistry {
    /// Schema variants indexed by (normalized code, version)
    schemas: HashMap<(String, String), FormSchema>,
    /// Default version per code: the first registered variant of that code
    default_versions: HashMap<String, String>,
}

impl SchemaRegistry {
    /// Creates an empty registry (for programmatic population in tests or
    /// embedding callers with their own form set).
    pub fn empty() -> Self {
        Self {
            schemas: HashMap::new(),
            default_versions: HashMap::new(),
        }
    }

    /// Creates the registry holding all built-in Muster schemas.
    pub fn with_builtin() -> Self {
        let mut registry = Self::empty();
        for schema in forms::builtin() {
            // Built-in tables are covered by structure tests; registration
            // cannot collide because builtin() yields distinct keys.
            let key = (schema.form_code.clone(), schema.version.clone());
            registry
                .default_versions
                .entry(key.0.clone())
                .or_insert_with(|| key.1.clone());
            registry.schemas.insert(key, schema);
        }
        registry
    }

    /// Normalizes a form code by stripping leading zeros.
    ///
    /// A code consisting entirely of zeros falls back to the un-stripped
    /// original so distinct codes never collapse to the same identity.
    pub fn normalize_code(code: &str) -> String {
        let stripped = code.trim_start_matches('0');
        if stripped.is_empty() {
            code.to_string()
        } else {
            stripped.to_string()
        }
    }

    /// Registers a schema variant.
    ///
    /// The first variant registered for a code becomes that code's default.
    /// Re-registering an existing `(code, version)` is an immutability
    /// violation.
    pub fn register(&mut self, schema: FormSchema) -> SchemaResult<()> {
        schema.validate_structure().map_err(|reason| {
            SchemaError::invalid_schema(&schema.form_code, &schema.version, reason)
        })?;

        let key = (schema.form_code.clone(), schema.version.clone());
        if self.schemas.contains_key(&key) {
            return Err(SchemaError::immutable(&schema.form_code, &schema.version));
        }

        self.default_versions
            .entry(key.0.clone())
            .or_insert_with(|| key.1.clone());
        self.schemas.insert(key, schema);
        Ok(())
    }

    /// Gets the default schema variant for a form code.
    ///
    /// Absence is a normal outcome (F4), signaled by `None`.
    pub fn get(&self, code: &str) -> Option<&FormSchema> {
        let code = Self::normalize_code(code);
        let version = self.default_versions.get(&code)?;
        self.schemas.get(&(code, version.clone()))
    }

    /// Gets the schema variant for a form code and version.
    ///
    /// Falls back to the code's default variant when the exact version is
    /// not registered, so a layout revision never turns a supported code
    /// into an unsupported one.
    pub fn get_version(&self, code: &str, version: &str) -> Option<&FormSchema> {
        let normalized = Self::normalize_code(code);
        self.schemas
            .get(&(normalized, version.to_string()))
            .or_else(|| self.get(code))
    }

    /// Checks whether any variant of a form code is registered.
    pub fn code_exists(&self, code: &str) -> bool {
        self.default_versions
            .contains_key(&Self::normalize_code(code))
    }

    /// Returns `{code, name}` for every registered form code, in
    /// deterministic order (numeric where possible, lexicographic otherwise).
    pub fn list(&self) -> Vec<FormInfo> {
        let mut infos: Vec<FormInfo> = self
            .default_versions
            .keys()
            .filter_map(|code| {
                self.get(code).map(|schema| FormInfo {
                    code: code.clone(),
                    name: schema.name.clone(),
                })
            })
            .collect();
        infos.sort_by(|a, b| match (a.code.parse::<u32>(), b.code.parse::<u32>()) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            _ => a.code.cmp(&b.code),
        });
        infos
    }

    /// Returns all registered schema variants.
    pub fn all_schemas(&self) -> impl Iterator<Item = &FormSchema> {
        self.schemas.values()
    }

    /// Returns the number of registered schema variants.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}
