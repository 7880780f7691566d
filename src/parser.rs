//! Top-level parse entry point
//!
//! `parse` runs the whole pipeline: sanitize, tokenize, identify the form,
//! map, validate. Every outcome - including structural failure and an
//! unsupported form code - is reported inside the returned structure; the
//! parse path never fails with an `Err` for malformed payload input.
//!
//! Each call is synchronous, single-pass and allocates its own token array
//! and result, so concurrent calls on a shared parser need no
//! synchronization: the registry is read-only after construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mapping::map_tokens;
use crate::sanitize::sanitize;
use crate::schema::{SchemaRegistry, DEFAULT_FORM_CODE};
use crate::validation::validate;

/// Number of leading identification tokens every payload must carry:
/// form code, form-code supplement, version number.
const IDENTIFICATION_TOKENS: usize = 3;

/// The decoded, validated result of one payload
///
/// `data` is sparse: fields whose source token was empty are absent keys.
/// The structure is created fresh per call and never mutated after return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedBarcodeData {
    /// Normalized form code the payload resolved to
    pub form_type: String,
    /// Whether the error list is empty
    pub is_valid: bool,
    /// All collected violations, in deterministic order
    pub errors: Vec<String>,
    /// Sparse mapping from field name to value
    pub data: BTreeMap<String, String>,
}

/// Barcode payload parser over an immutable schema registry
pub struct BarcodeParser {
    registry: SchemaRegistry,
}

impl BarcodeParser {
    /// Creates a parser over the built-in schema registry.
    pub fn new() -> Self {
        Self {
            registry: SchemaRegistry::with_builtin(),
        }
    }

    /// Creates a parser over a caller-supplied registry.
    pub fn with_registry(registry: SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Read-only access to the registry, for supported-forms introspection.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Decodes and validates one raw payload.
    ///
    /// Pipeline states, none retried, none skipped:
    /// 1. sanitize and tokenize;
    /// 2. fewer than 3 tokens is a terminal structural failure;
    /// 3. an unregistered form code is a terminal, normal outcome carrying
    ///    only the identification fields;
    /// 4. otherwise map and validate; `is_valid` reflects the error list,
    ///    and `data` is fully populated even when invalid so the caller can
    ///    present it for correction.
    pub fn parse(&self, raw: &str) -> ParsedBarcodeData {
        let sanitized = sanitize(raw);
        let tokens: Vec<&str> = sanitized.split('\t').collect();

        if tokens.len() < IDENTIFICATION_TOKENS {
            return ParsedBarcodeData {
                form_type: DEFAULT_FORM_CODE.to_string(),
                is_valid: false,
                errors: vec![format!(
                    "insufficient fields: expected at least {}, got {}",
                    IDENTIFICATION_TOKENS,
                    tokens.len()
                )],
                data: BTreeMap::new(),
            };
        }

        let form_type = SchemaRegistry::normalize_code(tokens[0]);
        let version = tokens[2];

        let Some(schema) = self.registry.get_version(&form_type, version) else {
            return ParsedBarcodeData {
                form_type: form_type.clone(),
                is_valid: false,
                errors: vec![format!("unsupported form type '{}'", form_type)],
                data: identification_data(&tokens),
            };
        };

        let data = map_tokens(&tokens, schema);
        let errors = validate(&data, schema);

        ParsedBarcodeData {
            form_type,
            is_valid: errors.is_empty(),
            errors,
            data,
        }
    }
}

impl Default for BarcodeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// The three identification fields, sparse like every mapped record.
fn identification_data(tokens: &[&str]) -> BTreeMap<String, String> {
    let mut data = BTreeMap::new();
    for (name, token) in [
        ("formularcode", tokens[0]),
        ("formularcodeergaenzung", tokens[1]),
        ("versionsnummer", tokens[2]),
    ] {
        if !token.is_empty() {
            data.insert(name.to_string(), token.to_string());
        }
    }
    data
}
