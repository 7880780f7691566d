//! Schema type definitions
//!
//! A field definition describes how one named value is extracted from a
//! fixed position in the tab-delimited token array and which constraints
//! apply to it. Supported field types:
//! - text: carried verbatim
//! - date: compact `YYYYMMDD` wire form, converted to `YYYY-MM-DD` on mapping
//! - numeric: digit strings (carried as text; the output model is string-only)

use serde::{Deserialize, Serialize};

/// Supported field types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Verbatim text
    Text,
    /// Compact date in the wire format, dashed after mapping
    Date,
    /// Digit string such as a BSNR or LANR
    Numeric,
}

/// Value transforms applied during mapping
///
/// A closed set rather than injected functions, so the mapping algorithm
/// stays statically analyzable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    /// Carry the raw token (date-typed fields still convert)
    Identity,
    /// Force compact-to-dashed date conversion
    CompactDateToDashed,
    /// Map coded wire values to words; unmapped values fall through raw
    Enumerated(Vec<(String, String)>),
}

/// One field definition: a named, positionally addressed extraction rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Output key in the mapped record
    pub name: String,
    /// 0-based position in the token array
    pub index: usize,
    /// Field data type
    pub field_type: FieldType,
    /// Maximum value length in characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Fixed allowed-value set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
    /// Whether the field must be present in the mapped record
    #[serde(default)]
    pub required: bool,
    /// Positional placeholder: consumes its position, never emitted
    #[serde(default)]
    pub skip: bool,
    /// Mapping transform
    #[serde(default = "Transform::identity")]
    pub transform: Transform,
}

impl Transform {
    fn identity() -> Self {
        Transform::Identity
    }
}

impl FieldDef {
    fn new(name: impl Into<String>, index: usize, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            index,
            field_type,
            max_length: None,
            allowed_values: None,
            required: false,
            skip: false,
            transform: Transform::Identity,
        }
    }

    /// Create a text field
    pub fn text(name: impl Into<String>, index: usize) -> Self {
        Self::new(name, index, FieldType::Text)
    }

    /// Create a date field
    pub fn date(name: impl Into<String>, index: usize) -> Self {
        Self::new(name, index, FieldType::Date)
    }

    /// Create a numeric field
    pub fn numeric(name: impl Into<String>, index: usize) -> Self {
        Self::new(name, index, FieldType::Numeric)
    }

    /// Create a positional placeholder for a reserved position
    pub fn placeholder(index: usize) -> Self {
        let mut def = Self::new("reserviert", index, FieldType::Text);
        def.skip = true;
        def
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set the maximum value length
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set the fixed allowed-value set
    pub fn allowed(mut self, values: &[&str]) -> Self {
        self.allowed_values = Some(values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Attach an enumeration transform mapping wire codes to words
    pub fn enumerated(mut self, mapping: &[(&str, &str)]) -> Self {
        self.transform = Transform::Enumerated(
            mapping
                .iter()
                .map(|(code, word)| (code.to_string(), word.to_string()))
                .collect(),
        );
        self
    }
}

/// Complete schema for one Muster form variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Normalized form code (no leading zeros)
    pub form_code: String,
    /// Version this field layout belongs to
    pub version: String,
    /// Human-readable form name
    pub name: String,
    /// Ordered field definitions
    pub fields: Vec<FieldDef>,
}

impl FormSchema {
    /// Create a new schema variant
    pub fn new(
        form_code: impl Into<String>,
        version: impl Into<String>,
        name: impl Into<String>,
        fields: Vec<FieldDef>,
    ) -> Self {
        Self {
            form_code: form_code.into(),
            version: version.into(),
            name: name.into(),
            fields,
        }
    }

    /// Returns the unique registry key for this variant
    pub fn key(&self) -> (&str, &str) {
        (&self.form_code, &self.version)
    }

    /// Validates the schema structure itself (not a payload)
    ///
    /// Duplicate indices would make field extraction last-write-wins; they
    /// are a misconfiguration rejected here (F3).
    pub fn validate_structure(&self) -> Result<(), String> {
        if self.form_code.is_empty() {
            return Err("form code must not be empty".into());
        }
        if self.version.is_empty() {
            return Err("version must not be empty".into());
        }
        if self.fields.is_empty() {
            return Err("schema must define at least one field".into());
        }

        let mut seen_indices = std::collections::HashSet::new();
        let mut seen_names = std::collections::HashSet::new();
        for field in &self.fields {
            if !seen_indices.insert(field.index) {
                return Err(format!("duplicate field index {}", field.index));
            }
            if field.skip {
                if field.required {
                    return Err(format!(
                        "placeholder at index {} cannot be required",
                        field.index
                    ));
                }
                continue;
            }
            if field.name.is_empty() {
                return Err(format!("field at index {} has an empty name", field.index));
            }
            if !seen_names.insert(field.name.as_str()) {
                return Err(format!("duplicate field name '{}'", field.name));
            }
            if field.max_length == Some(0) {
                return Err(format!("field '{}' has a zero maximum length", field.name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> FormSchema {
        FormSchema::new(
            "6",
            "01",
            "Überweisungsschein",
            vec![
                FieldDef::text("formularcode", 0).required().max_length(2),
                FieldDef::text("versionsnummer", 2).required().max_length(2),
                FieldDef::date("geburtsdatum", 5),
            ],
        )
    }

    #[test]
    fn test_schema_structure_valid() {
        assert!(sample_schema().validate_structure().is_ok());
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let schema = FormSchema::new(
            "6",
            "01",
            "Überweisungsschein",
            vec![
                FieldDef::text("nachname", 3),
                FieldDef::text("vorname", 3),
            ],
        );
        let result = schema.validate_structure();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("duplicate field index 3"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let schema = FormSchema::new(
            "6",
            "01",
            "Überweisungsschein",
            vec![
                FieldDef::text("nachname", 3),
                FieldDef::text("nachname", 4),
            ],
        );
        assert!(schema.validate_structure().is_err());
    }

    #[test]
    fn test_empty_field_list_rejected() {
        let schema = FormSchema::new("6", "01", "Überweisungsschein", vec![]);
        assert!(schema.validate_structure().is_err());
    }

    #[test]
    fn test_placeholders_share_the_reserved_name() {
        let schema = FormSchema::new(
            "6",
            "01",
            "Überweisungsschein",
            vec![
                FieldDef::text("nachname", 3),
                FieldDef::placeholder(4),
                FieldDef::placeholder(5),
            ],
        );
        // Placeholders never collide on name; they are not emitted.
        assert!(schema.validate_structure().is_ok());
    }

    #[test]
    fn test_enumerated_builder() {
        let field = FieldDef::text("verordnungsart", 14)
            .enumerated(&[("1", "erstverordnung"), ("2", "folgeverordnung")]);
        match field.transform {
            Transform::Enumerated(ref mapping) => assert_eq!(mapping.len(), 2),
            _ => panic!("expected enumerated transform"),
        }
    }
}
