//! Rule checks over a mapped record

use std::collections::BTreeMap;

use crate::dates;
use crate::schema::FormSchema;

/// Substring marking a field name as date-carrying.
const DATE_FIELD_MARKER: &str = "datum";

/// Allowed codes for the insurance type position.
const VERSICHERTENART_VALUES: [&str; 3] = ["1", "3", "5"];

/// Allowed codes for the gender position.
const GESCHLECHT_VALUES: [&str; 4] = ["M", "W", "X", "D"];

/// Validates a mapped record against its schema.
///
/// Rules are applied independently and every violation is collected (V1):
/// 1. the identification fields `formularcode` and `versionsnummer` must
///    be present;
/// 2. every mapped date-carrying field must have a valid date shape;
/// 3. the insurance type and gender fields must hold their fixed codes;
/// 4. schema-declared constraints (`allowed_values`, `max_length`,
///    `required`) are enforced for every field that declares them.
pub fn validate(record: &BTreeMap<String, String>, schema: &FormSchema) -> Vec<String> {
    let mut errors = Vec::new();

    check_identification(record, &mut errors);
    check_date_shapes(record, &mut errors);
    check_fixed_enumerations(record, &mut errors);
    check_schema_constraints(record, schema, &mut errors);

    errors
}

fn check_identification(record: &BTreeMap<String, String>, errors: &mut Vec<String>) {
    if !record.contains_key("formularcode") || !record.contains_key("versionsnummer") {
        errors.push("missing required form identification fields".to_string());
    }
}

fn check_date_shapes(record: &BTreeMap<String, String>, errors: &mut Vec<String>) {
    for (name, value) in record {
        if name.contains(DATE_FIELD_MARKER) && !dates::is_date_shape(value) {
            errors.push(format!(
                "invalid date format for field '{}': '{}'",
                name, value
            ));
        }
    }
}

fn check_fixed_enumerations(record: &BTreeMap<String, String>, errors: &mut Vec<String>) {
    check_enumeration(record, "versichertenart", &VERSICHERTENART_VALUES, errors);
    check_enumeration(record, "geschlecht", &GESCHLECHT_VALUES, errors);
}

fn check_enumeration(
    record: &BTreeMap<String, String>,
    field: &str,
    allowed: &[&str],
    errors: &mut Vec<String>,
) {
    if let Some(value) = record.get(field) {
        if !allowed.contains(&value.as_str()) {
            errors.push(format!(
                "invalid value '{}' for field '{}' (allowed: {})",
                value,
                field,
                allowed.join(", ")
            ));
        }
    }
}

fn check_schema_constraints(
    record: &BTreeMap<String, String>,
    schema: &FormSchema,
    errors: &mut Vec<String>,
) {
    for field in &schema.fields {
        if field.skip {
            continue;
        }

        match record.get(&field.name) {
            Some(value) => {
                if let Some(allowed) = &field.allowed_values {
                    if !allowed.iter().any(|a| a == value) {
                        errors.push(format!(
                            "invalid value '{}' for field '{}' (allowed: {})",
                            value,
                            field.name,
                            allowed.join(", ")
                        ));
                    }
                }
                if let Some(max) = field.max_length {
                    if value.chars().count() > max {
                        errors.push(format!(
                            "value for field '{}' exceeds maximum length {}",
                            field.name, max
                        ));
                    }
                }
            }
            None => {
                // The identification pair is covered by its own rule.
                if field.required
                    && field.name != "formularcode"
                    && field.name != "versionsnummer"
                {
                    errors.push(format!("missing required field '{}'", field.name));
                }
            }
        }
    }
}
