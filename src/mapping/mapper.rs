//! Token-to-record projection

use std::collections::BTreeMap;

use crate::dates;
use crate::schema::{FieldDef, FieldType, FormSchema, Transform};

/// Maps a token array into a sparse named record per the schema.
///
/// Field definitions are applied in schema order. A resolved value that is
/// empty or absent is omitted from the record entirely (M3). The record is
/// a `BTreeMap` so iteration and serialization order are deterministic.
pub fn map_tokens(tokens: &[&str], schema: &FormSchema) -> BTreeMap<String, String> {
    let mut record = BTreeMap::new();

    for field in &schema.fields {
        if field.skip {
            continue;
        }

        let raw = tokens.get(field.index).copied().unwrap_or("");
        if raw.is_empty() {
            continue;
        }

        if let Some(value) = resolve_value(field, raw) {
            if !value.is_empty() {
                record.insert(field.name.clone(), value);
            }
        }
    }

    record
}

/// Applies the field's transform to a non-empty raw token.
///
/// `Identity` on a date-typed field still converts the compact wire form,
/// because the canonical record representation of a date is dashed.
fn resolve_value(field: &FieldDef, raw: &str) -> Option<String> {
    match &field.transform {
        Transform::Identity => match field.field_type {
            FieldType::Date => dates::compact_to_dashed(raw),
            _ => Some(raw.to_string()),
        },
        Transform::CompactDateToDashed => dates::compact_to_dashed(raw),
        Transform::Enumerated(mapping) => Some(
            mapping
                .iter()
                .find(|(code, _)| code == raw)
                .map(|(_, word)| word.clone())
                .unwrap_or_else(|| raw.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_schema() -> FormSchema {
        FormSchema::new(
            "42",
            "01",
            "Testformular",
            vec![
                FieldDef::text("formularcode", 0).required(),
                FieldDef::text("nachname", 1),
                FieldDef::date("geburtsdatum", 2),
                FieldDef::placeholder(3),
                FieldDef::text("verordnungsart", 4)
                    .enumerated(&[("1", "erstverordnung"), ("2", "folgeverordnung")]),
                FieldDef::text("hinten", 9),
            ],
        )
    }

    #[test]
    fn test_maps_by_position() {
        let tokens = vec!["42", "Mustermann", "19850615", "x", "1"];
        let record = map_tokens(&tokens, &test_schema());
        assert_eq!(record.get("formularcode").unwrap(), "42");
        assert_eq!(record.get("nachname").unwrap(), "Mustermann");
    }

    #[test]
    fn test_date_converted_to_dashed() {
        let tokens = vec!["42", "Mustermann", "20241231"];
        let record = map_tokens(&tokens, &test_schema());
        assert_eq!(record.get("geburtsdatum").unwrap(), "2024-12-31");
    }

    #[test]
    fn test_all_zero_date_is_absent() {
        let tokens = vec!["42", "Mustermann", "00000000"];
        let record = map_tokens(&tokens, &test_schema());
        assert!(!record.contains_key("geburtsdatum"));
    }

    #[test]
    fn test_empty_token_is_absent_key() {
        let tokens = vec!["42", "", "19850615"];
        let record = map_tokens(&tokens, &test_schema());
        assert!(!record.contains_key("nachname"));
    }

    #[test]
    fn test_out_of_range_index_is_absent() {
        let tokens = vec!["42"];
        let record = map_tokens(&tokens, &test_schema());
        assert!(!record.contains_key("hinten"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_placeholder_not_emitted() {
        let tokens = vec!["42", "Mustermann", "19850615", "belegt", "2"];
        let record = map_tokens(&tokens, &test_schema());
        assert!(!record.contains_key("reserviert"));
    }

    #[test]
    fn test_enumerated_maps_known_code() {
        let tokens = vec!["42", "", "", "", "2"];
        let record = map_tokens(&tokens, &test_schema());
        assert_eq!(record.get("verordnungsart").unwrap(), "folgeverordnung");
    }

    #[test]
    fn test_enumerated_falls_through_unknown_code() {
        let tokens = vec!["42", "", "", "", "7"];
        let record = map_tokens(&tokens, &test_schema());
        assert_eq!(record.get("verordnungsart").unwrap(), "7");
    }

    #[test]
    fn test_forced_date_conversion_on_text_field() {
        let mut field = FieldDef::text("datum_roh", 1);
        field.transform = Transform::CompactDateToDashed;
        let schema = FormSchema::new("42", "01", "Testformular", vec![field]);
        let record = map_tokens(&["x", "20240101"], &schema);
        assert_eq!(record.get("datum_roh").unwrap(), "2024-01-01");
    }

    #[test]
    fn test_mapping_is_pure() {
        let tokens = vec!["42", "Mustermann", "19850615"];
        let schema = test_schema();
        let first = map_tokens(&tokens, &schema);
        let second = map_tokens(&tokens, &schema);
        assert_eq!(first, second);
    }
}
