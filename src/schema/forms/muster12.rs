//! Muster 12 - Verordnung häuslicher Krankenpflege
//!
//! The prescription kind at position 14 is printed as a digit code and
//! mapped to a word on decode. Position 17 is reserved on the current
//! print revision.

use crate::schema::types::{FieldDef, FormSchema};

use super::header_fields;

pub fn schema() -> FormSchema {
    let mut fields = header_fields();
    fields.extend(vec![
        FieldDef::text("nachname", 3).required().max_length(45),
        FieldDef::text("vorname", 4).required().max_length(45),
        FieldDef::date("geburtsdatum", 5).required(),
        FieldDef::numeric("kostentraegerkennung", 6).max_length(9),
        FieldDef::text("kostentraegername", 7).max_length(45),
        FieldDef::text("versichertennummer", 8).max_length(12),
        FieldDef::text("versichertenart", 9).max_length(1),
        FieldDef::text("geschlecht", 10).max_length(1),
        FieldDef::numeric("betriebsstaettennummer", 11).max_length(9),
        FieldDef::numeric("arztnummer", 12).max_length(9),
        FieldDef::date("ausstellungsdatum", 13).required(),
        FieldDef::text("verordnungsart", 14)
            .enumerated(&[("1", "erstverordnung"), ("2", "folgeverordnung")]),
        FieldDef::date("zeitraum_von", 15),
        FieldDef::date("zeitraum_bis", 16),
        FieldDef::placeholder(17),
        FieldDef::text("behandlungspflege", 18).allowed(&["Ja", "Nein"]),
        FieldDef::text("grundpflege", 19).allowed(&["Ja", "Nein"]),
        FieldDef::text("hauswirtschaftliche_versorgung", 20).allowed(&["Ja", "Nein"]),
        FieldDef::numeric("anzahl_taeglich", 21).max_length(2),
        FieldDef::numeric("anzahl_woechentlich", 22).max_length(2),
        FieldDef::text("diagnose", 23).max_length(60),
        FieldDef::text("medikamentengabe", 24).max_length(60),
    ]);

    FormSchema::new("12", "01", "Verordnung häuslicher Krankenpflege", fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::Transform;

    #[test]
    fn test_structure_is_valid() {
        assert!(schema().validate_structure().is_ok());
    }

    #[test]
    fn test_verordnungsart_is_enumerated() {
        let schema = schema();
        let field = schema
            .fields
            .iter()
            .find(|f| f.name == "verordnungsart")
            .expect("verordnungsart present");
        assert!(matches!(field.transform, Transform::Enumerated(_)));
    }
}
