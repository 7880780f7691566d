//! Muster 16 - Arzneiverordnungsblatt
//!
//! The fee status at position 3 is a digit code mapped to a word on decode.
//! Up to three prescription lines follow the practice block, each with its
//! own aut-idem position.

use crate::schema::types::{FieldDef, FormSchema};

use super::header_fields;

pub fn schema() -> FormSchema {
    let mut fields = header_fields();
    fields.extend(vec![
        FieldDef::text("gebuehrenstatus", 3)
            .enumerated(&[("0", "gebuehrenfrei"), ("1", "gebuehrenpflichtig")]),
        FieldDef::text("noctu", 4).allowed(&["Ja", "Nein"]),
        FieldDef::text("unfall", 5).allowed(&["Ja", "Nein"]),
        FieldDef::text("arbeitsunfall", 6).allowed(&["Ja", "Nein"]),
        FieldDef::text("nachname", 7).required().max_length(45),
        FieldDef::text("vorname", 8).required().max_length(45),
        FieldDef::date("geburtsdatum", 9).required(),
        FieldDef::numeric("kostentraegerkennung", 10).max_length(9),
        FieldDef::text("kostentraegername", 11).max_length(45),
        FieldDef::text("versichertennummer", 12).max_length(12),
        FieldDef::text("versichertenart", 13).max_length(1),
        FieldDef::text("geschlecht", 14).max_length(1),
        FieldDef::numeric("betriebsstaettennummer", 15).max_length(9),
        FieldDef::numeric("arztnummer", 16).max_length(9),
        FieldDef::date("ausstellungsdatum", 17).required(),
        FieldDef::text("aut_idem_1", 18).allowed(&["Ja", "Nein"]),
        FieldDef::text("verordnung_1", 19).max_length(100),
        FieldDef::text("aut_idem_2", 20).allowed(&["Ja", "Nein"]),
        FieldDef::text("verordnung_2", 21).max_length(100),
        FieldDef::text("aut_idem_3", 22).allowed(&["Ja", "Nein"]),
        FieldDef::text("verordnung_3", 23).max_length(100),
        FieldDef::text("bvg", 24).allowed(&["Ja", "Nein"]),
        FieldDef::text("hilfsmittel", 25).allowed(&["Ja", "Nein"]),
        FieldDef::text("impfstoff", 26).allowed(&["Ja", "Nein"]),
        FieldDef::text("sprechstundenbedarf", 27).allowed(&["Ja", "Nein"]),
    ]);

    FormSchema::new("16", "01", "Arzneiverordnungsblatt", fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_is_valid() {
        assert!(schema().validate_structure().is_ok());
    }

    #[test]
    fn test_three_prescription_lines() {
        let schema = schema();
        for name in ["verordnung_1", "verordnung_2", "verordnung_3"] {
            assert!(schema.fields.iter().any(|f| f.name == name));
        }
    }
}
