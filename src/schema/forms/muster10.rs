//! Muster 10 - Überweisungsschein für Laboratoriumsuntersuchungen
//!
//! Layout of the "01" print revision. Positions 15-18 carry the issuing
//! practice and the Erstveranlasser identification pairs (BSNR/LANR each).

use crate::schema::types::{FieldDef, FormSchema};

use super::header_fields;

pub fn schema() -> FormSchema {
    let mut fields = header_fields();
    fields.extend(vec![
        FieldDef::text("anforderungsident", 3).max_length(13),
        FieldDef::text("nachname", 4).required().max_length(45),
        FieldDef::text("vorname", 5).required().max_length(45),
        FieldDef::date("geburtsdatum", 6).required(),
        FieldDef::date("versicherungsschutz_ende", 7),
        FieldDef::numeric("kostentraegerkennung", 8).max_length(9),
        FieldDef::text("kostentraegername", 9).max_length(45),
        FieldDef::text("wop", 10).max_length(2),
        FieldDef::text("versichertennummer", 11).max_length(12),
        FieldDef::text("versichertenart", 12).max_length(1),
        FieldDef::text("besondere_personengruppe", 13)
            .allowed(&["00", "04", "06", "07", "08", "09"]),
        FieldDef::text("dmp_kennzeichnung", 14).max_length(2),
        FieldDef::numeric("betriebsstaettennummer", 15).max_length(9),
        FieldDef::numeric("arztnummer", 16).max_length(9),
        FieldDef::numeric("erstveranlasser_betriebsstaettennummer", 17).max_length(9),
        FieldDef::numeric("erstveranlasser_arztnummer", 18).max_length(9),
        FieldDef::date("ausstellungsdatum", 19).required(),
        FieldDef::text("geschlecht", 20).max_length(1),
        FieldDef::text("titel", 21).max_length(20),
        FieldDef::text("plz", 22).max_length(10),
        FieldDef::text("ort", 23).max_length(40),
        FieldDef::text("strasse", 24).max_length(46),
        FieldDef::text("hausnummer", 25).max_length(9),
        FieldDef::text("diagnose", 26).max_length(60),
        FieldDef::text("ausnahmeindikation", 27).max_length(10),
        FieldDef::text("eilt", 28).allowed(&["Ja", "Nein"]),
        FieldDef::text("auftrag", 29).max_length(60),
    ]);

    FormSchema::new(
        "10",
        "01",
        "Überweisungsschein für Laboratoriumsuntersuchungen",
        fields,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_is_valid() {
        assert!(schema().validate_structure().is_ok());
    }

    #[test]
    fn test_covers_thirty_positions() {
        let schema = schema();
        assert_eq!(schema.fields.len(), 30);
        let max_index = schema.fields.iter().map(|f| f.index).max().unwrap();
        assert_eq!(max_index, 29);
    }
}
