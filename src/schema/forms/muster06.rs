//! Muster 6 - Überweisungsschein
//!
//! This form went through an incompatible layout revision: the "01" print
//! revision has no gender or cost-carrier positions and packs the referral
//! block directly behind the patient block, while "02" inserts the
//! cost-carrier pair, the gender position and a reserved position before
//! the practice identification. Both layouts stay registered; the version
//! token in the payload selects the variant.

use crate::schema::types::{FieldDef, FormSchema};

use super::header_fields;

/// Current "02" revision, the default variant for code 6.
pub fn schema_v02() -> FormSchema {
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
        FieldDef::placeholder(11),
        FieldDef::numeric("betriebsstaettennummer", 12).max_length(9),
        FieldDef::numeric("arztnummer", 13).max_length(9),
        FieldDef::date("ausstellungsdatum", 14).required(),
        FieldDef::text("ueberweisung_an", 15).max_length(60),
        FieldDef::text("behandlungsart", 16)
            .enumerated(&[("1", "kurativ"), ("2", "praeventiv")]),
        FieldDef::text("auftragsleistungen", 17).max_length(60),
        FieldDef::text("diagnose", 18).max_length(60),
        FieldDef::text("befund_medikation", 19).max_length(60),
    ]);

    FormSchema::new("6", "02", "Überweisungsschein", fields)
}

/// Older "01" revision with the pre-revision index layout.
pub fn schema_v01() -> FormSchema {
    let mut fields = header_fields();
    fields.extend(vec![
        FieldDef::text("nachname", 3).required().max_length(45),
        FieldDef::text("vorname", 4).required().max_length(45),
        FieldDef::date("geburtsdatum", 5).required(),
        FieldDef::text("versichertennummer", 6).max_length(12),
        FieldDef::text("versichertenart", 7).max_length(1),
        FieldDef::numeric("betriebsstaettennummer", 8).max_length(9),
        FieldDef::numeric("arztnummer", 9).max_length(9),
        FieldDef::date("ausstellungsdatum", 10).required(),
        FieldDef::text("ueberweisung_an", 11).max_length(60),
        FieldDef::text("diagnose", 12).max_length(60),
        FieldDef::text("auftragsleistungen", 13).max_length(60),
    ]);

    FormSchema::new("6", "01", "Überweisungsschein", fields)
}
