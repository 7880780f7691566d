//! Built-in Muster form tables
//!
//! Each submodule holds the ordered field layout for one form. The first
//! three positions are identical on every form: the 2-digit form code, the
//! 1-character code supplement, and the 2-digit version number. Everything
//! after that varies per form.
//!
//! Muster 6 ships with two version variants because its field layout was
//! revised incompatibly between print revisions; the other forms currently
//! have a single layout each.

mod muster06;
mod muster10;
mod muster12;
mod muster16;

use super::types::{FieldDef, FormSchema};

/// All built-in schema variants, default variant per code first.
pub fn builtin() -> Vec<FormSchema> {
    vec![
        muster10::schema(),
        muster06::schema_v02(),
        muster06::schema_v01(),
        muster12::schema(),
        muster16::schema(),
    ]
}

/// The identification header shared by every form layout.
pub(crate) fn header_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::text("formularcode", 0).required().max_length(2),
        FieldDef::text("formularcodeergaenzung", 1).max_length(1),
        FieldDef::text("versionsnummer", 2).required().max_length(2),
    ]
}
