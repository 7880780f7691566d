//! Schema Registry Invariant Tests
//!
//! Tests for the registry invariants:
//! - One variant per (form code, version), immutable once registered
//! - Lookup normalizes zero-padded codes without collapsing distinct codes
//! - Listing is deterministic
//! - Misconfigured field tables are rejected at registration

use musterscan::schema::{FieldDef, FormSchema, SchemaRegistry};

// =============================================================================
// Helper Functions
// =============================================================================

fn minimal_schema(code: &str, version: &str) -> FormSchema {
    FormSchema::new(
        code,
        version,
        "Testformular",
        vec![
            FieldDef::text("formularcode", 0).required().max_length(2),
            FieldDef::text("formularcodeergaenzung", 1).max_length(1),
            FieldDef::text("versionsnummer", 2).required().max_length(2),
        ],
    )
}

// =============================================================================
// Built-in Registry Tests
// =============================================================================

/// All supported codes are registered.
#[test]
fn test_builtin_registry_covers_supported_codes() {
    let registry = SchemaRegistry::with_builtin();
    for code in ["10", "6", "12", "16"] {
        assert!(registry.code_exists(code));
        assert!(registry.get(code).is_some());
    }
}

/// Every built-in variant passes its own structure validation.
#[test]
fn test_builtin_structures_valid() {
    let registry = SchemaRegistry::with_builtin();
    assert!(registry.schema_count() >= 5);
    for schema in registry.all_schemas() {
        assert!(
            schema.validate_structure().is_ok(),
            "misconfigured builtin {:?}",
            schema.key()
        );
    }
}

/// The listing has one entry per code, deterministically ordered.
#[test]
fn test_listing_deterministic() {
    let registry = SchemaRegistry::with_builtin();
    let first = registry.list();
    let second = registry.list();
    assert_eq!(first, second);

    let codes: Vec<&str> = first.iter().map(|i| i.code.as_str()).collect();
    assert_eq!(codes, vec!["6", "10", "12", "16"]);
    for info in &first {
        assert!(!info.name.is_empty());
    }
}

// =============================================================================
// Code Normalization Tests
// =============================================================================

/// Zero-padding variants of the same numeric code collapse to one identity.
#[test]
fn test_padded_codes_collapse() {
    let registry = SchemaRegistry::with_builtin();
    let padded = registry.get("06").expect("padded");
    let plain = registry.get("6").expect("plain");
    assert_eq!(padded.key(), plain.key());
}

/// Codes that strip to nothing keep their original identity.
#[test]
fn test_all_zero_codes_keep_identity() {
    assert_eq!(SchemaRegistry::normalize_code("0"), "0");
    assert_eq!(SchemaRegistry::normalize_code("00"), "00");
    // "0" and "00" are distinct identities; neither collapses to "".
    assert_ne!(
        SchemaRegistry::normalize_code("0"),
        SchemaRegistry::normalize_code("00")
    );
}

// =============================================================================
// Registration Tests
// =============================================================================

/// A registered variant cannot be replaced.
#[test]
fn test_variant_immutability() {
    let mut registry = SchemaRegistry::empty();
    registry.register(minimal_schema("42", "01")).unwrap();

    let result = registry.register(minimal_schema("42", "01"));
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().code(), "MUSTER_SCHEMA_IMMUTABLE");
}

/// Two versions of the same code coexist as separate variants.
#[test]
fn test_versions_coexist() {
    let mut registry = SchemaRegistry::empty();
    registry.register(minimal_schema("42", "01")).unwrap();
    registry.register(minimal_schema("42", "02")).unwrap();

    assert_eq!(registry.schema_count(), 2);
    assert_eq!(registry.get_version("42", "01").unwrap().version, "01");
    assert_eq!(registry.get_version("42", "02").unwrap().version, "02");
}

/// Duplicate field indices are a misconfiguration, not a runtime surprise.
#[test]
fn test_duplicate_index_rejected_at_registration() {
    let mut registry = SchemaRegistry::empty();
    let schema = FormSchema::new(
        "42",
        "01",
        "Testformular",
        vec![
            FieldDef::text("nachname", 3),
            FieldDef::text("vorname", 3),
        ],
    );

    let result = registry.register(schema);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert_eq!(err.code(), "MUSTER_SCHEMA_INVALID");
    assert!(format!("{}", err).contains("duplicate field index"));
}

// =============================================================================
// Introspection Tests
// =============================================================================

/// Schemas serialize for introspection and round-trip unchanged.
#[test]
fn test_schema_serialization_round_trip() {
    let registry = SchemaRegistry::with_builtin();
    let schema = registry.get("10").expect("Muster 10");

    let json = serde_json::to_string(schema).expect("schema serialization cannot fail");
    let back: FormSchema = serde_json::from_str(&json).expect("schema deserialization");
    assert_eq!(&back, schema);
}
