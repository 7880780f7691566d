//! Payload sanitizer
//!
//! Raw strings handed over by the barcode image decoder may carry line
//! breaks and stray outer whitespace from the scan pipeline. Sanitizing
//! removes those without touching the tab separators: a tab carries
//! positional meaning, including leading or trailing empty fields.
//!
//! Sanitizing is total. Empty input produces empty output, never an error.

/// Removes carriage returns and newlines, then trims leading/trailing
/// whitespace except the tab separator.
pub fn sanitize(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '\r' && *c != '\n').collect();
    stripped
        .trim_matches(|c: char| c.is_whitespace() && c != '\t')
        .to_string()
}
