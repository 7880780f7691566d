//! Date token handling
//!
//! Two date representations exist side by side:
//! - the 8-digit compact wire form `YYYYMMDD` found in raw tokens
//! - the canonical dashed form `YYYY-MM-DD` produced by mapping
//!
//! Conversion between the two is a pure substring rearrangement. No
//! calendar arithmetic happens here: the optional plausibility check is a
//! range check only and does not reject impossible calendar dates such as
//! April 31.

use std::sync::LazyLock;

use regex::Regex;

/// Compact wire form: exactly 8 digits.
static COMPACT_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8}$").expect("compact date pattern is valid"));

/// Canonical dashed form: `YYYY-MM-DD`.
static DASHED_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("dashed date pattern is valid"));

/// The all-zero token printers emit for "no date".
const EMPTY_DATE: &str = "00000000";

/// Converts a compact `YYYYMMDD` token into the canonical `YYYY-MM-DD` form.
///
/// Returns `None` for the all-zero token and for tokens that are not exactly
/// 8 characters long; both mean "no date present", not an error. The
/// rearrangement itself does not inspect the characters, so a malformed
/// 8-character token converts into a malformed dashed value and is caught by
/// the date-shape validation later.
pub fn compact_to_dashed(token: &str) -> Option<String> {
    if token == EMPTY_DATE || token.chars().count() != 8 {
        return None;
    }
    let chars: Vec<char> = token.chars().collect();
    let year: String = chars[0..4].iter().collect();
    let month: String = chars[4..6].iter().collect();
    let day: String = chars[6..8].iter().collect();
    Some(format!("{}-{}-{}", year, month, day))
}

/// Returns true when the value matches either supported date shape.
pub fn is_date_shape(value: &str) -> bool {
    COMPACT_SHAPE.is_match(value) || DASHED_SHAPE.is_match(value)
}

/// Range-only plausibility check, invoked explicitly where a caller wants
/// more than shape: year in [1900, 2100], month in [1, 12], day in [1, 31].
///
/// Not calendar-correct on purpose. A value failing the shape check is not
/// plausible either.
pub fn is_plausible_date(value: &str) -> bool {
    let Some((year, month, day)) = split_parts(value) else {
        return false;
    };
    (1900..=2100).contains(&year) && (1..=12).contains(&month) && (1..=31).contains(&day)
}

/// Formats a date value as `DD.MM.YYYY` for presentation.
///
/// Accepts both the compact and the dashed form. Returns `None` when the
/// value has neither shape.
pub fn display_format(value: &str) -> Option<String> {
    if !is_date_shape(value) {
        return None;
    }
    let (year, month, day) = split_digits(value)?;
    Some(format!("{}.{}.{}", day, month, year))
}

/// Splits a shaped date value into its numeric year/month/day parts.
fn split_parts(value: &str) -> Option<(u32, u32, u32)> {
    let (year, month, day) = split_digits(value)?;
    Some((year.parse().ok()?, month.parse().ok()?, day.parse().ok()?))
}

/// Splits a shaped date value into its year/month/day substrings.
fn split_digits(value: &str) -> Option<(&str, &str, &str)> {
    if COMPACT_SHAPE.is_match(value) {
        Some((&value[0..4], &value[4..6], &value[6..8]))
    } else if DASHED_SHAPE.is_match(value) {
        Some((&value[0..4], &value[5..7], &value[8..10]))
    } else {
        None
    }
}
