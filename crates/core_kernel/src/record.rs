//! Flat-file record helpers
//!
//! Users and policies are persisted one per line with `;` between fields.
//! Enumerations are written by code name and read back leniently, so codes are
//! normalized before matching.

/// Separator between fields of a persisted record
pub const FIELD_SEPARATOR: char = ';';

/// Splits a persisted line into its fields
///
/// Empty fields are kept, so a trailing separator yields a trailing `""`.
pub fn split_record(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

/// Joins fields into a persisted line
pub fn join_record<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = String::new();
    for (index, field) in fields.into_iter().enumerate() {
        if index > 0 {
            line.push(FIELD_SEPARATOR);
        }
        line.push_str(field.as_ref());
    }
    line
}

/// Returns true if `value` can be stored in a single field
pub fn is_storable(value: &str) -> bool {
    !value.contains(FIELD_SEPARATOR) && !value.contains('\n') && !value.contains('\r')
}

/// Normalizes an enumeration code for matching: trimmed, upper case,
/// inner whitespace and dashes collapsed to `_`
pub fn normalize_code(value: &str) -> String {
    value
        .trim()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase()
}
