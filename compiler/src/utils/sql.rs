//! SQL text helpers
//!
//! Literals are inlined, not parameterized. Quoting follows the column side a
//! filter compiles against: ID columns are treated as numeric and left bare,
//! value columns are treated as text and wrapped in single quotes. Nothing is
//! escaped here; callers that accept untrusted input must sanitize before
//! executing the clause.

/// Prefix a column with a table alias (e.g., "t" → "t.column")
///
/// Pass an empty alias for an unqualified column.
pub fn qualify_column(alias: &str, field: &str) -> String {
    if alias.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", alias, field)
    }
}

/// Render a value as an inline SQL literal
pub fn inline_literal(value: &str, is_id_filter: bool) -> String {
    if is_id_filter {
        value.to_string()
    } else {
        format!("'{}'", value)
    }
}

/// Whether a string is usable as a bare SQL identifier (table alias)
pub fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
