//! Database identifier naming policy
//!
//! All table, column, and index names funnel through this module so that
//! singularization, capitalization, and length truncation follow one rule
//! set with no hidden state. The hasher is created per call; there is no
//! shared singleton.

use sha2::{Digest, Sha256};

/// PostgreSQL identifier length limit.
const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Hex characters of the content hash appended to truncated names.
const HASH_LENGTH: usize = 6;

/// Prefix kept from the original name when truncating (limit - hash - "_").
const SHORTENED_LENGTH: usize = MAX_IDENTIFIER_LENGTH - HASH_LENGTH - 1;

/// Convert a plural resource or property name to a singular, capitalized
/// identifier. Rules are ordered, first match wins; they cover Ed-Fi style
/// camelCase resource naming, not general English pluralization.
pub fn normalize(name: &str) -> String {
    if name.chars().count() <= 1 {
        return name.to_string();
    }

    let lower = name.to_lowercase();

    let singular = if lower == "people" {
        "person".to_string()
    } else if lower.ends_with("quizzes") {
        strip_chars(name, 3)
    } else if lower.ends_with("address") || lower.ends_with("class") {
        name.to_string()
    } else if lower.ends_with("ies") {
        format!("{}y", strip_chars(name, 3))
    } else if lower.ends_with("sses")
        || lower.ends_with("shes")
        || lower.ends_with("ches")
        || lower.ends_with("xes")
        || lower.ends_with("zes")
    {
        strip_chars(name, 2)
    } else if lower.ends_with('s') {
        strip_chars(name, 1)
    } else {
        name.to_string()
    };

    capitalize(&singular)
}

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Bound a name to the PostgreSQL identifier limit.
///
/// Hyphens are always stripped first (endpoint names like "ed-fi" are not
/// valid unquoted identifiers). Names at or under 64 characters pass
/// through unchanged; longer names keep their first 57 characters followed
/// by `_` and the first 6 lowercase hex characters of the SHA-256 of the
/// stripped name. The same logical name always shortens to the same
/// identifier, which keeps joins against the table valid from every call
/// site that references it.
pub fn shorten(name: &str) -> String {
    let stripped = if name.contains('-') {
        name.replace('-', "")
    } else {
        name.to_string()
    };

    if stripped.chars().count() <= MAX_IDENTIFIER_LENGTH {
        return stripped;
    }

    let digest = Sha256::digest(stripped.as_bytes());
    let hash_prefix: String = digest.iter().take(HASH_LENGTH / 2).map(|b| format!("{b:02x}")).collect();
    let kept: String = stripped.chars().take(SHORTENED_LENGTH).collect();

    format!("{kept}_{hash_prefix}")
}

fn strip_chars(name: &str, count: usize) -> String {
    let kept = name.chars().count().saturating_sub(count);
    name.chars().take(kept).collect()
}
