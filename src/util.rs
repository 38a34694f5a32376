//! Shared string helpers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Convert a mixedCase identifier to snake_case.
///
/// Inserts an underscore before every uppercase letter and lowercases the
/// result; the underscore introduced by a leading uppercase is stripped.
/// Idempotent on input that is already snake_case.
pub fn to_snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    for ch in ident.chars() {
        if ch.is_uppercase() {
            out.push('_');
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    if ident.starts_with(|c: char| c.is_uppercase()) {
        out.remove(0);
    }
    out
}

static BARE_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Whether a name can appear unquoted in the emitted document.
#[inline]
pub fn is_bare_identifier(name: &str) -> bool {
    BARE_IDENTIFIER.is_match(name)
}
