//! Form field checks shared by the membership and newsletter forms.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

/// `None` only if the pattern fails to compile; every address is then rejected.
static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$") {
    Ok(re) => Some(re),
    Err(_) => None,
});

/// Syntactic email check: `local@domain.tld`, no whitespace or extra `@`.
///
/// No domain or MX verification is attempted.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(raw))
}

/// A mandatory field is satisfied iff its trimmed value is non-empty.
#[must_use]
pub fn is_filled(raw: &str) -> bool {
    !raw.trim().is_empty()
}
