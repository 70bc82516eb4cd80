//! Character variety sections - mixed case, digits, punctuation.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks that the password mixes upper and lower case ASCII letters.
///
/// Accented and other non-ASCII letters do not count towards either case.
pub fn case_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    let missing: Vec<_> = [
        if !has_upper { Some("uppercase") } else { None },
        if !has_lower { Some("lowercase") } else { None },
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        return Some(format!("Add {} letters", missing.join(" and ")));
    }
    None
}

/// Checks that the password contains an ASCII digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some("Add a number".to_string());
    }
    None
}

/// Checks that the password contains ASCII punctuation.
///
/// Whitespace and non-ASCII symbols do not count.
pub fn punctuation_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_punctuation()) {
        return Some("Add a punctuation character".to_string());
    }
    None
}
