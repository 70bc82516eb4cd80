//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

pub(crate) const MIN_LENGTH: usize = 8;

/// Checks that the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in Unicode scalar values (`char`s), not UTF-16 code
/// units, so a character outside the Basic Multilingual Plane counts once.
pub fn length_section(password: &SecretString) -> SectionResult {
    if password.expose_secret().chars().count() < MIN_LENGTH {
        return Some(format!("Use at least {} characters", MIN_LENGTH));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        assert_eq!(
            length_section(&pwd),
            Some("Use at least 8 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 4 chars, 8 bytes
        let pwd = SecretString::new("éééé".to_string().into());
        assert!(length_section(&pwd).is_some());
    }
}
