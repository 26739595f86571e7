//! Pre-submission input validation.
//!
//! These checks mirror the service's form rules so bad input is rejected
//! locally and never reaches the network layer. Empty values pass; presence
//! is a separate concern of the calling form.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{ClientError, Result};

const SPECIAL_SYMBOLS: &str = ".!@#$%^&*()_+<>?";

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(
        r"^[a-zA-Z0-9]+([._-][0-9a-zA-Z]+)*@[a-zA-Z0-9]+([.-][0-9a-zA-Z]+)*\.[a-zA-Z]{2,}$"
    )
    .expect("email regex must compile");
}

/// Password composition rule: at least one digit, one lowercase, one
/// uppercase, and one special symbol; no whitespace; only characters from
/// the allowed set.
pub fn password(value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }

    let allowed =
        |c: char| c.is_ascii_alphanumeric() || SPECIAL_SYMBOLS.contains(c);
    if !value.chars().all(allowed) {
        return Err(ClientError::Validation(
            "password contains unsupported characters".to_string(),
        ));
    }

    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_lower = value.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_special = value.chars().any(|c| SPECIAL_SYMBOLS.contains(c));

    if has_digit && has_lower && has_upper && has_special {
        Ok(())
    } else {
        Err(ClientError::Validation(
            "password needs a digit, a lowercase, an uppercase and a special symbol".to_string(),
        ))
    }
}

/// Accept empty or any absolute URL.
pub fn url(value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }

    url::Url::parse(value)
        .map(|_| ())
        .map_err(|_| ClientError::Validation(format!("{value} is not a valid URL")))
}

pub fn email(value: &str) -> Result<()> {
    if value.is_empty() || EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ClientError::Validation(format!(
            "{value} is not a valid email address"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_accepts_the_documented_example() {
        assert!(password("1Abcdef?").is_ok());
        assert!(password("1aA.....").is_ok());
    }

    #[test]
    fn password_rejects_missing_character_classes() {
        assert!(password("abcdefg1?").is_err()); // no uppercase
        assert!(password("ABCDEFG1?").is_err()); // no lowercase
        assert!(password("Abcdefgh?").is_err()); // no digit
        assert!(password("Abcdefg1").is_err()); // no special symbol
    }

    #[test]
    fn password_rejects_whitespace_and_stray_characters() {
        assert!(password("1Abc def?").is_err());
        assert!(password("1Abcdef?\u{00e9}").is_err());
    }

    #[test]
    fn empty_values_pass_every_validator() {
        assert!(password("").is_ok());
        assert!(url("").is_ok());
        assert!(email("").is_ok());
    }

    #[test]
    fn url_requires_an_absolute_url() {
        assert!(url("https://example.com/pic.png").is_ok());
        assert!(url("not a url").is_err());
        assert!(url("/relative/path").is_err());
    }

    #[test]
    fn email_matches_the_service_rule() {
        assert!(email("example@example.com").is_ok());
        assert!(email("first.last@mail.example.org").is_ok());
        assert!(email("no-at-sign").is_err());
        assert!(email("double..dot@example.com").is_err());
        assert!(email("user@domain").is_err());
    }
}
