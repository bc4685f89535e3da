//! Defines validated string types for various names and identifiers

use arrayvec::ArrayString;
use lantern_macros::define_validated;
use thiserror::Error;

pub struct StringValidationError(String);
type StringValidationResult = Result<(), StringValidationError>;

fn invalid(value: &str) -> StringValidationResult {
    Err(StringValidationError(value.to_string()))
}

fn check_allowed_chars(value: &str, allowed_chars: &[&str]) -> StringValidationResult {
    for c in value.chars() {
        if !allowed_chars.iter().any(|s| s.contains(c)) {
            return invalid(value);
        }
    }
    Ok(())
}

fn check_forbidden_chars(value: &str, forbidden: &str) -> StringValidationResult {
    if value.chars().any(|c| forbidden.contains(c) || c.is_ascii_control()) {
        return invalid(value);
    }
    Ok(())
}

/// Copy as much of `value` as fits, skipping characters rejected by `keep`.
fn coerce<const CAP: usize>(value: &str, keep: impl Fn(char) -> bool) -> ArrayString<CAP> {
    let mut out = ArrayString::new();
    for c in value.chars().filter(|&c| keep(c)) {
        if out.try_push(c).is_err() {
            break;
        }
    }
    out
}

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGIT: &str = "0123456789";

define_validated! {
    Nickname(15, casefolded) {
        check_allowed_chars(value, &[LOWER, UPPER, DIGIT, "-_\\|[]{}^`"])?;
        match value.chars().next() {
            Some(first) if !DIGIT.contains(first) && first != '-' => Ok(()),
            _ => invalid(value),
        }
    }

    Username(10) {
        check_forbidden_chars(value, " @!:")?;
        if value.is_empty() {
            return invalid(value);
        }
        Ok(())
    }

    Hostname(64) {
        check_allowed_chars(value, &[LOWER, UPPER, DIGIT, "-.:"])?;
        if value.is_empty() {
            return invalid(value);
        }
        Ok(())
    }

    Realname(64) {
        check_forbidden_chars(value, "")?;
        Ok(())
    }

    ChannelName(64, casefolded) {
        check_forbidden_chars(value, " ,")?;
        if value.len() > 1 && (value.starts_with('#') || value.starts_with('&')) {
            Ok(())
        } else {
            invalid(value)
        }
    }

    ServerName(64) {
        check_allowed_chars(value, &[UPPER, LOWER, DIGIT, "_-."])?;
        match value.chars().next() {
            Some(first) if !DIGIT.contains(first) && first != '-' => Ok(()),
            _ => invalid(value),
        }
    }

    AwayReason(300) {
        check_forbidden_chars(value, "")?;
        Ok(())
    }
}

impl Username {
    /// Build a `Username` from whatever the client supplied, dropping
    /// characters that can't appear in a hostmask and truncating to the
    /// permitted length. Fails only if nothing usable remains.
    pub fn new_coerce(s: &str) -> Result<Self, InvalidUsernameError> {
        Self::validated(coerce(s, |c| !" @!:".contains(c) && !c.is_ascii_control()))
    }
}

impl Realname {
    /// Control characters are dropped, and anything past 64 characters is cut off.
    pub fn new_coerce(s: &str) -> Self {
        Self(coerce(s, |c| !c.is_ascii_control()))
    }
}

impl AwayReason {
    /// Control characters are dropped, and anything past 300 characters is cut off.
    pub fn new_coerce(s: &str) -> Self {
        Self(coerce(s, |c| !c.is_ascii_control()))
    }
}

impl ChannelName {
    /// Whether `name` looks like a channel rather than a nickname.
    pub fn is_channel_prefix(name: &str) -> bool {
        name.starts_with('#') || name.starts_with('&')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn nickname_rules() {
        assert!(Nickname::from_str("user1").is_ok());
        assert!(Nickname::from_str("[away]^").is_ok());
        assert!(Nickname::from_str("1user").is_err());
        assert!(Nickname::from_str("-user").is_err());
        assert!(Nickname::from_str("").is_err());
        assert!(Nickname::from_str("has space").is_err());
        assert!(Nickname::from_str("waytoolongnickname").is_err());
    }

    #[test]
    fn nicknames_compare_without_case() {
        let lower = Nickname::from_str("user1").unwrap();
        let upper = Nickname::from_str("USER1").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(upper.to_string(), "USER1");

        let mut set = std::collections::HashSet::new();
        set.insert(lower);
        assert!(set.contains(&upper));
    }

    #[test]
    fn channel_name_rules() {
        assert!(ChannelName::from_str("#test").is_ok());
        assert!(ChannelName::from_str("&local").is_ok());
        assert!(ChannelName::from_str("#").is_err());
        assert!(ChannelName::from_str("test").is_err());
        assert!(ChannelName::from_str("#a,b").is_err());
        assert_eq!(ChannelName::from_str("#Test").unwrap(), ChannelName::from_str("#tEST").unwrap());
    }

    #[test]
    fn coerced_values() {
        assert_eq!(Username::new_coerce("a very long user name").unwrap().to_string(), "averylongu");
        assert!(Username::new_coerce("@@").is_err());
        assert_eq!(Realname::new_coerce("User One").to_string(), "User One");
        assert_eq!(AwayReason::new_coerce("gone\x07 fishing").to_string(), "gone fishing");
    }

    #[test]
    fn long_text_truncated() {
        let long = "x".repeat(400);
        assert_eq!(Realname::new_coerce(&long).as_str().len(), 64);
        assert_eq!(AwayReason::new_coerce(&long).as_str().len(), 300);
        assert!(Realname::from_str(&long).is_err());
    }
}
