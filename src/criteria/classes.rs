//! Character-class criteria - uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};

use crate::report::{Criterion, CriterionOutcome};

fn presence_outcome(
    criterion: Criterion,
    found: bool,
    present: &str,
    absent: &str,
) -> CriterionOutcome {
    if found {
        CriterionOutcome::new(criterion, 1, present.to_string())
    } else {
        CriterionOutcome::new(criterion, 0, absent.to_string())
    }
}

/// Awards a point if the password contains an uppercase letter (A-Z).
pub fn uppercase_criterion(password: &SecretString) -> CriterionOutcome {
    let found = password.expose_secret().chars().any(|c| c.is_ascii_uppercase());
    presence_outcome(
        Criterion::Uppercase,
        found,
        "Contains uppercase letters",
        "No uppercase letters",
    )
}

/// Awards a point if the password contains a lowercase letter (a-z).
pub fn lowercase_criterion(password: &SecretString) -> CriterionOutcome {
    let found = password.expose_secret().chars().any(|c| c.is_ascii_lowercase());
    presence_outcome(
        Criterion::Lowercase,
        found,
        "Contains lowercase letters",
        "No lowercase letters",
    )
}

/// Awards a point if the password contains a digit (0-9).
pub fn digit_criterion(password: &SecretString) -> CriterionOutcome {
    let found = password.expose_secret().chars().any(|c| c.is_ascii_digit());
    presence_outcome(Criterion::Digit, found, "Contains numbers", "No numbers")
}

/// Awards a point if the password contains a non-alphanumeric character.
///
/// Whitespace counts as special.
pub fn special_criterion(password: &SecretString) -> CriterionOutcome {
    let found = password.expose_secret().chars().any(|c| !c.is_alphanumeric());
    presence_outcome(
        Criterion::Special,
        found,
        "Contains special characters",
        "No special characters",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[test]
    fn test_uppercase_present_and_absent() {
        assert_eq!(uppercase_criterion(&secret("aBc")).points, 1);
        assert_eq!(uppercase_criterion(&secret("abc")).points, 0);
        assert_eq!(
            uppercase_criterion(&secret("abc")).message,
            "No uppercase letters"
        );
    }

    #[test]
    fn test_lowercase_present_and_absent() {
        assert_eq!(lowercase_criterion(&secret("ABc")).points, 1);
        assert_eq!(lowercase_criterion(&secret("ABC")).points, 0);
        assert_eq!(
            lowercase_criterion(&secret("ABC")).message,
            "No lowercase letters"
        );
    }

    #[test]
    fn test_digit_present_and_absent() {
        assert_eq!(digit_criterion(&secret("abc1")).points, 1);
        assert_eq!(digit_criterion(&secret("abc")).points, 0);
    }

    #[test]
    fn test_special_present_and_absent() {
        assert_eq!(special_criterion(&secret("abc!")).points, 1);
        assert_eq!(special_criterion(&secret("abc123XYZ")).points, 0);
    }

    #[test]
    fn test_whitespace_counts_as_special() {
        assert_eq!(special_criterion(&secret("pass word")).points, 1);
    }

    #[test]
    fn test_empty_password_fails_all_classes() {
        let pwd = secret("");
        assert_eq!(uppercase_criterion(&pwd).points, 0);
        assert_eq!(lowercase_criterion(&pwd).points, 0);
        assert_eq!(digit_criterion(&pwd).points, 0);
        assert_eq!(special_criterion(&pwd).points, 0);
    }

    #[test]
    fn test_non_ascii_letters_are_not_ascii_classes() {
        // 'É' is uppercase but not A-Z; it is alphanumeric, so not special either
        assert_eq!(uppercase_criterion(&secret("É")).points, 0);
        assert_eq!(special_criterion(&secret("É")).points, 0);
    }
}
