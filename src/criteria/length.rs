//! Length criterion - tiered scoring by character count.

use secrecy::{ExposeSecret, SecretString};

use crate::report::{Criterion, CriterionOutcome};

/// Scores password length on a 0-3 scale.
///
/// Tier boundaries are inclusive: 16+ chars scores 3, 12-15 scores 2,
/// 8-11 scores 1, anything shorter scores 0.
pub fn length_criterion(password: &SecretString) -> CriterionOutcome {
    let length = password.expose_secret().chars().count();
    let (points, message) = if length >= 16 {
        (3, "Excellent length (16+ chars)")
    } else if length >= 12 {
        (2, "Good length (12-15 chars)")
    } else if length >= 8 {
        (1, "Acceptable length (8-11 chars)")
    } else {
        (0, "Too short (<8 chars)")
    };
    CriterionOutcome::new(Criterion::Length, points, message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points_for(pwd: &str) -> u8 {
        length_criterion(&SecretString::new(pwd.to_string().into())).points
    }

    #[test]
    fn test_length_empty() {
        assert_eq!(points_for(""), 0);
    }

    #[test]
    fn test_length_tier_boundaries() {
        assert_eq!(points_for("aaaaaaa"), 0); // 7
        assert_eq!(points_for("aaaaaaaa"), 1); // 8
        assert_eq!(points_for("aaaaaaaaaaa"), 1); // 11
        assert_eq!(points_for("aaaaaaaaaaaa"), 2); // 12
        assert_eq!(points_for("aaaaaaaaaaaaaaa"), 2); // 15
        assert_eq!(points_for("aaaaaaaaaaaaaaaa"), 3); // 16
        assert_eq!(points_for("aaaaaaaaaaaaaaaaaaaaaaaa"), 3); // 24
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 8 characters, more than 8 bytes
        assert_eq!(points_for("pässwörd"), 1);
    }

    #[test]
    fn test_length_message_names_tier() {
        let outcome = length_criterion(&SecretString::new("short".to_string().into()));
        assert_eq!(outcome.message, "Too short (<8 chars)");
    }
}
