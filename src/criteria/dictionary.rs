//! Dictionary criterion - checks for common weak words.

use secrecy::{ExposeSecret, SecretString};

use crate::report::{Criterion, CriterionOutcome};
use crate::wordlist::matched_common_word;

/// Awards a point if no common weak word occurs in the password
/// (case-insensitive substring match). The first matching word, in list
/// order, is reported.
pub fn dictionary_criterion(password: &SecretString) -> CriterionOutcome {
    match matched_common_word(password.expose_secret()) {
        Some(word) => CriterionOutcome::new(
            Criterion::Dictionary,
            0,
            format!("Contains common word: {word}"),
        ),
        None => CriterionOutcome::new(
            Criterion::Dictionary,
            1,
            "No common dictionary words detected".to_string(),
        ),
    }
}
