//! Sequential criterion - detects runs from a fixed reference alphabet.

use secrecy::{ExposeSecret, SecretString};

use crate::report::{Criterion, CriterionOutcome};

/// Reference alphabet for sequential runs.
const SEQUENCE_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Awards a point if no 3-character window of the reference alphabet
/// occurs in the password (case-insensitive).
///
/// Windows are scanned left-to-right through the alphabet; the first one
/// found is reported.
pub fn sequential_criterion(password: &SecretString) -> CriterionOutcome {
    let lowered = password.expose_secret().to_lowercase();
    for i in 0..=SEQUENCE_ALPHABET.len() - 3 {
        let run = &SEQUENCE_ALPHABET[i..i + 3];
        if lowered.contains(run) {
            return CriterionOutcome::new(
                Criterion::Sequential,
                0,
                format!("Contains sequential pattern: {run}"),
            );
        }
    }
    CriterionOutcome::new(
        Criterion::Sequential,
        1,
        "No sequential patterns detected".to_string(),
    )
}
