//! Repeats criterion - detects repetitive character patterns.

use secrecy::{ExposeSecret, SecretString};

use crate::report::{Criterion, CriterionOutcome};

/// Awards a point if the password contains no repetitive pattern.
///
/// Flags any of: a single character repeated 3+ times consecutively, a
/// 2-character unit repeated 3+ consecutive times, or a block of 3+
/// characters immediately repeated.
pub fn repeats_criterion(password: &SecretString) -> CriterionOutcome {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if has_repeated_char(&chars) || has_repeated_pair(&chars) || has_repeated_block(&chars) {
        CriterionOutcome::new(
            Criterion::Repeats,
            0,
            "Contains repetitive patterns".to_string(),
        )
    } else {
        CriterionOutcome::new(
            Criterion::Repeats,
            1,
            "No repetitive patterns".to_string(),
        )
    }
}

/// Single character repeated 3+ times consecutively, e.g. "aaa".
fn has_repeated_char(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

/// 2-character unit repeated 3+ consecutive times, e.g. "ababab".
fn has_repeated_pair(chars: &[char]) -> bool {
    if chars.len() < 6 {
        return false;
    }
    (0..=chars.len() - 6).any(|i| {
        chars[i..i + 2] == chars[i + 2..i + 4] && chars[i..i + 2] == chars[i + 4..i + 6]
    })
}

/// Block of 3+ characters immediately repeated, e.g. "abcabc".
fn has_repeated_block(chars: &[char]) -> bool {
    let n = chars.len();
    for len in 3..=n / 2 {
        for i in 0..=n - 2 * len {
            if chars[i..i + len] == chars[i + len..i + 2 * len] {
                return true;
            }
        }
    }
    false
}
