//! Result records for password evaluation.
//!
//! An evaluation produces one [`CriterionOutcome`] per criterion, collected
//! into an [`EvaluationResult`]. The total score, verdict and strength bar
//! are all derived from the outcomes.

use std::fmt;

/// Maximum achievable total score (sum of all criterion maximums).
pub const MAX_SCORE: u8 = 10;

/// Stable identifier for one password-quality rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    Uppercase,
    Lowercase,
    Digit,
    Special,
    Repeats,
    Dictionary,
    Sequential,
}

impl Criterion {
    /// All criteria, in evaluation order.
    pub const ALL: [Criterion; 8] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Special,
        Criterion::Repeats,
        Criterion::Dictionary,
        Criterion::Sequential,
    ];

    /// Stable string identifier, e.g. `"length"`.
    pub fn id(self) -> &'static str {
        match self {
            Criterion::Length => "length",
            Criterion::Uppercase => "uppercase",
            Criterion::Lowercase => "lowercase",
            Criterion::Digit => "digit",
            Criterion::Special => "special",
            Criterion::Repeats => "repeats",
            Criterion::Dictionary => "dictionary",
            Criterion::Sequential => "sequential",
        }
    }

    /// Maximum points this criterion can award.
    pub fn max_points(self) -> u8 {
        match self {
            Criterion::Length => 3,
            _ => 1,
        }
    }
}

/// Outcome of a single criterion check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionOutcome {
    pub criterion: Criterion,
    pub points: u8,
    pub message: String,
}

impl CriterionOutcome {
    /// Creates an outcome. Points must not exceed the criterion maximum.
    pub fn new(criterion: Criterion, points: u8, message: String) -> Self {
        debug_assert!(points <= criterion.max_points());
        Self {
            criterion,
            points,
            message,
        }
    }
}

/// Aggregate result of evaluating one password.
///
/// Outcomes are stored in evaluation order; everything else is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub outcomes: Vec<CriterionOutcome>,
}

impl EvaluationResult {
    pub fn new(outcomes: Vec<CriterionOutcome>) -> Self {
        Self { outcomes }
    }

    /// Sum of the points awarded by all criteria.
    pub fn total_score(&self) -> u8 {
        self.outcomes.iter().map(|o| o.points).sum()
    }

    /// Maximum achievable score for the rule set.
    pub fn max_score(&self) -> u8 {
        MAX_SCORE
    }

    /// Verdict derived from the total score.
    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(self.total_score())
    }

    /// Fixed-width bar of filled and empty glyphs encoding score/max.
    pub fn strength_bar(&self) -> String {
        let filled = self.total_score() as usize;
        let mut bar = "█".repeat(filled);
        bar.push_str(&"-".repeat(MAX_SCORE as usize - filled));
        bar
    }
}

/// Qualitative verdict, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Weak,
    Fair,
    Good,
    Excellent,
}

impl Verdict {
    /// Maps a total score to a verdict. Monotonic and exhaustive over 0..=10.
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            Verdict::Excellent
        } else if score >= 6 {
            Verdict::Good
        } else if score >= 4 {
            Verdict::Fair
        } else {
            Verdict::Weak
        }
    }

    /// Ordinal severity tier (0 = weak .. 3 = excellent).
    pub fn tier(self) -> u8 {
        match self {
            Verdict::Weak => 0,
            Verdict::Fair => 1,
            Verdict::Good => 2,
            Verdict::Excellent => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::Weak => "Weak",
            Verdict::Fair => "Fair",
            Verdict::Good => "Good",
            Verdict::Excellent => "Excellent",
        }
    }

    /// Full feedback sentence for display next to the score.
    pub fn advice(self) -> &'static str {
        match self {
            Verdict::Weak => "Weak password! You should strengthen it.",
            Verdict::Fair => "Fair password, consider improving it.",
            Verdict::Good => "Good password, but could be stronger.",
            Verdict::Excellent => "Excellent password!",
        }
    }

    /// Severity color for form renderers.
    pub fn color(self) -> &'static str {
        match self {
            Verdict::Weak => "#f44336",
            Verdict::Fair => "#ff9800",
            Verdict::Good => "#2196F3",
            Verdict::Excellent => "#4CAF50",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_score_matches_criterion_maximums() {
        let sum: u8 = Criterion::ALL.iter().map(|c| c.max_points()).sum();
        assert_eq!(sum, MAX_SCORE);
    }

    #[test]
    fn test_criterion_ids_are_unique() {
        let ids: std::collections::HashSet<_> =
            Criterion::ALL.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), Criterion::ALL.len());
    }

    #[test]
    fn test_verdict_cutoffs() {
        assert_eq!(Verdict::from_score(0), Verdict::Weak);
        assert_eq!(Verdict::from_score(3), Verdict::Weak);
        assert_eq!(Verdict::from_score(4), Verdict::Fair);
        assert_eq!(Verdict::from_score(5), Verdict::Fair);
        assert_eq!(Verdict::from_score(6), Verdict::Good);
        assert_eq!(Verdict::from_score(7), Verdict::Good);
        assert_eq!(Verdict::from_score(8), Verdict::Excellent);
        assert_eq!(Verdict::from_score(10), Verdict::Excellent);
    }

    #[test]
    fn test_verdict_monotonic_over_full_range() {
        for score in 1..=MAX_SCORE {
            assert!(Verdict::from_score(score) >= Verdict::from_score(score - 1));
        }
    }

    #[test]
    fn test_verdict_tier_ordering() {
        assert!(Verdict::Weak < Verdict::Fair);
        assert!(Verdict::Fair < Verdict::Good);
        assert!(Verdict::Good < Verdict::Excellent);
        assert_eq!(Verdict::Weak.tier(), 0);
        assert_eq!(Verdict::Excellent.tier(), 3);
    }

    #[test]
    fn test_strength_bar_width_and_fill() {
        let outcomes = vec![
            CriterionOutcome::new(Criterion::Length, 3, "Excellent length (16+ chars)".to_string()),
            CriterionOutcome::new(Criterion::Uppercase, 1, "Contains uppercase letters".to_string()),
        ];
        let result = EvaluationResult::new(outcomes);
        assert_eq!(result.total_score(), 4);
        assert_eq!(result.strength_bar(), "████------");
        assert_eq!(result.strength_bar().chars().count(), MAX_SCORE as usize);
    }

    #[test]
    fn test_strength_bar_zero_score() {
        let empty = EvaluationResult::new(vec![]);
        assert_eq!(empty.strength_bar(), "----------");
    }

    #[test]
    fn test_verdict_display_is_label() {
        assert_eq!(Verdict::Good.to_string(), "Good");
    }

    #[test]
    fn test_verdict_presentation_accessors() {
        assert_eq!(Verdict::Weak.color(), "#f44336");
        assert_eq!(Verdict::Excellent.color(), "#4CAF50");
        assert_eq!(
            Verdict::Fair.advice(),
            "Fair password, consider improving it."
        );
    }
}
