//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::criteria::{
    dictionary_criterion, digit_criterion, length_criterion, lowercase_criterion,
    repeats_criterion, sequential_criterion, special_criterion, uppercase_criterion,
};
use crate::report::EvaluationResult;

/// Evaluates password strength against the full criterion set.
///
/// Runs every criterion in fixed order and returns their outcomes along
/// with the derived score and verdict. Never fails: any input, including
/// the empty string, yields a complete result with one outcome per
/// criterion.
pub fn evaluate_password(password: &SecretString) -> EvaluationResult {
    let outcomes = vec![
        length_criterion(password),
        uppercase_criterion(password),
        lowercase_criterion(password),
        digit_criterion(password),
        special_criterion(password),
        repeats_criterion(password),
        dictionary_criterion(password),
        sequential_criterion(password),
    ];

    let result = EvaluationResult::new(outcomes);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = result.total_score(),
        verdict = %result.verdict(),
        "password evaluated"
    );

    result
}

/// Debounce before an async evaluation starts.
#[cfg(feature = "async")]
const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async version that sends the evaluation result via channel.
///
/// Waits out a short debounce interval so rapid resubmissions can cancel a
/// pending evaluation via `token`. Once the evaluation itself starts it
/// always runs to completion; cancellation only suppresses it beforehand.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(EVALUATION_DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate_password(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
