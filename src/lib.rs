//! Heuristic password strength meter
//!
//! This library scores a password against a fixed set of independent
//! criteria and reports a composite score, per-criterion feedback messages
//! and a qualitative verdict. It is an advisory check for form handlers,
//! not a cryptographic strength estimator.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async delivery with cancellation
//!   support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_WORDLIST_PATH`: Optional file extending the built-in common-word
//!   list (default: `./assets/common-words.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::evaluate_password;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = evaluate_password(&password);
//!
//! println!("{}/{}", evaluation.total_score(), evaluation.max_score());
//! println!("{} {}", evaluation.strength_bar(), evaluation.verdict());
//! for outcome in &evaluation.outcomes {
//!     println!("- {}", outcome.message);
//! }
//! ```

// Internal modules
mod criteria;
mod evaluator;
mod report;
mod wordlist;

// Public API
pub use evaluator::evaluate_password;
pub use report::{Criterion, CriterionOutcome, EvaluationResult, Verdict, MAX_SCORE};
pub use wordlist::{
    get_wordlist, get_wordlist_path, init_wordlist, init_wordlist_from_path, matched_common_word,
    WordlistError, DEFAULT_COMMON_WORDS,
};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_tx;
