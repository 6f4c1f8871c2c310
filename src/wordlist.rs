//! Common-word list management
//!
//! Handles the reference list of weak words used by the dictionary
//! criterion. A small built-in set is always active; an external file can
//! extend it at startup.

use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

/// Built-in weak words, in match order.
pub const DEFAULT_COMMON_WORDS: [&str; 8] = [
    "password", "admin", "qwerty", "letmein", "welcome", "monkey", "dragon", "football",
];

static COMMON_WORDS: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty")]
    EmptyFile,
}

/// Returns the word list file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/common-words.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/common-words.txt"))
}

/// Extends the built-in word list from an external file.
///
/// Loading is optional: the built-in words apply whether or not this is
/// called. File entries are lowercased, deduplicated, and appended after
/// the built-ins so match order stays deterministic.
///
/// # Environment Variable
///
/// Set `PWD_WORDLIST_PATH` to specify a custom file location. If not set,
/// defaults to `./assets/common-words.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist() -> Result<usize, WordlistError> {
    let path = get_wordlist_path();
    init_wordlist_from_path(&path)
}

/// Extends the built-in word list from a specific file path.
///
/// Use this when the host resolves the path itself instead of relying on
/// environment variables.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    // Idempotent: if already initialized, return immediately
    {
        let guard = COMMON_WORDS.read().unwrap();
        if let Some(words) = guard.as_ref() {
            return Ok(words.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list initialization FAILED: FileNotFound {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Word list initialization FAILED: Empty file {:?}", path);
        return Err(WordlistError::EmptyFile);
    }

    let mut words: Vec<String> = DEFAULT_COMMON_WORDS.iter().map(|w| w.to_string()).collect();
    for line in content.lines() {
        let word = line.trim().to_lowercase();
        if !word.is_empty() && !words.contains(&word) {
            words.push(word);
        }
    }

    let count = words.len();
    {
        let mut guard = COMMON_WORDS.write().unwrap();
        *guard = Some(words);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Word list initialized: {} words from {:?}", count, path);

    Ok(count)
}

/// Returns the effective word list, in match order.
///
/// The built-in words if [`init_wordlist`] has not been called, otherwise
/// the extended list.
pub fn get_wordlist() -> Vec<String> {
    let guard = COMMON_WORDS.read().unwrap();
    match guard.as_ref() {
        Some(words) => words.clone(),
        None => DEFAULT_COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
    }
}

/// Finds the first word in the list contained in `candidate`
/// (case-insensitive substring match).
pub fn matched_common_word(candidate: &str) -> Option<String> {
    let lowered = candidate.to_lowercase();
    let guard = COMMON_WORDS.read().unwrap();
    match guard.as_ref() {
        Some(words) => words.iter().find(|w| lowered.contains(w.as_str())).cloned(),
        None => DEFAULT_COMMON_WORDS
            .iter()
            .find(|w| lowered.contains(*w))
            .map(|w| w.to_string()),
    }
}

/// Resets the word list for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    let mut guard = COMMON_WORDS.write().unwrap();
    *guard = None;
}
