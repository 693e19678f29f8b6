//! # Anagrams
//!
//! Generates every anagram (permutation) of a set of distinct letters,
//! returned in lexicographic order.
//!
//! ```text
//! $ anagrams abc
//! abc
//! acb
//! bac
//! bca
//! cab
//! cba
//! ```
//!
//! # Architecture: Validate, Then Enumerate
//!
//! A call runs two stages, synchronously and to completion:
//!
//! ```text
//! 1. Validate   Option<&str>  →  trimmed &str   (or the first InputError)
//! 2. Enumerate  &str          →  Vec<String>    (n! entries, sorted)
//! ```
//!
//! All failure modes live in stage 1. Stage 2 assumes valid input and has no
//! error path, so a failed call never yields a partial list.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`validate`] | Null / empty / letters-only / distinct checks, in that order |
//! | [`permute`] | Backtracking enumerator over the sorted letters |
//! | [`config`] | Optional `anagrams.toml` for the command-line front end |
//! | [`output`] | CLI output formatting (plain lines or JSON) |
//!
//! # Limits
//!
//! The output holds `n!` strings of length `n`. Nothing here bounds `n`:
//! callers decide what is practical. The command-line front end can enforce
//! a cap through `input.max_letters` in its config.

pub mod config;
pub mod output;
pub mod permute;
pub mod validate;

pub use validate::{InputError, Letters};

/// Validate `input` and return all its anagrams in lexicographic order.
///
/// `None` stands for an absent input and fails with [`InputError::Null`].
pub fn generate(input: Option<&str>) -> Result<Vec<String>, InputError> {
    let letters = validate::validate(input)?;
    Ok(enumerate(letters))
}

/// All anagrams of an already validated letter set. Cannot fail.
///
/// Lets a caller inspect [`Letters`] (e.g. its count) between validation
/// and enumeration without validating twice.
pub fn enumerate(letters: Letters<'_>) -> Vec<String> {
    tracing::debug!(
        letters = letters.as_str(),
        count = letters.count(),
        "input validated"
    );

    let result = permute::permutations(letters.as_str());
    tracing::debug!(permutations = result.len(), "enumeration complete");
    result
}

/// [`generate`] for input that is known to be present.
pub fn anagrams(input: &str) -> Result<Vec<String>, InputError> {
    generate(Some(input))
}
