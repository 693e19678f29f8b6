//! Input validation for the anagram generator.
//!
//! Every rule is checked in a fixed order and the first violation wins:
//!
//! 1. the input must be present (`None` is the absent case)
//! 2. after trimming surrounding whitespace it must not be empty
//! 3. every character must be a letter: Unicode general category `L`
//!    (`Lu`, `Ll`, `Lt`, `Lm`, `Lo`), any script, not just A–Z
//! 4. no character may appear twice (case-sensitive, exact code point)
//!
//! Nothing is normalized: `é` (U+00E9) and `e` + U+0301 are different inputs,
//! and the combining accent in the second one is not a letter. Letter-like
//! symbols outside category `L` (Roman numerals, circled letters, vowel
//! signs) are rejected too.

use std::collections::HashSet;
use thiserror::Error;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("input must not be null")]
    Null,
    #[error("input must not be empty")]
    Empty,
    #[error("input must contain only letters; invalid character: '{0}'")]
    InvalidCharacter(char),
    #[error("input must contain distinct letters (no repetition); repeated letter: '{0}'")]
    DuplicateCharacter(char),
}

/// A trimmed letter set that passed [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letters<'a>(&'a str);

impl<'a> Letters<'a> {
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Number of letters (chars, not bytes).
    pub fn count(&self) -> usize {
        self.0.chars().count()
    }
}

fn is_letter(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Validate a candidate letter set and return it trimmed.
///
/// Case and order are preserved; the enumerator does its own sorting.
pub fn validate(input: Option<&str>) -> Result<Letters<'_>, InputError> {
    let input = input.ok_or(InputError::Null)?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    if let Some(c) = trimmed.chars().find(|&c| !is_letter(c)) {
        return Err(InputError::InvalidCharacter(c));
    }

    let mut seen = HashSet::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        if !seen.insert(c) {
            return Err(InputError::DuplicateCharacter(c));
        }
    }

    Ok(Letters(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(input: &str) -> Result<&str, InputError> {
        validate(Some(input)).map(|l| l.as_str())
    }

    #[test]
    fn absent_input_is_null() {
        assert_eq!(validate(None), Err(InputError::Null));
    }

    #[test]
    fn empty_and_whitespace_only_are_empty() {
        assert_eq!(validate(Some("")), Err(InputError::Empty));
        assert_eq!(validate(Some("   ")), Err(InputError::Empty));
        assert_eq!(validate(Some("\t\n")), Err(InputError::Empty));
    }

    #[test]
    fn digit_is_invalid_character() {
        assert_eq!(
            validate(Some("a1")),
            Err(InputError::InvalidCharacter('1'))
        );
    }

    #[test]
    fn inner_whitespace_is_invalid_character() {
        assert_eq!(
            validate(Some("a b")),
            Err(InputError::InvalidCharacter(' '))
        );
    }

    #[test]
    fn punctuation_and_symbols_are_invalid() {
        assert_eq!(validate(Some("ab!")), Err(InputError::InvalidCharacter('!')));
        assert_eq!(validate(Some("a€")), Err(InputError::InvalidCharacter('€')));
    }

    #[test]
    fn repeated_letter_is_duplicate() {
        assert_eq!(
            validate(Some("aba")),
            Err(InputError::DuplicateCharacter('a'))
        );
    }

    #[test]
    fn first_violation_wins() {
        // Both a non-letter and a repeat: the character-class rule runs first.
        assert_eq!(
            validate(Some("aa1")),
            Err(InputError::InvalidCharacter('1'))
        );
    }

    #[test]
    fn case_differs_is_not_duplicate() {
        assert_eq!(accepted("aA"), Ok("aA"));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(accepted("  cab \n"), Ok("cab"));
    }

    #[test]
    fn accented_letters_are_accepted() {
        assert_eq!(accepted("çãé"), Ok("çãé"));
    }

    #[test]
    fn other_scripts_are_accepted() {
        assert_eq!(accepted("αβγ"), Ok("αβγ"));
        assert_eq!(accepted("жб"), Ok("жб"));
        // Lo, Lt, Lm
        assert_eq!(accepted("中ǅʰ"), Ok("中ǅʰ"));
    }

    #[test]
    fn decomposed_accent_is_not_a_letter() {
        assert_eq!(
            validate(Some("e\u{0301}")),
            Err(InputError::InvalidCharacter('\u{0301}'))
        );
    }

    #[test]
    fn letter_number_is_invalid() {
        assert_eq!(
            validate(Some("aⅫ")),
            Err(InputError::InvalidCharacter('Ⅻ'))
        );
    }

    #[test]
    fn alphabetic_marks_are_invalid() {
        // Both carry the Alphabetic property but are marks, not letters.
        assert_eq!(
            validate(Some("a\u{0345}")),
            Err(InputError::InvalidCharacter('\u{0345}'))
        );
        assert_eq!(
            validate(Some("क\u{093E}")),
            Err(InputError::InvalidCharacter('\u{093E}'))
        );
    }

    #[test]
    fn circled_letter_is_invalid() {
        assert_eq!(
            validate(Some("Ⓐb")),
            Err(InputError::InvalidCharacter('Ⓐ'))
        );
    }

    #[test]
    fn count_is_in_chars() {
        let letters = validate(Some(" çãé ")).unwrap();
        assert_eq!(letters.count(), 3);
        assert_eq!(letters.as_str(), "çãé");
    }

    #[test]
    fn messages_name_the_rule_and_character() {
        let msg = InputError::InvalidCharacter('1').to_string();
        assert!(msg.contains("only letters"));
        assert!(msg.contains("'1'"));

        let msg = InputError::DuplicateCharacter('a').to_string();
        assert!(msg.contains("distinct"));
        assert!(msg.contains("'a'"));

        assert!(InputError::Empty.to_string().contains("empty"));
        assert!(InputError::Null.to_string().contains("null"));
    }
}
