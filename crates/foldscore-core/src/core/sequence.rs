//! Cleaning and validation of raw sequence input.
//!
//! Raw input is reduced to its alphabetic characters and uppercased. Validation
//! then checks the cleaned form against the length window and the canonical
//! alphabet, reporting the first failing rule.

use crate::core::residues::AminoAcid;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;
use unicode_general_category::{GeneralCategory, get_general_category};

pub const MIN_SEQUENCE_LENGTH: usize = 5;
pub const MAX_SEQUENCE_LENGTH: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("sequence cannot be empty")]
    EmptyInput,

    #[error("sequence contains no alphabetic characters")]
    EmptyAfterClean,

    #[error(
        "sequence too short ({0} residues); at least {min} are required",
        min = MIN_SEQUENCE_LENGTH
    )]
    TooShort(usize),

    #[error(
        "sequence too long ({0} residues); at most {max} are supported",
        max = MAX_SEQUENCE_LENGTH
    )]
    TooLong(usize),

    #[error("sequence contains invalid characters: {}", join_chars(.0))]
    InvalidCharacters(Vec<char>),
}

fn join_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A sequence reduced to uppercase alphabetic characters.
///
/// A value produced by [`clean`] may still hold non-canonical letters; one
/// produced by [`check`] is guaranteed to be canonical and within the length
/// window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CleanedSequence {
    residues: String,
}

impl CleanedSequence {
    pub fn as_str(&self) -> &str {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn codes(&self) -> std::str::Chars<'_> {
        self.residues.chars()
    }

    /// Canonical residues in order, skipping any non-canonical letters.
    pub fn amino_acids(&self) -> impl Iterator<Item = AminoAcid> + '_ {
        self.codes().filter_map(AminoAcid::from_code)
    }

    pub fn count(&self, code: char) -> usize {
        self.codes().filter(|&c| c == code).count()
    }

    /// The first `n` residues (or all of them, if shorter).
    pub fn prefix(&self, n: usize) -> impl Iterator<Item = char> + '_ {
        self.codes().take(n)
    }
}

impl fmt::Display for CleanedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.residues)
    }
}

/// Letters in the strict sense: general categories Lu, Ll, Lt, Lm and Lo.
///
/// Letter numbers (Nl) and combining marks are excluded even though Unicode
/// counts some of them as `Alphabetic`.
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Removes every non-letter character and uppercases the rest.
pub fn clean(raw: &str) -> CleanedSequence {
    let residues = raw
        .chars()
        .filter(|&c| is_letter(c))
        .flat_map(char::to_uppercase)
        .collect();
    CleanedSequence { residues }
}

/// Validates raw input and returns its cleaned form.
pub fn check(raw: &str) -> Result<CleanedSequence, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let cleaned = clean(raw);
    if cleaned.is_empty() {
        return Err(ValidationError::EmptyAfterClean);
    }

    let length = cleaned.len();
    if length < MIN_SEQUENCE_LENGTH {
        return Err(ValidationError::TooShort(length));
    }
    if length > MAX_SEQUENCE_LENGTH {
        return Err(ValidationError::TooLong(length));
    }

    let invalid: BTreeSet<char> = cleaned
        .codes()
        .filter(|&c| AminoAcid::from_code(c).is_none())
        .collect();
    if !invalid.is_empty() {
        return Err(ValidationError::InvalidCharacters(
            invalid.into_iter().collect(),
        ));
    }

    Ok(cleaned)
}

/// Validates raw input without keeping the cleaned form.
pub fn validate(raw: &str) -> Result<(), ValidationError> {
    check(raw).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "ACDEFGHIKLMNPQRSTVWY";

    #[test]
    fn clean_strips_non_alphabetic_characters_and_uppercases() {
        let cleaned = clean("  ac-d e\n12f*g\t");
        assert_eq!(cleaned.as_str(), "ACDEFG");
        assert_eq!(cleaned.len(), 6);
    }

    #[test]
    fn clean_drops_letter_numbers_and_combining_marks() {
        // U+2173 small roman numeral four (Nl), U+0345 combining ypogegrammeni (Mn),
        // U+093E devanagari vowel sign aa (Mc).
        let cleaned = clean("ACDEF\u{2173}\u{0345}\u{093E}");
        assert_eq!(cleaned.as_str(), "ACDEF");
        assert_eq!(validate("ACDEF\u{2173}"), Ok(()));
        assert_eq!(validate("MK\u{2160}TAY"), Ok(()));
    }

    #[test]
    fn clean_keeps_non_latin_letters_for_validation_to_reject() {
        let cleaned = clean("acdef\u{3042}");
        assert_eq!(cleaned.as_str(), "ACDEF\u{3042}");
        assert_eq!(
            validate("acdef\u{3042}"),
            Err(ValidationError::InvalidCharacters(vec!['\u{3042}']))
        );
    }

    #[test]
    fn clean_of_empty_input_is_empty_not_an_error() {
        assert!(clean("").is_empty());
        assert!(clean("123 -- !!").is_empty());
    }

    #[test]
    fn clean_is_idempotent() {
        for raw in ["", "abc", "A C\nD", "x1y2z3", "MKV*LL?", "straße", "ÉéAa"] {
            let once = clean(raw);
            let twice = clean(once.as_str());
            assert_eq!(once, twice, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn blank_input_fails_with_empty_input() {
        assert_eq!(validate(""), Err(ValidationError::EmptyInput));
        assert_eq!(validate("   \n\t"), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn input_without_letters_fails_with_empty_after_clean() {
        assert_eq!(validate("1234 -- 5678"), Err(ValidationError::EmptyAfterClean));
    }

    #[test]
    fn length_boundaries_are_inclusive() {
        assert!(validate(&"A".repeat(5)).is_ok());
        assert_eq!(validate(&"A".repeat(4)), Err(ValidationError::TooShort(4)));
        assert!(validate(&"A".repeat(1000)).is_ok());
        assert_eq!(
            validate(&"A".repeat(1001)),
            Err(ValidationError::TooLong(1001))
        );
    }

    #[test]
    fn length_messages_report_exact_counts() {
        let short = validate("AC DE").unwrap_err();
        assert_eq!(short, ValidationError::TooShort(4));
        assert!(short.to_string().contains("(4 residues)"));

        let long = validate(&"G".repeat(1234)).unwrap_err();
        assert!(long.to_string().contains("(1234 residues)"));
    }

    #[test]
    fn canonical_alphabet_validates() {
        let cleaned = check(CANONICAL).unwrap();
        assert_eq!(cleaned.len(), 20);
    }

    #[test]
    fn non_canonical_letter_fails_citing_the_letter() {
        let err = validate("ACDEFGHIKLMNPQRSTVWYZ").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCharacters(vec!['Z']));
        assert!(err.to_string().ends_with(": Z"));
    }

    #[test]
    fn invalid_characters_are_sorted_and_deduplicated() {
        let err = validate("ZZACDXBXX").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCharacters(vec!['B', 'X', 'Z']));
        assert_eq!(
            err.to_string(),
            "sequence contains invalid characters: B, X, Z"
        );
    }

    #[test]
    fn length_is_checked_before_alphabet() {
        assert_eq!(validate("ZZZ"), Err(ValidationError::TooShort(3)));
    }

    #[test]
    fn mixed_case_input_validates_like_uppercase() {
        let lower = check(&CANONICAL.to_lowercase()).unwrap();
        let upper = check(CANONICAL).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn validation_does_not_depend_on_separators() {
        let spaced = check("MKT AYI\nAKQR").unwrap();
        assert_eq!(spaced.as_str(), "MKTAYIAKQR");
    }

    #[test]
    fn every_input_maps_to_exactly_one_outcome() {
        let inputs = ["", " ", "12", "ACD", "ACDEFB", "ACDEF", "acdef!!"];
        for raw in inputs {
            let outcome = validate(raw);
            let expected_ok = matches!(raw, "ACDEF" | "acdef!!");
            assert_eq!(outcome.is_ok(), expected_ok, "unexpected outcome for {:?}", raw);
        }
    }

    #[test]
    fn count_and_prefix_operate_on_cleaned_residues() {
        let cleaned = clean("c a c c");
        assert_eq!(cleaned.count('C'), 3);
        assert_eq!(cleaned.prefix(2).collect::<String>(), "CA");
        assert_eq!(cleaned.prefix(100).count(), 4);
    }

    #[test]
    fn amino_acids_skips_non_canonical_letters() {
        let cleaned = clean("AXC");
        let residues: Vec<_> = cleaned.amino_acids().collect();
        assert_eq!(residues, vec![AminoAcid::Alanine, AminoAcid::Cysteine]);
    }
}
