//! Pythagorean letter values and the validated person name.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Pythagorean value of a letter (A=1 .. I=9, J=1 .. R=9, S=1 .. Z=8).
///
/// Case-insensitive. Anything that is not an ASCII letter is worth 0.
pub fn letter_value(letter: char) -> u32 {
    if !letter.is_ascii_alphabetic() {
        return 0;
    }
    let offset = u32::from(letter.to_ascii_lowercase() as u8 - b'a');
    offset % 9 + 1
}

/// Returns true for the strict vowels a, e, i, o, u.
pub fn is_strict_vowel(letter: char) -> bool {
    matches!(letter.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Which letters of a name count as vowels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VowelSet {
    /// a, e, i, o, u
    Strict,
    /// a, e, i, o, u and y; used when a name has no strict vowel.
    WithY,
}

impl VowelSet {
    /// Returns true when `letter` is a vowel in this set.
    pub fn contains(self, letter: char) -> bool {
        match self {
            VowelSet::Strict => is_strict_vowel(letter),
            VowelSet::WithY => is_strict_vowel(letter) || letter.eq_ignore_ascii_case(&'y'),
        }
    }
}

/// A querent's full name, guaranteed to contain at least one ASCII letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Validates a full name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("full_name"));
        }
        if !trimmed.chars().any(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "full_name",
                "name must contain at least one letter A-Z",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first whitespace-separated part of the name.
    pub fn first_name(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or(&self.0)
    }

    /// The letters that contribute to numerology sums.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().filter(|c| c.is_ascii_alphabetic())
    }

    /// Vowel set to use for this name: strict unless it has no strict vowel.
    pub fn vowel_set(&self) -> VowelSet {
        if self.letters().any(is_strict_vowel) {
            VowelSet::Strict
        } else {
            VowelSet::WithY
        }
    }

    /// Sum of the letter values of every letter.
    pub fn letter_sum(&self) -> u64 {
        self.letters().map(|c| u64::from(letter_value(c))).sum()
    }

    /// Sum of the letter values of the vowels.
    pub fn vowel_sum(&self) -> u64 {
        let set = self.vowel_set();
        self.letters()
            .filter(|&c| set.contains(c))
            .map(|c| u64::from(letter_value(c)))
            .sum()
    }

    /// Sum of the letter values of the consonants.
    pub fn consonant_sum(&self) -> u64 {
        let set = self.vowel_set();
        self.letters()
            .filter(|&c| !set.contains(c))
            .map(|c| u64::from(letter_value(c)))
            .sum()
    }
}

impl TryFrom<String> for PersonName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PersonName::new(value)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
