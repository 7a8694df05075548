use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::letters::{get_letter_value, BLANK};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid tile letter")]
pub struct InvalidLetter(pub char);

/// A single tile face: `A`-`Z` or the blank.
///
/// Letters are stored uppercase; parsing accepts either case, and both `?`
/// and a space parse as the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(char);

impl Letter {
    pub const BLANK: Letter = Letter(BLANK);

    pub fn new(ch: char) -> Result<Self, InvalidLetter> {
        match ch {
            'a'..='z' | 'A'..='Z' => Ok(Letter(ch.to_ascii_uppercase())),
            BLANK | ' ' => Ok(Self::BLANK),
            other => Err(InvalidLetter(other)),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_blank(self) -> bool {
        self == Self::BLANK
    }

    /// Face value before any premium square is applied
    pub fn value(self) -> u32 {
        get_letter_value(self.0)
    }

    /// Parse every character of `word` into letters
    pub fn parse_all(word: &str) -> Result<Vec<Letter>, InvalidLetter> {
        word.chars().map(Letter::new).collect()
    }
}

impl TryFrom<char> for Letter {
    type Error = InvalidLetter;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Letter::new(ch)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Letter::new('q').unwrap(), Letter::new('Q').unwrap());
        assert_eq!(Letter::new('q').unwrap().as_char(), 'Q');
    }

    #[test]
    fn test_blank_aliases() {
        assert!(Letter::new('?').unwrap().is_blank());
        assert!(Letter::new(' ').unwrap().is_blank());
        assert_eq!(Letter::BLANK.value(), 0);
    }

    #[test]
    fn test_rejects_non_letters() {
        assert_eq!(Letter::new('7'), Err(InvalidLetter('7')));
        assert_eq!(Letter::new('é'), Err(InvalidLetter('é')));
        assert!(Letter::parse_all("CA7").is_err());
    }

    #[test]
    fn test_serde_as_single_char() {
        let letter: Letter = serde_json::from_str("\"z\"").unwrap();
        assert_eq!(letter.as_char(), 'Z');
        assert_eq!(serde_json::to_string(&letter).unwrap(), "\"Z\"");
        assert!(serde_json::from_str::<Letter>("\"1\"").is_err());
    }
}
