//! Name grammars over a configurable letter set.
//!
//! A name is one or more letter runs separated by single spaces. The letters
//! are ASCII `A-Z a-z` plus the alphabet's extra letters.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Letters accepted in names on top of ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Alphabet {
    pub extra_letters: String,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::serbian_latin()
    }
}

impl Alphabet {
    /// ASCII letters only.
    pub fn ascii() -> Self {
        Self {
            extra_letters: String::new(),
        }
    }

    /// č ć đ š ž in both cases.
    pub fn serbian_latin() -> Self {
        Self {
            extra_letters: "čćđšžČĆĐŠŽ".to_string(),
        }
    }

    /// Body of a regex character class matching one letter.
    fn class(&self) -> Result<String, CoreError> {
        if let Some(c) = self.extra_letters.chars().find(|c| !c.is_alphabetic()) {
            return Err(CoreError::InvalidAlphabet(format!(
                "{c:?} is not a letter"
            )));
        }
        Ok(format!("A-Za-z{}", self.extra_letters))
    }
}

/// Compiled name grammars for one alphabet.
#[derive(Debug, Clone)]
pub struct NameGrammar {
    name: Regex,
    name_with_numbers: Regex,
}

impl NameGrammar {
    /// Compile the grammars.
    pub fn new(alphabet: &Alphabet) -> Result<Self, CoreError> {
        let letters = alphabet.class()?;
        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|e| CoreError::InvalidAlphabet(e.to_string()))
        };

        Ok(Self {
            name: compile(format!("^[{letters}]+( [{letters}]+)*$"))?,
            name_with_numbers: compile(format!("^[{letters}]+( [0-9{letters}]+)*$"))?,
        })
    }

    /// Letter runs separated by single spaces.
    pub fn is_name(&self, value: &str) -> bool {
        self.name.is_match(value)
    }

    /// Like [`is_name`](Self::is_name), but tokens after the first may
    /// contain digits. Used for street addresses and department names.
    pub fn is_name_with_numbers(&self, value: &str) -> bool {
        self.name_with_numbers.is_match(value)
    }
}

impl Default for NameGrammar {
    fn default() -> Self {
        // The built-in alphabet is all letters, so compilation cannot fail.
        Self::new(&Alphabet::default()).expect("default alphabet compiles")
    }
}
