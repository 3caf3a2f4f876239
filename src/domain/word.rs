// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Every crosswordle row holds a five-letter word.
pub const WORD_LEN: usize = 5;

/// A five-letter word, stored as lowercase ASCII bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LEN]);

impl Word {
    /// Letter at position `index` (0 = leftmost), as a lowercase ASCII byte.
    pub fn letter(&self, index: usize) -> u8 {
        self.0[index]
    }

    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains(&letter)
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != WORD_LEN {
            return Err(Error::InvalidWord(format!(
                "'{s}' is {} bytes long, expected {WORD_LEN} letters",
                bytes.len()
            )));
        }
        let mut letters = [0u8; WORD_LEN];
        for (i, &b) in bytes.iter().enumerate() {
            let lower = b.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(Error::InvalidWord(format!(
                    "'{s}' contains a non-letter character"
                )));
            }
            letters[i] = lower;
        }
        Ok(Self(letters))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({self})")
    }
}
