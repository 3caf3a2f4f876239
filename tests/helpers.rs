// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use forcedle::domain::{ColorCode, Lexicon, Puzzle, Word};

/// Parse a test word, panicking on bad input
#[allow(dead_code)]
pub fn w(s: &str) -> Word {
    s.parse().unwrap()
}

/// Build a lexicon from string slices
#[allow(dead_code)]
pub fn make_lexicon(guesses: &[&str], answers: &[&str]) -> Lexicon {
    let guesses: Vec<Word> = guesses.iter().map(|s| w(s)).collect();
    let answers: Vec<Word> = answers.iter().map(|s| w(s)).collect();
    Lexicon::new(guesses, &answers)
}

/// Build a puzzle (bottom-first) from string slices and raw codes
#[allow(dead_code)]
pub fn make_puzzle(words: &[&str], codes: &[ColorCode]) -> Puzzle {
    Puzzle {
        words: words.iter().map(|s| w(s)).collect(),
        codes: codes.to_vec(),
    }
}
