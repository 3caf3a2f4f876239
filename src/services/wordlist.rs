// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{Lexicon, Word};
use crate::error::{Error, Result};

/// Load the answers and guesses files into a [`Lexicon`].
///
/// Answers missing from the guess list are appended to it; the guess list
/// is defined as the superset of everything a row may hold.
pub fn load_lexicon(answers: &Path, guesses: &Path) -> Result<Lexicon> {
    let answer_words = read_words(answers)?;
    let guess_words = read_words(guesses)?;
    let lexicon = Lexicon::new(guess_words, &answer_words);
    debug!(
        guesses = lexicon.len(),
        answers = answer_words.len(),
        "lexicon loaded"
    );
    Ok(lexicon)
}

/// Read one word-list file. Accepts the original comma+space format
/// ("stare, crane, ...") as well as newline-separated lists.
pub fn read_words(path: &Path) -> Result<Vec<Word>> {
    let content = fs::read_to_string(path).map_err(|e| Error::WordList {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut words = Vec::new();
    for token in content.split(|c: char| c == ',' || c.is_whitespace()) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let word = token.parse::<Word>().map_err(|e| Error::WordList {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(Error::EmptyWordList(path.to_path_buf()));
    }

    Ok(words)
}
