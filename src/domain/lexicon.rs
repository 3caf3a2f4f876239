// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::domain::word::Word;

/// Index of a word in the guess list.
pub type WordId = u32;

/// The interned guess list plus per-word commonness.
///
/// The guess list is the full set of words a row may hold; the answer list
/// ("common words", the official checker's solutions) is a subset of it.
/// Any answer missing from the guess list is appended so the invariant
/// answers ⊆ guesses always holds.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<Word>,
    common: Vec<bool>,
    index: HashMap<Word, WordId>,
}

impl Lexicon {
    pub fn new(guesses: Vec<Word>, answers: &[Word]) -> Self {
        let mut words = Vec::with_capacity(guesses.len());
        let mut index = HashMap::with_capacity(guesses.len());
        for word in guesses {
            if !index.contains_key(&word) {
                index.insert(word, words.len() as WordId);
                words.push(word);
            }
        }
        let mut common = vec![false; words.len()];
        for &word in answers {
            match index.get(&word) {
                Some(&id) => common[id as usize] = true,
                None => {
                    index.insert(word, words.len() as WordId);
                    words.push(word);
                    common.push(true);
                }
            }
        }
        Self {
            words,
            common,
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, id: WordId) -> Word {
        self.words[id as usize]
    }

    pub fn id_of(&self, word: Word) -> Option<WordId> {
        self.index.get(&word).copied()
    }

    pub fn is_common(&self, id: WordId) -> bool {
        self.common[id as usize]
    }

    /// Commonness lookup by word; unknown words are not common.
    pub fn is_common_word(&self, word: Word) -> bool {
        self.id_of(word).is_some_and(|id| self.is_common(id))
    }

    pub fn ids(&self) -> std::ops::Range<WordId> {
        0..self.words.len() as WordId
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
