// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use crate::domain::{Lexicon, Puzzle};

/// Statistic a puzzle set can be bucketed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKey {
    /// Yellow and green cells across the grid. High values mean very
    /// yellow puzzles.
    NonGrey,
    /// Information in the hint rows, counting a green as two yellows.
    Info,
    /// Green cells across the grid.
    Greens,
}

impl BucketKey {
    pub fn of(self, puzzle: &Puzzle) -> u32 {
        match self {
            Self::NonGrey => puzzle.non_grey_count(),
            Self::Info => puzzle.info_value(),
            Self::Greens => puzzle.green_count(),
        }
    }
}

/// Bucket puzzles by a statistic, keyed in ascending order.
pub fn bucket_puzzles<'a>(puzzles: &'a [Puzzle], key: BucketKey) -> BTreeMap<u32, Vec<&'a Puzzle>> {
    let mut buckets: BTreeMap<u32, Vec<&Puzzle>> = BTreeMap::new();
    for puzzle in puzzles {
        buckets.entry(key.of(puzzle)).or_default().push(puzzle);
    }
    buckets
}

/// Bottom-row constraints for filtering a puzzle set.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterSpec {
    /// Bottom row must contain this letter...
    pub letter: Option<u8>,
    /// ...at this position, if given.
    pub pos: Option<usize>,
    /// Bottom row must be a common word.
    pub common_bottom: bool,
    /// Every row above the bottom must be a common word (the puzzle is
    /// then playable against the official checker's common-word list).
    pub common_upper: bool,
}

/// Filter a puzzle set. The lexicon is only consulted for the commonness
/// checks; passing `None` makes those constraints match nothing.
pub fn filter_puzzles<'a>(
    puzzles: &'a [Puzzle],
    spec: &FilterSpec,
    lex: Option<&Lexicon>,
) -> Vec<&'a Puzzle> {
    puzzles
        .iter()
        .filter(|p| matches_spec(p, spec, lex))
        .collect()
}

fn matches_spec(puzzle: &Puzzle, spec: &FilterSpec, lex: Option<&Lexicon>) -> bool {
    let bottom = puzzle.solution();

    if let Some(letter) = spec.letter {
        let ok = match spec.pos {
            Some(pos) => pos < crate::domain::WORD_LEN && bottom.letter(pos) == letter,
            None => bottom.contains(letter),
        };
        if !ok {
            return false;
        }
    }

    if spec.common_bottom && !lex.is_some_and(|l| l.is_common_word(bottom)) {
        return false;
    }

    if spec.common_upper
        && !lex.is_some_and(|l| puzzle.words.iter().skip(1).all(|&w| l.is_common_word(w)))
    {
        return false;
    }

    true
}
