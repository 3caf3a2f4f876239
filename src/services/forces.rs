// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use indicatif::ProgressBar;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use crate::domain::{ColorCode, ForceHint, ForcedPuzzle, Lexicon, Puzzle, WORD_LEN, WordId};
use crate::services::solver::{BucketCache, Outcome, Solver, SwapPolicy};

/// Find puzzles still forced when the bottom word is only known to have
/// `letter` at `pos`, for every letter/position combination.
///
/// Method, per combination: take the forced puzzles whose bottom word
/// satisfies the constraint and group them by colouring stack. A stack
/// owned by exactly one puzzle is a candidate; the candidate is confirmed
/// by re-solving its stack with every constrained word as a bottom option.
pub fn find_placed_forces(
    puzzles: &[Puzzle],
    lex: &Lexicon,
    policy: SwapPolicy,
    progress: &ProgressBar,
) -> Vec<ForcedPuzzle> {
    let letters: Vec<u8> = (b'a'..=b'z').collect();
    let per_letter: Vec<Vec<ForcedPuzzle>> = letters
        .par_iter()
        .map(|&letter| {
            let mut found = Vec::new();
            for pos in 0..WORD_LEN {
                let constraint = |id: WordId| lex.word(id).letter(pos) == letter;
                let hint = ForceHint::Placed { letter, pos };
                found.extend(forces_for_constraint(puzzles, lex, policy, &constraint, hint));
                progress.inc(1);
            }
            found
        })
        .collect();
    per_letter.into_iter().flatten().collect()
}

/// Find puzzles still forced when `letter` is only known to be somewhere
/// in the bottom row.
pub fn find_anywhere_forces(
    puzzles: &[Puzzle],
    lex: &Lexicon,
    policy: SwapPolicy,
    progress: &ProgressBar,
) -> Vec<ForcedPuzzle> {
    let letters: Vec<u8> = (b'a'..=b'z').collect();
    let per_letter: Vec<Vec<ForcedPuzzle>> = letters
        .par_iter()
        .map(|&letter| {
            let constraint = |id: WordId| lex.word(id).contains(letter);
            let hint = ForceHint::Anywhere { letter };
            let found = forces_for_constraint(puzzles, lex, policy, &constraint, hint);
            progress.inc(1);
            found
        })
        .collect();
    per_letter.into_iter().flatten().collect()
}

/// Find puzzles still forced when the bottom word is only known to be a
/// common (answer-list) word.
pub fn find_common_forces(
    puzzles: &[Puzzle],
    lex: &Lexicon,
    policy: SwapPolicy,
) -> Vec<ForcedPuzzle> {
    let constraint = |id: WordId| lex.is_common(id);
    forces_for_constraint(puzzles, lex, policy, &constraint, ForceHint::CommonBottom)
}

fn forces_for_constraint(
    puzzles: &[Puzzle],
    lex: &Lexicon,
    policy: SwapPolicy,
    constraint: &dyn Fn(WordId) -> bool,
    hint: ForceHint,
) -> Vec<ForcedPuzzle> {
    let options: Vec<WordId> = lex.ids().filter(|&id| constraint(id)).collect();
    if options.is_empty() {
        return Vec::new();
    }

    // Count how many constrained puzzles share each colouring stack;
    // only sole owners can be forced by the weaker hint.
    let mut stack_owners: HashMap<&[ColorCode], usize> = HashMap::new();
    for puzzle in puzzles {
        if matches(lex, puzzle, constraint) {
            *stack_owners.entry(puzzle.codes.as_slice()).or_default() += 1;
        }
    }

    let solver = Solver::new(lex, policy);
    let mut cache = BucketCache::default();
    let mut found = Vec::new();

    for puzzle in puzzles {
        if !matches(lex, puzzle, constraint) {
            continue;
        }
        if stack_owners.get(puzzle.codes.as_slice()) != Some(&1) {
            continue;
        }
        if let Outcome::Unique(_) = solver.solve(&options, &puzzle.codes, &mut cache) {
            found.push(ForcedPuzzle {
                puzzle: puzzle.clone(),
                hint,
            });
        }
    }

    debug!(hint = %hint, count = found.len(), "force group done");
    found
}

fn matches(lex: &Lexicon, puzzle: &Puzzle, constraint: &dyn Fn(WordId) -> bool) -> bool {
    lex.id_of(puzzle.solution()).is_some_and(constraint)
}
