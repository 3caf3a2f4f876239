// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use indicatif::ProgressBar;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use crate::domain::{ALL_GREEN, ColorCode, Lexicon, Puzzle, WordId};
use crate::services::solver::{Outcome, SolutionBuckets, Solver, SwapPolicy};

/// Run the full search: every candidate bottom word against every
/// colouring stack, collecting the stacks with a unique solution.
///
/// Parallel over bottom words; each task builds the buckets for its own
/// word once and reuses them across all stacks. Results keep the order
/// (bottom word, then stack) regardless of thread count.
pub fn find_all(
    lex: &Lexicon,
    bottoms: &[WordId],
    stacks: &[Vec<ColorCode>],
    policy: SwapPolicy,
    progress: &ProgressBar,
) -> Vec<Puzzle> {
    let per_word: Vec<Vec<Puzzle>> = bottoms
        .par_iter()
        .map(|&bottom| {
            let found = find_for_bottom(lex, bottom, stacks, policy);
            progress.inc(1);
            found
        })
        .collect();

    let puzzles: Vec<Puzzle> = per_word.into_iter().flatten().collect();
    debug!(count = puzzles.len(), "search complete");
    puzzles
}

/// Search every stack with one fixed bottom word.
pub fn find_for_bottom(
    lex: &Lexicon,
    bottom: WordId,
    stacks: &[Vec<ColorCode>],
    policy: SwapPolicy,
) -> Vec<Puzzle> {
    let solver = Solver::new(lex, policy);
    let buckets = SolutionBuckets::build(bottom, lex);
    let mut puzzles = Vec::new();

    let mut codes: Vec<ColorCode> = Vec::new();
    for stack in stacks {
        codes.clear();
        codes.push(ALL_GREEN);
        codes.extend_from_slice(stack);

        if let Outcome::Unique(solution) = solver.solve_fixed(bottom, &codes, &buckets) {
            puzzles.push(Puzzle {
                words: solution.into_iter().map(|id| lex.word(id)).collect(),
                codes: codes.clone(),
            });
        }
    }

    puzzles
}
