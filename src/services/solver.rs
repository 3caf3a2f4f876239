// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::domain::{CODE_COUNT, ColorCode, Coloring, Lexicon, WordId};
use crate::services::hardmode::{grey_letters, obeys_hardmode};

/// The 243 guess buckets for one solution word:
/// `words_for(code)` is every guess (other than the solution itself) whose
/// score against the solution is `code`.
///
/// This is the per-solution shard of a full `(solution, code) -> guesses`
/// table; the backtracker only ever keys the table by the bottom word, so
/// each search task builds its own shard on demand instead of the whole
/// lexicon-squared table.
pub struct SolutionBuckets {
    buckets: Vec<Vec<WordId>>,
}

impl SolutionBuckets {
    pub fn build(solution: WordId, lex: &Lexicon) -> Self {
        let sol = lex.word(solution);
        let mut buckets = vec![Vec::new(); CODE_COUNT];
        for id in lex.ids() {
            if id == solution {
                continue;
            }
            let code = Coloring::score(lex.word(id), sol).code();
            buckets[code as usize].push(id);
        }
        Self { buckets }
    }

    pub fn words_for(&self, code: ColorCode) -> &[WordId] {
        &self.buckets[code as usize]
    }
}

/// How solutions differing only by a row swap are counted.
///
/// This pins down the solution-identity question the original left open:
/// two identically-coloured rows whose words can be exchanged either make
/// two solutions (`Distinct`) or one (`MergeSwaps`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPolicy {
    Distinct,
    MergeSwaps,
}

/// Result of solving one colouring stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NoSolution,
    /// Exactly one essentially-distinct solution, bottom-first.
    Unique(Vec<WordId>),
    /// At least two essentially-distinct solutions (early exit).
    Multiple,
}

/// Lazily built buckets for several candidate bottom words, used when the
/// same option set is solved against many stacks (force verification).
#[derive(Default)]
pub struct BucketCache {
    by_solution: HashMap<WordId, SolutionBuckets>,
}

impl BucketCache {
    pub fn get(&mut self, solution: WordId, lex: &Lexicon) -> &SolutionBuckets {
        self.by_solution
            .entry(solution)
            .or_insert_with(|| SolutionBuckets::build(solution, lex))
    }
}

pub struct Solver<'a> {
    lex: &'a Lexicon,
    policy: SwapPolicy,
}

impl<'a> Solver<'a> {
    pub fn new(lex: &'a Lexicon, policy: SwapPolicy) -> Self {
        Self { lex, policy }
    }

    /// Solve one stack with a single fixed bottom word.
    pub fn solve_fixed(
        &self,
        bottom: WordId,
        codes: &[ColorCode],
        buckets: &SolutionBuckets,
    ) -> Outcome {
        let mut selected = vec![bottom];
        self.search(&mut selected, codes, buckets)
    }

    /// Solve one stack where any of `bottom_options` may fill the bottom
    /// row. Distinct bottom words always yield distinct solutions, so two
    /// options both solving the stack means `Multiple`.
    pub fn solve(
        &self,
        bottom_options: &[WordId],
        codes: &[ColorCode],
        cache: &mut BucketCache,
    ) -> Outcome {
        let mut found: Option<Vec<WordId>> = None;
        for &bottom in bottom_options {
            let buckets = cache.get(bottom, self.lex);
            match self.solve_fixed(bottom, codes, buckets) {
                Outcome::Multiple => return Outcome::Multiple,
                Outcome::Unique(solution) => {
                    if found.is_some() {
                        return Outcome::Multiple;
                    }
                    found = Some(solution);
                }
                Outcome::NoSolution => {}
            }
        }
        match found {
            Some(solution) => Outcome::Unique(solution),
            None => Outcome::NoSolution,
        }
    }

    /// Recursive backtracker over the rows above `selected`.
    fn search(
        &self,
        selected: &mut Vec<WordId>,
        codes: &[ColorCode],
        buckets: &SolutionBuckets,
    ) -> Outcome {
        let row = selected.len();
        let words: Vec<_> = selected.iter().map(|&id| self.lex.word(id)).collect();
        let greys = grey_letters(&words, &codes[..row]);
        let col = Coloring::from_code(codes[row]);
        let options = buckets.words_for(codes[row]);

        // Last row: every legal option is a complete solution.
        if row == codes.len() - 1 {
            let mut found: Option<Vec<WordId>> = None;
            for &option in options {
                if !obeys_hardmode(self.lex.word(option), col, &words, codes, greys) {
                    continue;
                }
                if found.is_some() {
                    return Outcome::Multiple;
                }
                let mut solution = selected.clone();
                solution.push(option);
                found = Some(solution);
            }
            return match found {
                Some(solution) => Outcome::Unique(solution),
                None => Outcome::NoSolution,
            };
        }

        let mut found: Option<Vec<WordId>> = None;
        for &option in options {
            if !obeys_hardmode(self.lex.word(option), col, &words, codes, greys) {
                continue;
            }
            selected.push(option);
            let child = self.search(selected, codes, buckets);
            selected.pop();

            match child {
                Outcome::Multiple => return Outcome::Multiple,
                Outcome::Unique(solution) => match &found {
                    Some(existing) => {
                        let merged = self.policy == SwapPolicy::MergeSwaps
                            && swap_equivalent(existing, &solution, codes);
                        if !merged {
                            return Outcome::Multiple;
                        }
                    }
                    None => found = Some(solution),
                },
                Outcome::NoSolution => {}
            }
        }

        match found {
            Some(solution) => Outcome::Unique(solution),
            None => Outcome::NoSolution,
        }
    }
}

/// Whether `b` is a permutation of `a` that only exchanges rows bearing
/// identical colourings, i.e. the multisets of (code, word) pairs agree.
pub fn swap_equivalent(a: &[WordId], b: &[WordId], codes: &[ColorCode]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut pairs_a: Vec<_> = codes.iter().zip(a).collect();
    let mut pairs_b: Vec<_> = codes.iter().zip(b).collect();
    pairs_a.sort_unstable();
    pairs_b.sort_unstable();
    pairs_a == pairs_b
}
