// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use crate::domain::{ALL_GREEN, ColorCode, Coloring, Tile, WORD_LEN};

/// Which colouring stacks the enumeration yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackMode {
    /// No code repeats within a stack. The no-swap search space.
    NoRepeats,
    /// Repeats allowed, and only stacks containing at least one repeated
    /// code are yielded. Stacks without repeats are exactly the
    /// [`NoRepeats`](Self::NoRepeats) set, so the two modes partition the
    /// swap-merged search space.
    RepeatsOnly,
}

/// Enumerate every valid colouring stack for the rows above the bottom,
/// bottom-up, for a puzzle of `rows` total rows.
///
/// A stack is valid when, going up: green never appears over a non-green
/// cell, the non-grey count never increases, and all-green never reappears.
/// The walk is a depth-first search over codes in ascending order, pruning
/// as soon as a prefix breaks a rule, so the surviving stacks come out in
/// the same order a filtered cartesian product would produce them.
pub fn enumerate_stacks(rows: usize, mode: StackMode) -> Vec<Vec<ColorCode>> {
    debug_assert!(rows >= 2);
    let mut stacks = Vec::new();
    let mut prefix = Vec::with_capacity(rows - 1);
    extend(&mut stacks, &mut prefix, rows - 1, mode);
    stacks
}

fn extend(
    stacks: &mut Vec<Vec<ColorCode>>,
    prefix: &mut Vec<ColorCode>,
    depth: usize,
    mode: StackMode,
) {
    if prefix.len() == depth {
        match mode {
            StackMode::NoRepeats => stacks.push(prefix.clone()),
            StackMode::RepeatsOnly => {
                if has_repeat(prefix) {
                    stacks.push(prefix.clone());
                }
            }
        }
        return;
    }

    let (prev_tiles, prev_non_grey) = match prefix.last() {
        Some(&code) => {
            let col = Coloring::from_code(code);
            (col.tiles(), col.non_grey())
        }
        // The bottom row is all green and constrains nothing.
        None => ([Tile::Green; WORD_LEN], WORD_LEN),
    };

    for code in 0..ALL_GREEN {
        let col = Coloring::from_code(code);

        if !greens_supported(&col, &prev_tiles) {
            continue;
        }
        if col.non_grey() > prev_non_grey {
            continue;
        }
        if mode == StackMode::NoRepeats && prefix.contains(&code) {
            continue;
        }

        prefix.push(code);
        extend(stacks, prefix, depth, mode);
        prefix.pop();
    }
}

/// Green may only sit above a cell that was green in the row below.
fn greens_supported(col: &Coloring, prev_tiles: &[Tile; WORD_LEN]) -> bool {
    (0..WORD_LEN).all(|i| col.tile(i) != Tile::Green || prev_tiles[i] == Tile::Green)
}

fn has_repeat(stack: &[ColorCode]) -> bool {
    stack
        .iter()
        .enumerate()
        .any(|(i, code)| stack[..i].contains(code))
}
