// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use forcedle::domain::{ALL_GREEN, Coloring, Tile};
use forcedle::services::colorings::{StackMode, enumerate_stacks};

// ─── Two-row puzzles ──────────────────────────────────────────────────────────

#[test]
fn two_rows_yield_every_code_once() {
    let stacks = enumerate_stacks(2, StackMode::NoRepeats);
    assert_eq!(stacks.len(), 242);
    for (i, stack) in stacks.iter().enumerate() {
        assert_eq!(stack.as_slice(), &[i as u8]);
    }
}

#[test]
fn two_rows_have_no_repeat_stacks() {
    // A single row above the bottom can never repeat a code.
    assert!(enumerate_stacks(2, StackMode::RepeatsOnly).is_empty());
}

// ─── Three-row puzzles ────────────────────────────────────────────────────────

#[test]
fn three_row_count_matches_exhaustive_filter() {
    let stacks = enumerate_stacks(3, StackMode::NoRepeats);
    assert_eq!(stacks.len(), 13051);
}

#[test]
fn three_row_stacks_come_out_in_product_order() {
    let stacks = enumerate_stacks(3, StackMode::NoRepeats);
    // Code 0 above the bottom admits nothing green above it; the first
    // surviving pair puts the lone yellow in the first row.
    assert_eq!(stacks.first().unwrap().as_slice(), &[1, 0]);
    assert_eq!(stacks.last().unwrap().as_slice(), &[241, 240]);
}

#[test]
fn repeats_only_three_rows_are_the_doubled_codes() {
    let stacks = enumerate_stacks(3, StackMode::RepeatsOnly);
    // Every code can sit above itself, and nothing else repeats in two rows.
    assert_eq!(stacks.len(), 242);
    for stack in &stacks {
        assert_eq!(stack.len(), 2);
        assert_eq!(stack[0], stack[1]);
    }
}

// ─── Validity rules ───────────────────────────────────────────────────────────

#[test]
fn all_green_never_appears_above_the_bottom() {
    for mode in [StackMode::NoRepeats, StackMode::RepeatsOnly] {
        for stack in enumerate_stacks(3, mode) {
            assert!(!stack.contains(&ALL_GREEN));
        }
    }
}

#[test]
fn green_cells_are_always_supported_from_below() {
    for stack in enumerate_stacks(3, StackMode::NoRepeats) {
        let below = Coloring::from_code(stack[0]);
        let above = Coloring::from_code(stack[1]);
        for i in 0..5 {
            if above.tile(i) == Tile::Green {
                assert_eq!(
                    below.tile(i),
                    Tile::Green,
                    "green over non-green in {stack:?}"
                );
            }
        }
    }
}

#[test]
fn non_grey_count_never_increases_upwards() {
    for stack in enumerate_stacks(3, StackMode::NoRepeats) {
        let below = Coloring::from_code(stack[0]).non_grey();
        let above = Coloring::from_code(stack[1]).non_grey();
        assert!(above <= below, "non-grey grows in {stack:?}");
    }
}

#[test]
fn no_repeats_mode_never_repeats_a_code() {
    let stacks = enumerate_stacks(4, StackMode::NoRepeats);
    assert_eq!(stacks.len(), 362_035);
    for stack in stacks.iter().take(5000) {
        for (i, code) in stack.iter().enumerate() {
            assert!(!stack[..i].contains(code), "repeat in {stack:?}");
        }
    }
}

#[test]
fn repeats_only_mode_always_repeats_a_code() {
    let stacks = enumerate_stacks(4, StackMode::RepeatsOnly);
    assert_eq!(stacks.len(), 26_974);
    for stack in stacks.iter().take(5000) {
        let repeated = stack
            .iter()
            .enumerate()
            .any(|(i, code)| stack[..i].contains(code));
        assert!(repeated, "no repeat in {stack:?}");
    }
}
