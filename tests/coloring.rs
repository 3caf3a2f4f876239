// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

mod helpers;

use forcedle::domain::{ALL_GREEN, CODE_COUNT, Coloring, Tile};
use helpers::w;

// ─── Code encoding ────────────────────────────────────────────────────────────

#[test]
fn all_green_code_decodes_to_green_row() {
    let col = Coloring::from_code(ALL_GREEN);
    assert_eq!(col.tiles(), [Tile::Green; 5]);
    assert_eq!(col.code(), ALL_GREEN);
}

#[test]
fn zero_code_decodes_to_grey_row() {
    let col = Coloring::from_code(0);
    assert_eq!(col.tiles(), [Tile::Grey; 5]);
}

#[test]
fn leftmost_cell_is_most_significant() {
    // 231 = 2*81 + 2*27 + 1*9 + 2*3 + 0
    let col = Coloring::from_code(231);
    assert_eq!(
        col.tiles(),
        [Tile::Green, Tile::Green, Tile::Yellow, Tile::Green, Tile::Grey]
    );

    // 134 = 1*81 + 1*27 + 2*9 + 2*3 + 2
    let col = Coloring::from_code(134);
    assert_eq!(
        col.tiles(),
        [Tile::Yellow, Tile::Yellow, Tile::Green, Tile::Green, Tile::Green]
    );
}

#[test]
fn code_roundtrips_for_every_value() {
    for code in 0..CODE_COUNT as u8 {
        assert_eq!(Coloring::from_code(code).code(), code);
    }
}

// ─── Scoring ──────────────────────────────────────────────────────────────────

#[test]
fn scoring_word_against_itself_is_all_green() {
    assert_eq!(Coloring::score(w("crane"), w("crane")).code(), ALL_GREEN);
}

#[test]
fn scoring_disjoint_words_is_all_grey() {
    assert_eq!(Coloring::score(w("bbbbb"), w("aaaaa")).code(), 0);
}

#[test]
fn anagram_scores_with_green_and_yellow() {
    // n-a-c-r vs c-r-a-n are all displaced, final e matches.
    assert_eq!(Coloring::score(w("nacre"), w("crane")).code(), 122);
}

#[test]
fn duplicate_letters_consume_the_pool() {
    // lulls vs alloy: the solution holds one l beyond the two greens would
    // claim; only the first unmatched l may go yellow.
    assert_eq!(Coloring::score(w("lulls"), w("alloy")).code(), 99);

    // geese vs those: one e matches in place, one more goes yellow, the
    // third stays grey.
    assert_eq!(Coloring::score(w("geese"), w("those")).code(), 8);
}

#[test]
fn greens_claim_letters_before_yellows() {
    // Four a's match in place; the trailing b finds no fifth a left over.
    assert_eq!(Coloring::score(w("aaaab"), w("aaaaa")).code(), 240);
    assert_eq!(Coloring::score(w("aaaba"), w("aaaaa")).code(), 236);
    assert_eq!(Coloring::score(w("aabaa"), w("aaaaa")).code(), 224);
}

#[test]
fn single_positional_match() {
    assert_eq!(Coloring::score(w("bbbba"), w("aaaaa")).code(), 2);
    assert_eq!(Coloring::score(w("aaaaa"), w("bbbba")).code(), 2);
    assert_eq!(Coloring::score(w("bbbbc"), w("bbbba")).code(), 240);
    assert_eq!(Coloring::score(w("bbbbc"), w("aaaaa")).code(), 0);
}

// ─── Row statistics ───────────────────────────────────────────────────────────

#[test]
fn non_grey_greens_and_info() {
    // 231 = GGyG.
    let col = Coloring::from_code(231);
    assert_eq!(col.non_grey(), 4);
    assert_eq!(col.greens(), 3);
    assert_eq!(col.info(), 7);

    assert_eq!(Coloring::from_code(0).info(), 0);
    assert_eq!(Coloring::from_code(ALL_GREEN).info(), 10);
}

// ─── Property tests ───────────────────────────────────────────────────────────

proptest::proptest! {
    #[test]
    fn every_code_roundtrips(code in 0u8..243) {
        proptest::prop_assert_eq!(Coloring::from_code(code).code(), code);
    }

    #[test]
    fn self_score_is_all_green(word in "[a-z]{5}") {
        let word = w(&word);
        proptest::prop_assert_eq!(Coloring::score(word, word).code(), ALL_GREEN);
    }

    #[test]
    fn score_yellows_never_exceed_solution_letters(guess in "[a-z]{5}", solution in "[a-z]{5}") {
        let guess = w(&guess);
        let solution = w(&solution);
        let col = Coloring::score(guess, solution);
        // Each letter's non-grey tiles in the guess are bounded by its
        // count in the solution.
        for letter in b'a'..=b'z' {
            let claimed = (0..5)
                .filter(|&i| guess.letter(i) == letter && col.tile(i) != Tile::Grey)
                .count();
            let available = (0..5).filter(|&i| solution.letter(i) == letter).count();
            proptest::prop_assert!(claimed <= available);
        }
    }
}
