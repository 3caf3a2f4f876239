// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

mod helpers;

use forcedle::domain::{ALL_GREEN, ForceHint, ForcedPuzzle, Puzzle, Word};
use helpers::make_puzzle;

// ─── Word parsing ─────────────────────────────────────────────────────────────

#[test]
fn word_parses_and_lowercases() {
    let word: Word = "CrAnE".parse().unwrap();
    assert_eq!(word.to_string(), "crane");
    assert_eq!(word.letter(0), b'c');
    assert!(word.contains(b'n'));
    assert!(!word.contains(b'z'));
}

#[test]
fn word_rejects_wrong_length() {
    assert!("care".parse::<Word>().is_err());
    assert!("cranes".parse::<Word>().is_err());
    assert!("".parse::<Word>().is_err());
}

#[test]
fn word_rejects_non_letters() {
    assert!("cr4ne".parse::<Word>().is_err());
    assert!("cran ".parse::<Word>().is_err());
}

#[test]
fn word_length_errors_report_bytes() {
    // "cranœ" is five characters but six bytes; the message must not
    // claim the word already has the expected length.
    let err = "cranœ".parse::<Word>().unwrap_err().to_string();
    assert!(err.contains("6 bytes"), "unexpected message: {err}");
}

// ─── Line format ──────────────────────────────────────────────────────────────

#[test]
fn to_line_is_bottom_first() {
    let puzzle = make_puzzle(&["aaaaa", "aaaab"], &[242, 240]);
    assert_eq!(puzzle.to_line(), "aaaaa,aaaab|242,240");
}

#[test]
fn parse_line_roundtrips() {
    let line = "aaaaa,aaaab|242,240";
    let puzzle = Puzzle::parse_line(line).unwrap();
    assert_eq!(puzzle.to_line(), line);
    assert_eq!(puzzle.solution().to_string(), "aaaaa");
    assert_eq!(puzzle.rows(), 2);
}

#[test]
fn parse_line_rejects_missing_separator() {
    assert!(Puzzle::parse_line("aaaaa,aaaab").is_err());
}

#[test]
fn parse_line_rejects_mismatched_counts() {
    assert!(Puzzle::parse_line("aaaaa,aaaab|242").is_err());
    assert!(Puzzle::parse_line("aaaaa|242,240").is_err());
}

#[test]
fn parse_line_rejects_single_row() {
    assert!(Puzzle::parse_line("aaaaa|242").is_err());
}

#[test]
fn parse_line_rejects_bad_bottom_code() {
    let err = Puzzle::parse_line("aaaaa,aaaab|240,242").unwrap_err();
    assert!(err.contains("not all green"), "unexpected error: {err}");
}

#[test]
fn parse_line_rejects_out_of_range_code() {
    assert!(Puzzle::parse_line("aaaaa,aaaab|242,243").is_err());
    assert!(Puzzle::parse_line("aaaaa,aaaab|242,999").is_err());
}

#[test]
fn parse_line_rescores_every_row() {
    // aaaab scores 240 against aaaaa, not 100.
    let err = Puzzle::parse_line("aaaaa,aaaab|242,100").unwrap_err();
    assert!(err.contains("does not score"), "unexpected error: {err}");
}

#[test]
fn parse_line_rejects_garbage_words() {
    assert!(Puzzle::parse_line("aaaaa,12345|242,240").is_err());
    assert!(Puzzle::parse_line("|242,240").is_err());
}

// ─── Grid statistics ──────────────────────────────────────────────────────────

#[test]
fn grid_statistics_sum_over_rows() {
    // 240 = GGGG., 122 = yyyyG
    let puzzle = make_puzzle(&["aaaaa", "aaaab"], &[242, 240]);
    assert_eq!(puzzle.non_grey_count(), 9);
    assert_eq!(puzzle.green_count(), 9);
    // Info skips the all-green bottom row.
    assert_eq!(puzzle.info_value(), 8);

    let puzzle = make_puzzle(&["crane", "nacre"], &[242, 122]);
    assert_eq!(puzzle.non_grey_count(), 10);
    assert_eq!(puzzle.green_count(), 6);
    assert_eq!(puzzle.info_value(), 6);
}

// ─── Share links ──────────────────────────────────────────────────────────────

#[test]
fn share_link_lists_codes_top_first() {
    let puzzle = make_puzzle(&["aaaaa", "bbbbb"], &[242, 0]);
    assert_eq!(
        puzzle.share_link(),
        "https://crosswordle.vercel.app/?puzzle=v1-0,242-aaaaa"
    );
}

#[test]
fn hidden_link_masks_every_row() {
    let puzzle = make_puzzle(&["aaaaa", "bbbbb"], &[242, 0]);
    assert_eq!(
        puzzle.hidden_link(),
        "https://crosswordle.vercel.app/?puzzle=v2-0,242-x,x"
    );
}

#[test]
fn placed_link_pins_a_bottom_letter() {
    let puzzle = make_puzzle(&["aaaaa", "bbbbb"], &[242, 0]);
    assert_eq!(
        puzzle.placed_link(b'a', 0),
        "https://crosswordle.vercel.app/?puzzle=v2-0,242-x,0a"
    );
    assert_eq!(
        puzzle.placed_link(b'a', 4),
        "https://crosswordle.vercel.app/?puzzle=v2-0,242-x,4a"
    );
}

#[test]
fn forced_puzzle_link_matches_hint() {
    let puzzle = make_puzzle(&["aaaaa", "bbbbb"], &[242, 0]);
    let placed = ForcedPuzzle {
        puzzle: puzzle.clone(),
        hint: ForceHint::Placed { letter: b'a', pos: 2 },
    };
    assert!(placed.link().ends_with("-x,2a"));

    let anywhere = ForcedPuzzle {
        puzzle: puzzle.clone(),
        hint: ForceHint::Anywhere { letter: b'a' },
    };
    assert!(anywhere.link().ends_with("-x,x"));

    let common = ForcedPuzzle {
        puzzle,
        hint: ForceHint::CommonBottom,
    };
    assert!(common.link().ends_with("-x,x"));
}

#[test]
fn hint_display_is_readable() {
    assert_eq!(
        ForceHint::Placed { letter: b'q', pos: 3 }.to_string(),
        "'q' at position 3"
    );
    assert_eq!(
        ForceHint::Anywhere { letter: b'z' }.to_string(),
        "'z' somewhere in the bottom row"
    );
    assert_eq!(ForceHint::CommonBottom.to_string(), "bottom row is a common word");
}

// ─── Property tests ───────────────────────────────────────────────────────────

proptest::proptest! {
    #[test]
    fn parse_line_never_panics(line in ".*") {
        let _ = Puzzle::parse_line(&line);
    }

    #[test]
    fn valid_two_row_lines_roundtrip(top in "[a-z]{5}", bottom in "[a-z]{5}") {
        let bottom_word: Word = bottom.parse().unwrap();
        let top_word: Word = top.parse().unwrap();
        let code = forcedle::domain::Coloring::score(top_word, bottom_word).code();
        let line = format!("{bottom},{top}|{ALL_GREEN},{code}");
        let puzzle = Puzzle::parse_line(&line).unwrap();
        proptest::prop_assert_eq!(puzzle.to_line(), line);
    }
}
