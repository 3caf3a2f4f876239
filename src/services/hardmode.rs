// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use crate::domain::{ColorCode, Coloring, Tile, WORD_LEN, Word};

/// Letters that have appeared on a grey tile in any of the given rows,
/// as a 26-bit mask. A letter greyed once can never be greyed again, even
/// if other cells show it yellow or green.
pub fn grey_letters(words: &[Word], codes: &[ColorCode]) -> u32 {
    let mut mask = 0u32;
    for (word, &code) in words.iter().zip(codes) {
        let col = Coloring::from_code(code);
        for i in 0..WORD_LEN {
            if col.tile(i) == Tile::Grey {
                mask |= 1 << (word.letter(i) - b'a');
            }
        }
    }
    mask
}

/// Whether `letter` was placed at `index` in any previous row.
fn aligned(letter: u8, index: usize, words: &[Word]) -> bool {
    words.iter().any(|w| w.letter(index) == letter)
}

/// Hard-mode legality of playing `word` with colouring `col` above the
/// partial stack `selected`/`codes` (bottom-first, same length).
///
/// The bottom row always passes. Above it:
///   1. a grey-tile letter must not reuse a previously greyed letter;
///   2. a grey or yellow tile must not sit directly above a position where
///      the same letter was placed before;
///   3. the row's non-grey letters must be a sub-multiset of the previous
///      row's non-grey letters.
pub fn obeys_hardmode(
    word: Word,
    col: Coloring,
    selected: &[Word],
    codes: &[ColorCode],
    greys: u32,
) -> bool {
    let Some(&prev_word) = selected.last() else {
        return true;
    };
    let prev_col = Coloring::from_code(codes[selected.len() - 1]);

    let mut non_greys = [0u8; 26];
    for i in 0..WORD_LEN {
        let letter = word.letter(i);
        match col.tile(i) {
            Tile::Grey => {
                if greys & (1 << (letter - b'a')) != 0 {
                    return false;
                }
                if aligned(letter, i, selected) {
                    return false;
                }
            }
            Tile::Yellow => {
                non_greys[(letter - b'a') as usize] += 1;
                if aligned(letter, i, selected) {
                    return false;
                }
            }
            Tile::Green => {
                non_greys[(letter - b'a') as usize] += 1;
            }
        }
    }

    // Rule 3: compare against the non-grey letters of the row below.
    let mut prev_non_greys = [0u8; 26];
    for i in 0..WORD_LEN {
        if prev_col.tile(i) != Tile::Grey {
            prev_non_greys[(prev_word.letter(i) - b'a') as usize] += 1;
        }
    }
    (0..26).all(|l| non_greys[l] <= prev_non_greys[l])
}
