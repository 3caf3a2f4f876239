// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::domain::word::{WORD_LEN, Word};

/// The Wordle colour of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tile {
    Grey,
    Yellow,
    Green,
}

impl Tile {
    /// Ternary digit used by the on-disk/share-link encoding.
    pub fn value(self) -> u8 {
        match self {
            Self::Grey => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    fn from_value(v: u8) -> Self {
        match v {
            0 => Self::Grey,
            1 => Self::Yellow,
            _ => Self::Green,
        }
    }
}

/// A row colouring encoded as a ternary number, leftmost cell most
/// significant. Codes run 0..=242; 242 is all green.
pub type ColorCode = u8;

/// All-green row: the solution played in place.
pub const ALL_GREEN: ColorCode = 242;

/// Number of distinct colourings of one row (3^5).
pub const CODE_COUNT: usize = 243;

/// One row of a crosswordle grid: five tiles.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coloring([Tile; WORD_LEN]);

impl Coloring {
    pub fn new(tiles: [Tile; WORD_LEN]) -> Self {
        Self(tiles)
    }

    /// Decode a ternary code into tiles. Leftmost cell is the most
    /// significant digit, matching the share-link encoding.
    pub fn from_code(code: ColorCode) -> Self {
        let mut tiles = [Tile::Grey; WORD_LEN];
        let mut rest = code;
        for slot in tiles.iter_mut().rev() {
            *slot = Tile::from_value(rest % 3);
            rest /= 3;
        }
        Self(tiles)
    }

    pub fn code(&self) -> ColorCode {
        self.0.iter().fold(0, |acc, t| acc * 3 + t.value())
    }

    pub fn tiles(&self) -> [Tile; WORD_LEN] {
        self.0
    }

    pub fn tile(&self, index: usize) -> Tile {
        self.0[index]
    }

    /// Score `guess` against `solution` with standard Wordle duplicate
    /// handling: greens first, then leftover solution letters form a pool
    /// that yellows consume left to right.
    pub fn score(guess: Word, solution: Word) -> Self {
        let mut tiles = [Tile::Grey; WORD_LEN];
        let mut pool = [0u8; 26];

        for i in 0..WORD_LEN {
            if guess.letter(i) == solution.letter(i) {
                tiles[i] = Tile::Green;
            } else {
                pool[(solution.letter(i) - b'a') as usize] += 1;
            }
        }

        for i in 0..WORD_LEN {
            if tiles[i] == Tile::Green {
                continue;
            }
            let slot = &mut pool[(guess.letter(i) - b'a') as usize];
            if *slot > 0 {
                *slot -= 1;
                tiles[i] = Tile::Yellow;
            }
        }

        Self(tiles)
    }

    /// Cells that are yellow or green.
    pub fn non_grey(&self) -> usize {
        self.0.iter().filter(|t| **t != Tile::Grey).count()
    }

    pub fn greens(&self) -> usize {
        self.0.iter().filter(|t| **t == Tile::Green).count()
    }

    /// Information content of the row, counting a green as two yellows.
    pub fn info(&self) -> u32 {
        self.0.iter().map(|t| u32::from(t.value())).sum()
    }
}

impl fmt::Debug for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.0 {
            let c = match t {
                Tile::Grey => '.',
                Tile::Yellow => 'y',
                Tile::Green => 'G',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
