// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::domain::coloring::{ALL_GREEN, ColorCode, Coloring};
use crate::domain::word::Word;

const SHARE_BASE: &str = "https://crosswordle.vercel.app/?puzzle";

/// A forced crosswordle puzzle: one word and one colouring per row,
/// stored bottom-first. `words[0]` is the solution every row is scored
/// against, and `codes[0]` is always all green.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub words: Vec<Word>,
    pub codes: Vec<ColorCode>,
}

impl Puzzle {
    pub fn solution(&self) -> Word {
        self.words[0]
    }

    pub fn rows(&self) -> usize {
        self.words.len()
    }

    /// Yellow and green cells across the whole grid.
    pub fn non_grey_count(&self) -> u32 {
        self.codes
            .iter()
            .map(|&c| Coloring::from_code(c).non_grey() as u32)
            .sum()
    }

    /// Information value of the hint rows (everything above the bottom),
    /// counting a green as two yellows.
    pub fn info_value(&self) -> u32 {
        self.codes
            .iter()
            .skip(1)
            .map(|&c| Coloring::from_code(c).info())
            .sum()
    }

    pub fn green_count(&self) -> u32 {
        self.codes
            .iter()
            .map(|&c| Coloring::from_code(c).greens() as u32)
            .sum()
    }

    /// The stable one-line file format: words bottom-first, then the
    /// matching codes, e.g. `crane,carne,caner|242,121,40`.
    pub fn to_line(&self) -> String {
        let words = self
            .words
            .iter()
            .map(Word::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let codes = self
            .codes
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{words}|{codes}")
    }

    /// Parse one line of the file format, validating shape and re-scoring
    /// every row against the bottom word so corrupt lines are rejected.
    pub fn parse_line(line: &str) -> Result<Self, String> {
        let mut fields = line.trim().split('|');
        let word_field = fields.next().unwrap_or("");
        let code_field = fields
            .next()
            .ok_or_else(|| "missing '|' separator".to_string())?;
        if fields.next().is_some() {
            return Err("too many '|' fields for a plain puzzle".into());
        }

        let words = word_field
            .split(',')
            .map(|t| t.parse::<Word>().map_err(|e| e.to_string()))
            .collect::<Result<Vec<Word>, String>>()?;
        let codes = code_field
            .split(',')
            .map(|t| {
                let n: u16 = t
                    .trim()
                    .parse()
                    .map_err(|_| format!("bad colour code '{t}'"))?;
                if n as usize >= crate::domain::coloring::CODE_COUNT {
                    return Err(format!("colour code {n} out of range"));
                }
                Ok(n as ColorCode)
            })
            .collect::<Result<Vec<ColorCode>, String>>()?;

        if words.len() < 2 {
            return Err(format!("{} rows, expected at least 2", words.len()));
        }
        if words.len() != codes.len() {
            return Err(format!(
                "{} words but {} codes",
                words.len(),
                codes.len()
            ));
        }
        if codes[0] != ALL_GREEN {
            return Err(format!("bottom row code {} is not all green", codes[0]));
        }
        let solution = words[0];
        for (i, (&word, &code)) in words.iter().zip(&codes).enumerate() {
            if Coloring::score(word, solution).code() != code {
                return Err(format!(
                    "row {i}: '{word}' does not score {code} against '{solution}'"
                ));
            }
        }

        Ok(Self { words, codes })
    }

    fn codes_top_first(&self) -> String {
        self.codes
            .iter()
            .rev()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Share link for the full puzzle (solution visible).
    pub fn share_link(&self) -> String {
        format!("{SHARE_BASE}=v1-{}-{}", self.codes_top_first(), self.solution())
    }

    /// Share link with the bottom row hidden (every row hint is `x`).
    pub fn hidden_link(&self) -> String {
        let hints = vec!["x"; self.rows()].join(",");
        format!("{SHARE_BASE}=v2-{}-{}", self.codes_top_first(), hints)
    }

    /// Share link with a single pinned letter in the bottom row.
    pub fn placed_link(&self, letter: u8, pos: usize) -> String {
        let mut hints = vec!["x".to_string(); self.rows()];
        if let Some(last) = hints.last_mut() {
            *last = format!("{pos}{}", letter as char);
        }
        format!(
            "{SHARE_BASE}=v2-{}-{}",
            self.codes_top_first(),
            hints.join(",")
        )
    }
}

/// The weaker hint that still forces a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceHint {
    /// A known letter at a known bottom-row position.
    Placed { letter: u8, pos: usize },
    /// A letter known to appear somewhere in the bottom row.
    Anywhere { letter: u8 },
    /// The bottom row is known to be a common (answer-list) word.
    CommonBottom,
}

impl fmt::Display for ForceHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placed { letter, pos } => {
                write!(f, "'{}' at position {pos}", *letter as char)
            }
            Self::Anywhere { letter } => {
                write!(f, "'{}' somewhere in the bottom row", *letter as char)
            }
            Self::CommonBottom => write!(f, "bottom row is a common word"),
        }
    }
}

/// A puzzle together with the hint that forces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcedPuzzle {
    pub puzzle: Puzzle,
    pub hint: ForceHint,
}

impl ForcedPuzzle {
    pub fn link(&self) -> String {
        match self.hint {
            ForceHint::Placed { letter, pos } => self.puzzle.placed_link(letter, pos),
            _ => self.puzzle.hidden_link(),
        }
    }
}
