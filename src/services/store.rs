// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{ForceHint, ForcedPuzzle, Puzzle, WORD_LEN};
use crate::error::{Error, Result};

/// Write puzzles one per line in the stable `words|codes` format.
pub fn save_puzzles(path: &Path, puzzles: &[Puzzle]) -> Result<()> {
    let mut out = String::new();
    for puzzle in puzzles {
        out.push_str(&puzzle.to_line());
        out.push('\n');
    }
    fs::write(path, out)?;
    debug!(count = puzzles.len(), path = %path.display(), "puzzles written");
    Ok(())
}

pub fn load_puzzles(path: &Path) -> Result<Vec<Puzzle>> {
    let content = fs::read_to_string(path)?;
    let mut puzzles = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let puzzle = Puzzle::parse_line(line).map_err(|message| Error::PuzzleParse {
            path: path.to_path_buf(),
            line: i + 1,
            message,
        })?;
        puzzles.push(puzzle);
    }
    debug!(count = puzzles.len(), path = %path.display(), "puzzles loaded");
    Ok(puzzles)
}

/// Write forced puzzles; the hint rides as a third `|`-field
/// (`letter` or `letter,pos`). Common-bottom forces carry an empty hint
/// field so they stay distinguishable from plain puzzle lines.
pub fn save_forces(path: &Path, forces: &[ForcedPuzzle]) -> Result<()> {
    let mut out = String::new();
    for force in forces {
        out.push_str(&force.puzzle.to_line());
        match force.hint {
            ForceHint::Placed { letter, pos } => {
                out.push_str(&format!("|{},{pos}", letter as char));
            }
            ForceHint::Anywhere { letter } => {
                out.push_str(&format!("|{}", letter as char));
            }
            ForceHint::CommonBottom => out.push('|'),
        }
        out.push('\n');
    }
    fs::write(path, out)?;
    debug!(count = forces.len(), path = %path.display(), "forces written");
    Ok(())
}

/// Load a linkable file. Force records come back with their hint; plain
/// `words|codes` lines come back with none.
pub fn load_forces(path: &Path) -> Result<Vec<(Puzzle, Option<ForceHint>)>> {
    let content = fs::read_to_string(path)?;
    let mut records = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parse_err = |message: String| Error::PuzzleParse {
            path: path.to_path_buf(),
            line: i + 1,
            message,
        };

        let (record, hint) = split_hint(line).map_err(&parse_err)?;
        let puzzle = Puzzle::parse_line(record).map_err(&parse_err)?;
        records.push((puzzle, hint));
    }
    debug!(count = records.len(), path = %path.display(), "records loaded");
    Ok(records)
}

/// Split a record into its puzzle part and hint. Two fields is a plain
/// puzzle line; an empty third field marks a common-bottom force.
fn split_hint(line: &str) -> std::result::Result<(&str, Option<ForceHint>), String> {
    let fields: Vec<&str> = line.trim().split('|').collect();
    match fields.len() {
        2 => Ok((line, None)),
        3 => {
            let record_len = fields[0].len() + 1 + fields[1].len();
            let record = &line.trim()[..record_len];
            let hint = if fields[2].trim().is_empty() {
                ForceHint::CommonBottom
            } else {
                parse_hint(fields[2])?
            };
            Ok((record, Some(hint)))
        }
        n => Err(format!("{n} '|' fields, expected 2 or 3")),
    }
}

fn parse_hint(field: &str) -> std::result::Result<ForceHint, String> {
    let mut parts = field.split(',');
    let letter_part = parts.next().unwrap_or("").trim();
    let letter = match letter_part.as_bytes() {
        [b] if b.is_ascii_lowercase() => *b,
        _ => return Err(format!("bad hint letter '{letter_part}'")),
    };
    match parts.next() {
        None => Ok(ForceHint::Anywhere { letter }),
        Some(pos_part) => {
            let pos: usize = pos_part
                .trim()
                .parse()
                .map_err(|_| format!("bad hint position '{pos_part}'"))?;
            if pos >= WORD_LEN {
                return Err(format!("hint position {pos} out of range"));
            }
            if parts.next().is_some() {
                return Err("too many hint fields".into());
            }
            Ok(ForceHint::Placed { letter, pos })
        }
    }
}
