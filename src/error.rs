// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Invalid word: {0}")]
    #[diagnostic(code(forcedle::word::invalid))]
    InvalidWord(String),

    #[error("Word list {path}: {message}")]
    #[diagnostic(
        code(forcedle::lexicon::invalid),
        help("Word lists hold five-letter words separated by commas or newlines")
    )]
    WordList { path: PathBuf, message: String },

    #[error("Word list {0} contains no words")]
    #[diagnostic(
        code(forcedle::lexicon::empty),
        help("Check the answers/guesses paths in your config or flags")
    )]
    EmptyWordList(PathBuf),

    #[error("'{word}' is not in the guess list")]
    #[diagnostic(
        code(forcedle::lexicon::unknown_word),
        help("--bottom must name a word from the guesses file")
    )]
    UnknownWord { word: String },

    #[error("{path} line {line}: {message}")]
    #[diagnostic(
        code(forcedle::puzzle::parse),
        help("Puzzle files hold one `words|codes` record per line")
    )]
    PuzzleParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Output file {path} already exists")]
    #[diagnostic(
        code(forcedle::output::exists),
        help("Pass --yes to overwrite, or choose another --out path")
    )]
    OutputExists { path: PathBuf },

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("Configuration error: {0}")]
    #[diagnostic(code(forcedle::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
