// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "forcedle")]
#[command(version)]
#[command(about = "Find and analyze forced crosswordle puzzles", long_about = None)]
pub struct Cli {
    /// Path to the common answers list
    #[arg(long, env = "FORCEDLE_ANSWERS")]
    pub answers: Option<PathBuf>,

    /// Path to the full guess list
    #[arg(long, env = "FORCEDLE_GUESSES")]
    pub guesses: Option<PathBuf>,

    /// Worker threads (0 = one per core)
    #[arg(long, env = "FORCEDLE_THREADS")]
    pub threads: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the guess list for forced puzzles
    Find {
        /// Puzzle height in rows, including the solution row
        #[arg(short, long)]
        rows: Option<usize>,

        /// How solutions differing only by a row swap are counted
        #[arg(long, value_enum, default_value_t = SwapsArg::Distinct)]
        swaps: SwapsArg,

        /// Output file (default unique_triples.txt, swappy_triples.txt for --swaps merge)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Restrict the search to one bottom word
        #[arg(long)]
        bottom: Option<String>,

        /// Overwrite an existing output file without prompting
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Analyze a puzzle file produced by `find`
    Analyze {
        #[command(subcommand)]
        command: AnalyzeCommands,
    },

    /// Initialize config file
    Init,

    /// Show current configuration
    Config,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum AnalyzeCommands {
    /// Find puzzles forced by a weaker hint than the full bottom word
    Forces {
        /// Hint flavour to test
        #[arg(long, value_enum)]
        kind: ForceKindArg,

        /// Puzzle file to read
        #[arg(short, long)]
        input: PathBuf,

        /// File to write the forced puzzles to
        #[arg(short, long)]
        out: PathBuf,

        /// Solution-identity policy used when re-verifying candidates
        #[arg(long, value_enum, default_value_t = SwapsArg::Distinct)]
        swaps: SwapsArg,

        /// Overwrite an existing output file without prompting
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Bucket puzzles by a statistic and report bucket sizes
    Buckets {
        #[arg(long, value_enum)]
        by: BucketKeyArg,

        #[arg(short, long)]
        input: PathBuf,

        /// List every puzzle in each bucket
        #[arg(long)]
        list: bool,
    },

    /// Filter puzzles by bottom-row constraints
    Filter {
        #[arg(short, long)]
        input: PathBuf,

        /// Bottom row must contain this letter
        #[arg(long)]
        letter: Option<char>,

        /// Position (0 = leftmost) the letter must occupy
        #[arg(long, requires = "letter")]
        pos: Option<usize>,

        /// Bottom row must be a common (answer-list) word
        #[arg(long)]
        common_bottom: bool,

        /// Every row above the bottom must be a common word
        #[arg(long)]
        common_upper: bool,

        /// Print share links instead of file lines
        #[arg(long)]
        links: bool,
    },

    /// Print share links for puzzles in a file
    Links {
        #[arg(short, long)]
        input: PathBuf,

        /// Print at most this many links
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapsArg {
    /// Every row assignment is its own solution
    Distinct,
    /// Solutions equal up to swapping identically-coloured rows count once
    Merge,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForceKindArg {
    /// A known letter at a known bottom-row position
    Placed,
    /// A letter known to appear somewhere in the bottom row
    Anywhere,
    /// The bottom row is known to be a common word
    Common,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKeyArg {
    /// Yellow and green cells across the grid
    NonGrey,
    /// Hint-row information, green = two yellows
    Info,
    /// Green cells across the grid
    Greens,
}
