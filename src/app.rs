// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::{AnalyzeCommands, BucketKeyArg, Cli, Commands, ForceKindArg, SwapsArg};
use crate::config::Config;
use crate::domain::{ForcedPuzzle, Lexicon, WORD_LEN, WordId};
use crate::error::{Error, Result};
use crate::services::{
    colorings::{StackMode, enumerate_stacks},
    finder, forces,
    solver::SwapPolicy,
    stats::{self, BucketKey, FilterSpec},
    store, wordlist,
};

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        debug!(
            answers = %config.answers.display(),
            guesses = %config.guesses.display(),
            rows = config.rows,
            threads = config.threads,
            "config loaded"
        );
        Ok(Self { cli, config })
    }

    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Find {
                rows,
                swaps,
                out,
                bottom,
                yes,
            } => self.run_find(*rows, *swaps, out.as_deref(), bottom.as_deref(), *yes),
            Commands::Analyze { command } => self.run_analyze(command),
            Commands::Init => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Commands::Config => {
                println!("Answers: {}", self.config.answers.display());
                println!("Guesses: {}", self.config.guesses.display());
                println!("Rows: {}", self.config.rows);
                println!("Threads: {}", self.config.threads);
                Ok(())
            }
            Commands::Completions { shell } => {
                let mut cmd = <Cli as clap::CommandFactory>::command();
                clap_complete::generate(*shell, &mut cmd, "forcedle", &mut std::io::stdout());
                Ok(())
            }
        }
    }

    // ─── Find ───

    fn run_find(
        &self,
        rows: Option<usize>,
        swaps: SwapsArg,
        out: Option<&Path>,
        bottom: Option<&str>,
        yes: bool,
    ) -> Result<()> {
        let rows = self.config.validated_rows(rows)?;
        let policy = swap_policy(swaps);
        let out = out
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_out(rows, policy));
        self.confirm_overwrite(&out, yes)?;

        self.print_status("Loading word lists...");
        let lex = wordlist::load_lexicon(&self.config.answers, &self.config.guesses)?;
        self.print_info(&format!("{} guess words loaded", lex.len()));

        let bottoms: Vec<WordId> = match bottom {
            Some(word) => {
                let word = word.parse()?;
                let id = lex.id_of(word).ok_or_else(|| Error::UnknownWord {
                    word: word.to_string(),
                })?;
                vec![id]
            }
            None => lex.ids().collect(),
        };

        self.print_status("Enumerating valid colourings...");
        let mode = match policy {
            SwapPolicy::Distinct => StackMode::NoRepeats,
            SwapPolicy::MergeSwaps => StackMode::RepeatsOnly,
        };
        let stacks = enumerate_stacks(rows, mode);
        self.print_info(&format!(
            "{} colouring stacks for {} rows",
            stacks.len(),
            rows
        ));

        self.print_status(&format!(
            "Searching {} bottom words for forced puzzles...",
            bottoms.len()
        ));
        let pb = progress_bar(bottoms.len() as u64, "words");
        let pool = thread_pool(self.config.threads)?;
        let puzzles =
            pool.install(|| finder::find_all(&lex, &bottoms, &stacks, policy, &pb));
        pb.finish_and_clear();

        store::save_puzzles(&out, &puzzles)?;

        eprintln!(
            "{} {} forced puzzles written to {}",
            style("✓").green().bold(),
            puzzles.len(),
            out.display()
        );
        Ok(())
    }

    // ─── Analyze ───

    fn run_analyze(&self, command: &AnalyzeCommands) -> Result<()> {
        match command {
            AnalyzeCommands::Forces {
                kind,
                input,
                out,
                swaps,
                yes,
            } => self.run_forces(*kind, input, out, *swaps, *yes),
            AnalyzeCommands::Buckets { by, input, list } => self.run_buckets(*by, input, *list),
            AnalyzeCommands::Filter {
                input,
                letter,
                pos,
                common_bottom,
                common_upper,
                links,
            } => self.run_filter(input, *letter, *pos, *common_bottom, *common_upper, *links),
            AnalyzeCommands::Links { input, limit } => self.run_links(input, *limit),
        }
    }

    fn run_forces(
        &self,
        kind: ForceKindArg,
        input: &Path,
        out: &Path,
        swaps: SwapsArg,
        yes: bool,
    ) -> Result<()> {
        self.confirm_overwrite(out, yes)?;

        self.print_status("Loading word lists and puzzles...");
        let lex = wordlist::load_lexicon(&self.config.answers, &self.config.guesses)?;
        let puzzles = store::load_puzzles(input)?;
        self.print_info(&format!("{} puzzles loaded", puzzles.len()));

        let policy = swap_policy(swaps);
        let pool = thread_pool(self.config.threads)?;
        let found = match kind {
            ForceKindArg::Placed => {
                self.print_status("Testing every letter/position hint...");
                let pb = progress_bar(26 * WORD_LEN as u64, "hints");
                let found =
                    pool.install(|| forces::find_placed_forces(&puzzles, &lex, policy, &pb));
                pb.finish_and_clear();
                found
            }
            ForceKindArg::Anywhere => {
                self.print_status("Testing every letter-anywhere hint...");
                let pb = progress_bar(26, "letters");
                let found =
                    pool.install(|| forces::find_anywhere_forces(&puzzles, &lex, policy, &pb));
                pb.finish_and_clear();
                found
            }
            ForceKindArg::Common => {
                self.print_status("Testing the common-bottom hint...");
                forces::find_common_forces(&puzzles, &lex, policy)
            }
        };

        store::save_forces(out, &found)?;

        eprintln!(
            "{} {} hint-forced puzzles written to {}",
            style("✓").green().bold(),
            found.len(),
            out.display()
        );
        Ok(())
    }

    fn run_buckets(&self, by: BucketKeyArg, input: &Path, list: bool) -> Result<()> {
        let puzzles = store::load_puzzles(input)?;
        let key = match by {
            BucketKeyArg::NonGrey => BucketKey::NonGrey,
            BucketKeyArg::Info => BucketKey::Info,
            BucketKeyArg::Greens => BucketKey::Greens,
        };

        let buckets = stats::bucket_puzzles(&puzzles, key);
        for (value, members) in &buckets {
            println!("{value}: {}", members.len());
            if list {
                for puzzle in members {
                    println!("  {}", puzzle.to_line());
                }
            }
        }
        Ok(())
    }

    fn run_filter(
        &self,
        input: &Path,
        letter: Option<char>,
        pos: Option<usize>,
        common_bottom: bool,
        common_upper: bool,
        links: bool,
    ) -> Result<()> {
        let letter = match letter {
            Some(c) => {
                let lower = c.to_ascii_lowercase();
                if !lower.is_ascii_lowercase() {
                    return Err(Error::Config(format!("--letter must be a letter, got '{c}'")));
                }
                Some(lower as u8)
            }
            None => None,
        };
        if let Some(p) = pos {
            if p >= WORD_LEN {
                return Err(Error::Config(format!(
                    "--pos must be 0–{}, got {p}",
                    WORD_LEN - 1
                )));
            }
        }

        let puzzles = store::load_puzzles(input)?;

        // Word lists are only needed for the commonness constraints.
        let lex: Option<Lexicon> = if common_bottom || common_upper {
            Some(wordlist::load_lexicon(
                &self.config.answers,
                &self.config.guesses,
            )?)
        } else {
            None
        };

        let spec = FilterSpec {
            letter,
            pos,
            common_bottom,
            common_upper,
        };
        let matched = stats::filter_puzzles(&puzzles, &spec, lex.as_ref());

        for puzzle in &matched {
            if links {
                println!("{}", puzzle.share_link());
            } else {
                println!("{}", puzzle.to_line());
            }
        }
        self.print_info(&format!("{} of {} puzzles matched", matched.len(), puzzles.len()));
        Ok(())
    }

    fn run_links(&self, input: &Path, limit: Option<usize>) -> Result<()> {
        let records = store::load_forces(input)?;
        let limit = limit.unwrap_or(records.len());

        for (puzzle, hint) in records.into_iter().take(limit) {
            match hint {
                // Force records hide what the hint leaves unknown.
                Some(hint) => {
                    let force = ForcedPuzzle { puzzle, hint };
                    println!("{}", force.link());
                    println!("  forced by {hint}");
                }
                // Plain puzzle lines get the full v1 link.
                None => println!("{}", puzzle.share_link()),
            }
        }
        Ok(())
    }

    // ─── Helpers ───

    fn confirm_overwrite(&self, path: &Path, yes: bool) -> Result<()> {
        if yes || !path.exists() {
            return Ok(());
        }

        let is_interactive = std::io::stdout().is_terminal() && std::io::stdin().is_terminal();
        if !is_interactive {
            return Err(Error::OutputExists {
                path: path.to_path_buf(),
            });
        }

        let confirm = Confirm::new()
            .with_prompt(format!("Overwrite {}?", path.display()))
            .default(false)
            .interact()?;
        if !confirm {
            return Err(Error::Cancelled);
        }
        Ok(())
    }

    fn print_status(&self, msg: &str) {
        eprintln!("{} {}", style("→").cyan(), msg);
    }

    fn print_info(&self, msg: &str) {
        eprintln!("{} {}", style("info:").cyan(), msg);
    }
}

fn swap_policy(arg: SwapsArg) -> SwapPolicy {
    match arg {
        SwapsArg::Distinct => SwapPolicy::Distinct,
        SwapsArg::Merge => SwapPolicy::MergeSwaps,
    }
}

/// Legacy file names for the original height-3 runs; taller searches get
/// a name carrying the row count.
fn default_out(rows: usize, policy: SwapPolicy) -> PathBuf {
    match (rows, policy) {
        (3, SwapPolicy::Distinct) => "unique_triples.txt".into(),
        (3, SwapPolicy::MergeSwaps) => "swappy_triples.txt".into(),
        (n, SwapPolicy::Distinct) => format!("unique_rows{n}.txt").into(),
        (n, SwapPolicy::MergeSwaps) => format!("swappy_rows{n}.txt").into(),
    }
}

fn progress_bar(len: u64, noun: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(&format!(
            "{{spinner:.green}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {noun} ({{eta}})"
        ))
        .unwrap()
        .progress_chars("#>-"),
    );
    pb
}

fn thread_pool(threads: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Error::Config(format!("cannot build thread pool: {e}")))
}
