// SPDX-FileCopyrightText: 2026 forcedle contributors
//
// SPDX-License-Identifier: MIT

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Puzzle heights the search accepts, including the solution row.
pub const MIN_ROWS: usize = 2;
pub const MAX_ROWS: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Common answers list (the official checker's solution words)
    #[serde(default = "default_answers")]
    pub answers: PathBuf,

    /// Full guess list (every word a row may hold)
    #[serde(default = "default_guesses")]
    pub guesses: PathBuf,

    /// Default puzzle height for `find`
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Worker threads for the search (0 = one per core)
    #[serde(default)]
    pub threads: usize,
}

fn default_answers() -> PathBuf {
    "wordles.txt".into()
}
fn default_guesses() -> PathBuf {
    "extendedwordles.txt".into()
}
fn default_rows() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            answers: default_answers(),
            guesses: default_guesses(),
            rows: default_rows(),
            threads: 0,
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.forcedle.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".forcedle.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (FORCEDLE_ANSWERS, FORCEDLE_THREADS, ...)
        figment = figment.merge(Env::prefixed("FORCEDLE_"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        // CLI overrides (highest priority)
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "forcedle").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref p) = cli.answers {
            self.answers = p.clone();
        }
        if let Some(ref p) = cli.guesses {
            self.guesses = p.clone();
        }
        if let Some(t) = cli.threads {
            self.threads = t;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&self.rows) {
            return Err(Error::Config(format!(
                "rows must be {MIN_ROWS}–{MAX_ROWS}, got {}",
                self.rows
            )));
        }

        if self.threads > 512 {
            return Err(Error::Config(format!(
                "threads must be 0–512, got {}",
                self.threads
            )));
        }

        if self.answers.as_os_str().is_empty() {
            return Err(Error::Config("answers path cannot be empty".into()));
        }

        if self.guesses.as_os_str().is_empty() {
            return Err(Error::Config("guesses path cannot be empty".into()));
        }

        Ok(())
    }

    /// Validate a row count requested on the command line.
    pub fn validated_rows(&self, rows: Option<usize>) -> Result<usize> {
        let rows = rows.unwrap_or(self.rows);
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) {
            return Err(Error::Config(format!(
                "rows must be {MIN_ROWS}–{MAX_ROWS}, got {rows}"
            )));
        }
        Ok(rows)
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# forcedle configuration

# Common answers list (the official checker's solution words),
# one file of five-letter words separated by commas or newlines.
answers = "wordles.txt"

# Full guess list; every word a crosswordle row may hold.
# Must be a superset of the answers list.
guesses = "extendedwordles.txt"

# Default puzzle height for `forcedle find`, including the solution row.
# Height 3 is quick; height 4 is a long run even in parallel.
rows = 3

# Worker threads for the search. 0 means one per core.
threads = 0
"#;

        fs::write(&path, content)?;

        // Set secure permissions (0600)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&path, perms)?;
        }

        Ok(path)
    }
}
