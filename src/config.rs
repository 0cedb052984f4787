use std::env;
use std::error::Error as StdError;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Default word similarity threshold (a word pair must score above this).
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.8;
/// Default number of qualifying word pairs needed to join a group.
pub const DEFAULT_MIN_SIMILAR_WORDS: usize = 2;
/// Largest word count the CLI and env settings accept.
pub const MAX_MIN_SIMILAR_WORDS: usize = 5;
/// Where the text report lands when nothing else is configured.
pub const DEFAULT_REPORT_PATH: &str = "output/grouped-phrases.txt";

/// The two tunable parameters of the grouping engine.
///
/// Only constructible through [`GroupingConfig::new`] (or `Default`), so an
/// engine never runs with a threshold outside [0, 1] or a zero word count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupingConfig {
    similarity_threshold: f64,
    min_similar_words: usize,
}

impl GroupingConfig {
    /// Validate and build a grouping configuration.
    pub fn new(similarity_threshold: f64, min_similar_words: usize) -> Result<Self> {
        if !(0.0..=1.0).contains(&similarity_threshold) {
            anyhow::bail!(
                "Similarity threshold must be between 0.0 and 1.0, got {similarity_threshold}"
            );
        }
        if min_similar_words == 0 {
            anyhow::bail!("Minimum number of similar words must be at least 1");
        }
        Ok(Self {
            similarity_threshold,
            min_similar_words,
        })
    }

    /// A word pair counts only when its score is strictly above this.
    pub fn similarity_threshold(&self) -> f64 {
        self.similarity_threshold
    }

    pub fn min_similar_words(&self) -> usize {
        self.min_similar_words
    }
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            min_similar_words: DEFAULT_MIN_SIMILAR_WORDS,
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. CLI flags take precedence
/// over anything set here (see [`Config::grouping`]).
#[derive(Debug, Clone)]
pub struct Config {
    /// GROUPER_SIMILARITY_THRESHOLD
    pub similarity_threshold: f64,
    /// GROUPER_MIN_SIMILAR_WORDS
    pub min_similar_words: usize,
    /// GROUPER_REPORT_PATH
    pub report_path: PathBuf,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let similarity_threshold = parse_var(
            &lookup,
            "GROUPER_SIMILARITY_THRESHOLD",
            DEFAULT_SIMILARITY_THRESHOLD,
        )?;
        let min_similar_words =
            parse_var(&lookup, "GROUPER_MIN_SIMILAR_WORDS", DEFAULT_MIN_SIMILAR_WORDS)?;
        let report_path = lookup("GROUPER_REPORT_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH));

        Ok(Self {
            similarity_threshold,
            min_similar_words,
            report_path,
        })
    }

    /// Merge CLI overrides on top of the loaded values and validate the result.
    ///
    /// The word count is held to 1..=MAX_MIN_SIMILAR_WORDS here, the same
    /// range the CLI flag allows.
    pub fn grouping(
        &self,
        threshold: Option<f64>,
        min_similar_words: Option<usize>,
    ) -> Result<GroupingConfig> {
        let min_similar_words = min_similar_words.unwrap_or(self.min_similar_words);
        if min_similar_words > MAX_MIN_SIMILAR_WORDS {
            anyhow::bail!(
                "GROUPER_MIN_SIMILAR_WORDS must be between 1 and {MAX_MIN_SIMILAR_WORDS}, \
                 got {min_similar_words}"
            );
        }
        GroupingConfig::new(
            threshold.unwrap_or(self.similarity_threshold),
            min_similar_words,
        )
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        _ => Ok(default),
    }
}
