use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use phrase_grouper::config::{Config, MAX_MIN_SIMILAR_WORDS};
use phrase_grouper::grouping::engine::GroupingEngine;
use phrase_grouper::output::{report, terminal};
use phrase_grouper::similarity::ratio;

/// Phrase grouper: cluster near-duplicate phrases by fuzzy word matching.
///
/// Reads one phrase per line, drops blanks and exact duplicates, and groups
/// phrases that share enough similar words.
#[derive(Parser)]
#[command(name = "phrase-grouper", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group the phrases in a text file (one per line, `-` for stdin)
    Group {
        /// Input text file
        file: PathBuf,

        /// Word similarity threshold, 0.0 to 1.0 (default: 0.8)
        #[arg(long, value_parser = parse_threshold)]
        threshold: Option<f64>,

        /// Similar words needed to join a group, 1 to 5 (default: 2)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_MIN_SIMILAR_WORDS as i64))]
        min_words: Option<u32>,

        /// Where to write the text report (default: output/grouped-phrases.txt)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Skip writing the text report
        #[arg(long)]
        no_report: bool,

        /// Print the groups as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Compare two phrases and report whether they would group together
    Compare {
        phrase_a: String,
        phrase_b: String,

        /// Word similarity threshold, 0.0 to 1.0 (default: 0.8)
        #[arg(long, value_parser = parse_threshold)]
        threshold: Option<f64>,

        /// Similar words needed, 1 to 5 (default: 2)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_MIN_SIMILAR_WORDS as i64))]
        min_words: Option<u32>,
    },

    /// Show the similarity score of two words
    Score {
        word_a: String,
        word_b: String,

        /// Threshold to highlight the score against (default: 0.8)
        #[arg(long, value_parser = parse_threshold)]
        threshold: Option<f64>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("phrase_grouper=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Group {
            file,
            threshold,
            min_words,
            output,
            no_report,
            json,
        } => {
            let grouping_config = config.grouping(threshold, min_words.map(|n| n as usize))?;
            let phrases = phrase_grouper::input::load_phrases(&file)?;

            info!(
                phrases = phrases.len(),
                threshold = grouping_config.similarity_threshold(),
                min_similar_words = grouping_config.min_similar_words(),
                "Grouping phrases"
            );

            let engine = GroupingEngine::new(grouping_config);
            let mut grouping = engine.start();

            let pb = ProgressBar::new(phrases.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar().template("  Grouping [{bar:30}] {pos}/{len} ({eta})")?,
            );
            for phrase in &phrases {
                grouping.assign(phrase);
                pb.inc(1);
            }
            pb.finish_and_clear();

            let clusters = grouping.finish();

            if json {
                println!("{}", serde_json::to_string_pretty(&clusters)?);
            } else {
                terminal::display_groups(&clusters);
            }

            if !no_report {
                let report_path = output.unwrap_or_else(|| config.report_path.clone());
                let written = report::write_report(&clusters, &report_path)?;
                if !json {
                    println!("\n{}", format!("Text report saved to: {written}").bold());
                }
            }
        }

        Commands::Compare {
            phrase_a,
            phrase_b,
            threshold,
            min_words,
        } => {
            let grouping_config = config.grouping(threshold, min_words.map(|n| n as usize))?;
            let engine = GroupingEngine::new(grouping_config);

            let similar_pairs = engine.count_similar_pairs(&phrase_a, &phrase_b);
            let similar = engine.are_similar(&phrase_a, &phrase_b);

            terminal::display_comparison(
                &phrase_a,
                &phrase_b,
                similar_pairs,
                grouping_config.min_similar_words(),
                similar,
            );
        }

        Commands::Score {
            word_a,
            word_b,
            threshold,
        } => {
            // Only used for highlighting, so the word count setting is not checked
            let threshold = threshold.unwrap_or(config.similarity_threshold);
            let score = ratio::score(&word_a, &word_b);
            terminal::display_score(&word_a, &word_b, score, threshold);
        }
    }

    Ok(())
}

/// Parse a threshold flag and reject values outside [0, 1].
fn parse_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be between 0.0 and 1.0, got {value}"))
    }
}
