// Colored terminal output for grouping results and ad-hoc comparisons.
//
// Same layout as the text report, with emphasis added. The report module
// stays plain so the downloaded file never contains escape codes.

use colored::Colorize;

use super::{keyword_line, GROUP_HEADER};
use crate::grouping::engine::Cluster;

/// Display grouped phrases, followed by a one-line summary.
pub fn display_groups(clusters: &[Cluster]) {
    if clusters.is_empty() {
        println!("No phrases to group. Is the input file empty?");
        return;
    }

    println!(
        "\n{}",
        format!("=== Grouping Results ({} groups) ===", clusters.len()).bold()
    );
    println!();

    for cluster in clusters {
        println!(
            "{} {}",
            GROUP_HEADER.bold(),
            keyword_line(&cluster.keywords).cyan()
        );
        for phrase in &cluster.phrases {
            println!("  - {phrase}");
        }
        println!();
    }

    let phrases: usize = clusters.iter().map(Cluster::len).sum();
    let singletons = clusters.iter().filter(|c| c.len() == 1).count();
    println!(
        "  {} phrases in {} groups, {} {}",
        phrases,
        clusters.len(),
        singletons,
        "singletons".dimmed()
    );
}

/// Display the outcome of comparing two phrases.
pub fn display_comparison(
    phrase_a: &str,
    phrase_b: &str,
    similar_pairs: usize,
    min_similar_words: usize,
    similar: bool,
) {
    println!("  A: {phrase_a}");
    println!("  B: {phrase_b}");
    println!(
        "  Similar word pairs: {} (need {})",
        similar_pairs, min_similar_words
    );
    let verdict = if similar {
        "similar".green().bold()
    } else {
        "not similar".yellow()
    };
    println!("  Verdict: {verdict}");
}

/// Display a single word similarity score.
pub fn display_score(word_a: &str, word_b: &str, score: f64, threshold: f64) {
    let colored_score = if score > threshold {
        format!("{score:.3}").green()
    } else {
        format!("{score:.3}").dimmed()
    };
    println!(
        "  {word_a} ~ {word_b}: {colored_score} {}",
        format!("(counts above {threshold:.2})").dimmed()
    );
}
