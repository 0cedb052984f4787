// Plain-text report of grouped phrases.
//
// Layout per group:
//
//   Similarity group based on: apple, pear, red
//     - red apple
//     - red pear
//   <blank line>
//
// This is the file users download and edit, so it carries no color codes.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::{keyword_line, GROUP_HEADER};
use crate::grouping::engine::Cluster;

/// Render all clusters in report layout.
pub fn format_report(clusters: &[Cluster]) -> String {
    let mut report = String::new();
    for cluster in clusters {
        // Writing to a String cannot fail
        let _ = writeln!(report, "{GROUP_HEADER} {}", keyword_line(&cluster.keywords));
        for phrase in &cluster.phrases {
            let _ = writeln!(report, "  - {phrase}");
        }
        report.push('\n');
    }
    report
}

/// Write the report to `output_path`, creating parent directories as needed.
///
/// Returns the path that was written, for display.
pub fn write_report(clusters: &[Cluster], output_path: &Path) -> Result<String> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    fs::write(output_path, format_report(clusters))
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    info!(path = %output_path.display(), groups = clusters.len(), "Report written");
    Ok(output_path.display().to_string())
}
