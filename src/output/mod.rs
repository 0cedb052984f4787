// Output formatting: terminal display and the downloadable text report.

pub mod report;
pub mod terminal;

/// Header prefix for every group, in both the terminal and the report.
pub const GROUP_HEADER: &str = "Similarity group based on:";

/// Keywords sorted and comma-joined, as shown in a group header.
pub fn keyword_line(keywords: &std::collections::BTreeSet<String>) -> String {
    keywords
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
