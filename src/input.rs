// Input loading: turn an uploaded text file into the phrase list.
//
// One phrase per line. Lines are trimmed, blank lines dropped, and exact
// duplicates removed while keeping the first occurrence in place. The
// grouping engine expects its input in exactly this shape.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::similarity::pairs::is_separator;

/// Characters that end a line. `\r\n` counts as one break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines on every line break, without a trailing empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + c.len_utf8();
        if c == '\r' {
            if let Some(&(next, '\n')) = chars.peek() {
                chars.next();
                start = next + 1;
            }
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Trim lines, drop blanks and exact duplicates, preserve first-seen order.
pub fn clean_lines(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    split_lines(text)
        .into_iter()
        .map(|line| line.trim_matches(is_separator))
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}

/// Read UTF-8 text from any reader and clean it into phrases.
pub fn read_phrases<R: Read>(mut reader: R) -> Result<Vec<String>> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("Input is not valid UTF-8 text")?;

    let phrases = clean_lines(&text);
    info!(
        lines = split_lines(&text).len(),
        phrases = phrases.len(),
        "Loaded phrases"
    );
    Ok(phrases)
}

/// Load phrases from a file, or from stdin when the path is `-`.
pub fn load_phrases(path: &Path) -> Result<Vec<String>> {
    if path == Path::new("-") {
        return read_phrases(io::stdin().lock());
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_phrases(file).with_context(|| format!("Failed to read {}", path.display()))
}
