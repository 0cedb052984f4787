// Phrase-level similarity: how many word pairs between two phrases are
// similar enough to count.
//
// Every word of one phrase is scored against every word of the other. A
// qualifying pair is remembered by value, in either order, so "red" vs "red"
// counts once even if "red" appears twice in each phrase. A repeated word can
// still match other, different words.

use std::collections::HashSet;

use super::ratio;
use crate::config::GroupingConfig;

/// Word separators: Unicode whitespace plus the ASCII information
/// separators `\x1c`..=`\x1f`, which `char::is_whitespace` leaves out.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split a phrase into lower-cased words, keeping order and duplicates.
pub fn tokenize(phrase: &str) -> Vec<String> {
    phrase
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Count the distinct word pairs between two phrases whose similarity score
/// is strictly above `threshold`.
///
/// Costs `words(a) * words(b)` calls to [`ratio::score`]. The result does not
/// depend on argument order.
pub fn count_similar_pairs(phrase_a: &str, phrase_b: &str, threshold: f64) -> usize {
    let words_a = tokenize(phrase_a);
    let words_b = tokenize(phrase_b);

    // Unordered pairs stored with the smaller word first
    let mut counted: HashSet<(&str, &str)> = HashSet::new();

    for w1 in &words_a {
        for w2 in &words_b {
            let key = if w1 <= w2 {
                (w1.as_str(), w2.as_str())
            } else {
                (w2.as_str(), w1.as_str())
            };
            if counted.contains(&key) {
                continue;
            }
            if ratio::score(w1, w2) > threshold {
                counted.insert(key);
            }
        }
    }

    counted.len()
}

/// Whether two phrases share at least `min_similar_words` qualifying pairs.
pub fn are_similar(phrase_a: &str, phrase_b: &str, config: &GroupingConfig) -> bool {
    count_similar_pairs(phrase_a, phrase_b, config.similarity_threshold())
        >= config.min_similar_words()
}
