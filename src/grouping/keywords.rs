// Keyword sets: the distinct lower-cased words of a phrase.
//
// No stemming and no punctuation stripping, so "apple," and "apple" are
// different keywords. BTreeSet keeps them sorted for display.

use std::collections::BTreeSet;

use crate::similarity::pairs::tokenize;

/// Extract the distinct lower-cased words of a phrase.
///
/// Words are split exactly as the pair counter splits them.
pub fn extract_keywords(phrase: &str) -> BTreeSet<String> {
    tokenize(phrase).into_iter().collect()
}
