// Ratcliff/Obershelp similarity ratio between two words.
//
// Find the longest common contiguous run of characters, then repeat the
// search on the unmatched pieces to its left and right. The ratio is
//
//   2 * M / (len(a) + len(b))
//
// where M is the total number of matched characters. 1.0 means identical,
// 0.0 means no character in common. Lengths count chars, not bytes.

/// Score the similarity of two words, ignoring case.
///
/// Returns a value in [0.0, 1.0]. Two empty words score 1.0; one empty word
/// against a non-empty one scores 0.0.
///
/// The longest-match search breaks ties in favour of the earliest run in the
/// first argument, which on its own can make the ratio depend on argument
/// order. Both words are put in lexicographic order first so that
/// `score(a, b) == score(b, a)` always holds.
pub fn score(word_a: &str, word_b: &str) -> f64 {
    let a: Vec<char> = word_a.to_lowercase().chars().collect();
    let b: Vec<char> = word_b.to_lowercase().chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matched = if a <= b {
        matched_chars(&a, &b)
    } else {
        matched_chars(&b, &a)
    };

    2.0 * matched as f64 / total as f64
}

/// Total length of all matching blocks between `a` and `b`.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    // (a_lo, a_hi, b_lo, b_hi) windows still to be searched
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
        let (i, j, len) = longest_match(a, b, a_lo, a_hi, b_lo, b_hi);
        if len == 0 {
            continue;
        }
        matched += len;

        if a_lo < i && b_lo < j {
            pending.push((a_lo, i, b_lo, j));
        }
        if i + len < a_hi && j + len < b_hi {
            pending.push((i + len, a_hi, j + len, b_hi));
        }
    }

    matched
}

/// Longest common run of `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
///
/// Returns `(start_in_a, start_in_b, length)`. Among runs of equal length the
/// one starting earliest in `a` wins, then earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_len) = (a_lo, b_lo, 0);

    // run_len[c] = length of the run ending at (i, b_lo + c - 1); slot 0 is a
    // permanent zero so the diagonal lookup never underflows.
    let width = b_hi.saturating_sub(b_lo);
    let mut prev = vec![0usize; width + 1];
    let mut curr = vec![0usize; width + 1];

    for i in a_lo..a_hi {
        for j in b_lo..b_hi {
            let col = j - b_lo + 1;
            curr[col] = if a[i] == b[j] { prev[col - 1] + 1 } else { 0 };

            // Strict > keeps the first run found on ties
            if curr[col] > best_len {
                best_len = curr[col];
                best_i = i + 1 - best_len;
                best_j = j + 1 - best_len;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    (best_i, best_j, best_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "Expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_identical_words() {
        assert_close(score("apple", "apple"), 1.0);
    }

    #[test]
    fn test_case_insensitive() {
        assert_close(score("Apple", "aPPLE"), 1.0);
    }

    #[test]
    fn test_no_common_chars() {
        assert_close(score("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_suffix_added() {
        // "apple" fully matched inside "apples": 2 * 5 / 11
        assert_close(score("apple", "apples"), 10.0 / 11.0);
    }

    #[test]
    fn test_recurses_on_both_sides() {
        // "re" first, then "d" in the right-hand remainder: 2 * 3 / 7
        assert_close(score("red", "read"), 6.0 / 7.0);
    }

    #[test]
    fn test_shifted_run() {
        // "bcd" is the only match: 2 * 3 / 8
        assert_close(score("abcd", "bcde"), 0.75);
    }

    #[test]
    fn test_crossing_runs_count_once() {
        // "ab" and "cd" cross each other; only one of them can be kept
        assert_close(score("abxcd", "cdxab"), 0.4);
    }

    #[test]
    fn test_empty_edges() {
        assert_close(score("", ""), 1.0);
        assert_close(score("", "word"), 0.0);
        assert_close(score("word", ""), 0.0);
    }

    #[test]
    fn test_multibyte_chars_count_as_one() {
        // 4 chars each, 3 matched: 2 * 3 / 8
        assert_close(score("café", "cafe"), 0.75);
    }

    #[test]
    fn test_longest_match_prefers_earliest() {
        let a: Vec<char> = "abab".chars().collect();
        let b: Vec<char> = "ab".chars().collect();
        assert_eq!(longest_match(&a, &b, 0, a.len(), 0, b.len()), (0, 0, 2));
    }
}
