//! Word-frequency fallback summarizer.
//!
//! Algorithm:
//! 1. Lowercase; every char that is not a letter, digit or whitespace becomes a space.
//! 2. Split on whitespace runs.
//! 3. Drop tokens of ≤ 3 chars and stop words.
//! 4. Count occurrences, remembering first-seen order.
//! 5. Stable sort by descending count, so ties keep first-seen order.
//! 6. Take the first `count` words.

use std::collections::HashMap;

use crate::analysis::stopwords::is_stop_word;

/// Tokens must be strictly longer than this many characters to count.
pub const MIN_WORD_LEN: usize = 3;

/// Returns up to `count` of the most frequent significant words in `text`,
/// most frequent first. Deterministic and infallible; empty input yields an
/// empty list.
pub fn top_frequent_words(text: &str, count: usize) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }

    let normalized = normalize(text);

    // (word, frequency) in first-seen order; index maps word → slot.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in normalized.split_whitespace().filter(|t| is_significant(t)) {
        let slot = *index.entry(token).or_insert_with(|| {
            counts.push((token, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(count)
        .map(|(word, _)| word.to_string())
        .collect()
}

fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

fn is_significant(token: &str) -> bool {
    token.chars().count() > MIN_WORD_LEN && !is_stop_word(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME_SNIPPET: &str = r#"
        Jane Doe — Senior Backend Engineer
        Built distributed systems in Rust and Go. Led migration of payment systems to Kubernetes.
        Skills: Rust, Kubernetes, PostgreSQL, distributed tracing, systems design.
    "#;

    #[test]
    fn test_empty_text_returns_empty() {
        assert!(top_frequent_words("", 5).is_empty());
        assert!(top_frequent_words("   \n\t ", 5).is_empty());
    }

    #[test]
    fn test_zero_count_returns_empty() {
        assert!(top_frequent_words(RESUME_SNIPPET, 0).is_empty());
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let words = top_frequent_words("alpha beta alpha gamma beta", 2);
        assert_eq!(words, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_higher_frequency_ranks_first() {
        let words = top_frequent_words("delta omega omega omega delta sigma", 3);
        assert_eq!(words, vec!["omega", "delta", "sigma"]);
    }

    #[test]
    fn test_count_larger_than_distinct_returns_all_without_padding() {
        let words = top_frequent_words("rust rust python", 10);
        assert_eq!(words, vec!["rust", "python"]);
    }

    #[test]
    fn test_short_words_and_stop_words_excluded() {
        let words = top_frequent_words(
            "the and with have this that from go js api rust with with with",
            10,
        );
        assert_eq!(words, vec!["rust"]);
    }

    #[test]
    fn test_punctuation_splits_and_case_folds() {
        let words = top_frequent_words("Rust,RUST;rust! C++/Kubernetes.kubernetes", 5);
        assert_eq!(words, vec!["rust", "kubernetes"]);
    }

    #[test]
    fn test_digits_are_kept_as_word_chars() {
        let words = top_frequent_words("python3 python3 2024 2024 2024", 5);
        assert_eq!(words, vec!["2024", "python3"]);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // "café" is 4 chars (5 bytes) and qualifies; "été" is 3 chars and does not.
        let words = top_frequent_words("café été café", 5);
        assert_eq!(words, vec!["café"]);
    }

    #[test]
    fn test_is_deterministic() {
        let first = top_frequent_words(RESUME_SNIPPET, 5);
        for _ in 0..20 {
            assert_eq!(top_frequent_words(RESUME_SNIPPET, 5), first);
        }
    }

    #[test]
    fn test_result_bounds_and_filters_hold_for_assorted_inputs() {
        let inputs = [
            RESUME_SNIPPET,
            "",
            "a b c d",
            "with with with have have",
            "one two three four five six seven eight nine ten eleven twelve",
            "ÜBER über Über straße STRASSE",
        ];
        for text in inputs {
            for count in [0, 1, 3, 5, 50] {
                let words = top_frequent_words(text, count);
                assert!(words.len() <= count);
                let mut distinct = words.clone();
                distinct.sort();
                distinct.dedup();
                assert_eq!(distinct.len(), words.len(), "duplicates for {text:?}");
                for w in &words {
                    assert!(w.chars().count() > MIN_WORD_LEN, "{w} too short");
                    assert!(!is_stop_word(w), "{w} is a stop word");
                }
            }
        }
    }

    #[test]
    fn test_resume_scenario_ranks_by_count_then_first_seen() {
        let text = "Experienced experienced software software engineer engineer \
                    with with strong strong skills skills";
        let words = top_frequent_words(text, 5);
        assert_eq!(
            words,
            vec!["experienced", "software", "engineer", "strong", "skills"]
        );
    }
}
