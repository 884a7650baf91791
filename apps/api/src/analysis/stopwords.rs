/// Common English function words excluded from frequency analysis.
///
/// Entries of three characters or fewer are already dropped by the length
/// filter; they stay listed so the set reads as a complete vocabulary.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "day", "get", "has", "him", "his", "how", "its", "may", "new", "now", "old",
    "see", "two", "who", "boy", "did", "she", "use", "way", "will", "with", "have", "this",
    "that", "from", "they", "know", "want", "been", "good", "much", "some", "time", "very",
    "when", "come", "here", "just", "like", "long", "make", "many", "over", "such", "take",
    "than", "them", "well", "were",
];

/// Returns true if `word` (already lowercased) is a stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}
