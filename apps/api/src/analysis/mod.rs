// Local text analysis used when the external summarizer is unavailable,
// plus cleanup of summarizer output. Pure functions only, no I/O.

pub mod frequency;
pub mod markdown;
pub mod stopwords;
