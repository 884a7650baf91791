// Insight lifecycle: build a record from extracted résumé text, persist it,
// and serve it back as history.

pub mod builder;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;
pub mod summarizer;
