//! Relevance search and summarisation.
//!
//! These features stand in for an NLP service: they are simple keyword
//! heuristics, deterministic and free of external calls.
//!
//! - [`ai_search`] - score books against a free-form query
//! - [`extract_concepts`], [`related_topics`] - query analysis
//! - [`summarize`] - keep the leading sentences of a text

mod concepts;
mod search;
mod summarize;

pub use concepts::{extract_concepts, related_topics};
pub use search::{MIN_MATCH_SCORE, ScoredBook, SearchInsights, SearchOutcome, ai_search};
pub use summarize::{DEFAULT_MAX_LENGTH, Summary, summarize};
