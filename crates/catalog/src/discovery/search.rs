//! Relevance-scored search over a book collection.
//!
//! Scores are computed from plain substring matching, so results are fully
//! deterministic for a given collection and query.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::concepts::{extract_concepts, related_topics};
use crate::error::QueryError;
use crate::query::Criteria;
use crate::types::{Book, QueryRequest};

/// Lowest score a record needs to be returned.
pub const MIN_MATCH_SCORE: f64 = 0.5;

const HIGH_RELEVANCE: f64 = 0.9;

/// A book with its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredBook {
    #[serde(flatten)]
    pub book: Book,
    /// Score in `[0.5, 1]`.
    pub match_score: f64,
    /// Human-readable reason for the match.
    pub relevance: String,
}

/// Query analysis returned alongside the matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchInsights {
    pub concepts: Vec<String>,
    pub related_topics: Vec<String>,
    /// Mean score of the returned matches, 0 when there are none.
    pub confidence: f64,
}

/// Output of [`ai_search`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub query: String,
    pub results: Vec<ScoredBook>,
    pub insights: SearchInsights,
}

/// Scores every book against a free-form query.
///
/// The category, rating and year filters of `scope` are applied first; its
/// search term, sort and pagination are ignored. A book scores 1 when the
/// whole lower-cased query appears in its title, author, description or
/// tags, and otherwise the fraction of query concepts that appear there.
/// Books scoring at least 0.5 are returned, best first; ties keep
/// collection order.
///
/// # Errors
///
/// Returns [`QueryError::InvalidArgument`] for a blank query or invalid
/// filters.
pub fn ai_search(
    books: &[Book],
    query: &str,
    scope: &QueryRequest,
) -> Result<SearchOutcome, QueryError> {
    let phrase = query.trim().to_lowercase();
    if phrase.is_empty() {
        return Err(QueryError::invalid("query", "search query is required"));
    }

    let criteria = Criteria::from_request(scope)?;
    let concepts = extract_concepts(query);

    let mut results: Vec<ScoredBook> = books
        .iter()
        .filter(|b| criteria.matches_category(b) && criteria.matches_ranges(b))
        .filter_map(|book| {
            let haystack = searchable_text(book);
            let (score, matched) = score(&haystack, &phrase, &concepts);
            (score >= MIN_MATCH_SCORE).then(|| ScoredBook {
                book: book.clone(),
                match_score: score,
                relevance: relevance(query.trim(), score, &matched),
            })
        })
        .collect();

    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));

    let confidence = if results.is_empty() {
        0.0
    } else {
        results.iter().map(|r| r.match_score).sum::<f64>() / results.len() as f64
    };

    debug!(
        matches = results.len(),
        concepts = concepts.len(),
        "Relevance search completed"
    );

    Ok(SearchOutcome {
        query: query.to_string(),
        results,
        insights: SearchInsights {
            concepts,
            related_topics: related_topics(query),
            confidence,
        },
    })
}

fn searchable_text(book: &Book) -> String {
    let mut text = format!("{}\n{}\n{}", book.title, book.author, book.description);
    for tag in &book.tags {
        text.push('\n');
        text.push_str(tag);
    }
    text.to_lowercase()
}

fn score<'c>(haystack: &str, phrase: &str, concepts: &'c [String]) -> (f64, Vec<&'c str>) {
    if haystack.contains(phrase) {
        return (1.0, concepts.iter().map(String::as_str).collect());
    }
    if concepts.is_empty() {
        return (0.0, Vec::new());
    }
    let matched: Vec<&str> = concepts
        .iter()
        .map(String::as_str)
        .filter(|c| haystack.contains(c))
        .collect();
    (matched.len() as f64 / concepts.len() as f64, matched)
}

fn relevance(query: &str, score: f64, matched: &[&str]) -> String {
    if score >= HIGH_RELEVANCE {
        format!("Highly relevant to your query about {}", query)
    } else {
        format!("Covers topics related to your search: {}", matched.join(", "))
    }
}
