//! Keyword extraction and topic suggestions for free-form queries.

/// Minimum length (exclusive) of a word kept as a concept.
const MIN_CONCEPT_CHARS: usize = 3;

static TOPICS: [(&str, [&str; 4]); 3] = [
    (
        "machine learning",
        [
            "neural networks",
            "deep learning",
            "artificial intelligence",
            "data science",
        ],
    ),
    (
        "programming",
        [
            "software development",
            "coding",
            "algorithms",
            "web development",
        ],
    ),
    (
        "science",
        ["research", "experiments", "discovery", "technology"],
    ),
];

static FALLBACK_TOPICS: [&str; 4] = [
    "artificial intelligence",
    "technology",
    "education",
    "research",
];

/// Extracts the significant words of a query.
///
/// Words are split on whitespace, lower-cased and stripped of surrounding
/// punctuation; words of three characters or fewer are dropped, as are
/// repeats. Order of first appearance is kept.
///
/// ```
/// use libris_catalog::discovery::extract_concepts;
///
/// assert_eq!(
///     extract_concepts("Books about Machine Learning, and machine vision"),
///     vec!["books", "about", "machine", "learning", "vision"],
/// );
/// ```
pub fn extract_concepts(query: &str) -> Vec<String> {
    let mut concepts: Vec<String> = Vec::new();
    for word in query.split_whitespace() {
        let word = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.chars().count() > MIN_CONCEPT_CHARS && !concepts.contains(&word) {
            concepts.push(word);
        }
    }
    concepts
}

/// Suggests related topics for a query.
///
/// The first known subject contained in the query wins; unknown queries get
/// a generic list.
pub fn related_topics(query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    TOPICS
        .iter()
        .find(|(key, _)| query.contains(key))
        .map(|(_, topics)| topics.as_slice())
        .unwrap_or(FALLBACK_TOPICS.as_slice())
        .iter()
        .map(|t| t.to_string())
        .collect()
}
