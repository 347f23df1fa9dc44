//! Relevance search and summarisation endpoint tests.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::assertions::{assert_error_envelope, assert_status, book_ids};
use common::harness::RestTestHarness;

// =============================================================================
// Relevance Search
// =============================================================================

#[tokio::test]
async fn test_ai_search_ranks_phrase_matches_first() {
    let harness = RestTestHarness::seeded();

    let response = harness
        .server
        .post("/api/search/ai")
        .json(&json!({ "query": "machine learning" }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["query"], "machine learning");

    let ids = book_ids(&body["results"]);
    assert_eq!(&ids[..2], &[1, 4]);
    assert_eq!(body["results"][0]["matchScore"], 1.0);
    assert!(body["results"][0]["relevance"].as_str().is_some());

    let results = body["results"].as_array().cloned().unwrap_or_default();
    assert!(results.iter().all(|r| r["matchScore"].as_f64().unwrap_or(0.0) >= 0.5));

    let insights = &body["aiInsights"];
    assert_eq!(insights["concepts"], json!(["machine", "learning"]));
    assert_eq!(
        insights["relatedTopics"],
        json!(["neural networks", "deep learning", "artificial intelligence", "data science"])
    );
    let confidence = insights["confidence"].as_f64().unwrap_or(0.0);
    assert!(confidence > 0.5 && confidence <= 1.0);
}

#[tokio::test]
async fn test_ai_search_respects_filters() {
    let harness = RestTestHarness::seeded();

    let body: Value = harness
        .server
        .post("/api/search/ai")
        .json(&json!({
            "query": "machine learning",
            "filters": { "categories": ["computer-science"] }
        }))
        .await
        .json();

    assert_eq!(book_ids(&body["results"]), vec![4]);
}

#[tokio::test]
async fn test_ai_search_no_match_has_zero_confidence() {
    let harness = RestTestHarness::seeded();

    let body: Value = harness
        .server
        .post("/api/search/ai")
        .json(&json!({ "query": "gardening" }))
        .await
        .json();

    assert_eq!(book_ids(&body["results"]), Vec::<u64>::new());
    assert_eq!(body["aiInsights"]["confidence"], 0.0);
    assert_eq!(
        body["aiInsights"]["relatedTopics"],
        json!(["artificial intelligence", "technology", "education", "research"])
    );
}

#[tokio::test]
async fn test_ai_search_requires_query() {
    let harness = RestTestHarness::seeded();

    let response = harness.server.post("/api/search/ai").json(&json!({})).await;

    assert_status(&response, 400);
    let body: Value = response.json();
    assert_error_envelope(&body, "invalid");
    assert_eq!(body["message"], "Search query is required");
}

// =============================================================================
// Summarisation
// =============================================================================

#[tokio::test]
async fn test_summarize_keeps_three_sentences() {
    let harness = RestTestHarness::empty();

    let response = harness
        .server
        .post("/api/search/summarize")
        .json(&json!({ "content": "One. Two. Three. Four. Five." }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["summary"], "One. Two. Three.");
    assert_eq!(body["originalLength"], 28);
    assert_eq!(body["summaryLength"], 16);
}

#[tokio::test]
async fn test_summarize_truncates_to_max_length() {
    let harness = RestTestHarness::empty();

    let body: Value = harness
        .server
        .post("/api/search/summarize")
        .json(&json!({ "content": "One. Two. Three. Four. Five", "maxLength": 10 }))
        .await
        .json();

    assert_eq!(body["summary"], "One. Tw...");
}

#[tokio::test]
async fn test_summarize_short_content_unchanged() {
    let harness = RestTestHarness::empty();

    let body: Value = harness
        .server
        .post("/api/search/summarize")
        .json(&json!({ "content": "Just one sentence" }))
        .await
        .json();

    assert_eq!(body["summary"], "Just one sentence");
}

#[tokio::test]
async fn test_summarize_errors() {
    let harness = RestTestHarness::empty();

    let response = harness
        .server
        .post("/api/search/summarize")
        .json(&json!({}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_error_envelope(&body, "invalid");
    assert_eq!(
        body["message"],
        "invalid argument 'content': content to summarize is required"
    );

    let response = harness
        .server
        .post("/api/search/summarize")
        .json(&json!({ "content": "   \n " }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_error_envelope(&response.json(), "invalid");

    let response = harness
        .server
        .post("/api/search/summarize")
        .json(&json!({ "content": "text", "maxLength": 3 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
