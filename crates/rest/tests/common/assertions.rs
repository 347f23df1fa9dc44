//! HTTP response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual, expected,
        "Expected status {}, got {}",
        expected, actual
    );
}

/// Asserts that the body is an error envelope with the given code.
pub fn assert_error_envelope(body: &Value, expected_code: &str) {
    assert_eq!(body["success"], false, "Expected success=false in {}", body);
    assert_eq!(
        body["code"].as_str().unwrap_or(""),
        expected_code,
        "Unexpected error code in {}",
        body
    );
    assert!(
        body["message"].as_str().is_some_and(|m| !m.is_empty()),
        "Expected a message in {}",
        body
    );
}

/// Asserts that the response has a Location header.
pub fn assert_has_location(response: &TestResponse) {
    assert!(
        response.headers().contains_key("location"),
        "Expected Location header"
    );
}

/// Extracts book ids from an array of books.
pub fn book_ids(items: &Value) -> Vec<u64> {
    items
        .as_array()
        .map(|books| books.iter().filter_map(|b| b["id"].as_u64()).collect())
        .unwrap_or_default()
}
