//! HTTP response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual,
        expected,
        "Expected status {}, got {}: {}",
        expected,
        actual,
        response.text()
    );
}

/// Asserts that the body is an error document with the given code.
pub fn assert_error_code(body: &Value, expected: &str) {
    let actual = body.get("error").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(actual, expected, "Unexpected error body: {}", body);
    assert!(
        body.get("detail").and_then(|v| v.as_str()).is_some(),
        "Error body without detail: {}",
        body
    );
}

/// Returns the ids of the `articles` array of a response body.
pub fn article_ids(body: &Value) -> Vec<String> {
    body["articles"]
        .as_array()
        .map(|articles| {
            articles
                .iter()
                .filter_map(|a| a["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
