//! JSON body extractor.
//!
//! Deserializes request bodies and reports failures in the API's error
//! envelope instead of axum's plain-text rejection.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use crate::error::RestError;

/// Axum extractor for JSON request bodies.
///
/// # Example
///
/// ```rust,ignore
/// use libris_rest::extractors::JsonBody;
/// use libris_catalog::types::NewBook;
///
/// async fn create_handler(JsonBody(book): JsonBody<NewBook>) {
///     println!("Title: {:?}", book.title);
/// }
/// ```
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    /// Consumes the extractor and returns the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Must own the string before moving req
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !content_type.contains("json") {
            return Err(RestError::bad_request(format!(
                "Content type '{}' is not supported, expected application/json",
                content_type
            )));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RestError::bad_request(e.to_string()))?;

        let value = serde_json::from_slice(&bytes)?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        name: String,
    }

    fn request(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_json() {
        let req = request(Some("application/json"), r#"{"name":"probe"}"#);
        let JsonBody(probe) = JsonBody::<Probe>::from_request(req, &()).await.unwrap();
        assert_eq!(probe.name, "probe");
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let req = request(Some("application/json"), "{not json");
        let err = JsonBody::<Probe>::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, RestError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_rejects_other_content_types() {
        let req = request(Some("text/plain"), r#"{"name":"probe"}"#);
        let err = JsonBody::<Probe>::from_request(req, &()).await.unwrap_err();
        assert!(err.to_string().contains("text/plain"));
    }
}
