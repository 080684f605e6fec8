//! Custom JSON extractor that returns errors as JSON

use axum::{
    Json as AxumJson,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::error::ApiErrorResponse;

/// Message returned for any body that cannot be read as JSON
pub const MISSING_JSON_MESSAGE: &str = "Missing JSON in request";

/// Custom JSON extractor that converts all rejection errors to JSON format
///
/// Every rejection is a 400 with the `{"error": ...}` body; the detailed
/// reason is kept for logging.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consume the extractor and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// JSON rejection error that returns API error format
#[derive(Debug)]
pub struct JsonRejection {
    reason: String,
}

impl std::fmt::Display for JsonRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl IntoResponse for JsonRejection {
    fn into_response(self) -> Response {
        let response = ApiErrorResponse {
            error: MISSING_JSON_MESSAGE.to_string(),
        };

        (StatusCode::BAD_REQUEST, AxumJson(response)).into_response()
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(JsonRejection {
                reason: format_rejection_message(&rejection),
            }),
        }
    }
}

fn format_rejection_message(rejection: &axum::extract::rejection::JsonRejection) -> String {
    use axum::extract::rejection::JsonRejection::*;

    match rejection {
        JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
        JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
        _ => "Invalid JSON request".to_string(),
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::header;
    use serde_json::Value;

    async fn extract(content_type: Option<&str>, body: &str) -> Result<Json<Value>, JsonRejection> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        Json::<Value>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_extracts_valid_json() {
        let json = extract(Some("application/json"), r#"{"username":"alice"}"#)
            .await
            .unwrap();

        assert_eq!(json["username"], "alice");
    }

    #[tokio::test]
    async fn test_rejects_syntax_error() {
        let rejection = extract(Some("application/json"), "{not json")
            .await
            .unwrap_err();

        assert!(rejection.to_string().starts_with("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_rejects_missing_content_type() {
        let rejection = extract(None, r#"{"username":"alice"}"#).await.unwrap_err();

        assert!(rejection.to_string().contains("Content-Type"));
    }

    #[tokio::test]
    async fn test_json_rejection_into_response() {
        let rejection = JsonRejection {
            reason: "Invalid JSON syntax".to_string(),
        };

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Missing JSON in request"}"#);
    }

    #[test]
    fn test_json_into_inner() {
        let json = Json(42);
        assert_eq!(json.into_inner(), 42);
    }
}
