//! Shared HTTP response helpers.
//!
//! Mutations hand the raw response back to the caller; reads go through
//! [`check_response`] so that non-success statuses become [`ApiError::Api`].

use serde::Deserialize;

use crate::error::ApiError;

/// Error body returned by the API on validation failures
/// (`{"error": "Invalid input"}`).
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise returns
/// [`ApiError::Api`] carrying the status and the body's `error` field, or
/// the whole body when it is not an error object.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Api {
        status,
        message: error_message(&body),
    })
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body).map_or_else(|_| body.trim().to_string(), |b| b.error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[test]
    fn error_message_prefers_error_field() {
        assert_eq!(error_message(r#"{"error": "Invalid input"}"#), "Invalid input");
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(error_message("<h1>Not Found</h1>\n"), "<h1>Not Found</h1>");
        assert_eq!(error_message(""), "");
    }

    #[tokio::test]
    async fn check_response_api_error() {
        let resp = mock_response(400, r#"{"error": "Invalid input"}"#);
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Api { status: 400, ref message } if message == "Invalid input"
        ));
    }

    #[tokio::test]
    async fn check_response_not_found() {
        let resp = mock_response(404, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ApiError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(201, r#"{"id": 1}"#);
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_no_content() {
        let resp = mock_response(204, "");
        assert!(check_response(resp).await.is_ok());
    }
}
