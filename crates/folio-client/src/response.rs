//! The single response handler every gateway call goes through.

use folio_session::SessionStore;
use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Turn a raw gateway response into a JSON result.
///
/// - 401 clears `session` and fails with [`ApiError::Unauthenticated`]
/// - other non-2xx fail with [`ApiError::RequestFailed`]
/// - an empty 2xx body yields an empty JSON object
pub fn handle_response(
    status: StatusCode,
    body: &[u8],
    session: &SessionStore,
) -> Result<Value, ApiError> {
    if status == StatusCode::UNAUTHORIZED {
        session.clear_credentials();
        return Err(ApiError::Unauthenticated);
    }

    if !status.is_success() {
        let message = error_message(status, body);
        tracing::debug!(status = status.as_u16(), %message, "gateway request failed");
        return Err(ApiError::RequestFailed {
            status: status.as_u16(),
            message,
        });
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    Ok(serde_json::from_slice(body)?)
}

/// Best-effort human-readable message from an error body.
///
/// Prefers a string `message` field, then `error`, then a generic HTTP
/// description.
pub fn error_message(status: StatusCode, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .filter_map(|key| value.get(*key).and_then(Value::as_str))
                .find(|msg| !msg.trim().is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_session::LoginResponse;
    use serde_json::json;

    fn logged_in() -> SessionStore {
        let store = SessionStore::new();
        // Decode failure is tolerated; only the token matters here
        let _ = store.set_auth_data(&LoginResponse::new("opaque", "reader"));
        store
    }

    #[test]
    fn test_unauthorized_clears_session() {
        let session = logged_in();
        let err = handle_response(StatusCode::UNAUTHORIZED, b"", &session).unwrap_err();
        assert!(err.is_unauthenticated());
        assert_eq!(err.to_string(), crate::error::SESSION_EXPIRED);
        assert!(!session.is_authenticated());
        assert_eq!(session.username(), None);
    }

    #[test]
    fn test_message_preferred_over_error() {
        let body = json!({"message": "Book not found", "error": "Not Found"}).to_string();
        let err = handle_response(StatusCode::NOT_FOUND, body.as_bytes(), &logged_in()).unwrap_err();
        match err {
            ApiError::RequestFailed { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Book not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_field_fallback() {
        let body = json!({"error": "Bad Request"}).to_string();
        assert_eq!(error_message(StatusCode::BAD_REQUEST, body.as_bytes()), "Bad Request");
    }

    #[test]
    fn test_generic_message_for_unparseable_body() {
        assert_eq!(
            error_message(StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>"),
            "HTTP 500 Internal Server Error"
        );
        assert_eq!(error_message(StatusCode::CONFLICT, b""), "HTTP 409 Conflict");
        assert_eq!(
            error_message(StatusCode::CONFLICT, br#"{"message": null}"#),
            "HTTP 409 Conflict"
        );
    }

    #[test]
    fn test_non_401_failure_keeps_session() {
        let session = logged_in();
        let _ = handle_response(StatusCode::FORBIDDEN, b"", &session);
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_empty_success_body() {
        let value = handle_response(StatusCode::NO_CONTENT, b"", &SessionStore::new()).unwrap();
        assert_eq!(value, json!({}));
        let value = handle_response(StatusCode::OK, b"  \n", &SessionStore::new()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_success_body_parsed() {
        let value =
            handle_response(StatusCode::OK, br#"{"bookId": 1}"#, &SessionStore::new()).unwrap();
        assert_eq!(value["bookId"], 1);
    }

    #[test]
    fn test_invalid_success_body() {
        let err = handle_response(StatusCode::OK, b"not json", &SessionStore::new()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
