//! The success/failure contract shared by every backend call.
//!
//! Bodies are either `{data, message}` or `{error, message}`; the only
//! discriminant is the presence of an `error` key. Bodies are decoded once,
//! here, into `Result<T, Failure>` so call sites never inspect raw JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const UNKNOWN_ERROR: &str = "Unknown Error";
pub const UNKNOWN_MESSAGE: &str = "An unknown error occurred";

/// Failure half of the envelope. `error` is shown as the notification title
/// and `message` as its body.
#[derive(Error, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[error("{error}: {message}")]
pub struct Failure {
    pub error: String,
    #[serde(default)]
    pub message: String,
}

impl Failure {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Stand-in for failures that carry no server body.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_ERROR, UNKNOWN_MESSAGE)
    }
}

/// Success half of the envelope for mutations.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Success<T> {
    #[serde(default)]
    pub data: T,
    #[serde(default)]
    pub message: String,
}

pub type ApiResult<T> = Result<T, Failure>;

/// `true` when the body is an object carrying an `error` key, whatever its value.
pub fn is_failure(body: &Value) -> bool {
    body.as_object()
        .is_some_and(|object| object.contains_key("error"))
}

fn text_of(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn failure_from(body: &Value) -> Failure {
    Failure {
        error: text_of(body.get("error")).unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        message: text_of(body.get("message")).unwrap_or_default(),
    }
}

/// Classifies an already parsed body.
pub fn classify<T: DeserializeOwned>(body: Value) -> ApiResult<T> {
    if is_failure(&body) {
        return Err(failure_from(&body));
    }
    serde_json::from_value(body)
        .map_err(|err| Failure::new("Unexpected Response", err.to_string()))
}

/// Decodes a response body, taking the HTTP status into account.
///
/// A body with an `error` key is passed through as is. A non-2xx status
/// without one still counts as a failure, reusing the body's `message` when
/// present. A body that is not JSON at all maps to [`Failure::unknown`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) => return Err(Failure::unknown()),
    };

    if !(200..300).contains(&status) && !is_failure(&parsed) {
        return Err(Failure::new(
            format!("HTTP {status}"),
            text_of(parsed.get("message")).unwrap_or_else(|| UNKNOWN_MESSAGE.to_string()),
        ));
    }

    classify(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_key_alone_decides_failure() {
        for body in [
            json!({"error": "Conflict", "message": "roll no taken"}),
            json!({"error": null, "data": {"id": 1}, "message": "ok"}),
            json!({"error": "", "total": 3}),
        ] {
            assert!(is_failure(&body), "{body}");
        }
        for body in [
            json!({"data": 1, "message": "ok"}),
            json!({"file": "http://x/y.xlsx"}),
            json!({"errors": ["close but no"]}),
            json!([1, 2]),
        ] {
            assert!(!is_failure(&body), "{body}");
        }
    }

    #[test]
    fn failure_body_is_passed_through() {
        let result: ApiResult<Success<Value>> =
            decode_response(409, r#"{"error":"Conflict","message":"roll no taken"}"#);
        assert_eq!(result, Err(Failure::new("Conflict", "roll no taken")));
    }

    #[test]
    fn success_body_decodes_payload() {
        let result: ApiResult<Success<i64>> =
            decode_response(200, r#"{"data": 5, "message": "Created"}"#);
        let success = result.unwrap();
        assert_eq!(success.data, 5);
        assert_eq!(success.message, "Created");
    }

    #[test]
    fn empty_or_html_body_becomes_unknown_error() {
        let empty: ApiResult<Success<Value>> = decode_response(502, "");
        assert_eq!(empty, Err(Failure::unknown()));
        let html: ApiResult<Success<Value>> = decode_response(500, "<html>oops</html>");
        assert_eq!(html.unwrap_err().error, UNKNOWN_ERROR);
    }

    #[test]
    fn bad_status_without_error_key_is_failure() {
        let result: ApiResult<Success<Value>> =
            decode_response(500, r#"{"message": "database down"}"#);
        assert_eq!(result, Err(Failure::new("HTTP 500", "database down")));
    }

    #[test]
    fn non_string_error_values_are_stringified() {
        let result: ApiResult<Value> = classify(json!({"error": {"code": 3}}));
        let failure = result.unwrap_err();
        assert_eq!(failure.error, r#"{"code":3}"#);
        assert_eq!(failure.message, "");
    }
}
