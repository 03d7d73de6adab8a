use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Incoming scoring payload.
///
/// `X` is caller-defined and echoed back verbatim; other keys are ignored.
/// Kept as the raw object map so an explicit `"X": null` stays
/// distinguishable from a missing `X`.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ScoreRequest {
    fields: Map<String, Value>,
}

impl ScoreRequest {
    pub fn into_features(mut self) -> Option<Value> {
        self.fields.remove("X")
    }
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub score: Value,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        HealthResponse {
            status: "ok",
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingField,
    InvalidBody,
    NotFound,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: ErrorKind,
}

impl ErrorResponse {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        ErrorResponse {
            error: message.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn score_request_extracts_features() {
        let request: ScoreRequest =
            serde_json::from_value(json!({"X": [1, 2, 3], "ignored": true})).expect("deserialize");
        assert_eq!(request.into_features(), Some(json!([1, 2, 3])));
    }

    #[test]
    fn score_request_distinguishes_null_from_missing() {
        let with_null: ScoreRequest =
            serde_json::from_value(json!({"X": null})).expect("deserialize");
        assert_eq!(with_null.into_features(), Some(Value::Null));

        let without: ScoreRequest = serde_json::from_value(json!({})).expect("deserialize");
        assert_eq!(without.into_features(), None);
    }

    #[test]
    fn error_response_serializes_kind_as_snake_case() {
        let body = serde_json::to_value(ErrorResponse::new(ErrorKind::MissingField, "no X"))
            .expect("serialize");
        assert_eq!(body, json!({"error": "no X", "kind": "missing_field"}));
    }
}
