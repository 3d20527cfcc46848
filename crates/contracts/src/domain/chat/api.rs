//! Wire contract of the question endpoint.
//!
//! The request side is a multipart form (`question` text plus an optional
//! `file` part); these are the JSON bodies coming back.

use serde::{Deserialize, Serialize};

/// Успешный ответ сервиса
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Тело ответа при ошибке. Поле `error` сервис может и не прислать.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Extract a display reason from a failure response body.
///
/// Uses the server-provided `error` text verbatim when present; an absent
/// field or an unparseable body falls back to a generic label.
pub fn failure_reason(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| "Unknown error".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        let data: AskResponse = serde_json::from_str(r#"{"answer": "Hi there"}"#).unwrap();
        assert_eq!(data.answer, "Hi there");
    }

    #[test]
    fn test_answer_field_is_required() {
        assert!(serde_json::from_str::<AskResponse>(r#"{"reply": "Hi"}"#).is_err());
    }

    #[test]
    fn test_failure_reason_uses_server_text() {
        assert_eq!(failure_reason(r#"{"error": "rate limited"}"#), "rate limited");
    }

    #[test]
    fn test_failure_reason_fallbacks() {
        assert_eq!(failure_reason(r#"{}"#), "Unknown error");
        assert_eq!(failure_reason("not json at all"), "Unknown error");
        assert_eq!(failure_reason(r#"{"error": null}"#), "Unknown error");
    }
}
