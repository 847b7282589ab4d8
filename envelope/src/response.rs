use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::code::Code;

/// Message used whenever the real response cannot be produced.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// Content type set on every response written by the responder.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Standard JSON response envelope.
///
/// Field order is part of the wire contract: `message`, `code`, `data`,
/// `timestamp`. A missing `data` is written as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub code: Code,
    pub data: Option<T>,
    /// Unix epoch milliseconds (UTC), stamped when the envelope is built.
    pub timestamp: i64,
}

impl<T> ApiResponse<T> {
    /// Builds an envelope stamped with the current time.
    pub fn new(code: Code, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            code,
            data,
            timestamp: now_millis(),
        }
    }
}

impl ApiResponse<()> {
    /// The generic envelope emitted when the real one cannot be encoded.
    pub fn internal_error() -> Self {
        Self::new(Code::InternalError, INTERNAL_ERROR_MESSAGE, None)
    }
}

/// Debug-mode `data` payload carrying the text of a handler error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    pub error: String,
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Hand-built internal error body that does not go through any serializer.
pub fn literal_internal_error(timestamp: i64) -> String {
    format!(
        r#"{{"message":"{INTERNAL_ERROR_MESSAGE}","code":"INTERNAL_ERROR","data":null,"timestamp":{timestamp}}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn keeps_wire_field_order() {
        let resp = ApiResponse::new(Code::Ok, "hi", Some(1));
        let json = serde_json::to_string(&resp).unwrap();

        let message = json.find("\"message\"").unwrap();
        let code = json.find("\"code\"").unwrap();
        let data = json.find("\"data\"").unwrap();
        let timestamp = json.find("\"timestamp\"").unwrap();
        assert!(message < code && code < data && data < timestamp);
    }

    #[test]
    fn absent_data_is_written_as_null() {
        let resp = ApiResponse::<u8>::new(Code::NotFound, "", None);
        let value = serde_json::to_value(&resp).unwrap();

        assert_eq!(value["data"], Value::Null);
        assert_eq!(value["message"], "");
        assert!(value.as_object().unwrap().contains_key("data"));
    }

    #[test]
    fn timestamp_is_current_epoch_millis() {
        let before = Utc::now().timestamp_millis();
        let resp = ApiResponse::<()>::internal_error();
        let after = Utc::now().timestamp_millis();

        assert!(resp.timestamp >= before && resp.timestamp <= after);
    }

    #[test]
    fn literal_matches_serialized_fallback() {
        let literal: Value = serde_json::from_str(&literal_internal_error(42)).unwrap();
        let mut fallback = ApiResponse::<()>::internal_error();
        fallback.timestamp = 42;

        assert_eq!(literal, serde_json::to_value(&fallback).unwrap());
        assert_eq!(
            literal,
            json!({
                "message": "internal server error",
                "code": "INTERNAL_ERROR",
                "data": null,
                "timestamp": 42
            })
        );
    }
}
