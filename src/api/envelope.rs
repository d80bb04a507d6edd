//! Response-envelope unwrapping.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Why an API payload failed to decode.
///
/// All decode failure is surfaced here; downstream code only ever sees
/// typed records or this error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with its failure envelope.
    #[error("backend reported: {message}")]
    Backend { message: String },

    /// The body was not valid JSON, or `data` did not match the expected
    /// record shape.
    #[error("malformed api payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Valid JSON, but neither a `data` nor a `message` envelope.
    #[error("api payload has no data field")]
    MissingData,
}

/// Unwrap a `{ "data": ... }` envelope into a typed record.
///
/// A `{ "message": ... }` failure envelope becomes `ApiError::Backend`
/// with the backend's own wording, the way the dashboard surfaces it.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let mut value: Value = serde_json::from_str(body)?;

    let Some(object) = value.as_object_mut() else {
        return Err(ApiError::MissingData);
    };

    if let Some(data) = object.get_mut("data") {
        return Ok(serde_json::from_value(data.take())?);
    }

    if let Some(message) = object.get("message").and_then(Value::as_str) {
        return Err(ApiError::Backend {
            message: message.to_string(),
        });
    }

    Err(ApiError::MissingData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_envelope_unwraps() {
        let ids: Vec<i64> = decode_envelope(r#"{"data": [1, 2, 3]}"#).unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_failure_envelope_carries_backend_wording() {
        let err = decode_envelope::<Vec<i64>>(r#"{"message": "species not found"}"#).unwrap_err();
        match err {
            ApiError::Backend { message } => assert_eq!(message, "species not found"),
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = decode_envelope::<Vec<i64>>("not json").unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn test_envelope_without_data_is_missing() {
        let err = decode_envelope::<Vec<i64>>(r#"{"rows": 3}"#).unwrap_err();
        assert!(matches!(err, ApiError::MissingData));

        let err = decode_envelope::<Vec<i64>>("[1, 2]").unwrap_err();
        assert!(matches!(err, ApiError::MissingData));
    }

    #[test]
    fn test_mismatched_data_shape_is_malformed() {
        let err = decode_envelope::<Vec<i64>>(r#"{"data": "three"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }
}
