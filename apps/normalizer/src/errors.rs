use thiserror::Error;

/// Errors raised at the normalizer's entry boundary.
/// Everything past the entry guard is fail-open and never errors.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("Expected a JSON object at the profile root, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Malformed profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl NormalizeError {
    /// Stable machine-readable code, mirrored in CLI diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            NormalizeError::NotAnObject { .. } => "NOT_AN_OBJECT",
            NormalizeError::Json(_) => "MALFORMED_JSON",
        }
    }
}

/// Name of a JSON value's type, as reported in `NotAnObject`.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_an_object_message() {
        let err = NormalizeError::NotAnObject {
            found: json_type_name(&json!("raw text")),
        };
        assert_eq!(
            err.to_string(),
            "Expected a JSON object at the profile root, found string"
        );
        assert_eq!(err.code(), "NOT_AN_OBJECT");
    }

    #[test]
    fn test_json_error_converts() {
        let err: NormalizeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "MALFORMED_JSON");
    }
}
