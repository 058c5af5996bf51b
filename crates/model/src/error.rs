use thiserror::Error;

/// Raised when raw input cannot be coerced into a model at all.
///
/// Missing or empty fields are never errors; they fall back to neutral defaults.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Input must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("Field '{field}' must be text, got {found}")]
    ExpectedString { field: String, found: &'static str },

    #[error("Field '{field}' must be a list, got {found}")]
    ExpectedList { field: String, found: &'static str },

    #[error("Field '{field}' must be an object, got {found}")]
    ExpectedObject { field: String, found: &'static str },

    #[error("Unsupported schema version {0}")]
    UnsupportedVersion(u64),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
