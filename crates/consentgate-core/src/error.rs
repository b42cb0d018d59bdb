//! Error types for consentgate

use thiserror::Error;

/// Errors raised while interpreting external input.
///
/// The gating state machine itself cannot fail; these only arise when key
/// names or reports come from outside the process (CLI arguments, JSON).
#[derive(Error, Debug)]
pub enum ConsentError {
    /// Agreement key did not match any known agreement
    #[error("Unknown agreement: {0}")]
    UnknownAgreement(String),

    /// Document key did not match any known document
    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    /// Name did not match any document or agreement
    #[error("Unknown requirement: {0}")]
    UnknownRequirement(String),

    /// Error during JSON serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using ConsentError
pub type ConsentResult<T> = Result<T, ConsentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConsentError::UnknownDocument("form1040".to_string());
        assert_eq!(format!("{}", err), "Unknown document: form1040");
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: ConsentError = json_err.into();
        assert!(matches!(err, ConsentError::Serialization(_)));
    }
}
