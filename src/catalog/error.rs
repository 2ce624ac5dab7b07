//! Errors surfaced by catalog lookups.

/// Errors that can occur while talking to the metadata service.
///
/// Callers are not expected to distinguish transport failures from
/// upstream error statuses; both mean "the lookup failed". The variants
/// exist for diagnostics.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MetadataError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl MetadataError {
    /// Create a status error, keeping only the head of the body.
    pub fn status(status: u16, body: &[u8]) -> Self {
        Self::Status {
            status,
            body: String::from_utf8_lossy(body).chars().take(200).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_truncates_body() {
        let body = "x".repeat(1000);
        let err = MetadataError::status(503, body.as_bytes());
        match err {
            MetadataError::Status { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body.len(), 200);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let err = MetadataError::status(404, br#"{"error":"Not Found"}"#);
        assert!(err.to_string().starts_with("HTTP 404"));
    }
}
