//! Error types for machine uploads.
//!
//! Each failure mode of the upload transaction is distinct so callers
//! can report connectivity, deadline, and protocol problems
//! separately; nothing is ever silently swallowed.

use thiserror::Error;

/// Errors that can occur while talking to the plotter machine.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The machine could not be reached at all.
    #[error("Machine at '{host}' is unreachable: {reason}")]
    Unreachable { host: String, reason: String },

    /// The machine did not respond within the configured deadline.
    #[error("Timed out waiting for machine at '{host}'")]
    Timeout { host: String },

    /// The machine answered with an unexpected status or body.
    #[error("Unexpected machine response (status {status}): {body}")]
    Protocol { status: u16, body: String },

    /// A response arrived but its body was not the expected JSON.
    #[error("Malformed machine response: {0}")]
    InvalidResponse(String),

    /// Every candidate filename up to the rename cap was taken.
    #[error("No free filename found for '{base}' after {attempts} attempts")]
    NameExhausted { base: String, attempts: u32 },

    /// Transport-level failure that is neither a refusal nor a timeout.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type alias for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_error_display() {
        let err = UploadError::Unreachable {
            host: "plotter.local".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Machine at 'plotter.local' is unreachable: connection refused"
        );

        let err = UploadError::Protocol {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unexpected machine response (status 500): internal error"
        );

        let err = UploadError::NameExhausted {
            base: "drawing".to_string(),
            attempts: 100,
        };
        assert_eq!(
            err.to_string(),
            "No free filename found for 'drawing' after 100 attempts"
        );
    }
}
