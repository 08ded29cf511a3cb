//! Error types for the seo-audit crate

use crate::audit::AuditError;
use thiserror::Error;

/// Result type for seo-audit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for operations outside a single audit (startup, serving)
#[derive(Debug, Error)]
pub enum Error {
    /// Socket or other I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// Audit pipeline error
    #[error("Audit error: {0}")]
    Audit(#[from] AuditError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_error_conversion() {
        let err: Error = AuditError::Status(500).into();
        assert!(matches!(err, Error::Audit(AuditError::Status(500))));
        assert_eq!(err.to_string(), "Audit error: Status code: 500");
    }
}
