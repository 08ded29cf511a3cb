//! Error types for the audit pipeline

use thiserror::Error;

/// Error type for a single audit.
///
/// The `Display` output is exactly what the endpoint reports in its `error`
/// field, so variants render the underlying message without a prefix.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The target could not be parsed as an absolute URL
    #[error("{0}")]
    InvalidUrl(#[from] url::ParseError),

    /// DNS, connection, TLS or timeout failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The primary page answered with something other than 200
    #[error("Status code: {0}")]
    Status(u16),

    /// HTML could not be processed
    #[error("HTML parsing error: {0}")]
    HtmlParse(String),

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        assert_eq!(AuditError::Status(404).to_string(), "Status code: 404");
        assert_eq!(AuditError::Status(503).to_string(), "Status code: 503");
    }

    #[test]
    fn test_invalid_url_message_is_unprefixed() {
        let err: AuditError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.to_string(), "relative URL without a base");
    }
}
