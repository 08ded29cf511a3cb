//! # Audit Configuration Module
//!
//! Settings shared by every fetch an audit performs: the identifying
//! `User-Agent`, the per-request timeout, and how a failing `robots.txt` or
//! `sitemap.xml` request is treated. Built through `AuditConfigBuilder`.

use std::time::Duration;

/// Default `User-Agent` sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for an audit
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// User agent to use for requests
    pub user_agent: String,

    /// Timeout applied to each request, in seconds
    pub timeout_secs: u64,

    /// Whether a transport failure on `robots.txt` or `sitemap.xml` fails the
    /// whole audit instead of reporting the file as absent
    pub strict_auxiliary: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            strict_auxiliary: false,
        }
    }
}

/// Builder for AuditConfig
#[derive(Debug, Default)]
pub struct AuditConfigBuilder {
    config: AuditConfig,
}

impl AuditConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: AuditConfig::default(),
        }
    }

    /// Set the user agent to use for requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout in seconds
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Set whether auxiliary transport failures abort the audit
    pub fn strict_auxiliary(mut self, strict_auxiliary: bool) -> Self {
        self.config.strict_auxiliary = strict_auxiliary;
        self
    }

    /// Build the configuration
    pub fn build(self) -> AuditConfig {
        self.config
    }
}

impl AuditConfig {
    /// Create a new builder
    pub fn builder() -> AuditConfigBuilder {
        AuditConfigBuilder::new()
    }

    /// Get the timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::default();
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(!config.strict_auxiliary);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AuditConfig::builder()
            .user_agent("audit-bot/1.0")
            .timeout_secs(3)
            .strict_auxiliary(true)
            .build();

        assert_eq!(config.user_agent, "audit-bot/1.0");
        assert_eq!(config.timeout_secs, 3);
        assert!(config.strict_auxiliary);
    }
}
