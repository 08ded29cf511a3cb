//! HTTP client implementation for the seo-audit crate
//!
//! This module provides the client used to fetch audited pages and probe
//! for well-known files on the same origin.

use crate::audit::{AuditConfig, AuditError};
use reqwest::{Client as ReqwestClient, StatusCode};
use tracing::{debug, instrument};
use url::Url;

/// A fetched document
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code of the final response
    pub status: StatusCode,

    /// Response body decoded as text
    pub body: String,
}

/// HTTP client for audit requests
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The underlying reqwest client
    client: ReqwestClient,
}

impl HttpClient {
    /// Create a new HTTP client carrying the configured user agent and timeout
    pub fn new(config: &AuditConfig) -> Result<Self, AuditError> {
        let client = ReqwestClient::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(|e| AuditError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    /// Perform a GET request and return the status and body
    #[instrument(skip(self, url), fields(url = %url), level = "debug")]
    pub async fn fetch(&self, url: &Url) -> Result<FetchedPage, AuditError> {
        debug!("Sending GET request");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        Ok(FetchedPage { status, body })
    }

    /// Perform a GET request and report whether it answered 200
    #[instrument(skip(self, url), fields(url = %url), level = "debug")]
    pub async fn exists(&self, url: &Url) -> Result<bool, AuditError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "Checked resource");

        Ok(status == StatusCode::OK)
    }
}
