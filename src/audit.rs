//! # Page Audit Module
//!
//! Fetches a single page, extracts its on-page SEO signals, and checks the
//! page's origin for `robots.txt` and `sitemap.xml`.
//!
//! ## Key Components
//!
//! - `AuditConfig`: User agent, timeout and auxiliary-failure policy
//! - `Auditor`: Runs the fetch, extract and probe steps in order
//! - `AuditReport`: The flat record of signals for a successful audit
//! - `AuditOutcome`: A report or a single error message, as served to clients
//!
//! The three requests an audit makes run one after another. Nothing is
//! cached between audits.

mod config;
mod error;
mod extract;

pub use config::{AuditConfig, AuditConfigBuilder, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
pub use error::AuditError;
pub use extract::extract_signals;

use crate::http::HttpClient;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use url::Url;

/// Placeholder reported for a text signal whose element is absent
pub const MISSING: &str = "Missing";

/// Signals extracted from the page body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSignals {
    /// Trimmed text of the first `<title>`
    pub title: String,

    /// Trimmed `content` of `<meta name="description">`
    pub meta_description: String,

    /// Trimmed text of the first `<h1>`
    pub h1: String,

    /// Number of `<img>` elements
    pub total_images: usize,

    /// Number of images with an absent or empty `alt`
    pub image_alt_missing: usize,

    /// Visible words in the body
    pub word_count: usize,

    /// Whether a canonical link with a non-empty `href` is present
    pub has_canonical: bool,
}

/// Result of a successful audit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    #[serde(flatten)]
    pub signals: PageSignals,

    /// `/robots.txt` on the page's origin answered 200
    pub has_robots_txt: bool,

    /// `/sitemap.xml` on the page's origin answered 200
    pub has_sitemap_xml: bool,
}

/// What an audit reports to its caller: either the full report or a single
/// error message, never both
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuditOutcome {
    Report(AuditReport),
    Failed { error: String },
}

impl From<Result<AuditReport, AuditError>> for AuditOutcome {
    fn from(result: Result<AuditReport, AuditError>) -> Self {
        match result {
            Ok(report) => AuditOutcome::Report(report),
            Err(e) => AuditOutcome::Failed {
                error: e.to_string(),
            },
        }
    }
}

/// Runs audits with a shared client and configuration
#[derive(Debug, Clone)]
pub struct Auditor {
    http: HttpClient,
    config: AuditConfig,
}

impl Auditor {
    /// Create an auditor from its configuration
    pub fn new(config: AuditConfig) -> Result<Self, AuditError> {
        let http = HttpClient::new(&config)?;
        Ok(Self { http, config })
    }

    /// The configuration this auditor was built with
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Audit a page
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL of the page to audit
    ///
    /// # Returns
    ///
    /// The report, or the first error that stopped the audit
    #[instrument(skip(self))]
    pub async fn audit(&self, url: &str) -> Result<AuditReport, AuditError> {
        let target = Url::parse(url)?;

        let page = self.http.fetch(&target).await?;
        if page.status != StatusCode::OK {
            info!(status = page.status.as_u16(), "Page did not answer 200");
            return Err(AuditError::Status(page.status.as_u16()));
        }

        let signals = extract_signals(&page.body)?;

        let has_robots_txt = self.probe(&target, "/robots.txt").await?;
        let has_sitemap_xml = self.probe(&target, "/sitemap.xml").await?;

        info!(word_count = signals.word_count, has_robots_txt, has_sitemap_xml, "Audit complete");

        Ok(AuditReport {
            signals,
            has_robots_txt,
            has_sitemap_xml,
        })
    }

    /// Audit a page and flatten any failure into an error message
    pub async fn run(&self, url: &str) -> AuditOutcome {
        self.audit(url).await.into()
    }

    /// Check whether `path` exists on the origin of `page`.
    ///
    /// Transport failures count as absent unless `strict_auxiliary` is set.
    async fn probe(&self, page: &Url, path: &str) -> Result<bool, AuditError> {
        let url = page.join(path)?;
        match self.http.exists(&url).await {
            Ok(found) => Ok(found),
            Err(e) if !self.config.strict_auxiliary => {
                warn!(url = %url, error = %e, "Auxiliary check failed, reporting as absent");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
