//! # seo-audit - On-page SEO checks for a single URL
//!
//! This crate fetches one web page, reads a handful of on-page SEO signals
//! from its HTML, and checks whether the page's origin serves `robots.txt`
//! and `sitemap.xml`. It can be used as a library, from the command line, or
//! behind the bundled HTTP endpoint.
//!
//! ## Features
//!
//! - Title, meta description and first `<h1>` with a `"Missing"` sentinel
//! - Image `alt` coverage and visible word count
//! - Canonical link detection
//! - `robots.txt` and `sitemap.xml` presence on the page's origin
//! - An axum endpoint (`POST /api/seo-audit`) with configurable CORS
//!
//! ## Example
//!
//! ```rust,no_run
//! use seo_audit::audit::{AuditConfig, Auditor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let auditor = Auditor::new(AuditConfig::default())?;
//!     let report = auditor.audit("https://example.com/").await?;
//!
//!     println!("{}: {} words", report.signals.title, report.signals.word_count);
//!     Ok(())
//! }
//! ```

mod error;
pub mod audit;
pub mod http;
pub mod server;

pub use error::Error;

/// Re-export of types module for public use
pub mod prelude {
    pub use crate::audit::{AuditConfig, AuditError, AuditOutcome, AuditReport, Auditor};
    pub use crate::error::Error;
    pub use crate::error::Result;
    pub use crate::server::ServerConfig;
}
