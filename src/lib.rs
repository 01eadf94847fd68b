//! # report-dl
//!
//! Client library for retrieving asynchronously generated reports over HTTPS.
//!
//! ## Design Philosophy
//!
//! report-dl is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Sequential by contract** - One in-flight request at a time; the only
//!   suspension point is the poll wait between status checks
//! - **Explicit about timeouts** - An exhausted poll budget is a distinct
//!   error, never an empty result location
//! - **Testable at the seams** - The poll wait goes through the [`Waiter`]
//!   trait so tests and embedders can substitute the delay
//!
//! ## Quick Start
//!
//! ```no_run
//! use report_dl::{Config, Credentials, ReportFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         credentials: Credentials {
//!             app: "yourApp".to_string(),
//!             vendor: "yourVendor".to_string(),
//!             business_unit: "yourBu".to_string(),
//!             username: "yourName".to_string(),
//!             password: "yourPwd".to_string(),
//!         },
//!         report_id: "yourReportId".to_string(),
//!         output_path: "report.csv".into(),
//!         ..Default::default()
//!     };
//!
//!     let fetcher = ReportFetcher::new(config)?;
//!     let written = fetcher.fetch_report().await?;
//!     println!("report written to {}", written.display());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Core fetcher implementation (decomposed into focused submodules)
pub mod fetcher;
/// Core types and wire-contract response bodies
pub mod types;
/// Injectable wait primitive for the poll loop
pub mod wait;

// Re-export commonly used types
pub use config::{Config, Credentials, PollConfig};
pub use error::{Error, Result, Stage};
pub use fetcher::{ReportFetcher, encode_auth_key};
pub use types::{JobId, PollOutcome, Session};
pub use wait::{NoWait, TokioWaiter, Waiter};
