//! rasffwatch - daily report of RASFF Window food and feed safety notifications.
//!
//! This library:
//! - Builds the consolidated search request for the previous day
//! - Posts it to the public RASFF Window search endpoint
//! - Decodes the JSON response into typed notifications
//! - Renders a plain-text report
//!
//! # Example
//!
//! ```no_run
//! use rasffwatch::{Config, NotificationFetcher};
//!
//! #[tokio::main]
//! async fn main() {
//!     let fetcher = NotificationFetcher::from_config(&Config::default()).unwrap();
//!     let result = fetcher.fetch_yesterday().await.unwrap();
//!     for block in rasffwatch::report::render(&result) {
//!         println!("{}", block);
//!     }
//! }
//! ```

pub mod config;
pub mod fetcher;
pub mod model;
pub mod report;
pub mod types;

pub use config::Config;
pub use fetcher::NotificationFetcher;
pub use model::{
    build_request_body, CodeDescription, Country, Notification, Pagination, SearchRequest,
    SearchResult,
};
pub use types::{HttpConfig, RasffError, Result};
