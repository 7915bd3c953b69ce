//! Command-line configuration.

use crate::model::request::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_NOTIFYING_COUNTRY, DEFAULT_PAGE_NUMBER};
use crate::types::{HttpConfig, RasffError, Result};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

/// Public RASFF Window consolidated search endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://webgate.ec.europa.eu/rasff-window/backend/public/notification/search/consolidated/";

/// Report of yesterday's RASFF food and feed safety notifications.
#[derive(Parser, Debug, Clone)]
#[command(name = "rasffwatch")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Search endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Result page to request
    #[arg(long, default_value_t = DEFAULT_PAGE_NUMBER)]
    pub page: u32,

    /// Number of notifications per page
    #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE)]
    pub items_per_page: u32,

    /// Notifying country id filter (repeatable)
    #[arg(long = "notifying-country", default_values_t = [DEFAULT_NOTIFYING_COUNTRY])]
    pub notifying_countries: Vec<u32>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the result JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: 30,
            page: DEFAULT_PAGE_NUMBER,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            notifying_countries: vec![DEFAULT_NOTIFYING_COUNTRY],
            json: false,
            output: None,
        }
    }
}

impl Config {
    /// Get HTTP configuration for the fetcher.
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            timeout_secs: self.timeout,
            ..HttpConfig::default()
        }
    }

    /// Parse and validate the endpoint.
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| RasffError::Config(format!("invalid endpoint '{}': {}", self.endpoint, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(RasffError::Config(format!(
                "unsupported endpoint scheme '{}'",
                other
            ))),
        }
    }
}
