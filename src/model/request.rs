//! Search request body sent to the consolidated search endpoint.

use chrono::{Days, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Notifying country id applied when no other country filter is configured.
pub const DEFAULT_NOTIFYING_COUNTRY: u32 = 2;

pub const DEFAULT_PAGE_NUMBER: u32 = 1;

pub const DEFAULT_ITEMS_PER_PAGE: u32 = 25;

/// Layout of `ecValidDateFrom` / `ecValidDateTo` (`DD-MM-YYYY HH:MM:SS`).
pub const DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Pagination block (`parameters` in the request JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_number: u32,
    pub items_per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Search request. Every filter is independently optional and an unset
/// filter is sent as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub parameters: Pagination,
    pub notification_reference: Option<String>,
    pub subject: Option<String>,
    pub ec_valid_date_from: String,
    pub ec_valid_date_to: String,
    pub notifying_country: Option<Vec<u32>>,
    pub origin_country: Option<Vec<u32>>,
    pub distribution_country: Option<Vec<u32>>,
    pub notification_type: Option<Vec<u32>>,
    pub notification_classification: Option<Vec<u32>>,
    pub notification_basis: Option<Vec<u32>>,
    pub product_category: Option<Vec<u32>>,
    pub action_taken: Option<Vec<u32>>,
    pub hazard_category: Option<Vec<u32>>,
    pub risk_decision: Option<Vec<u32>>,
}

impl SearchRequest {
    /// Request for the day before `now`.
    ///
    /// Both ends of the validation date window are set to the same instant,
    /// one calendar day before `now`.
    pub fn for_day_before(now: NaiveDateTime) -> Self {
        let date = format_window_date(day_before(now));

        Self {
            parameters: Pagination::default(),
            notification_reference: None,
            subject: None,
            ec_valid_date_from: date.clone(),
            ec_valid_date_to: date,
            notifying_country: Some(vec![DEFAULT_NOTIFYING_COUNTRY]),
            origin_country: None,
            distribution_country: None,
            notification_type: None,
            notification_classification: None,
            notification_basis: None,
            product_category: None,
            action_taken: None,
            hazard_category: None,
            risk_decision: None,
        }
    }

    /// Replace the pagination block.
    pub fn with_pagination(mut self, page_number: u32, items_per_page: u32) -> Self {
        self.parameters = Pagination {
            page_number,
            items_per_page,
        };
        self
    }

    /// Replace the notifying country filter. An empty list unsets it.
    pub fn with_notifying_countries(mut self, countries: Vec<u32>) -> Self {
        self.notifying_country = if countries.is_empty() {
            None
        } else {
            Some(countries)
        };
        self
    }
}

/// Default request body: page 1, 25 items, yesterday in local time.
pub fn build_request_body() -> SearchRequest {
    SearchRequest::for_day_before(Local::now().naive_local())
}

fn day_before(now: NaiveDateTime) -> NaiveDateTime {
    now.checked_sub_days(Days::new(1))
        .unwrap_or(now - chrono::Duration::days(1))
}

fn format_window_date(at: NaiveDateTime) -> String {
    at.format(DATE_FORMAT).to_string()
}
