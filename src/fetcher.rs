//! Client for the RASFF Window consolidated search endpoint.

use crate::config::Config;
use crate::model::{build_request_body, SearchRequest, SearchResult};
use crate::types::{HttpConfig, RasffError, Result};
use chrono::Local;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Builds the search request, posts it, and decodes the result.
pub struct NotificationFetcher {
    client: Client,
    endpoint: Url,
    page_number: u32,
    items_per_page: u32,
    notifying_countries: Vec<u32>,
}

impl NotificationFetcher {
    /// Create a fetcher for `endpoint` with default request parameters.
    pub fn new(endpoint: Url, http: &HttpConfig) -> Result<Self> {
        let defaults = build_request_body();
        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .user_agent(&http.user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            page_number: defaults.parameters.page_number,
            items_per_page: defaults.parameters.items_per_page,
            notifying_countries: defaults.notifying_country.unwrap_or_default(),
        })
    }

    /// Create a fetcher from the command-line configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut fetcher = Self::new(config.endpoint_url()?, &config.http_config())?;
        fetcher.page_number = config.page;
        fetcher.items_per_page = config.items_per_page;
        fetcher.notifying_countries = config.notifying_countries.clone();
        Ok(fetcher)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Request body for yesterday with this fetcher's pagination and country filter.
    pub fn request_body(&self) -> SearchRequest {
        SearchRequest::for_day_before(Local::now().naive_local())
            .with_pagination(self.page_number, self.items_per_page)
            .with_notifying_countries(self.notifying_countries.clone())
    }

    /// Post `request` and decode the response.
    pub async fn send_search(&self, request: &SearchRequest) -> Result<SearchResult> {
        let body = serde_json::to_vec(request).map_err(RasffError::Marshal)?;
        debug!(
            "Searching {} for {} (page {}, {} per page)",
            self.endpoint,
            request.ec_valid_date_from,
            request.parameters.page_number,
            request.parameters.items_per_page
        );
        trace!("Request body: {}", String::from_utf8_lossy(&body));

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        trace!("Response HTTP {} ({} bytes)", status, text.len());

        if !status.is_success() {
            return Err(RasffError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        let result = decode_result(&text)?;
        debug!(
            "Decoded {} notifications ({} total across {} pages)",
            result.notifications.len(),
            result.total_elements,
            result.total_pages
        );

        Ok(result)
    }

    /// Build the request for yesterday and send it.
    pub async fn fetch_yesterday(&self) -> Result<SearchResult> {
        let request = self.request_body();
        self.send_search(&request).await
    }
}

/// Decode a response body into a [`SearchResult`].
pub fn decode_result(body: &str) -> Result<SearchResult> {
    serde_json::from_str(body).map_err(RasffError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::console::{render, render_totals};
    use mockito::{Matcher, Server};

    const SCENARIO_BODY: &str = r#"{"notifications":[{"notifId":123,"ecValidationDate":"2024-01-01","reference":"REF-1","notifyingCountry":{"organizationName":"Italy","isoCode":"IT"},"subject":"Test","productCategory":{"id":1,"description":"Fruits"},"productType":{"id":2,"description":"Fresh"},"notificationClassification":{"id":3,"description":"Alert"},"riskDecision":{"id":4,"description":"Serious"},"published":true,"originCountries":[{"organizationName":"Spain","isoCode":"ES"}]}],"totalPages":1,"totalElements":1}"#;

    fn fetcher_for(server: &Server) -> NotificationFetcher {
        let endpoint = Url::parse(&server.url()).unwrap();
        let http = HttpConfig {
            timeout_secs: 5,
            ..HttpConfig::default()
        };
        NotificationFetcher::new(endpoint, &http).unwrap()
    }

    #[tokio::test]
    async fn test_search_renders_report() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("content-type", "application/json")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "parameters": {"pageNumber": 1, "itemsPerPage": 25},
                "notifyingCountry": [2],
                "riskDecision": null
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SCENARIO_BODY)
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);
        let result = fetcher.fetch_yesterday().await.unwrap();
        mock.assert_async().await;

        let report: String = render(&result).collect::<Vec<_>>().join("\n");
        let totals = render_totals(&result);

        assert!(report.contains("Notification ID: 123\n"));
        assert!(report.contains("Reference: REF-1\n"));
        assert!(report.contains("Notifying Country: Italy (IT)\n"));
        assert!(report.contains("  - Spain (ES)"));
        assert!(totals.contains("Total Pages: 1"));
        assert!(totals.contains("Total Elements: 1"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);
        let err = fetcher.fetch_yesterday().await.unwrap_err();
        assert!(matches!(err, RasffError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_missing_totals_is_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"notifications": []}"#)
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);
        let err = fetcher.fetch_yesterday().await.unwrap_err();
        assert!(matches!(err, RasffError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/")
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let fetcher = fetcher_for(&server);
        match fetcher.fetch_yesterday().await {
            Err(RasffError::UnexpectedStatus { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected UnexpectedStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 9 (discard) on localhost is not expected to accept connections.
        let endpoint = Url::parse("http://127.0.0.1:9/").unwrap();
        let fetcher = NotificationFetcher::new(endpoint, &HttpConfig::default()).unwrap();

        let err = fetcher.fetch_yesterday().await.unwrap_err();
        assert!(err.is_transport(), "got {:?}", err);
    }

    #[tokio::test]
    async fn test_configured_filters_are_sent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "parameters": {"pageNumber": 2, "itemsPerPage": 10},
                "notifyingCountry": [5, 8]
            })))
            .with_status(200)
            .with_body(r#"{"notifications": [], "totalPages": 2, "totalElements": 12}"#)
            .create_async()
            .await;

        let config = Config {
            endpoint: server.url(),
            page: 2,
            items_per_page: 10,
            notifying_countries: vec![5, 8],
            ..Config::default()
        };
        let fetcher = NotificationFetcher::from_config(&config).unwrap();
        let result = fetcher.fetch_yesterday().await.unwrap();

        mock.assert_async().await;
        assert!(result.notifications.is_empty());
        assert_eq!(result.total_elements, 12);
    }

    #[test]
    fn test_default_request_body_matches_builder() {
        let fetcher = NotificationFetcher::new(
            Url::parse(crate::config::DEFAULT_ENDPOINT).unwrap(),
            &HttpConfig::default(),
        )
        .unwrap();

        let from_fetcher = fetcher.request_body();
        let from_builder = build_request_body();
        assert_eq!(from_fetcher.parameters, from_builder.parameters);
        assert_eq!(from_fetcher.notifying_country, from_builder.notifying_country);
        assert_eq!(from_fetcher.ec_valid_date_from, from_fetcher.ec_valid_date_to);
    }
}
