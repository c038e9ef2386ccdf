use crate::parser::{parse_countries, parse_teams};
use crate::types::{CountryRecord, TeamRecord};

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

// The sandbox serves an interstitial to clients without a browser UA.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const BODY_PREVIEW_CHARS: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("JSON decoding error: {0}")]
    JsonDecodeError(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct WebScraper {
    client: Client,
    base_url: String,
}

impl WebScraper {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: crate::BASE_URL.to_string(),
        })
    }

    /// Fetches the AJAX film endpoint for one year and returns the parsed
    /// JSON unchanged. No reshaping happens here; the persistence layer
    /// decides how to store the value based on its shape.
    pub async fn fetch_film_data(&self, year: u16) -> Result<Value, ScraperError> {
        let url = format!(
            "{}/pages/ajax-javascript/?ajax=true&year={}",
            self.base_url, year
        );
        log::info!("Fetching film data for {}...", year);
        let body = self.get_text(&url).await?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                log::error!("JSON decoding error: {}", e);
                log::debug!("Raw response that caused JSON error: {}", body);
                Err(e.into())
            }
        }
    }

    pub async fn fetch_hockey_teams(&self) -> Result<Vec<TeamRecord>, ScraperError> {
        let url = format!("{}/pages/forms/", self.base_url);
        log::info!("Fetching hockey team listing...");
        let html = self.get_text(&url).await?;
        Ok(parse_teams(&html))
    }

    pub async fn fetch_countries(&self) -> Result<Vec<CountryRecord>, ScraperError> {
        let url = format!("{}/pages/advanced/", self.base_url);
        log::info!("Fetching country listing...");
        let html = self.get_text(&url).await?;
        Ok(parse_countries(&html))
    }

    async fn get_text(&self, url: &str) -> Result<String, ScraperError> {
        let body = self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|e| log::error!("Error fetching {}: {}", url, e))?
            .error_for_status()
            .inspect_err(|e| log::error!("Error fetching {}: {}", url, e))?
            .text()
            .await
            .inspect_err(|e| log::error!("Error reading body of {}: {}", url, e))?;

        log::debug!("Successfully fetched URL: {}", url);
        log::debug!("Raw response content: {}", body_preview(&body));
        Ok(body)
    }
}

fn body_preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
