//! Synchronous client for the global temperature dataset.
//!
//! The dataset is a single JSON document (`baseTemperature` plus `monthlyVariance`
//! records). It is fetched exactly once per render; there are no retries, and a
//! non-success status aborts the pipeline after logging the response body.
//!
//! Typical usage:
//! ```no_run
//! # use gtv_rs::Client;
//! let client = Client::default();
//! let dataset = client.fetch_dataset()?;
//! # Ok::<(), gtv_rs::HeatMapError>(())
//! ```
use crate::error::{HeatMapError, Result};
use crate::models::Dataset;
use log::{error, info};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Reference dataset: monthly global land-surface temperature variance since 1753.
pub const DEFAULT_DATASET_URL: &str = "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

#[derive(Debug, Clone)]
pub struct Client {
    pub url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_url(DEFAULT_DATASET_URL)
    }
}

impl Client {
    /// Client for a dataset at a custom URL.
    pub fn with_url(url: &str) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("gtv_rs/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .unwrap_or_else(|_| HttpClient::new());
        Self {
            url: url.to_string(),
            http,
        }
    }

    /// Fetch and validate the dataset.
    ///
    /// ### Errors
    /// - `Fetch`: network error, non-success status, or a body that is not JSON
    /// - `MalformedDataset` / `MalformedRecord` / `DuplicateRecord`: the JSON does not
    ///   have the expected shape
    pub fn fetch_dataset(&self) -> Result<Dataset> {
        let fetch_err = |reason: String| HeatMapError::Fetch {
            url: self.url.clone(),
            reason,
        };

        info!("GET {}", self.url);
        let resp = self
            .http
            .get(&self.url)
            .send()
            .map_err(|e| fetch_err(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            error!("dataset request failed with HTTP {status}: {body}");
            return Err(fetch_err(format!("request failed with HTTP {status}")));
        }

        let v: Value = resp
            .json()
            .map_err(|e| fetch_err(format!("decode json: {e}")))?;
        let dataset = Dataset::from_value(v)?;
        info!(
            "fetched {} monthly records (base temperature {})",
            dataset.len(),
            dataset.base_temperature
        );
        Ok(dataset)
    }
}
