use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::{error::Result, model::ForecastRequest};

pub const DEFAULT_BASE_URL: &str = "https://api.weather.yandex.ru";

/// The credential travels in a header, not as a URL query parameter, so it
/// stays out of request logs that capture only the URL.
const API_KEY_HEADER: &str = "X-Yandex-Weather-Key";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// HTTP response before JSON parsing, kept so the caller can echo the raw
/// body for diagnostics.
#[derive(Debug)]
pub struct RawForecast {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl ForecastClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Like [`ForecastClient::new`] but targeting a different host; tests
    /// point this at a local stub server.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { api_key, base_url, http })
    }

    /// Request URL for the given parameters.
    ///
    /// `format!` renders floats with a decimal point regardless of host
    /// locale; six fractional digits match the provider examples
    /// (`lat=55.750000`).
    pub fn forecast_url(&self, request: &ForecastRequest) -> String {
        format!(
            "{}/v2/forecast?lat={:.6}&lon={:.6}&limit={}",
            self.base_url, request.latitude, request.longitude, request.days
        )
    }

    /// Perform the single outbound GET and read the body.
    ///
    /// Any HTTP status is returned to the caller; only transport-level
    /// failures become [`crate::Error::Network`]. Nothing is retried.
    pub async fn fetch(&self, request: &ForecastRequest) -> Result<RawForecast> {
        let url = self.forecast_url(request);
        log::debug!("GET {url}");

        let res = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        Ok(RawForecast { status, body })
    }
}
