/// Failures a forecast run can surface to the user.
///
/// Configuration problems are raised before any network activity, so a
/// missing or empty API key never results in an outbound request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config file unreadable, or a required value missing/invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Connection failure, timeout, or interruption during the HTTP call.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected JSON shape.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(#[from] serde_json::Error),

    /// The provider returned an empty forecast list.
    #[error("no forecast data in response")]
    NoForecastData,
}

pub type Result<T> = std::result::Result<T, Error>;
