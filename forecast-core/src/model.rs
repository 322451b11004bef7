use chrono::NaiveDate;
use serde::Deserialize;

/// Validated request parameters handed to the client.
///
/// Built from [`crate::Config`]; by the time a value of this type exists,
/// all string-to-number parsing has already happened at the config
/// boundary.
#[derive(Debug, Clone, Copy)]
pub struct ForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub days: u32,
}

/// Top-level provider response: current conditions plus per-day forecasts.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub fact: Fact,
    pub forecasts: Vec<DayForecast>,
}

/// Current conditions ("fact" in the provider JSON).
#[derive(Debug, Deserialize)]
pub struct Fact {
    /// Present temperature, integer degrees Celsius.
    pub temp: i64,
}

#[derive(Debug, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub parts: Parts,
}

#[derive(Debug, Deserialize)]
pub struct Parts {
    pub day: DayPart,
}

#[derive(Debug, Deserialize)]
pub struct DayPart {
    /// Average daytime temperature, integer degrees Celsius.
    pub temp_avg: i64,
}
