use chrono::NaiveDate;
use std::fmt;

use crate::{
    error::{Error, Result},
    model::ForecastResponse,
};

/// One line of the per-day forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temp_avg: i64,
}

/// Human-facing summary built from one provider response.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    pub current_temp: i64,
    pub days: Vec<DailyForecast>,
    /// Arithmetic mean of the per-day averages, floating-point.
    pub average_temp: f64,
}

impl ForecastReport {
    /// Parse a raw JSON body and summarize it.
    pub fn from_json(body: &str) -> Result<Self> {
        let response: ForecastResponse = serde_json::from_str(body)?;
        Self::from_response(response)
    }

    /// Collect per-day entries and accumulate their sum in one pass.
    pub fn from_response(response: ForecastResponse) -> Result<Self> {
        if response.forecasts.is_empty() {
            return Err(Error::NoForecastData);
        }

        let mut sum: i64 = 0;
        let days: Vec<DailyForecast> = response
            .forecasts
            .iter()
            .map(|f| {
                sum += f.parts.day.temp_avg;
                DailyForecast { date: f.date, temp_avg: f.parts.day.temp_avg }
            })
            .collect();

        let average_temp = sum as f64 / days.len() as f64;

        Ok(Self { current_temp: response.fact.temp, days, average_temp })
    }
}

impl fmt::Display for ForecastReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current temperature: {}°C", self.current_temp)?;
        writeln!(f)?;

        writeln!(f, "Forecast:")?;
        for day in &self.days {
            writeln!(f, "{}: {}°C", day.date, day.temp_avg)?;
        }
        writeln!(f)?;

        writeln!(
            f,
            "Average over {} day(s): {:.1}°C",
            self.days.len(),
            self.average_temp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_with_days(temps: &[i64]) -> String {
        let forecasts: Vec<String> = temps
            .iter()
            .enumerate()
            .map(|(i, t)| {
                format!(
                    r#"{{"date":"2024-01-{:02}","parts":{{"day":{{"temp_avg":{t}}}}}}}"#,
                    i + 1
                )
            })
            .collect();

        format!(
            r#"{{"fact":{{"temp":5}},"forecasts":[{}]}}"#,
            forecasts.join(",")
        )
    }

    #[test]
    fn summarizes_current_and_daily_temperatures() {
        let report = ForecastReport::from_json(&body_with_days(&[0, 4, 8]))
            .expect("report must build");

        assert_eq!(report.current_temp, 5);
        assert_eq!(report.days.len(), 3);
        assert_eq!(report.days[0].temp_avg, 0);
        assert_eq!(report.days[1].temp_avg, 4);
        assert_eq!(report.days[2].temp_avg, 8);
        assert_eq!(report.average_temp, 4.0);
    }

    #[test]
    fn mean_uses_floating_point_division() {
        let report = ForecastReport::from_json(&body_with_days(&[0, 1])).unwrap();

        assert_eq!(report.average_temp, 0.5);
        assert!(report.to_string().contains("0.5°C"));
    }

    #[test]
    fn display_lists_each_day_and_one_decimal_average() {
        let report = ForecastReport::from_json(&body_with_days(&[0, 4, 8])).unwrap();
        let text = report.to_string();

        assert!(text.contains("Current temperature: 5°C"));
        assert!(text.contains("2024-01-01: 0°C"));
        assert!(text.contains("2024-01-02: 4°C"));
        assert!(text.contains("2024-01-03: 8°C"));
        assert!(text.contains("Average over 3 day(s): 4.0°C"));
    }

    #[test]
    fn empty_forecast_list_reports_no_data() {
        let err = ForecastReport::from_json(r#"{"fact":{"temp":5},"forecasts":[]}"#)
            .unwrap_err();

        assert!(matches!(err, Error::NoForecastData));
    }

    #[test]
    fn missing_fact_is_unexpected_response() {
        let err = ForecastReport::from_json(r#"{"forecasts":[]}"#).unwrap_err();

        assert!(matches!(err, Error::UnexpectedResponse(_)));
    }

    #[test]
    fn malformed_body_is_unexpected_response() {
        let err = ForecastReport::from_json("not json at all").unwrap_err();

        assert!(matches!(err, Error::UnexpectedResponse(_)));
    }

    #[test]
    fn negative_temperatures_average_correctly() {
        let report = ForecastReport::from_json(&body_with_days(&[-10, -5, 3])).unwrap();

        assert_eq!(report.average_temp, -4.0);
    }
}
