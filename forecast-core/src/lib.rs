//! Core library for the `forecast` CLI.
//!
//! This crate defines:
//! - Configuration loading & validation (typed, boundary-checked)
//! - The HTTP client for the forecast API
//! - Wire models and the summarized forecast report
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries
//! or services.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod report;

pub use client::{ForecastClient, RawForecast};
pub use config::Config;
pub use error::Error;
pub use model::{ForecastRequest, ForecastResponse};
pub use report::{DailyForecast, ForecastReport};
