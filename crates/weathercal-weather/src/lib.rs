//! Open-Meteo forecast fetching for weathercal.
//!
//! Geocodes free-text place names and retrieves hourly forecasts, grouping
//! them into per-day [`weathercal_forecast::DayForecast`] values ready for
//! the formatting engine.

pub mod client;
pub mod types;

pub use client::ForecastClient;
pub use types::{Geocoded, WeatherError};
