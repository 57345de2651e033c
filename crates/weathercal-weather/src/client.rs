//! Open-Meteo geocoding and hourly-forecast client.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::instrument;
use weathercal_forecast::{DayForecast, HourlySample};

use crate::types::{ForecastResponse, GeocodeResponse, Geocoded, HourlyBlock, WeatherError};

const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";
const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const REQUEST_TIMEOUT_SECS: u64 = 10;

const HOURLY_FIELDS: &str = "temperature_2m,weathercode,precipitation_probability,windspeed_10m";

// Fallback when the geocoder omits the time zone.
const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

/// Client for the Open-Meteo forecast and geocoding APIs.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: reqwest::Client,
    forecast_url: String,
    geocode_url: String,
}

impl ForecastClient {
    /// Create a client against the public Open-Meteo endpoints.
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_base_urls(OPEN_METEO_URL, GEOCODE_URL)
    }

    /// Create a client against explicit endpoints (mirrors, tests).
    pub fn with_base_urls(forecast_url: &str, geocode_url: &str) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            forecast_url: forecast_url.to_string(),
            geocode_url: geocode_url.to_string(),
        })
    }

    /// Resolve a free-text place name to coordinates and a time zone.
    #[instrument(skip(self), level = "info")]
    pub async fn geocode(&self, name: &str, language: &str) -> Result<Geocoded, WeatherError> {
        let response = self
            .client
            .get(&self.geocode_url)
            .query(&[
                ("name", name),
                ("count", "1"),
                ("language", language),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: GeocodeResponse = response.json().await?;
        let result = body
            .results
            .into_iter()
            .flatten()
            .next()
            .ok_or_else(|| WeatherError::LocationNotFound(name.to_string()))?;

        let geocoded = Geocoded {
            latitude: result.latitude,
            longitude: result.longitude,
            timezone: result.timezone.unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
        };
        tracing::info!(
            "Geocoded '{}' to ({}, {}), timezone {}",
            name,
            geocoded.latitude,
            geocoded.longitude,
            geocoded.timezone
        );
        Ok(geocoded)
    }

    /// Fetch hourly forecasts for a location and group them into day
    /// forecasts over the daytime window `[start_hour, end_hour]`.
    ///
    /// Days without any in-window samples are skipped. Missing
    /// precipitation/wind arrays or entries stay `None` on the samples.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_forecasts(
        &self,
        location: &str,
        days: u8,
        start_hour: u32,
        end_hour: u32,
    ) -> Result<Vec<DayForecast>, WeatherError> {
        let geo = self.geocode(location, "en").await?;

        let response = self
            .client
            .get(&self.forecast_url)
            .query(&[
                ("latitude", geo.latitude.to_string()),
                ("longitude", geo.longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("timezone", geo.timezone.clone()),
                ("forecast_days", days.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: ForecastResponse = response.json().await?;
        let forecasts = group_by_date(location, &body.hourly, start_hour, end_hour)?;
        tracing::info!("Built {} day forecast(s) for {}", forecasts.len(), location);
        Ok(forecasts)
    }
}

/// Group the provider's parallel hourly arrays into per-date forecasts.
fn group_by_date(
    location: &str,
    hourly: &HourlyBlock,
    start_hour: u32,
    end_hour: u32,
) -> Result<Vec<DayForecast>, WeatherError> {
    let mut daily: BTreeMap<NaiveDate, Vec<HourlySample>> = BTreeMap::new();

    for (index, time) in hourly.time.iter().enumerate() {
        let time = NaiveDateTime::parse_from_str(time, "%Y-%m-%dT%H:%M")
            .map_err(|e| WeatherError::Parse(format!("Bad hourly timestamp '{time}': {e}")))?;

        let sample = HourlySample {
            time,
            temperature: match hourly.temperature_2m.get(index).copied().flatten() {
                Some(t) => t,
                None => {
                    tracing::debug!("Skipping {time}: no temperature reported");
                    continue;
                }
            },
            condition_code: match hourly.weathercode.get(index).copied().flatten() {
                Some(c) => c,
                None => {
                    tracing::debug!("Skipping {time}: no weather code reported");
                    continue;
                }
            },
            precipitation_probability: hourly
                .precipitation_probability
                .as_ref()
                .and_then(|values| values.get(index))
                .copied()
                .flatten(),
            wind_speed: hourly
                .windspeed_10m
                .as_ref()
                .and_then(|values| values.get(index))
                .copied()
                .flatten(),
        };

        if (start_hour..=end_hour).contains(&sample.hour()) {
            daily.entry(sample.time.date()).or_default().push(sample);
        }
    }

    Ok(daily
        .into_iter()
        .map(|(date, samples)| {
            let high = samples.iter().map(|s| s.temperature).fold(f64::NEG_INFINITY, f64::max);
            let low = samples.iter().map(|s| s.temperature).fold(f64::INFINITY, f64::min);
            DayForecast::new(date, location, high, low, samples)
        })
        .collect())
}
