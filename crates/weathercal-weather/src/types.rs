use serde::Deserialize;

/// Weather fetch errors.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Malformed forecast response: {0}")]
    Parse(String),
}

/// A geocoded place: coordinates plus the provider-reported time zone.
#[derive(Debug, Clone)]
pub struct Geocoded {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

// Open-Meteo geocoding API response shape.

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<String>,
}

// Open-Meteo forecast API response shape: parallel hourly arrays.

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub hourly: HourlyBlock,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    pub weathercode: Vec<Option<i32>>,
    #[serde(default)]
    pub precipitation_probability: Option<Vec<Option<u8>>>,
    #[serde(default)]
    pub windspeed_10m: Option<Vec<Option<f64>>>,
}
