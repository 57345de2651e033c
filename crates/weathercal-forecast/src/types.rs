use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// One hourly observation in the provider's local time zone.
///
/// Immutable once produced by the fetch layer; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySample {
    pub time: NaiveDateTime,
    /// Air temperature in °C.
    pub temperature: f64,
    /// WMO weather code as reported by Open-Meteo.
    pub condition_code: i32,
    /// Precipitation probability in percent, when the provider reports it.
    pub precipitation_probability: Option<u8>,
    /// Wind speed in km/h, when the provider reports it.
    pub wind_speed: Option<f64>,
}

impl HourlySample {
    /// Local hour of the observation (0-23).
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }
}

/// Weather forecast for a single day at a single location.
///
/// `samples` are in chronological order; the bucketing logic relies on the
/// first element of a bucket being the earliest and the last the latest.
/// `summary` and `description` start empty and are populated exactly once
/// by [`crate::format::render`], after which the store and calendar layers
/// treat the value as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub location: String,
    /// Daily high over the daytime window, in °C.
    pub high: f64,
    /// Daily low over the daytime window, in °C.
    pub low: f64,
    pub samples: Vec<HourlySample>,
    /// Calendar event title, e.g. "AM⛅15° / PM☁️19°".
    pub summary: String,
    /// Multi-line calendar event body.
    pub description: String,
    pub fetched_at: DateTime<Utc>,
}

impl DayForecast {
    pub fn new(
        date: NaiveDate,
        location: impl Into<String>,
        high: f64,
        low: f64,
        samples: Vec<HourlySample>,
    ) -> Self {
        Self {
            date,
            location: location.into(),
            high,
            low,
            samples,
            summary: String::new(),
            description: String::new(),
            fetched_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn sample_hour_is_local_hour() {
        let time = NaiveDate::from_ymd_opt(2025, 8, 1)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        let sample = HourlySample {
            time,
            temperature: 21.0,
            condition_code: 1,
            precipitation_probability: None,
            wind_speed: None,
        };
        assert_eq!(sample.hour(), 14);
    }

    #[test]
    fn new_forecast_has_empty_derived_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
        let forecast = DayForecast::new(date, "Munich, Germany", 23.0, 14.0, vec![]);
        assert!(forecast.summary.is_empty());
        assert!(forecast.description.is_empty());
    }
}
