//! End-to-end rendering over realistic day forecasts.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::NaiveDate;
use weathercal_forecast::{render, DayForecast, HourlySample};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn sample(hour: u32, temperature: f64, code: i32, rain: u8, wind: f64) -> HourlySample {
    HourlySample {
        time: day().and_hms_opt(hour, 0, 0).unwrap(),
        temperature,
        condition_code: code,
        precipitation_probability: Some(rain),
        wind_speed: Some(wind),
    }
}

#[test]
fn hazardous_day_renders_warning_title_and_slot_warnings() {
    let hours = [6, 7, 9, 10, 12, 13, 15, 16];
    let temps = [7.0, 7.0, 7.0, 1.0, 13.0, 13.0, 13.0, 13.0];
    let codes = [61, 61, 1, 1, 1, 1, 1, 1];
    let rain = [60, 45, 0, 0, 0, 0, 0, 0];
    let wind = [12.0, 10.0, 35.0, 32.0, 8.0, 7.0, 12.0, 10.0];

    let samples: Vec<HourlySample> = hours
        .iter()
        .enumerate()
        .map(|(i, &h)| sample(h, temps[i], codes[i], rain[i], wind[i]))
        .collect();

    let mut forecast = DayForecast::new(day(), "Munich, Germany", 13.0, 1.0, samples);
    render(&mut forecast);

    assert_eq!(forecast.summary, "⚠️☂️🌬️🥶 AM6° / 13°");
    assert_eq!(
        forecast.description,
        "06:00 🌧️ 7°~7°C ⚠️☂️\n\
         09:00 🌤️ 7°~1°C ⚠️🌬️🥶\n\
         12:00 🌤️ 13°~13°C\n\
         15:00 🌤️ 13°~13°C\n\
         \nHigh: 13°C | Low: 1°C"
    );
}

#[test]
fn calm_day_renders_day_part_glyph_title() {
    let hours = [6, 9, 12, 15];
    let temps = [6.0, 6.0, 13.0, 13.0];
    let codes = [1, 1, 2, 2];
    let rain = [5, 5, 0, 0];
    let wind = [10.0, 12.0, 8.0, 6.0];

    let samples: Vec<HourlySample> = hours
        .iter()
        .enumerate()
        .map(|(i, &h)| sample(h, temps[i], codes[i], rain[i], wind[i]))
        .collect();

    let mut forecast = DayForecast::new(day(), "Munich, Germany", 13.0, 6.0, samples);
    render(&mut forecast);

    assert_eq!(forecast.summary, "AM🌤️6° / PM⛅13°");
    assert_eq!(
        forecast.description,
        "06:00 🌤️ 6°~6°C\n\
         09:00 🌤️ 6°~6°C\n\
         12:00 ⛅ 13°~13°C\n\
         15:00 ⛅ 13°~13°C\n\
         \nHigh: 13°C | Low: 6°C"
    );
}

#[test]
fn empty_day_degrades_without_failing() {
    let mut forecast = DayForecast::new(day(), "Munich, Germany", 20.0, 10.0, vec![]);
    render(&mut forecast);

    assert_eq!(forecast.summary, "AM0° / PM0°");
    assert_eq!(forecast.description, "\nHigh: 20°C | Low: 10°C");
}

#[test]
fn rendering_is_byte_stable_across_calls() {
    let samples = vec![
        sample(7, 3.4, 51, 35, 18.0),
        sample(11, 5.1, 2, 20, 22.0),
        sample(14, 8.8, 2, 10, 16.0),
        sample(19, 6.2, 3, 15, 12.0),
    ];
    let mut first = DayForecast::new(day(), "Bergen, Norway", 8.8, 3.4, samples.clone());
    let mut second = DayForecast::new(day(), "Bergen, Norway", 8.8, 3.4, samples);
    render(&mut first);
    render(&mut second);

    assert_eq!(first.summary, second.summary);
    assert_eq!(first.description, second.description);
}
