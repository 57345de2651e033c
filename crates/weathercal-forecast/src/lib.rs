//! Forecast aggregation and formatting engine.
//!
//! Pure, synchronous computation over one day's ordered hourly samples:
//! day-part and slot bucketing, representative temperatures and conditions,
//! hazard detection, and the two rendered forms consumed by the calendar
//! sync layer (one-line event title, multi-line event description).
//!
//! The engine performs no I/O and holds no shared state; it is safe to call
//! concurrently for different [`DayForecast`] instances.

pub mod aggregate;
pub mod bucket;
pub mod format;
pub mod glyph;
pub mod hazard;
pub mod types;

pub use format::{format_detail, format_summary, render};
pub use glyph::condition_to_glyph;
pub use hazard::HazardFlags;
pub use types::{DayForecast, HourlySample};
