//! Hazard flag detection over a bucket of samples.

use crate::types::HourlySample;

/// Precipitation probability (%) at or above which rain is flagged.
pub const RAIN_PROB_THRESHOLD: u8 = 40;
/// Wind speed (km/h) at or above which wind is flagged.
pub const WIND_SPEED_THRESHOLD: f64 = 30.0;
/// Temperature (°C) below which cold is flagged.
pub const COLD_TEMP_THRESHOLD: f64 = 3.0;

/// WMO codes that flag rain regardless of the reported probability
/// (drizzle, rain, freezing rain, showers, thunderstorm).
pub const RAIN_WARNING_CODES: [i32; 16] =
    [51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 80, 81, 82, 95, 96, 99];
/// WMO codes that flag snow (snowfall, snow grains, snow showers).
pub const SNOW_WARNING_CODES: [i32; 6] = [71, 73, 75, 77, 85, 86];

/// The four independent hazard flags derived from a bucket of samples.
///
/// Any flagged hazard switches the summary into warning form, so detection
/// and glyph order are part of the user-visible contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HazardFlags {
    pub rain: bool,
    pub wind: bool,
    pub cold: bool,
    pub snow: bool,
}

impl HazardFlags {
    /// Detect hazards over a bucket.
    ///
    /// Missing precipitation and wind values are excluded from the
    /// aggregates rather than treated as zero; a bucket where every value
    /// is missing aggregates to 0 for that quantity.
    pub fn detect(bucket: &[&HourlySample]) -> Self {
        let max_rain_prob = bucket
            .iter()
            .filter_map(|s| s.precipitation_probability)
            .max()
            .unwrap_or(0);
        let max_wind = bucket
            .iter()
            .filter_map(|s| s.wind_speed)
            .fold(0.0_f64, f64::max);

        let rain = max_rain_prob >= RAIN_PROB_THRESHOLD
            || bucket.iter().any(|s| RAIN_WARNING_CODES.contains(&s.condition_code));
        let wind = max_wind >= WIND_SPEED_THRESHOLD;
        let cold = bucket
            .iter()
            .map(|s| s.temperature)
            .fold(f64::INFINITY, f64::min)
            < COLD_TEMP_THRESHOLD;
        let snow = bucket.iter().any(|s| SNOW_WARNING_CODES.contains(&s.condition_code));

        Self { rain, wind, cold, snow }
    }

    /// Whether any hazard is flagged.
    pub fn any(&self) -> bool {
        self.rain || self.wind || self.cold || self.snow
    }

    /// Warning glyphs in the fixed rain, wind, cold, snow order.
    pub fn glyphs(&self) -> String {
        let mut out = String::new();
        if self.rain {
            out.push_str("☂️");
        }
        if self.wind {
            out.push_str("🌬️");
        }
        if self.cold {
            out.push_str("🥶");
        }
        if self.snow {
            out.push_str("☃️");
        }
        out
    }
}
