//! Summary and detailed rendering for a day's forecast.

use crate::aggregate::{
    first_last_temperature, mean_temperature, representative_condition, round_display,
};
use crate::bucket::{
    bucket_for_detail, bucket_for_summary, DEFAULT_END_HOUR, DEFAULT_START_HOUR, MIDDAY_HOUR,
};
use crate::glyph::condition_to_glyph;
use crate::hazard::HazardFlags;
use crate::types::{DayForecast, HourlySample};

/// Render the one-line calendar event title.
///
/// Hazards are detected over the entire day's samples, not per day-part.
/// When any hazard is flagged the title leads with the warning glyphs and
/// omits the per-day-part condition glyphs entirely:
/// `⚠️☂️🌬️ AM6° / 13°`. Without hazards it reads
/// `AM🌤️6° / PM⛅13°`. An empty day-part contributes a temperature of 0
/// and no condition glyph.
pub fn format_summary(forecast: &DayForecast) -> String {
    let (morning, afternoon) = bucket_for_summary(
        &forecast.samples,
        DEFAULT_START_HOUR,
        MIDDAY_HOUR,
        DEFAULT_END_HOUR,
    );

    let morning_value = round_display(mean_temperature(&morning));
    let afternoon_value = round_display(mean_temperature(&afternoon));

    let day: Vec<&HourlySample> = forecast.samples.iter().collect();
    let hazards = HazardFlags::detect(&day);
    if hazards.any() {
        return format!("⚠️{} AM{morning_value}° / {afternoon_value}°", hazards.glyphs());
    }

    let morning_glyph = representative_condition(&morning)
        .map(condition_to_glyph)
        .unwrap_or("");
    let afternoon_glyph = representative_condition(&afternoon)
        .map(condition_to_glyph)
        .unwrap_or("");
    format!("AM{morning_glyph}{morning_value}° / PM{afternoon_glyph}{afternoon_value}°")
}

/// Render the multi-line calendar event description.
///
/// One line per non-empty 3-hour slot in ascending order, each showing the
/// slot start, the dominant condition glyph, and the first-to-last
/// temperature range, with warning glyphs appended when that slot has
/// hazards. The daily high/low trailer follows a blank line and reads the
/// forecast aggregate fields rather than recomputing from samples.
pub fn format_detail(forecast: &DayForecast) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (start, bucket) in bucket_for_detail(&forecast.samples) {
        let Some((start_temp, end_temp)) = first_last_temperature(&bucket) else {
            continue;
        };
        let glyph = representative_condition(&bucket)
            .map(condition_to_glyph)
            .unwrap_or("❓");
        let mut line = format!("{start:02}:00 {glyph} {start_temp}°~{end_temp}°C");

        let hazards = HazardFlags::detect(&bucket);
        if hazards.any() {
            line.push_str(&format!(" ⚠️{}", hazards.glyphs()));
        }
        lines.push(line);
    }
    lines.push(format!("\nHigh: {}°C | Low: {}°C", forecast.high, forecast.low));
    lines.join("\n")
}

/// Populate the forecast's derived `summary` and `description` fields.
pub fn render(forecast: &mut DayForecast) {
    forecast.summary = format_summary(forecast);
    forecast.description = format_detail(forecast);
}
