//! WMO weather code to display glyph mapping.
//!
//! Ref: https://open-meteo.com/en/docs

/// Map an Open-Meteo WMO weather code to its display glyph.
///
/// The associations are user-visible output and fixed; codes outside the
/// table render the generic unknown glyph rather than failing.
pub fn condition_to_glyph(code: i32) -> &'static str {
    match code {
        0 => "☀️",            // Clear
        1 => "🌤️",            // Mainly clear
        2 => "⛅",            // Partly cloudy
        3 => "☁️",            // Overcast
        45 | 48 => "🌫️",      // Fog
        51 => "🌦️",           // Light drizzle
        61 | 63 | 65 => "🌧️", // Rain
        71 => "❄️",            // Snow
        80 => "🌦️",           // Showers
        95 => "⛈️",           // Thunderstorm
        _ => "❓",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_fixed_glyphs() {
        assert_eq!(condition_to_glyph(0), "☀️");
        assert_eq!(condition_to_glyph(1), "🌤️");
        assert_eq!(condition_to_glyph(2), "⛅");
        assert_eq!(condition_to_glyph(3), "☁️");
        assert_eq!(condition_to_glyph(45), "🌫️");
        assert_eq!(condition_to_glyph(48), "🌫️");
        assert_eq!(condition_to_glyph(51), "🌦️");
        assert_eq!(condition_to_glyph(61), "🌧️");
        assert_eq!(condition_to_glyph(63), "🌧️");
        assert_eq!(condition_to_glyph(65), "🌧️");
        assert_eq!(condition_to_glyph(71), "❄️");
        assert_eq!(condition_to_glyph(80), "🌦️");
        assert_eq!(condition_to_glyph(95), "⛈️");
    }

    #[test]
    fn unmapped_codes_render_unknown() {
        assert_eq!(condition_to_glyph(4), "❓");
        assert_eq!(condition_to_glyph(77), "❓");
        assert_eq!(condition_to_glyph(999), "❓");
        assert_eq!(condition_to_glyph(-1), "❓");
    }
}
