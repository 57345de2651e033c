//! Representative values computed over a bucket of samples.

use crate::types::HourlySample;

/// Round a temperature for display: half away from zero.
///
/// `5.5` renders as `6`, `-2.5` as `-3`. Applied only at render time;
/// stored aggregates keep full precision.
pub fn round_display(value: f64) -> i64 {
    value.round() as i64
}

/// Arithmetic mean temperature of a bucket, `0.0` when the bucket is empty.
pub fn mean_temperature(bucket: &[&HourlySample]) -> f64 {
    if bucket.is_empty() {
        return 0.0;
    }
    bucket.iter().map(|s| s.temperature).sum::<f64>() / bucket.len() as f64
}

/// First and last temperatures of a bucket, rounded for display.
///
/// A singleton bucket collapses to the same value twice. `None` for an
/// empty bucket.
pub fn first_last_temperature(bucket: &[&HourlySample]) -> Option<(i64, i64)> {
    let first = bucket.first()?;
    let last = bucket.last()?;
    Some((round_display(first.temperature), round_display(last.temperature)))
}

/// Most frequent condition code in the bucket.
///
/// Ties break toward the code encountered earliest in chronological order
/// (stable mode). `None` for an empty bucket; callers that cannot render an
/// unknown condition must check for emptiness first.
pub fn representative_condition(bucket: &[&HourlySample]) -> Option<i32> {
    // One ordered pass building (code, count, first-seen index), then a
    // max-by-count selection that never depends on map iteration order.
    let mut counts: Vec<(i32, usize, usize)> = Vec::new();
    for (index, sample) in bucket.iter().enumerate() {
        match counts.iter_mut().find(|(code, _, _)| *code == sample.condition_code) {
            Some((_, count, _)) => *count += 1,
            None => counts.push((sample.condition_code, 1, index)),
        }
    }

    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.2.cmp(&a.2)))
        .map(|(code, _, _)| code)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use chrono::NaiveDate;

    fn sample(hour: u32, temperature: f64, code: i32) -> HourlySample {
        HourlySample {
            time: NaiveDate::from_ymd_opt(2025, 8, 1)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            temperature,
            condition_code: code,
            precipitation_probability: None,
            wind_speed: None,
        }
    }

    #[test]
    fn mean_of_empty_bucket_is_zero() {
        assert_eq!(mean_temperature(&[]), 0.0);
    }

    #[test]
    fn mean_is_arithmetic() {
        let samples = [sample(6, 7.0, 1), sample(7, 7.0, 1), sample(8, 7.0, 1), sample(9, 1.0, 1)];
        let bucket: Vec<&HourlySample> = samples.iter().collect();
        assert_eq!(mean_temperature(&bucket), 5.5);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_display(5.5), 6);
        assert_eq!(round_display(2.5), 3);
        assert_eq!(round_display(-2.5), -3);
        assert_eq!(round_display(5.4), 5);
        assert_eq!(round_display(-5.4), -5);
    }

    #[test]
    fn first_last_reads_bucket_endpoints() {
        let samples = [sample(6, 7.4, 1), sample(7, 9.0, 1), sample(8, 1.6, 1)];
        let bucket: Vec<&HourlySample> = samples.iter().collect();
        assert_eq!(first_last_temperature(&bucket), Some((7, 2)));
    }

    #[test]
    fn first_last_collapses_for_singleton() {
        let samples = [sample(6, 7.5, 1)];
        let bucket: Vec<&HourlySample> = samples.iter().collect();
        assert_eq!(first_last_temperature(&bucket), Some((8, 8)));
    }

    #[test]
    fn first_last_of_empty_bucket_is_none() {
        assert_eq!(first_last_temperature(&[]), None);
    }

    #[test]
    fn representative_condition_is_mode() {
        let samples = [sample(6, 1.0, 3), sample(7, 1.0, 61), sample(8, 1.0, 61)];
        let bucket: Vec<&HourlySample> = samples.iter().collect();
        assert_eq!(representative_condition(&bucket), Some(61));
    }

    #[test]
    fn mode_ties_break_toward_earliest_occurrence() {
        let samples = [sample(6, 1.0, 2), sample(7, 1.0, 61), sample(8, 1.0, 61), sample(9, 1.0, 2)];
        let bucket: Vec<&HourlySample> = samples.iter().collect();
        // Both 2 and 61 occur twice; 2 was seen first.
        assert_eq!(representative_condition(&bucket), Some(2));
    }

    #[test]
    fn representative_condition_of_empty_bucket_is_none() {
        assert_eq!(representative_condition(&[]), None);
    }
}
