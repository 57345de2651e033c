//! Day-part and slot bucketing over a day's hourly samples.
//!
//! Membership is an hour-range test against each sample's local hour, not an
//! index range; the original chronological order is preserved because the
//! aggregation logic reads the first and last element of a bucket.

use crate::types::HourlySample;

/// First hour of the default daytime window.
pub const DEFAULT_START_HOUR: u32 = 6;
/// Hour at which morning ends and afternoon begins.
pub const MIDDAY_HOUR: u32 = 12;
/// Last hour (inclusive) of the default daytime window.
pub const DEFAULT_END_HOUR: u32 = 22;

/// Start hours of the fixed 3-hour slots used for detailed rendering.
pub const DETAIL_SLOT_STARTS: [u32; 6] = [6, 9, 12, 15, 18, 21];

/// Split samples into morning and afternoon day-parts.
///
/// Morning is `start_hour <= h < mid_hour`, afternoon is
/// `mid_hour <= h <= end_hour`. A sample outside `[start_hour, end_hour]`
/// belongs to neither bucket. Either bucket may be empty.
pub fn bucket_for_summary(
    samples: &[HourlySample],
    start_hour: u32,
    mid_hour: u32,
    end_hour: u32,
) -> (Vec<&HourlySample>, Vec<&HourlySample>) {
    let morning = samples
        .iter()
        .filter(|s| (start_hour..mid_hour).contains(&s.hour()))
        .collect();
    let afternoon = samples
        .iter()
        .filter(|s| (mid_hour..=end_hour).contains(&s.hour()))
        .collect();
    (morning, afternoon)
}

/// Group samples into the fixed 3-hour detail slots.
///
/// Returns `(slot_start, bucket)` pairs in ascending slot order. Slots with
/// no qualifying samples are omitted entirely, so every returned bucket is
/// non-empty.
pub fn bucket_for_detail(samples: &[HourlySample]) -> Vec<(u32, Vec<&HourlySample>)> {
    DETAIL_SLOT_STARTS
        .iter()
        .filter_map(|&start| {
            let bucket: Vec<&HourlySample> = samples
                .iter()
                .filter(|s| (start..start + 3).contains(&s.hour()))
                .collect();
            if bucket.is_empty() {
                None
            } else {
                Some((start, bucket))
            }
        })
        .collect()
}
