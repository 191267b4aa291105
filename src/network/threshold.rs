use super::DistanceRecord;
use crate::Id;

/// Relative band around the reference mean used by [`find_ids_within_threshold`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThresholdOptions {
    /// Half-width of the band as a fraction of the mean (0.10 = ±10%).
    pub ratio: f64,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self { ratio: 0.10 }
    }
}

/// Rows ending at `reference_id` whose distance is within ±10% of the mean
/// distance of all rows ending there.
pub fn find_ids_within_ten_percentage_threshold(
    records: &[DistanceRecord],
    reference_id: Id,
) -> Vec<DistanceRecord> {
    find_ids_within_threshold(records, reference_id, &ThresholdOptions::default())
}

/// Rows ending at `reference_id` whose distance lies in
/// `[mean * (1 - ratio), mean * (1 + ratio)]`, in input order.
///
/// Returns an empty list if no row ends at `reference_id`.
pub fn find_ids_within_threshold(
    records: &[DistanceRecord],
    reference_id: Id,
    options: &ThresholdOptions,
) -> Vec<DistanceRecord> {
    let to_reference: Vec<&DistanceRecord> = records
        .iter()
        .filter(|r| r.id_end == reference_id)
        .collect();
    if to_reference.is_empty() {
        return Vec::new();
    }

    let avg = to_reference.iter().map(|r| r.distance).sum::<f64>() / to_reference.len() as f64;
    let lower = avg * (1.0 - options.ratio);
    let upper = avg * (1.0 + options.ratio);

    to_reference
        .into_iter()
        .filter(|r| lower <= r.distance && r.distance <= upper)
        .cloned()
        .collect()
}
