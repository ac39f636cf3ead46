use crate::models::ObservationSet;

/// Calculate the arithmetic mean of all soil moisture readings.
/// Returns 0.0 for an empty set.
pub fn average_moisture(observations: &ObservationSet) -> f64 {
    if observations.is_empty() {
        return 0.0;
    }

    observations.values().sum::<f64>() / observations.len() as f64
}

/// Row-based rolling mean over `window` consecutive values.
/// Positions with fewer than `window` preceding values (inclusive) are `None`.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }

    (0..values.len())
        .map(|i| {
            if i + 1 < window {
                None
            } else {
                let slice = &values[i + 1 - window..=i];
                Some(slice.iter().sum::<f64>() / window as f64)
            }
        })
        .collect()
}
