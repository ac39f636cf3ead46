use crate::models::Condition;

/// Average moisture (%) below which the soil is in drought.
pub const DROUGHT_THRESHOLD: f64 = 20.0;

/// Average moisture (%) above which the soil is flooded.
pub const FLOOD_THRESHOLD: f64 = 80.0;

/// Classify an average moisture percentage.
///
/// Both thresholds are inclusive of `Normal`.
pub fn classify(average: f64) -> Condition {
    if average < DROUGHT_THRESHOLD {
        Condition::Drought
    } else if average > FLOOD_THRESHOLD {
        Condition::Flood
    } else {
        Condition::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_of_normal() {
        assert_eq!(classify(20.0), Condition::Normal);
        assert_eq!(classify(80.0), Condition::Normal);
    }

    #[test]
    fn just_outside_thresholds() {
        assert_eq!(classify(19.999), Condition::Drought);
        assert_eq!(classify(80.001), Condition::Flood);
    }

    #[test]
    fn typical_values() {
        assert_eq!(classify(0.0), Condition::Drought);
        assert_eq!(classify(7.5), Condition::Drought);
        assert_eq!(classify(50.0), Condition::Normal);
        assert_eq!(classify(100.0), Condition::Flood);
    }

    #[test]
    fn nan_is_normal() {
        assert_eq!(classify(f64::NAN), Condition::Normal);
    }
}
