use super::calculations::rolling_mean;
use super::classifier::classify;
use crate::models::{Condition, ObservationSet};
use chrono::NaiveDate;
use serde::Serialize;

/// Number of consecutive observations in the rolling mean.
pub const ROLLING_WINDOW: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    pub date: String,
    pub moisture: f64,
    pub rolling_mean: Option<f64>,
    pub condition: Condition,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrendReport {
    pub rows: Vec<TrendRow>,
    pub drought_days: usize,
    pub flood_days: usize,
}

impl TrendReport {
    /// Build a per-observation report ordered by calendar date.
    ///
    /// Keys that are not `YYYY-MM-DD` dates sort after every dated key,
    /// keeping their key order.
    pub fn build(observations: &ObservationSet) -> Self {
        let mut ordered: Vec<(Option<NaiveDate>, &str, f64)> = observations
            .iter()
            .map(|(date, moisture)| (parse_date(date), date, moisture))
            .collect();
        ordered.sort_by_key(|(parsed, _, _)| (parsed.is_none(), *parsed));

        let values: Vec<f64> = ordered.iter().map(|(_, _, v)| *v).collect();
        let means = rolling_mean(&values, ROLLING_WINDOW);

        let rows: Vec<TrendRow> = ordered
            .into_iter()
            .zip(means)
            .map(|((_, date, moisture), rolling_mean)| TrendRow {
                date: date.to_string(),
                moisture,
                rolling_mean,
                condition: classify(moisture),
            })
            .collect();

        let drought_days = rows
            .iter()
            .filter(|r| r.condition == Condition::Drought)
            .count();
        let flood_days = rows
            .iter()
            .filter(|r| r.condition == Condition::Flood)
            .count();

        Self {
            rows,
            drought_days,
            flood_days,
        }
    }
}

fn parse_date(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_dates_chronologically() {
        // Lexicographic order would put 2020-1-10 before 2020-1-9
        let obs: ObservationSet = [("2020-1-10", 30.0), ("2020-1-9", 40.0), ("2019-12-31", 50.0)]
            .into_iter()
            .collect();
        let report = TrendReport::build(&obs);
        let dates: Vec<&str> = report.rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2019-12-31", "2020-1-9", "2020-1-10"]);
    }

    #[test]
    fn undated_keys_sort_last() {
        let obs: ObservationSet = [("day-b", 30.0), ("2020-01-02", 40.0), ("day-a", 50.0)]
            .into_iter()
            .collect();
        let report = TrendReport::build(&obs);
        let dates: Vec<&str> = report.rows.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2020-01-02", "day-a", "day-b"]);
    }

    #[test]
    fn flags_and_counts_daily_conditions() {
        let obs: ObservationSet = [
            ("2020-01-01", 10.0),
            ("2020-01-02", 90.0),
            ("2020-01-03", 50.0),
            ("2020-01-04", 5.0),
        ]
        .into_iter()
        .collect();
        let report = TrendReport::build(&obs);
        assert_eq!(report.drought_days, 2);
        assert_eq!(report.flood_days, 1);
        assert_eq!(report.rows[1].condition, Condition::Flood);
        assert!(report.rows.iter().all(|r| r.rolling_mean.is_none()));
    }

    #[test]
    fn rolling_mean_uses_seven_observations() {
        let obs: ObservationSet = (1..=8)
            .map(|d| (format!("2020-01-{:02}", d), d as f64 * 10.0))
            .collect();
        let report = TrendReport::build(&obs);
        assert!(report.rows[5].rolling_mean.is_none());
        assert!((report.rows[6].rolling_mean.unwrap() - 40.0).abs() < 1e-9);
        assert!((report.rows[7].rolling_mean.unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_report() {
        let report = TrendReport::build(&ObservationSet::new());
        assert!(report.rows.is_empty());
        assert_eq!(report.drought_days, 0);
        assert_eq!(report.flood_days, 0);
    }
}
