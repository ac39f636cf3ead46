use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Soil moisture observations keyed by date.
///
/// Keys are unique and kept in ascending lexicographic order, which sorts
/// ISO-style dates chronologically. Inserting an existing key replaces its
/// value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationSet {
    readings: BTreeMap<String, f64>,
}

impl ObservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reading, returning the value it replaced if the date was already present.
    pub fn insert(&mut self, date: impl Into<String>, moisture: f64) -> Option<f64> {
        self.readings.insert(date.into(), moisture)
    }

    pub fn get(&self, date: &str) -> Option<f64> {
        self.readings.get(date).copied()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Iterate readings in ascending date-key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.readings.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.values().copied()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ObservationSet {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut set = ObservationSet::new();
        for (date, moisture) in iter {
            set.insert(date, moisture);
        }
        set
    }
}

impl IntoIterator for ObservationSet {
    type Item = (String, f64);
    type IntoIter = btree_map::IntoIter<String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.readings.into_iter()
    }
}
