//! Display labels for slider positions.
//!
//! A [`LabelMap`] translates a raw integer position into the text shown next
//! to a handle. Positions are 0-indexed: the month map shows `January` at 0
//! and `December` at 11. A position missing from the map is shown as the raw
//! integer, so a partial map never leaves a label blank.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WINTER_SOWING: [&str; 7] = ["NA", "10 days", "30 days", "60 days", "90 days", "120 days", "2 years"];

const HARVESTING_PERIOD_START: [&str; 10] = [
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
    "January",
    "February",
    "March",
];

/// Ordered mapping from slider position to display string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LabelSource", into = "BTreeMap<i64, String>")]
pub struct LabelMap {
    entries: BTreeMap<i64, String>,
}

/// Accepted JSON shapes: a plain array (index is the position) or an object
/// keyed by position.
#[derive(Deserialize)]
#[serde(untagged)]
enum LabelSource {
    List(Vec<String>),
    Keyed(BTreeMap<String, String>),
}

impl TryFrom<LabelSource> for LabelMap {
    type Error = String;

    fn try_from(source: LabelSource) -> Result<Self, Self::Error> {
        match source {
            LabelSource::List(labels) => Ok(Self::from_labels(labels)),
            LabelSource::Keyed(keyed) => {
                let mut entries = BTreeMap::new();
                for (key, label) in keyed {
                    let position = key
                        .trim()
                        .parse::<i64>()
                        .map_err(|_| format!("label key is not an integer position: {key:?}"))?;
                    entries.insert(position, label);
                }
                Ok(Self { entries })
            }
        }
    }
}

impl From<LabelMap> for BTreeMap<i64, String> {
    fn from(map: LabelMap) -> Self {
        map.entries
    }
}

impl LabelMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map where the `n`th label is shown at position `n`.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = (0_i64..).zip(labels.into_iter().map(Into::into)).collect();
        Self { entries }
    }

    /// Parse a map from a JSON array or position-keyed object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `raw` is neither shape.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Month names, January at position 0.
    #[must_use]
    pub fn months() -> Self {
        Self::from_labels(MONTHS)
    }

    /// Winter-sowing stratification durations.
    #[must_use]
    pub fn winter_sowing() -> Self {
        Self::from_labels(WINTER_SOWING)
    }

    /// Harvesting-period start months, June at position 0.
    #[must_use]
    pub fn harvesting_period_start() -> Self {
        Self::from_labels(HARVESTING_PERIOD_START)
    }

    pub fn insert(&mut self, position: i64, label: impl Into<String>) {
        self.entries.insert(position, label.into());
    }

    /// The label stored for `position`, if any.
    #[must_use]
    pub fn get(&self, position: i64) -> Option<&str> {
        self.entries.get(&position).map(String::as_str)
    }

    /// Text to display for `position`: its label, or the integer itself.
    #[must_use]
    pub fn display(&self, position: i64) -> String {
        self.get(position).map_or_else(|| position.to_string(), str::to_owned)
    }

    /// Highest position that has a label.
    #[must_use]
    pub fn max_position(&self) -> Option<i64> {
        self.entries.keys().next_back().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Display text for `position` under an optional label map.
#[must_use]
pub fn display(labels: Option<&LabelMap>, position: i64) -> String {
    labels.map_or_else(|| position.to_string(), |map| map.display(position))
}
