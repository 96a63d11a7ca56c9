//! Per-instance slider configuration.
//!
//! A [`SliderConfig`] is fixed when a slider pair is initialized. The upper
//! bound comes from the control's `max` attribute; the minimum gap and label
//! map come from the instrument preset or the caller. Construction validates
//! everything the controller later relies on, so the event path never has to
//! handle a bad configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::DEFAULT_MIN_GAP;
use crate::labels::LabelMap;

/// Error returned when a slider configuration cannot be used.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The upper bound must be positive; percentages divide by it.
    #[error("slider max must be positive, got {0}")]
    NonPositiveMax(i64),
    /// The `max` attribute is not an integer.
    #[error("slider max is not an integer: {0:?}")]
    InvalidMax(String),
    /// The minimum gap is negative.
    #[error("slider min gap must not be negative, got {0}")]
    NegativeMinGap(i64),
    /// The minimum gap cannot fit between 0 and the upper bound.
    #[error("slider min gap {min_gap} exceeds max {max_value}")]
    MinGapExceedsMax { min_gap: i64, max_value: i64 },
    /// The label map JSON could not be parsed.
    #[error("invalid label map: {0}")]
    InvalidLabels(String),
}

/// Validated configuration of one dual-range slider pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderConfig {
    max_value: i64,
    min_gap: i64,
    labels: Option<LabelMap>,
}

impl SliderConfig {
    /// Create a config with the default minimum gap and no labels.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveMax`] if `max_value <= 0`.
    pub fn new(max_value: i64) -> Result<Self, ConfigError> {
        if max_value <= 0 {
            return Err(ConfigError::NonPositiveMax(max_value));
        }
        Ok(Self { max_value, min_gap: DEFAULT_MIN_GAP, labels: None })
    }

    /// Create a config from a control's raw `max` attribute.
    ///
    /// Unlike handle values, the bound is not parsed leniently: a missing or
    /// garbled `max` is a page setup error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidMax`] if `raw` is not an integer, or
    /// [`ConfigError::NonPositiveMax`] if it is not positive.
    pub fn from_max_attr(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let max_value = trimmed.parse::<i64>().map_err(|_| ConfigError::InvalidMax(raw.to_owned()))?;
        Self::new(max_value)
    }

    /// Set the minimum gap between the handles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeMinGap`] or
    /// [`ConfigError::MinGapExceedsMax`] when the gap cannot be honored.
    pub fn with_min_gap(mut self, min_gap: i64) -> Result<Self, ConfigError> {
        if min_gap < 0 {
            return Err(ConfigError::NegativeMinGap(min_gap));
        }
        if min_gap > self.max_value {
            return Err(ConfigError::MinGapExceedsMax { min_gap, max_value: self.max_value });
        }
        self.min_gap = min_gap;
        Ok(self)
    }

    /// Attach a label map used for the handle display text.
    #[must_use]
    pub fn with_labels(mut self, labels: LabelMap) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Attach a label map parsed from JSON (array or position-keyed object).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLabels`] if the JSON is malformed.
    pub fn with_labels_json(self, raw: &str) -> Result<Self, ConfigError> {
        let labels = LabelMap::from_json(raw).map_err(|e| ConfigError::InvalidLabels(e.to_string()))?;
        Ok(self.with_labels(labels))
    }

    #[must_use]
    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    #[must_use]
    pub fn min_gap(&self) -> i64 {
        self.min_gap
    }

    #[must_use]
    pub fn labels(&self) -> Option<&LabelMap> {
        self.labels.as_ref()
    }

    /// Display text for a handle at `position`.
    #[must_use]
    pub fn display(&self, position: i64) -> String {
        crate::labels::display(self.labels(), position)
    }
}
