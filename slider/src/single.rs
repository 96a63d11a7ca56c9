//! Single-handle sliders whose only job is to show a label.
//!
//! The winter-sowing and harvesting-start filters are plain range inputs
//! indexing into a fixed table; the element next to them shows the table
//! entry for the current position.

#[cfg(test)]
#[path = "single_test.rs"]
mod single_test;

use crate::labels::LabelMap;
use crate::parse::parse_clamped;

/// A labelled single-value slider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSlider {
    labels: LabelMap,
    value: i64,
}

impl LabeledSlider {
    /// Create a slider over `labels`, starting at position 0.
    #[must_use]
    pub fn new(labels: LabelMap) -> Self {
        Self { labels, value: 0 }
    }

    /// Winter-sowing duration slider.
    #[must_use]
    pub fn winter_sowing() -> Self {
        Self::new(LabelMap::winter_sowing())
    }

    /// Harvesting-period start slider.
    #[must_use]
    pub fn harvesting_period_start() -> Self {
        Self::new(LabelMap::harvesting_period_start())
    }

    /// Highest selectable position: the last labelled entry.
    #[must_use]
    pub fn max_value(&self) -> i64 {
        self.labels.max_position().unwrap_or(0).max(0)
    }

    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The control's input fired; returns the label to display.
    pub fn on_changed(&mut self, raw: &str) -> String {
        self.value = parse_clamped(raw, self.max_value());
        self.label()
    }

    #[must_use]
    pub fn label(&self) -> String {
        self.labels.display(self.value)
    }
}
