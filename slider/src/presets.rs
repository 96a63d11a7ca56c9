//! Instruments on the plant search page.
//!
//! Each dual-range instrument follows one naming scheme for its elements:
//! inputs `sliderFrom<Name>` / `sliderTo<Name>`, labels `rangeFrom<Name>` /
//! `rangeTo<Name>`, and a track with class `slider-track-<kebab-name>`.
//! The upper bound is not part of the preset; it is read from the input's
//! `max` attribute when the page is bound.

#[cfg(test)]
#[path = "presets_test.rs"]
mod presets_test;

use crate::config::{ConfigError, SliderConfig};
use crate::consts::DEFAULT_MIN_GAP;
use crate::labels::LabelMap;
use crate::single::LabeledSlider;

/// Element identifiers of one dual-range slider pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    /// `id` of the "from" range input.
    pub from_input: String,
    /// `id` of the "to" range input.
    pub to_input: String,
    /// `id` of the element showing the "from" label.
    pub from_label: String,
    /// `id` of the element showing the "to" label.
    pub to_label: String,
    /// CSS selector of the track element painted with the gradient.
    pub track_selector: String,
}

/// A dual-range filter on the plant search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instrument {
    /// Bloom start/end month.
    BloomPeriod,
    /// Plant height bounds.
    PlantHeight,
    /// Plant width bounds.
    PlantWidth,
}

impl Instrument {
    /// All instruments in page order.
    pub const ALL: [Self; 3] = [Self::BloomPeriod, Self::PlantHeight, Self::PlantWidth];

    /// `PascalCase` suffix used in element ids.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::BloomPeriod => "BloomPeriod",
            Self::PlantHeight => "PlantHeight",
            Self::PlantWidth => "PlantWidth",
        }
    }

    /// kebab-case suffix used in the track class.
    #[must_use]
    pub fn kebab_name(self) -> &'static str {
        match self {
            Self::BloomPeriod => "bloom-period",
            Self::PlantHeight => "plant-height",
            Self::PlantWidth => "plant-width",
        }
    }

    /// Human-readable caption.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::BloomPeriod => "Bloom period",
            Self::PlantHeight => "Plant height",
            Self::PlantWidth => "Plant width",
        }
    }

    /// Form field names submitted for the "from" and "to" handles.
    #[must_use]
    pub fn field_names(self) -> (&'static str, &'static str) {
        match self {
            Self::BloomPeriod => ("bloom_start", "bloom_end"),
            Self::PlantHeight => ("min_height", "max_height"),
            Self::PlantWidth => ("min_width", "max_width"),
        }
    }

    #[must_use]
    pub fn element_ids(self) -> ElementIds {
        let name = self.name();
        ElementIds {
            from_input: format!("sliderFrom{name}"),
            to_input: format!("sliderTo{name}"),
            from_label: format!("rangeFrom{name}"),
            to_label: format!("rangeTo{name}"),
            track_selector: format!(".slider-track-{}", self.kebab_name()),
        }
    }

    /// Label map for this instrument; only the bloom period shows names.
    #[must_use]
    pub fn labels(self) -> Option<LabelMap> {
        match self {
            Self::BloomPeriod => Some(LabelMap::months()),
            Self::PlantHeight | Self::PlantWidth => None,
        }
    }

    /// Build the config for this instrument from the input's `max` attribute.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `raw_max` is not a positive integer.
    pub fn config(self, raw_max: &str) -> Result<SliderConfig, ConfigError> {
        self.finish(SliderConfig::from_max_attr(raw_max)?)
    }

    /// Build the config for this instrument with a known upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveMax`] if `max_value <= 0`.
    pub fn with_max(self, max_value: i64) -> Result<SliderConfig, ConfigError> {
        self.finish(SliderConfig::new(max_value)?)
    }

    fn finish(self, config: SliderConfig) -> Result<SliderConfig, ConfigError> {
        let config = config.with_min_gap(DEFAULT_MIN_GAP)?;
        Ok(match self.labels() {
            Some(labels) => config.with_labels(labels),
            None => config,
        })
    }
}

/// A single-handle labelled filter on the plant search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleInstrument {
    /// Winter-sowing stratification duration.
    WinterSowing,
    /// First month of the harvesting period.
    HarvestingPeriodStart,
}

impl SingleInstrument {
    pub const ALL: [Self; 2] = [Self::WinterSowing, Self::HarvestingPeriodStart];

    /// `id` of the range input.
    #[must_use]
    pub fn input_id(self) -> &'static str {
        match self {
            Self::WinterSowing => "winter-sowing",
            Self::HarvestingPeriodStart => "harvesting-period-start",
        }
    }

    /// `id` of the element showing the label.
    #[must_use]
    pub fn label_id(self) -> &'static str {
        match self {
            Self::WinterSowing => "winter-sowing-value",
            Self::HarvestingPeriodStart => "harvesting-period-start-value",
        }
    }

    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            Self::WinterSowing => "stratification_duration",
            Self::HarvestingPeriodStart => "harvesting_start",
        }
    }

    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Self::WinterSowing => "Winter sowing",
            Self::HarvestingPeriodStart => "Harvesting starts",
        }
    }

    #[must_use]
    pub fn slider(self) -> LabeledSlider {
        match self {
            Self::WinterSowing => LabeledSlider::winter_sowing(),
            Self::HarvestingPeriodStart => LabeledSlider::harvesting_period_start(),
        }
    }
}
