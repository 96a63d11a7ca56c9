//! Range-slider controller logic for the plant filter page.
//!
//! This crate holds everything about the filter sliders that does not need a
//! browser: parsing raw control values, keeping the two handles of a
//! dual-range slider apart by a minimum gap, mapping positions to display
//! labels, and computing the track gradient. The `client` crate binds these
//! types to DOM elements and Leptos components; nothing here touches the DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`range`] | The dual-range controller [`range::DualRange`] and its update result |
//! | [`config`] | Validated per-instance configuration [`config::SliderConfig`] |
//! | [`labels`] | Integer → display string mappings (months, sowing durations) |
//! | [`gradient`] | Track fill percentages and CSS gradient rendering |
//! | [`single`] | Single-handle sliders that only display a label |
//! | [`presets`] | The plant search page instruments and their element ids |
//! | [`parse`] | Lenient integer parsing of raw control values |
//! | [`consts`] | Shared colors and defaults |

pub mod config;
pub mod consts;
pub mod gradient;
pub mod labels;
pub mod parse;
pub mod presets;
pub mod range;
pub mod single;

pub use config::{ConfigError, SliderConfig};
pub use gradient::Gradient;
pub use labels::LabelMap;
pub use range::{DualRange, Handle, RangeUpdate};
pub use single::LabeledSlider;
