//! Client-side state that outlives a single event.
//!
//! Slider state lives in `slider::DualRange`; this module holds what the
//! client adds on top, currently the toggle buttons.

pub mod toggle;
