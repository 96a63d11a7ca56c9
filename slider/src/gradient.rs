//! Track fill: where the active color starts and stops.
//!
//! The track behind the two handles is painted with a horizontal gradient:
//! inactive color up to the "from" handle, active color between the handles,
//! inactive color after the "to" handle. Hard stops (two colors at the same
//! percentage) give crisp edges. The computation is pure, so rendering the
//! same state twice yields the same CSS string.

#[cfg(test)]
#[path = "gradient_test.rs"]
mod gradient_test;

use std::fmt;

use crate::consts::{ACTIVE_COLOR, TRACK_COLOR};

/// Percent positions of the active segment along the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    /// Start of the active segment, in `[0, 100]`.
    pub percent_from: f64,
    /// End of the active segment, in `[0, 100]`.
    pub percent_to: f64,
}

impl Gradient {
    /// Compute the segment for handle values on a track of `max_value`.
    ///
    /// Both values are clamped into `[0, max_value]` first, so a malformed
    /// control reading renders as a boundary instead of spilling off the
    /// track. `max_value` must be positive; [`crate::SliderConfig`] enforces
    /// that, and a non-positive bound renders an empty track here.
    #[must_use]
    pub fn compute(from: i64, to: i64, max_value: i64) -> Self {
        if max_value <= 0 {
            return Self { percent_from: 0.0, percent_to: 0.0 };
        }
        Self { percent_from: percent(from, max_value), percent_to: percent(to, max_value) }
    }

    /// CSS `background` value for the track element.
    #[must_use]
    pub fn css(&self) -> String {
        let Self { percent_from: from, percent_to: to } = *self;
        format!(
            "linear-gradient(to right, {TRACK_COLOR} {from}%, {ACTIVE_COLOR} {from}%, {ACTIVE_COLOR} {to}%, {TRACK_COLOR} {to}%)"
        )
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// `value / max * 100`, multiplied first so whole percentages stay exact.
#[allow(clippy::cast_precision_loss)]
fn percent(value: i64, max_value: i64) -> f64 {
    let clamped = value.clamp(0, max_value);
    (clamped as f64 * 100.0) / max_value as f64
}
