//! Dual-range controller: two handles on one track, kept `min_gap` apart.
//!
//! [`DualRange`] owns the settled positions of a "from" and a "to" handle.
//! Each input event on a handle is fed in with the raw values of *both*
//! controls, read fresh from the page, and produces a [`RangeUpdate`]
//! describing what the host must write back and repaint.
//!
//! CLAMPING
//! ========
//! The handle that moved is the one that gives way. When the gap after a
//! move is at or below `min_gap`, the mover is pulled back to exactly
//! `min_gap` from the stationary handle. Only when the mover runs into a
//! track bound (0 or `max_value`) and the gap still cannot be met does the
//! stationary handle get pushed. Because config validation guarantees
//! `min_gap <= max_value`, every update ends with
//! `0 <= from <= to <= max_value` and `to - from >= min_gap`.

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;

use crate::config::SliderConfig;
use crate::gradient::Gradient;
use crate::parse::parse_clamped;

/// One end of a dual-range slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Lower bound of the selected range.
    From,
    /// Upper bound of the selected range.
    To,
}

impl Handle {
    /// The opposite handle.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::From => Self::To,
            Self::To => Self::From,
        }
    }
}

/// Result of feeding one input event (or an initial sync) to a [`DualRange`].
#[derive(Debug, Clone, PartialEq)]
pub struct RangeUpdate {
    /// The handle whose input fired, or `None` for a full sync.
    pub moved: Option<Handle>,
    /// Settled "from" value.
    pub from: i64,
    /// Settled "to" value.
    pub to: i64,
    /// Handles whose control value differs from the settled value and must be rewritten.
    pub corrected: Vec<Handle>,
    /// Handles whose settled value differs from the one held before the event.
    pub changed: Vec<Handle>,
    /// Track fill for the settled values.
    pub gradient: Gradient,
}

impl RangeUpdate {
    /// Settled value of `handle`.
    #[must_use]
    pub fn value(&self, handle: Handle) -> i64 {
        match handle {
            Handle::From => self.from,
            Handle::To => self.to,
        }
    }

    /// Whether `handle`'s control must be rewritten.
    #[must_use]
    pub fn is_corrected(&self, handle: Handle) -> bool {
        self.corrected.contains(&handle)
    }

    /// Handles whose display label must be refreshed: the mover plus the
    /// other handle if it was corrected or its value changed, or both after
    /// a full sync.
    #[must_use]
    pub fn relabel(&self) -> Vec<Handle> {
        let Some(moved) = self.moved else {
            return vec![Handle::From, Handle::To];
        };
        let mut handles = vec![moved];
        let other = moved.other();
        if self.is_corrected(other) || self.changed.contains(&other) {
            handles.push(other);
        }
        handles
    }
}

/// Controller state for one dual-range slider pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DualRange {
    config: SliderConfig,
    from: i64,
    to: i64,
}

impl DualRange {
    /// Create a controller spanning the whole track.
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        let to = config.max_value();
        Self { config, from: 0, to }
    }

    /// Create a controller from the controls' initial raw values.
    ///
    /// Runs the "from" pass then the "to" pass, the same as a page load
    /// firing both handlers once.
    #[must_use]
    pub fn from_raw(config: SliderConfig, raw_from: &str, raw_to: &str) -> (Self, RangeUpdate) {
        let mut range = Self::new(config);
        let update = range.sync(raw_from, raw_to);
        (range, update)
    }

    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    #[must_use]
    pub fn from_value(&self) -> i64 {
        self.from
    }

    #[must_use]
    pub fn to_value(&self) -> i64 {
        self.to
    }

    #[must_use]
    pub fn value(&self, handle: Handle) -> i64 {
        match handle {
            Handle::From => self.from,
            Handle::To => self.to,
        }
    }

    /// Display text for `handle`: its label, or the raw integer.
    #[must_use]
    pub fn label(&self, handle: Handle) -> String {
        self.config.display(self.value(handle))
    }

    /// Track fill for the current values.
    #[must_use]
    pub fn gradient(&self) -> Gradient {
        Gradient::compute(self.from, self.to, self.config.max_value())
    }

    /// The "from" handle's input fired.
    pub fn on_from_changed(&mut self, raw_from: &str, raw_to: &str) -> RangeUpdate {
        self.on_handle_changed(Handle::From, raw_from, raw_to)
    }

    /// The "to" handle's input fired.
    pub fn on_to_changed(&mut self, raw_from: &str, raw_to: &str) -> RangeUpdate {
        self.on_handle_changed(Handle::To, raw_from, raw_to)
    }

    /// `handle`'s input fired; both raw values are the controls' current contents.
    pub fn on_handle_changed(&mut self, handle: Handle, raw_from: &str, raw_to: &str) -> RangeUpdate {
        let previous = (self.from, self.to);
        let max = self.config.max_value();
        let (from, to) = settle(handle, parse_clamped(raw_from, max), parse_clamped(raw_to, max), &self.config);
        self.from = from;
        self.to = to;
        self.update(Some(handle), previous, raw_from, raw_to)
    }

    /// Move `handle` to `value`, keeping the other handle where it is.
    ///
    /// For hosts that hold the values themselves rather than reading DOM
    /// strings.
    pub fn move_handle(&mut self, handle: Handle, value: i64) -> RangeUpdate {
        let previous = (self.from, self.to);
        let max = self.config.max_value();
        let (raw_from, raw_to) = match handle {
            Handle::From => (value, self.to),
            Handle::To => (self.from, value),
        };
        let (from, to) = settle(handle, raw_from.clamp(0, max), raw_to.clamp(0, max), &self.config);
        self.from = from;
        self.to = to;

        let mut corrected = Vec::new();
        if from != raw_from {
            corrected.push(Handle::From);
        }
        if to != raw_to {
            corrected.push(Handle::To);
        }
        RangeUpdate {
            moved: Some(handle),
            from,
            to,
            corrected,
            changed: self.changed_since(previous),
            gradient: self.gradient(),
        }
    }

    /// Re-read both controls: a "from" pass followed by a "to" pass.
    pub fn sync(&mut self, raw_from: &str, raw_to: &str) -> RangeUpdate {
        let previous = (self.from, self.to);
        let max = self.config.max_value();
        let (from, to) = settle(Handle::From, parse_clamped(raw_from, max), parse_clamped(raw_to, max), &self.config);
        let (from, to) = settle(Handle::To, from, to, &self.config);
        self.from = from;
        self.to = to;
        self.update(None, previous, raw_from, raw_to)
    }

    fn update(&self, moved: Option<Handle>, previous: (i64, i64), raw_from: &str, raw_to: &str) -> RangeUpdate {
        let mut corrected = Vec::new();
        if raw_from.trim() != self.from.to_string() {
            corrected.push(Handle::From);
        }
        if raw_to.trim() != self.to.to_string() {
            corrected.push(Handle::To);
        }
        RangeUpdate {
            moved,
            from: self.from,
            to: self.to,
            corrected,
            changed: self.changed_since(previous),
            gradient: self.gradient(),
        }
    }

    fn changed_since(&self, (from, to): (i64, i64)) -> Vec<Handle> {
        let mut changed = Vec::new();
        if self.from != from {
            changed.push(Handle::From);
        }
        if self.to != to {
            changed.push(Handle::To);
        }
        changed
    }
}

/// Enforce the gap after `mover` changed; `from`/`to` are already within bounds.
fn settle(mover: Handle, mut from: i64, mut to: i64, config: &SliderConfig) -> (i64, i64) {
    let max = config.max_value();
    let gap = config.min_gap();
    match mover {
        Handle::From => {
            if to - from <= gap {
                from = (to - gap).max(0);
            }
            if to - from < gap {
                to = (from + gap).min(max);
            }
        }
        Handle::To => {
            if to - from <= gap {
                to = (from + gap).min(max);
            }
            if to - from < gap {
                from = (to - gap).max(0);
            }
        }
    }
    (from, to)
}
