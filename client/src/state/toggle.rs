//! Per-button toggle state and its on-page appearance.
//!
//! A toggle button holds at most one request in flight: a click that arrives
//! while the previous request is pending is dropped, so a double-click
//! cannot flip the flag twice.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::net::types::{ToggleError, ToggleKind, ToggleState};

/// Check mark shown on an enabled flag.
pub const CHECK_GLYPH: &str = "\u{2713}";
/// Cross shown on a disabled flag.
pub const CROSS_GLYPH: &str = "\u{2716}\u{fe0f}";

/// Class changes and text to apply to a button after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAppearance {
    /// Classes to remove first.
    pub remove: &'static [&'static str],
    /// Class to add afterwards.
    pub add: Option<&'static str>,
    /// Replacement text content, if the kind shows a glyph.
    pub text: Option<&'static str>,
}

impl ToggleAppearance {
    /// Appearance of a `kind` button showing `state`.
    #[must_use]
    pub fn of(kind: ToggleKind, state: ToggleState) -> Self {
        match (kind, state) {
            (ToggleKind::Ownership, ToggleState::On) => Self {
                remove: &["checkmark", "crossmark"],
                add: Some("checkmark"),
                text: None,
            },
            (ToggleKind::Ownership, ToggleState::Off) => Self {
                remove: &["checkmark", "crossmark"],
                add: Some("crossmark"),
                text: None,
            },
            (_, ToggleState::On) => Self { remove: &[], add: Some("ok"), text: Some(CHECK_GLYPH) },
            (_, ToggleState::Off) => Self { remove: &["ok"], add: None, text: Some(CROSS_GLYPH) },
        }
    }

    /// The full class string for a button that had `current` classes.
    #[must_use]
    pub fn apply_to_classes(&self, current: &str) -> String {
        let mut classes: Vec<&str> = current
            .split_whitespace()
            .filter(|c| !self.remove.contains(c))
            .collect();
        if let Some(add) = self.add {
            if !classes.contains(&add) {
                classes.push(add);
            }
        }
        classes.join(" ")
    }
}

/// State of one toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButtonState {
    pub kind: ToggleKind,
    pub pk: u64,
    /// Last value confirmed by the server, if any.
    pub state: Option<ToggleState>,
    in_flight: bool,
}

impl ToggleButtonState {
    #[must_use]
    pub fn new(kind: ToggleKind, pk: u64) -> Self {
        Self { kind, pk, state: None, in_flight: false }
    }

    #[must_use]
    pub fn with_state(mut self, state: ToggleState) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Start a request. Returns the endpoint to call, or `None` if one is
    /// already pending.
    pub fn begin(&mut self) -> Option<String> {
        if self.in_flight {
            return None;
        }
        self.in_flight = true;
        Some(self.kind.endpoint(self.pk))
    }

    /// Drop the pending request without a result.
    pub fn cancel(&mut self) {
        self.in_flight = false;
    }

    /// Finish the pending request. Returns the appearance to apply on
    /// success; on failure the button keeps its current look.
    pub fn finish(&mut self, result: Result<ToggleState, ToggleError>) -> Result<ToggleAppearance, ToggleError> {
        self.in_flight = false;
        let state = result?;
        self.state = Some(state);
        Ok(ToggleAppearance::of(self.kind, state))
    }
}

/// Parse a `data-pk` attribute value.
#[must_use]
pub fn parse_pk(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse().ok()
}
