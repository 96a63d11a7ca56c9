//! Shared constants for the slider crate.

// ── Track colors ────────────────────────────────────────────────

/// Color of the track outside the selected sub-range.
pub const TRACK_COLOR: &str = "#dadae5";

/// Color of the track between the two handles.
pub const ACTIVE_COLOR: &str = "#3264fe";

// ── Defaults ────────────────────────────────────────────────────

/// Minimum gap used by every instrument on the plant search page.
pub const DEFAULT_MIN_GAP: i64 = 0;

/// Highest position of the month-mapped bloom period slider (December).
pub const MONTH_MAX: i64 = 11;
