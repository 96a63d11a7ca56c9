//! Wire schema for the entity toggle endpoints.
//!
//! Each toggle endpoint flips one flag on the server and answers with a JSON
//! object carrying the new value. Flag endpoints report a boolean (older
//! views send the Python-style strings `"True"`/`"False"`); the ownership
//! endpoint reports `"Yes"` or `"No"`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde_json::Value;

/// Header value the backend uses to recognize script requests.
pub const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

/// Which entity flag a toggle button flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleKind {
    /// Seed availability of a library entry.
    Availability,
    /// Whether a user account is active.
    IsActive,
    /// Whether a user accepts seeds.
    SeedAccepting,
    /// Whether a submitted plant was accepted.
    PlantAccepted,
    /// Whether the current user owns a plant (collection page).
    Ownership,
}

impl ToggleKind {
    /// Kinds bound on the availability/admin page.
    pub const FLAGS: [Self; 4] = [Self::Availability, Self::IsActive, Self::SeedAccepting, Self::PlantAccepted];

    fn path(self) -> &'static str {
        match self {
            Self::Availability => "/toggle-availability/",
            Self::IsActive => "/toggle-is-active/",
            Self::SeedAccepting => "/toggle-seed-accepting/",
            Self::PlantAccepted => "/toggle-plant-accepted/",
            Self::Ownership => "/user-plant-toggle/",
        }
    }

    /// Endpoint URL for entity `pk`.
    #[must_use]
    pub fn endpoint(self, pk: u64) -> String {
        format!("{}{pk}", self.path())
    }

    /// Response field carrying the new value.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::Availability => "availability",
            Self::IsActive => "is_active",
            Self::SeedAccepting => "accepting_seed",
            Self::PlantAccepted => "is_accepted",
            Self::Ownership => "isowner",
        }
    }

    /// CSS selector of the buttons bound to this kind.
    ///
    /// Availability and ownership share `.toggler`; they live on different
    /// pages and each page binds only its own kind.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Availability | Self::Ownership => ".toggler",
            Self::IsActive => ".is-active-toggler",
            Self::SeedAccepting => ".seed-accepting-toggler",
            Self::PlantAccepted => ".plant-accepted-toggler",
        }
    }
}

/// New value of a toggled flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    On,
    Off,
}

impl From<bool> for ToggleState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

/// Failure of a toggle request. The button is left untouched.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ToggleError {
    /// The request never completed.
    #[error("toggle request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("toggle request returned status {0}")]
    Status(u16),
    /// The body was not JSON.
    #[error("toggle response is not JSON: {0}")]
    Decode(String),
    /// The expected field is absent.
    #[error("toggle response has no `{0}` field")]
    MissingField(&'static str),
    /// The field holds a value that is not a recognizable flag.
    #[error("toggle response `{field}` has unexpected value {value}")]
    UnexpectedValue { field: &'static str, value: String },
}

/// Read the new flag value for `kind` from a response body.
///
/// # Errors
///
/// Returns [`ToggleError::MissingField`] or [`ToggleError::UnexpectedValue`]
/// when the body does not carry a recognizable value.
pub fn parse_toggle_response(kind: ToggleKind, body: &Value) -> Result<ToggleState, ToggleError> {
    let field = kind.field();
    let value = body.get(field).ok_or(ToggleError::MissingField(field))?;
    flag_state(value).ok_or_else(|| ToggleError::UnexpectedValue { field, value: value.to_string() })
}

fn flag_state(value: &Value) -> Option<ToggleState> {
    match value {
        Value::Bool(b) => Some((*b).into()),
        Value::Number(n) => n.as_i64().map(|n| (n != 0).into()),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(ToggleState::On),
            "false" | "no" | "0" => Some(ToggleState::Off),
            _ => None,
        },
        _ => None,
    }
}
