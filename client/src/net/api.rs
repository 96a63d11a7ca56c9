//! REST helpers for the entity toggle endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere: a stub error, since the endpoints only exist behind the
//! browser session.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`ToggleError`] instead of a panic; callers
//! log it and leave the button as it was.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ToggleError, ToggleKind, ToggleState};
#[cfg(feature = "hydrate")]
use super::types::{REQUESTED_WITH, parse_toggle_response};

/// Error for a response that `gloo-net` did not report as `ok`.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(ok: bool, status: u16) -> Option<ToggleError> {
    (!ok).then_some(ToggleError::Status(status))
}

/// Flip `kind` on entity `pk` via `GET <endpoint>/<pk>` and return the new value.
///
/// # Errors
///
/// Returns a [`ToggleError`] if the request fails, the status is not 2xx,
/// or the body lacks a recognizable value.
pub async fn toggle(kind: ToggleKind, pk: u64) -> Result<ToggleState, ToggleError> {
    #[cfg(feature = "hydrate")]
    {
        let url = kind.endpoint(pk);
        let (header, value) = REQUESTED_WITH;
        let resp = gloo_net::http::Request::get(&url)
            .header(header, value)
            .send()
            .await
            .map_err(|e| ToggleError::Transport(e.to_string()))?;
        if let Some(err) = status_error(resp.ok(), resp.status()) {
            return Err(err);
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| ToggleError::Decode(e.to_string()))?;
        parse_toggle_response(kind, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ToggleError::Transport(format!("{} is not available on server", kind.endpoint(pk))))
    }
}
