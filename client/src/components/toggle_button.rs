//! Client-rendered entity toggle button.
//!
//! ERROR HANDLING
//! ==============
//! A failed request is logged and the button keeps its last confirmed look.

use leptos::prelude::*;

use crate::net::types::{ToggleKind, ToggleState};
use crate::state::toggle::{ToggleAppearance, ToggleButtonState};

#[cfg(test)]
#[path = "toggle_button_test.rs"]
mod toggle_button_test;

/// Button flipping `kind` on entity `pk`.
#[component]
pub fn ToggleButton(
    kind: ToggleKind,
    pk: u64,
    #[prop(optional)] initial: Option<ToggleState>,
) -> impl IntoView {
    let seed = ToggleButtonState::new(kind, pk);
    let button = RwSignal::new(match initial {
        Some(state) => seed.with_state(state),
        None => seed,
    });

    let on_click = move |_| {
        let Some(endpoint) = button.try_update(ToggleButtonState::begin).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = crate::net::api::toggle(kind, pk).await;
                if let Some(Err(e)) = button.try_update(|b| b.finish(result)) {
                    leptos::logging::warn!("{endpoint}: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::logging::log!("{endpoint} skipped outside the browser");
            button.update(|b| {
                b.cancel();
            });
        }
    };

    view! {
        <button
            type="button"
            class=move || button_class(kind, button.with(|b| b.state))
            data-pk=pk.to_string()
            disabled=move || button.with(ToggleButtonState::is_in_flight)
            on:click=on_click
        >
            {move || button_text(kind, button.with(|b| b.state))}
        </button>
    }
}

/// Class list of a `kind` button showing `state`.
fn button_class(kind: ToggleKind, state: Option<ToggleState>) -> String {
    let base = kind.selector().trim_start_matches('.');
    match state {
        Some(state) => ToggleAppearance::of(kind, state).apply_to_classes(base),
        None => base.to_owned(),
    }
}

fn button_text(kind: ToggleKind, state: Option<ToggleState>) -> &'static str {
    state.and_then(|state| ToggleAppearance::of(kind, state).text).unwrap_or("")
}
