//! Binds entity toggle buttons to their backend endpoints.
//!
//! Each button carries the entity id in `data-pk`. A click issues the toggle
//! request and, once the server answers, swaps the button's classes and
//! glyph. Failures are logged and leave the button as it was.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use super::dom::{self, BindError};
use crate::net::api;
use crate::net::types::ToggleKind;
use crate::state::toggle::{ToggleAppearance, ToggleButtonState, parse_pk};

/// Attach click handlers to every `kind` button on the page.
///
/// Returns the number of buttons bound. Buttons without a usable `data-pk`
/// are skipped with a warning.
///
/// # Errors
///
/// Returns a [`BindError`] if the document is unavailable or the selector
/// query fails.
pub fn bind_togglers(kind: ToggleKind) -> Result<usize, BindError> {
    let doc = dom::document()?;
    let mut bound = 0;
    for button in dom::all_by_selector(&doc, kind.selector())? {
        let Some(pk) = parse_pk(button.dataset().get("pk").as_deref()) else {
            leptos::logging::warn!("{:?} button without data-pk, skipped", kind);
            continue;
        };
        listen(button, ToggleButtonState::new(kind, pk))?;
        bound += 1;
    }
    Ok(bound)
}

fn listen(button: HtmlElement, state: ToggleButtonState) -> Result<(), BindError> {
    let state = Rc::new(RefCell::new(state));
    let target = button.clone();
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        let Some(endpoint) = state.borrow_mut().begin() else {
            log::debug!("toggle already in flight, click ignored");
            return;
        };
        log::debug!("toggle {endpoint}");
        let state = Rc::clone(&state);
        let button = button.clone();
        leptos::task::spawn_local(async move {
            let (kind, pk) = {
                let s = state.borrow();
                (s.kind, s.pk)
            };
            let result = api::toggle(kind, pk).await;
            match state.borrow_mut().finish(result) {
                Ok(look) => apply(&button, &look),
                Err(e) => leptos::logging::warn!("{endpoint}: {e}"),
            }
        });
    });
    target
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .map_err(dom::js_error)?;
    cb.forget();
    Ok(())
}

fn apply(button: &HtmlElement, look: &ToggleAppearance) {
    button.set_class_name(&look.apply_to_classes(&button.class_name()));
    if let Some(text) = look.text {
        button.set_text_content(Some(text));
    }
}
