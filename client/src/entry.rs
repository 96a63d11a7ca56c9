//! Functions exported to the page scripts.
//!
//! ERROR HANDLING
//! ==============
//! A control that cannot be bound (missing element, bad `max`, bad label
//! JSON) is logged and skipped; the rest of the page still binds.

use leptos::prelude::*;
use slider::presets::{ElementIds, Instrument, SingleInstrument};
use slider::{ConfigError, SliderConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::HtmlElement;

use crate::components::plant_filters::PlantFilters;
use crate::net::types::ToggleKind;
use crate::util::dom::{self, BindError};
use crate::util::slider_binding::{DomDualSlider, DomLabeledSlider};
use crate::util::toggler_binding::bind_togglers;

/// Install the panic hook and the console logger. Call once per page.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {e}");
    }
}

/// Bind every plant filter present on the page. Returns how many bound.
#[wasm_bindgen]
pub fn init_plant_filters() -> u32 {
    let mut bound = 0;
    for instrument in Instrument::ALL {
        let result = DomDualSlider::bind(&instrument.element_ids(), |raw_max| instrument.config(raw_max));
        bound += u32::from(report(instrument.caption(), result));
    }
    for single in SingleInstrument::ALL {
        let result = DomLabeledSlider::bind(single.input_id(), single.label_id(), single.slider());
        bound += u32::from(report(single.caption(), result));
    }
    leptos::logging::log!("plant filters: {bound} bound");
    bound
}

/// Bind one dual-range pair by element ids.
///
/// `labels_json` is either a JSON array of labels indexed from 0 or an
/// object keyed by position. Returns whether the pair was bound.
#[wasm_bindgen]
pub fn init_dual_slider(
    from_id: &str,
    to_id: &str,
    from_label_id: &str,
    to_label_id: &str,
    track_selector: &str,
    min_gap: i32,
    labels_json: Option<String>,
) -> bool {
    let ids = ElementIds {
        from_input: from_id.to_owned(),
        to_input: to_id.to_owned(),
        from_label: from_label_id.to_owned(),
        to_label: to_label_id.to_owned(),
        track_selector: track_selector.to_owned(),
    };
    let result = DomDualSlider::bind(&ids, |raw_max| configure(raw_max, i64::from(min_gap), labels_json.as_deref()));
    report(from_id, result)
}

/// Bind the flag togglers of the availability and admin pages.
#[wasm_bindgen]
pub fn init_availability_togglers() -> u32 {
    ToggleKind::FLAGS.into_iter().map(bind_kind).sum()
}

/// Bind the ownership togglers of the collection page.
#[wasm_bindgen]
pub fn init_collection_togglers() -> u32 {
    bind_kind(ToggleKind::Ownership)
}

/// Render the plant filter panel into `container_id`.
#[wasm_bindgen]
pub fn mount_plant_filters(container_id: &str, height_max: i32, width_max: i32) -> bool {
    let container = dom::document()
        .and_then(|doc| dom::element_by_id(&doc, container_id))
        .and_then(|el| {
            el.dyn_into::<HtmlElement>().map_err(|_| BindError::WrongElementType {
                id: format!("#{container_id}"),
                expected: "HTML element",
            })
        });
    let container = match container {
        Ok(container) => container,
        Err(e) => {
            leptos::logging::warn!("plant filters not mounted: {e}");
            return false;
        }
    };
    let (height_max, width_max) = (i64::from(height_max), i64::from(width_max));
    leptos::mount::mount_to(container, move || view! { <PlantFilters height_max=height_max width_max=width_max /> })
        .forget();
    true
}

fn configure(raw_max: &str, min_gap: i64, labels_json: Option<&str>) -> Result<SliderConfig, ConfigError> {
    let config = SliderConfig::from_max_attr(raw_max)?.with_min_gap(min_gap)?;
    match labels_json {
        Some(json) => config.with_labels_json(json),
        None => Ok(config),
    }
}

fn bind_kind(kind: ToggleKind) -> u32 {
    match bind_togglers(kind) {
        Ok(count) => {
            log::debug!("{kind:?}: {count} togglers bound");
            u32::try_from(count).unwrap_or(u32::MAX)
        }
        Err(e) => {
            leptos::logging::warn!("{kind:?} togglers not bound: {e}");
            0
        }
    }
}

fn report<T>(what: &str, result: Result<T, BindError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            leptos::logging::warn!("{what} not bound: {e}");
            false
        }
    }
}
