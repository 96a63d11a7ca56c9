//! Plant search filter panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the same controls the server-rendered search page carries: one
//! dual-range slider per [`Instrument`] and one labelled slider per
//! [`SingleInstrument`], named after the form fields the search view reads.

use leptos::prelude::*;
use slider::consts::MONTH_MAX;
use slider::presets::{Instrument, SingleInstrument};

use crate::components::dual_range_slider::DualRangeSlider;
use crate::components::labeled_slider::LabeledSliderInput;

#[cfg(test)]
#[path = "plant_filters_test.rs"]
mod plant_filters_test;

/// All plant filters; `height_max`/`width_max` bound the size sliders.
#[component]
pub fn PlantFilters(height_max: i64, width_max: i64) -> impl IntoView {
    let ranges = Instrument::ALL
        .into_iter()
        .filter_map(|instrument| {
            let config = match instrument.with_max(instrument_max(instrument, height_max, width_max)) {
                Ok(config) => config,
                Err(e) => {
                    leptos::logging::warn!("{} filter skipped: {e}", instrument.caption());
                    return None;
                }
            };
            let (name_from, name_to) = instrument.field_names();
            Some(view! {
                <DualRangeSlider
                    config=config
                    caption=instrument.caption()
                    name_from=name_from
                    name_to=name_to
                />
            })
        })
        .collect::<Vec<_>>();

    let singles = SingleInstrument::ALL
        .into_iter()
        .map(|single| {
            view! {
                <LabeledSliderInput
                    slider=single.slider()
                    caption=single.caption()
                    name=single.field_name()
                />
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="plant-filters">
            {ranges}
            {singles}
        </div>
    }
}

/// Upper bound of `instrument`; months are fixed, sizes come from the page.
fn instrument_max(instrument: Instrument, height_max: i64, width_max: i64) -> i64 {
    match instrument {
        Instrument::BloomPeriod => MONTH_MAX,
        Instrument::PlantHeight => height_max,
        Instrument::PlantWidth => width_max,
    }
}
