//! Client-rendered dual-range slider.
//!
//! DESIGN
//! ======
//! The component holds its `DualRange` in a signal and feeds it numeric
//! handle values. Settling rewrites the signal on every input, so
//! `prop:value` pushes a clamped value back into the control even when the
//! settled value equals the previous one.

use leptos::prelude::*;
use slider::parse::parse_lenient;
use slider::{DualRange, Handle, SliderConfig};

#[cfg(test)]
#[path = "dual_range_slider_test.rs"]
mod dual_range_slider_test;

/// Two range inputs over one track, with a label per handle.
#[component]
pub fn DualRangeSlider(
    config: SliderConfig,
    #[prop(into)] caption: String,
    #[prop(into)] name_from: String,
    #[prop(into)] name_to: String,
    #[prop(optional)] initial: Option<(i64, i64)>,
) -> impl IntoView {
    let max = config.max_value().to_string();
    let range = RwSignal::new(initial_range(config, initial));

    let on_handle = move |handle: Handle, ev: leptos::ev::Event| {
        let value = parse_lenient(&event_target_value(&ev));
        range.update(|r| {
            let update = r.move_handle(handle, value);
            if !update.corrected.is_empty() {
                leptos::logging::log!("{handle:?} clamped to {}..{}", update.from, update.to);
            }
        });
    };

    view! {
        <div class="dual-range">
            <div class="dual-range__header">
                <span class="dual-range__caption">{caption}</span>
                <span class="dual-range__from">{move || range.with(|r| r.label(Handle::From))}</span>
                <span class="dual-range__sep">"-"</span>
                <span class="dual-range__to">{move || range.with(|r| r.label(Handle::To))}</span>
            </div>
            <div class="dual-range__controls">
                <div class="dual-range__track" style=move || range.with(track_style)></div>
                <input
                    type="range"
                    class="dual-range__input"
                    name=name_from
                    min="0"
                    max=max.clone()
                    prop:value=move || range.with(|r| r.from_value().to_string())
                    on:input=move |ev| on_handle(Handle::From, ev)
                />
                <input
                    type="range"
                    class="dual-range__input"
                    name=name_to
                    min="0"
                    max=max
                    prop:value=move || range.with(|r| r.to_value().to_string())
                    on:input=move |ev| on_handle(Handle::To, ev)
                />
            </div>
        </div>
    }
}

/// Controller for `config`, settled from `initial` or spanning the track.
fn initial_range(config: SliderConfig, initial: Option<(i64, i64)>) -> DualRange {
    match initial {
        Some((from, to)) => DualRange::from_raw(config, &from.to_string(), &to.to_string()).0,
        None => DualRange::new(config),
    }
}

fn track_style(range: &DualRange) -> String {
    format!("background: {};", range.gradient().css())
}
