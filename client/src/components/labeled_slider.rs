//! Client-rendered single slider showing a table label.

use leptos::prelude::*;
use slider::LabeledSlider;

/// One range input whose position is shown through `slider`'s label table.
#[component]
pub fn LabeledSliderInput(
    slider: LabeledSlider,
    #[prop(into)] caption: String,
    #[prop(into)] name: String,
) -> impl IntoView {
    let max = slider.max_value().to_string();
    let slider = RwSignal::new(slider);

    view! {
        <div class="labeled-slider">
            <span class="labeled-slider__caption">{caption}</span>
            <span class="labeled-slider__value">{move || slider.with(LabeledSlider::label)}</span>
            <input
                type="range"
                class="labeled-slider__input"
                name=name
                min="0"
                max=max
                prop:value=move || slider.with(|s| s.value().to_string())
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    slider.update(|s| {
                        s.on_changed(&raw);
                    });
                }
            />
        </div>
    }
}
