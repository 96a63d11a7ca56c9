//! Binds slider controllers to server-rendered range inputs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The plant search page ships plain `<input type="range">` pairs with a
//! label element per handle and a track element behind them. A binding owns
//! one `DualRange` and is captured only by that pair's listeners, so the
//! bloom, height and width instances never share state.
//!
//! Both control values are read fresh from the DOM on every event: the
//! browser may have moved the other handle (form reset, back navigation)
//! without firing our listener.

use std::cell::RefCell;
use std::rc::Rc;

use slider::presets::ElementIds;
use slider::{ConfigError, DualRange, Handle, LabeledSlider, RangeUpdate, SliderConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use super::dom::{self, BindError};

/// A dual-range controller wired to its page elements.
pub struct DomDualSlider {
    from_input: HtmlInputElement,
    to_input: HtmlInputElement,
    from_label: Element,
    to_label: Element,
    track: HtmlElement,
    range: RefCell<DualRange>,
}

impl DomDualSlider {
    /// Look up the elements named by `ids`, build the config from the "from"
    /// input's `max` attribute, render the initial state and attach the
    /// `input` listeners.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] if an element is missing or of the wrong type,
    /// or if `configure` rejects the `max` attribute.
    pub fn bind<F>(ids: &ElementIds, configure: F) -> Result<Rc<Self>, BindError>
    where
        F: FnOnce(&str) -> Result<SliderConfig, ConfigError>,
    {
        let doc = dom::document()?;
        let from_input = dom::input_by_id(&doc, &ids.from_input)?;
        let to_input = dom::input_by_id(&doc, &ids.to_input)?;
        let from_label = dom::element_by_id(&doc, &ids.from_label)?;
        let to_label = dom::element_by_id(&doc, &ids.to_label)?;
        let track = dom::html_by_selector(&doc, &ids.track_selector)?;

        let config = configure(&from_input.max())?;
        let (range, initial) = DualRange::from_raw(config, &from_input.value(), &to_input.value());
        let slider = Rc::new(Self { from_input, to_input, from_label, to_label, track, range: RefCell::new(range) });
        slider.apply(&initial)?;

        Self::listen(&slider, Handle::From)?;
        Self::listen(&slider, Handle::To)?;
        leptos::logging::log!("slider {} bound (max {})", ids.from_input, slider.range.borrow().config().max_value());
        Ok(slider)
    }

    fn input(&self, handle: Handle) -> &HtmlInputElement {
        match handle {
            Handle::From => &self.from_input,
            Handle::To => &self.to_input,
        }
    }

    fn label(&self, handle: Handle) -> &Element {
        match handle {
            Handle::From => &self.from_label,
            Handle::To => &self.to_label,
        }
    }

    /// `handle`'s control fired an `input` event.
    fn on_input(&self, handle: Handle) -> Result<(), BindError> {
        let raw_from = self.from_input.value();
        let raw_to = self.to_input.value();
        let update = self.range.borrow_mut().on_handle_changed(handle, &raw_from, &raw_to);
        log::debug!("{handle:?} moved: {raw_from}..{raw_to} -> {}..{}", update.from, update.to);
        self.apply(&update)
    }

    /// Write corrected values back, refresh labels and repaint the track.
    fn apply(&self, update: &RangeUpdate) -> Result<(), BindError> {
        for handle in [Handle::From, Handle::To] {
            if update.is_corrected(handle) {
                self.input(handle).set_value(&update.value(handle).to_string());
            }
        }
        let range = self.range.borrow();
        for handle in update.relabel() {
            self.label(handle).set_text_content(Some(&range.label(handle)));
        }
        dom::set_background(&self.track, &update.gradient.css())
    }

    fn listen(slider: &Rc<Self>, handle: Handle) -> Result<(), BindError> {
        let target = slider.input(handle).clone();
        let slider = Rc::clone(slider);
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            if let Err(e) = slider.on_input(handle) {
                leptos::logging::warn!("slider update failed: {e}");
            }
        });
        target
            .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
            .map_err(dom::js_error)?;
        cb.forget();
        Ok(())
    }
}

/// A single labelled slider wired to its input and label element.
pub struct DomLabeledSlider {
    input: HtmlInputElement,
    label: Element,
    slider: RefCell<LabeledSlider>,
}

impl DomLabeledSlider {
    /// Bind `slider` to the input `input_id` and the label `label_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`BindError`] if either element is missing or the input is
    /// not an `<input>`.
    pub fn bind(input_id: &str, label_id: &str, slider: LabeledSlider) -> Result<Rc<Self>, BindError> {
        let doc = dom::document()?;
        let input = dom::input_by_id(&doc, input_id)?;
        let label = dom::element_by_id(&doc, label_id)?;
        let bound = Rc::new(Self { input, label, slider: RefCell::new(slider) });
        bound.refresh();

        let target = bound.input.clone();
        let listener = Rc::clone(&bound);
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            listener.refresh();
        });
        target
            .add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())
            .map_err(dom::js_error)?;
        cb.forget();
        Ok(bound)
    }

    fn refresh(&self) {
        let text = self.slider.borrow_mut().on_changed(&self.input.value());
        self.label.set_text_content(Some(&text));
    }
}
