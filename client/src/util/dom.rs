//! DOM lookup helpers for binding controllers to server-rendered markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The plant pages are rendered by the backend; this crate finds the
//! controls by id or selector and wires listeners onto them. A missing or
//! mistyped element is a page setup error reported as [`BindError`], so the
//! caller can log it and skip that one control instead of failing the page.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use slider::ConfigError;

/// Why a controller could not be bound to the page.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BindError {
    /// No `window`/`document` (not running in a browser).
    #[error("no document available")]
    NoDocument,
    /// No element with the given id.
    #[error("element #{0} not found")]
    MissingElement(String),
    /// No element matches the selector.
    #[error("no element matches {0}")]
    MissingSelector(String),
    /// The element exists but is not the expected kind.
    #[error("element {id} is not an {expected}")]
    WrongElementType { id: String, expected: &'static str },
    /// The control's attributes do not form a usable slider config.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A browser API call failed.
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

    use super::BindError;

    pub fn document() -> Result<Document, BindError> {
        web_sys::window().and_then(|w| w.document()).ok_or(BindError::NoDocument)
    }

    pub fn element_by_id(doc: &Document, id: &str) -> Result<Element, BindError> {
        doc.get_element_by_id(id).ok_or_else(|| BindError::MissingElement(id.to_owned()))
    }

    pub fn input_by_id(doc: &Document, id: &str) -> Result<HtmlInputElement, BindError> {
        element_by_id(doc, id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| BindError::WrongElementType { id: format!("#{id}"), expected: "input" })
    }

    pub fn html_by_selector(doc: &Document, selector: &str) -> Result<HtmlElement, BindError> {
        doc.query_selector(selector)
            .map_err(js_error)?
            .ok_or_else(|| BindError::MissingSelector(selector.to_owned()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BindError::WrongElementType { id: selector.to_owned(), expected: "HTML element" })
    }

    /// All HTML elements matching `selector`, in document order.
    pub fn all_by_selector(doc: &Document, selector: &str) -> Result<Vec<HtmlElement>, BindError> {
        let nodes = doc.query_selector_all(selector).map_err(js_error)?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }

    /// Set the `background` style of `el`.
    pub fn set_background(el: &HtmlElement, css: &str) -> Result<(), BindError> {
        el.style().set_property("background", css).map_err(js_error)
    }

    pub fn js_error(err: JsValue) -> BindError {
        BindError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}
