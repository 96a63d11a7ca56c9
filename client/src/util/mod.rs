//! Browser helpers shared by the page entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! `dom` looks up elements and defines [`dom::BindError`]; the binding
//! modules attach controllers to server-rendered markup and only exist in
//! the browser build.

pub mod dom;
#[cfg(feature = "hydrate")]
pub mod slider_binding;
#[cfg(feature = "hydrate")]
pub mod toggler_binding;
