//! # client
//!
//! Leptos + WASM client for the plant library pages.
//!
//! The server renders the search and collection pages; this crate attaches
//! the interactive behavior: dual-range filter sliders, labelled single
//! sliders and entity toggle buttons. The slider logic itself lives in the
//! browser-free `slider` crate. The same controls are also available as
//! Leptos components for client-rendered containers.
//!
//! Browser code is gated behind the `hydrate` feature; everything else
//! builds and tests natively.

pub mod components;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod entry;
