//! Networking for the entity toggle buttons.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the toggle requests and `types` defines the endpoints and
//! the JSON shape they answer with.

pub mod api;
pub mod types;
