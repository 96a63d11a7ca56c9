//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Client-rendered versions of the plant filter controls. Each component owns
//! its controller state in a signal; none of them read shared context.

pub mod dual_range_slider;
pub mod labeled_slider;
pub mod plant_filters;
pub mod toggle_button;
