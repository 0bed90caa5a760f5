//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the wall surfaces and their chrome while reading and
//! writing shared state from Leptos context providers.

pub mod canvas_host;
pub mod photo_modal;
pub mod photo_tile;
pub mod stats_bar;
pub mod wall_host;
pub mod zoom_controls;
