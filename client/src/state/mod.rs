//! Reactive application state, provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each struct here is wrapped in an `RwSignal` by `App` and read by pages
//! and components. None of them touch the browser, so all transitions are
//! unit tested natively.

pub mod gallery;
pub mod photo_modal;
pub mod session;
pub mod wall_view;
