//! # photo-wall
//!
//! Leptos + WASM client for a collaborative photo wall opened as a Telegram
//! Mini App. Photos are pinned to a 2000×2000 virtual wall that can be
//! panned and zoomed with mouse, touch, pinch and wheel gestures.
//!
//! This crate contains pages, components, application state and the REST
//! client. It integrates with the `canvas` crate, which owns the viewport,
//! the gesture state machine and the canvas renderer.
//!
//! Browser-only code is behind the `csr` feature; everything else is unit
//! tested natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic hook, then mount.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    util::telegram::signal_ready();
    leptos::mount::mount_to_body(app::App);
}
