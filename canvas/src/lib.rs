//! Viewport and rendering engine for the photo wall.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! pan/zoom state shared by both wall renderers: translating raw pointer,
//! touch and wheel input into viewport changes, driving eased zoom
//! animations, and drawing the canvas rendition of the wall. The host UI
//! layer is responsible only for wiring DOM events to the engine and applying
//! the resulting [`engine::Action`]s to the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`camera`] | Viewport state and the world/screen transform |
//! | [`input`] | Gesture state machine and input event types |
//! | [`animation`] | Eased zoom animation sampling |
//! | [`scene`] | Sprite store drawn by the canvas renderer |
//! | [`render`] | Grid and sprite drawing on a 2D context |
//! | [`consts`] | Shared numeric constants (zoom limits, sensitivities, sizes) |

pub mod animation;
pub mod camera;
pub mod consts;
pub mod engine;
pub mod input;
pub mod render;
pub mod scene;
