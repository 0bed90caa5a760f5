//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and host-environment concerns from page
//! and component logic to improve reuse and testability.

pub mod config;
pub mod dialogs;
pub mod pointer;
pub mod sprites;
pub mod telegram;
pub mod wall_driver;
