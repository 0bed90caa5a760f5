//! Networking modules for the wall's REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` defines their failure taxonomy,
//! `loader` sequences gallery loads, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod loader;
pub mod types;
