//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (gallery sync, initial zoom)
//! and delegates rendering details to `components`.

pub mod canvas;
pub mod wall;
