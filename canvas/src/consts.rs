//! Shared numeric constants for the canvas crate.

// ── Zoom limits ─────────────────────────────────────────────────

/// Lowest scale reachable through gestures and the zoom buttons.
pub const MIN_GESTURE_SCALE: f64 = 0.3;

/// Lowest scale fit-to-view may pick for very small containers.
pub const MIN_FIT_SCALE: f64 = 0.1;

/// Highest scale reachable by any means.
pub const MAX_SCALE: f64 = 3.0;

/// Fraction of the container the whole wall occupies after fit-to-view.
pub const FIT_MARGIN: f64 = 0.9;

/// Scale increment of one zoom-in / zoom-out button press.
pub const ZOOM_STEP: f64 = 0.2;

// ── Gesture sensitivity ─────────────────────────────────────────

/// Pan speed relative to pointer movement.
pub const PAN_MULTIPLIER: f64 = 2.0;

/// Scale change per pixel of pinch distance change.
pub const PINCH_SENSITIVITY: f64 = 0.001;

/// Scale change per pixel of vertical wheel delta.
pub const WHEEL_SENSITIVITY: f64 = 0.002;

// ── Animation ───────────────────────────────────────────────────

/// Duration of an eased discrete zoom, in milliseconds.
pub const ZOOM_ANIMATION_MS: f64 = 300.0;

/// Scroll offset applied once a reset-zoom animation settles.
pub const RESET_SCROLL: f64 = 500.0;

// ── Surface ─────────────────────────────────────────────────────

/// Width and height of the DOM wall, and the minimum canvas extent.
pub const WALL_EXTENT: f64 = 2000.0;

/// Spacing of the canvas background grid in world units.
pub const GRID_SPACING: f64 = 100.0;

/// Side length used for photos that carry no explicit size.
pub const DEFAULT_PHOTO_SIZE: f64 = 150.0;
