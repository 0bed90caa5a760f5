//! Input model: wheel deltas, zoom commands, and the gesture state machine.
//!
//! `InputState` is the gesture being tracked between press and release. Each
//! active variant carries the context captured when the gesture began, so
//! every move event can be resolved against the gesture origin rather than
//! accumulated incrementally.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::animation::ZoomAnimation;
use crate::camera::Point;

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// A discrete, animated zoom request issued from the zoom buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomCommand {
    /// One step closer.
    In,
    /// One step further away.
    Out,
    /// Back to natural size, then scroll to the default spot.
    Reset,
    /// Show the whole surface, centered.
    FitToView,
}

/// Coarse name of the current gesture, for telemetry and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    Pinching,
    Animating,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Copy, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// One pointer (mouse or finger) is panning the wall.
    Dragging {
        /// Screen-space position where the press happened.
        origin: Point,
        /// Scroll offset at the moment of the press.
        scroll_origin: Point,
    },
    /// Two fingers are pinching.
    Pinching {
        /// Distance between the two touch points when the pinch began.
        initial_distance: f64,
        /// Scale when the pinch began.
        start_scale: f64,
    },
    /// A discrete zoom command is being eased in.
    Animating(ZoomAnimation),
}

impl InputState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Idle => Phase::Idle,
            Self::Dragging { .. } => Phase::Dragging,
            Self::Pinching { .. } => Phase::Pinching,
            Self::Animating(_) => Phase::Animating,
        }
    }
}
