//! Eased zoom animation.
//!
//! A discrete zoom command does not jump: it interpolates the scale from
//! its value at command time to the target over a fixed duration using a
//! cubic ease-out. Sampling is a pure function of the frame timestamp so
//! the engine can be driven by `requestAnimationFrame` in the browser and
//! by plain numbers in tests.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use crate::camera::Point;
use crate::consts::ZOOM_ANIMATION_MS;

/// Cubic ease-out: fast start, gentle landing. `t` is clamped to `[0, 1]`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// An in-flight scale interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomAnimation {
    /// Scale when the command was issued.
    pub from: f64,
    /// Scale reached when the animation completes.
    pub to: f64,
    /// Frame timestamp (ms) at which the animation started.
    pub started_ms: f64,
    pub duration_ms: f64,
    /// Scroll offset applied once, when the animation completes.
    pub settle_scroll: Option<Point>,
}

impl ZoomAnimation {
    #[must_use]
    pub fn new(from: f64, to: f64, started_ms: f64) -> Self {
        Self { from, to, started_ms, duration_ms: ZOOM_ANIMATION_MS, settle_scroll: None }
    }

    #[must_use]
    pub fn with_settle_scroll(self, scroll: Point) -> Self {
        Self { settle_scroll: Some(scroll), ..self }
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Eased scale at `now_ms`. Exactly `to` once the animation is finished.
    #[must_use]
    pub fn scale_at(&self, now_ms: f64) -> f64 {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out_cubic(progress)
    }
}
