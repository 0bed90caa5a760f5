//! Viewport state and the single world/screen transform used by every renderer.
//!
//! The wall is a fixed-size virtual surface. A [`ViewportState`] describes
//! how it is shown: content is scaled about the top-left origin and then
//! scrolled. The DOM renderer maps this onto a CSS `scale()` plus container
//! scroll offsets; the canvas renderer maps it onto the 2D context transform.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{FIT_MARGIN, MAX_SCALE, MIN_FIT_SCALE, MIN_GESTURE_SCALE};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A width/height pair in CSS pixels (container) or world units (surface).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Pointer affordance shown over the wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Grab,
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` property value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Pan/zoom state of the wall.
///
/// `scale` is a zoom factor (1.0 = natural size) anchored at the top-left
/// corner of the surface. `scroll_x` / `scroll_y` are in screen pixels, i.e.
/// measured on the already-scaled surface, exactly like a scrolling
/// container's `scrollLeft` / `scrollTop`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub scale: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self { scale: 1.0, scroll_x: 0.0, scroll_y: 0.0 }
    }
}

impl ViewportState {
    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.scale - self.scroll_x,
            y: world.y * self.scale - self.scroll_y,
        }
    }

    /// The same mapping as [`Self::world_to_screen`] in canvas
    /// `setTransform` form: `(a, d, e, f)` with no skew.
    #[must_use]
    pub fn canvas_transform(&self) -> (f64, f64, f64, f64) {
        let origin = self.world_to_screen(Point::new(0.0, 0.0));
        (self.scale, self.scale, origin.x, origin.y)
    }

    /// Current scroll offset as a point.
    #[must_use]
    pub fn scroll(&self) -> Point {
        Point::new(self.scroll_x, self.scroll_y)
    }

    /// Copy with a new scroll offset.
    #[must_use]
    pub fn scrolled_to(self, scroll: Point) -> Self {
        Self { scroll_x: scroll.x, scroll_y: scroll.y, ..self }
    }

    /// Copy with `scale` clamped to the gesture range `[0.3, 3.0]`.
    #[must_use]
    pub fn with_gesture_scale(self, scale: f64) -> Self {
        Self { scale: clamp_gesture_scale(scale), ..self }
    }

    /// Copy with scroll offsets clamped to what a scrolling container allows
    /// for `surface` shown at the current scale inside `container`.
    #[must_use]
    pub fn clamp_scroll(self, container: Size, surface: Size) -> Self {
        let max_x = (surface.width * self.scale - container.width).max(0.0);
        let max_y = (surface.height * self.scale - container.height).max(0.0);
        Self {
            scroll_x: self.scroll_x.clamp(0.0, max_x),
            scroll_y: self.scroll_y.clamp(0.0, max_y),
            ..self
        }
    }

    /// Size of the scaled surface, i.e. the container's scrollable extent.
    #[must_use]
    pub fn scaled_extent(&self, surface: Size) -> Size {
        Size::new(surface.width * self.scale, surface.height * self.scale)
    }

    /// Cursor shown while no drag is in progress.
    #[must_use]
    pub fn idle_cursor(&self) -> Cursor {
        if self.scale > 1.0 { Cursor::Grab } else { Cursor::Default }
    }

    /// CSS transform applied to the wall element. With origin `0 0` and the
    /// container scrolled to `scroll`, this is [`Self::world_to_screen`].
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("scale({})", self.scale)
    }
}

/// Clamp a scale produced by a gesture or zoom button to `[0.3, 3.0]`.
#[must_use]
pub fn clamp_gesture_scale(scale: f64) -> f64 {
    scale.clamp(MIN_GESTURE_SCALE, MAX_SCALE)
}

/// Scale at which the whole `surface` fits inside `container` with a margin.
///
/// The result is the smaller of the two axis ratios times 0.9, floored at
/// 0.1 and capped at the maximum scale.
#[must_use]
pub fn fit_scale(container: Size, surface: Size) -> f64 {
    if surface.width <= 0.0 || surface.height <= 0.0 {
        return 1.0;
    }
    let scale_x = container.width / surface.width;
    let scale_y = container.height / surface.height;
    (scale_x.min(scale_y) * FIT_MARGIN).clamp(MIN_FIT_SCALE, MAX_SCALE)
}

/// Scroll offset that centers `surface`, shown at `scale`, inside `container`.
///
/// May be negative when the scaled surface is smaller than the container;
/// callers clamp it like any other scroll.
#[must_use]
pub fn centered_scroll(container: Size, surface: Size, scale: f64) -> Point {
    Point::new(
        (surface.width * scale - container.width) / 2.0,
        (surface.height * scale - container.height) / 2.0,
    )
}
