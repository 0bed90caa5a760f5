use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::animation::ZoomAnimation;
use crate::camera::{Cursor, Point, Size, ViewportState, centered_scroll, fit_scale};
use crate::consts::{
    MAX_SCALE, MIN_GESTURE_SCALE, PAN_MULTIPLIER, PINCH_SENSITIVITY, RESET_SCROLL, WALL_EXTENT, WHEEL_SENSITIVITY,
    ZOOM_STEP,
};
use crate::input::{InputState, Phase, WheelDelta, ZoomCommand};
use crate::render;
use crate::scene::{Scene, Sprite};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The viewport moved or zoomed; the host must re-apply it.
    ViewportChanged(ViewportState),
    SetCursor(Cursor),
    /// An animation is running; call [`EngineCore::tick`] on the next frame.
    AnimationFrameNeeded,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies, and so the DOM renderer can drive it with no canvas at all.
pub struct EngineCore {
    pub viewport: ViewportState,
    pub input: InputState,
    pub scene: Scene,
    /// Visible area in CSS pixels.
    pub container: Size,
    /// Virtual surface in world units.
    pub surface: Size,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            viewport: ViewportState::default(),
            input: InputState::default(),
            scene: Scene::new(),
            container: Size::new(0.0, 0.0),
            surface: Size::new(WALL_EXTENT, WALL_EXTENT),
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the scene and grow the surface to its extent.
    pub fn load_scene(&mut self, sprites: Vec<Sprite>) -> Vec<Action> {
        self.scene.load(sprites);
        self.surface = self.scene.extent();
        self.commit(self.viewport)
    }

    /// Update container dimensions and device pixel ratio.
    pub fn set_container(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.container = Size::new(width_css.max(0.0), height_css.max(0.0));
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
    }

    // --- Pointer input ---

    /// Mouse press: start panning from `screen_pt`.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Vec<Action> {
        self.begin_drag(screen_pt)
    }

    /// Mouse move: pan if a drag is in progress.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.drag_to(screen_pt)
    }

    /// Mouse release.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    /// Pointer left the wall; treated like a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    // --- Touch input ---

    /// Touch start with every point currently on the surface.
    ///
    /// One finger starts a drag; two or more start a pinch using the first two.
    pub fn on_touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        match touches {
            [] => Vec::new(),
            [single] => self.begin_drag(*single),
            [a, b, ..] => {
                self.cancel_animation();
                self.input = InputState::Pinching {
                    initial_distance: a.distance_to(*b),
                    start_scale: self.viewport.scale,
                };
                vec![Action::SetCursor(self.viewport.idle_cursor())]
            }
        }
    }

    /// Touch move with every point currently on the surface.
    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        match (touches, self.input) {
            ([single], InputState::Dragging { .. }) => self.drag_to(*single),
            ([a, b, ..], InputState::Pinching { initial_distance, start_scale }) => {
                let change = (a.distance_to(*b) - initial_distance) * PINCH_SENSITIVITY;
                let next = self.viewport.with_gesture_scale(start_scale + change);
                self.commit(next)
            }
            _ => Vec::new(),
        }
    }

    /// Any finger lifted: drags and pinches both end.
    pub fn on_touch_end(&mut self) -> Vec<Action> {
        match self.input {
            InputState::Dragging { .. } | InputState::Pinching { .. } => {
                self.input = InputState::Idle;
                vec![Action::SetCursor(self.viewport.idle_cursor())]
            }
            InputState::Idle | InputState::Animating(_) => Vec::new(),
        }
    }

    // --- Wheel ---

    /// Wheel zoom with fixed sensitivity; scrolling down zooms out.
    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        self.cancel_animation();
        let next = self
            .viewport
            .with_gesture_scale(self.viewport.scale - delta.dy * WHEEL_SENSITIVITY);
        let mut actions = self.commit(next);
        if !matches!(self.input, InputState::Dragging { .. }) {
            actions.push(Action::SetCursor(self.viewport.idle_cursor()));
        }
        actions
    }

    // --- Native scroll ---

    /// Adopt a scroll offset the browser applied itself (scrollbars, keyboard).
    /// Ignored while a gesture or animation owns the viewport.
    pub fn on_native_scroll(&mut self, scroll: Point) -> Vec<Action> {
        if self.input.phase() != Phase::Idle {
            return Vec::new();
        }
        self.commit(self.viewport.scrolled_to(scroll))
    }

    // --- Discrete zoom ---

    /// Start an eased zoom toward the command's target scale.
    pub fn zoom(&mut self, command: ZoomCommand, now_ms: f64) -> Vec<Action> {
        let current = self.viewport.scale;
        let animation = match command {
            ZoomCommand::In => ZoomAnimation::new(current, (current + ZOOM_STEP).min(MAX_SCALE), now_ms),
            ZoomCommand::Out => ZoomAnimation::new(current, (current - ZOOM_STEP).max(MIN_GESTURE_SCALE), now_ms),
            ZoomCommand::Reset => ZoomAnimation::new(current, 1.0, now_ms)
                .with_settle_scroll(Point::new(RESET_SCROLL, RESET_SCROLL)),
            ZoomCommand::FitToView => {
                let target = fit_scale(self.container, self.surface);
                ZoomAnimation::new(current, target, now_ms)
                    .with_settle_scroll(centered_scroll(self.container, self.surface, target))
            }
        };
        self.input = InputState::Animating(animation);
        vec![Action::AnimationFrameNeeded]
    }

    /// Advance an in-flight animation to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> Vec<Action> {
        let InputState::Animating(animation) = self.input else {
            return Vec::new();
        };
        let mut next = ViewportState { scale: animation.scale_at(now_ms), ..self.viewport };
        if !animation.is_finished(now_ms) {
            let mut actions = self.commit(next);
            actions.push(Action::AnimationFrameNeeded);
            return actions;
        }

        if let Some(scroll) = animation.settle_scroll {
            next = next.scrolled_to(scroll);
        }
        self.input = InputState::Idle;
        let mut actions = self.commit(next);
        actions.push(Action::SetCursor(self.viewport.idle_cursor()));
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.input.phase()
    }

    // --- Internals ---

    fn begin_drag(&mut self, screen_pt: Point) -> Vec<Action> {
        self.cancel_animation();
        self.input = InputState::Dragging { origin: screen_pt, scroll_origin: self.viewport.scroll() };
        vec![Action::SetCursor(Cursor::Grabbing)]
    }

    fn drag_to(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Dragging { origin, scroll_origin } = self.input else {
            return Vec::new();
        };
        let walk_x = (screen_pt.x - origin.x) * PAN_MULTIPLIER;
        let walk_y = (screen_pt.y - origin.y) * PAN_MULTIPLIER;
        let next = self
            .viewport
            .scrolled_to(Point::new(scroll_origin.x - walk_x, scroll_origin.y - walk_y));
        self.commit(next)
    }

    fn end_drag(&mut self) -> Vec<Action> {
        if !matches!(self.input, InputState::Dragging { .. }) {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor(self.viewport.idle_cursor())]
    }

    /// An animation stops where it is; the interpolated scale is kept.
    fn cancel_animation(&mut self) {
        if matches!(self.input, InputState::Animating(_)) {
            self.input = InputState::Idle;
        }
    }

    fn commit(&mut self, next: ViewportState) -> Vec<Action> {
        let next = next.clamp_scroll(self.container, self.surface);
        if next == self.viewport {
            return Vec::new();
        }
        self.viewport = next;
        vec![Action::ViewportChanged(next)]
    }
}

/// The canvas-backed engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_container(width_css, height_css, dpr);
        self.canvas.set_width((self.core.container.width * self.core.dpr).round() as u32);
        self.canvas.set_height((self.core.container.height * self.core.dpr).round() as u32);
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(
            &ctx,
            &self.core.scene,
            &self.core.viewport,
            self.core.container.width,
            self.core.container.height,
            self.core.dpr,
        )
    }
}
