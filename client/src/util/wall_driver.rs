//! Bridge between the gesture engine and a rendering surface in the page.
//!
//! ARCHITECTURE
//! ============
//! Both wall renderers own an `EngineCore` and differ only in how a viewport
//! reaches the screen: the DOM wall restyles elements, the canvas redraws.
//! `WallDriver` runs the shared part: feeding input to the engine, handling
//! the returned actions, scheduling animation frames, and publishing
//! telemetry. All of it is browser-only.

#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use leptos::prelude::*;
#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;
#[cfg(feature = "csr")]
use wasm_bindgen::closure::Closure;

#[cfg(feature = "csr")]
use canvas::camera::{Cursor, Point};
#[cfg(feature = "csr")]
use canvas::engine::{Action, EngineCore};

#[cfg(feature = "csr")]
use crate::state::wall_view::{WallViewState, ZoomRequest};
#[cfg(feature = "csr")]
use crate::util::pointer::{mouse_point, touch_points, wheel_delta};

/// A place the wall viewport is shown.
#[cfg(feature = "csr")]
pub trait WallSurface: 'static {
    fn core(&self) -> &EngineCore;
    fn core_mut(&mut self) -> &mut EngineCore;
    /// Re-read the container's size into the engine.
    fn measure(&mut self);
    /// Put the engine's current viewport on screen.
    fn present(&mut self);
    fn show_cursor(&self, cursor: Cursor);
}

#[cfg(feature = "csr")]
pub struct WallDriver<S> {
    surface: Rc<RefCell<Option<S>>>,
    view: RwSignal<WallViewState>,
    frame_pending: Rc<Cell<bool>>,
}

#[cfg(feature = "csr")]
impl<S> Clone for WallDriver<S> {
    fn clone(&self) -> Self {
        Self { surface: Rc::clone(&self.surface), view: self.view, frame_pending: Rc::clone(&self.frame_pending) }
    }
}

#[cfg(feature = "csr")]
impl<S: WallSurface> WallDriver<S> {
    pub fn new(view: RwSignal<WallViewState>) -> Self {
        Self { surface: Rc::new(RefCell::new(None)), view, frame_pending: Rc::new(Cell::new(false)) }
    }

    pub fn is_attached(&self) -> bool {
        self.surface.borrow().is_some()
    }

    /// Bind the surface once its elements are mounted.
    pub fn attach(&self, mut surface: S) {
        surface.measure();
        surface.present();
        self.view.set(WallViewState::from_core(surface.core()));
        *self.surface.borrow_mut() = Some(surface);
    }

    /// Re-measure the container, run one engine operation, and apply what
    /// it asks for.
    pub fn drive(&self, op: impl FnOnce(&mut EngineCore) -> Vec<Action>) {
        let actions = {
            let mut guard = self.surface.borrow_mut();
            let Some(surface) = guard.as_mut() else {
                return;
            };
            surface.measure();
            op(surface.core_mut())
        };
        self.dispatch(actions);
    }

    // --- DOM event entry points ---

    pub fn mouse_down(&self, ev: &leptos::ev::MouseEvent, element: &web_sys::Element) {
        if ev.button() != 0 {
            return;
        }
        let point = mouse_point(ev, element);
        self.drive(|core| core.on_pointer_down(point));
    }

    pub fn mouse_move(&self, ev: &leptos::ev::MouseEvent, element: &web_sys::Element) {
        let point = mouse_point(ev, element);
        self.drive(|core| core.on_pointer_move(point));
    }

    pub fn touch_start(&self, ev: &leptos::ev::TouchEvent, element: &web_sys::Element) {
        let points = touch_points(ev, element);
        self.drive(|core| core.on_touch_start(&points));
    }

    pub fn touch_move(&self, ev: &leptos::ev::TouchEvent, element: &web_sys::Element) {
        ev.prevent_default();
        let points = touch_points(ev, element);
        self.drive(|core| core.on_touch_move(&points));
    }

    pub fn wheel(&self, ev: &leptos::ev::WheelEvent) {
        ev.prevent_default();
        let delta = wheel_delta(ev);
        self.drive(|core| core.on_wheel(delta));
    }

    /// The container scrolled under the browser's own control.
    pub fn native_scroll(&self, element: &web_sys::Element) {
        let scroll = Point::new(f64::from(element.scroll_left()), f64::from(element.scroll_top()));
        self.drive(|core| core.on_native_scroll(scroll));
    }

    /// Run zoom commands issued after this call.
    pub fn follow_zoom_requests(&self, zoom: RwSignal<ZoomRequest>) {
        let driver = self.clone();
        let last_seen = Cell::new(zoom.get_untracked().seq);
        Effect::new(move || {
            let request = zoom.get();
            let Some(command) = request.newer_than(last_seen.get()) else {
                return;
            };
            last_seen.set(request.seq);
            let driver = driver.clone();
            request_frame(move |now_ms| driver.drive(|core| core.zoom(command, now_ms)));
        });
    }

    /// Present the current state even if the viewport did not move, e.g.
    /// after the scene changed.
    pub fn redraw(&self) {
        if let Some(surface) = self.surface.borrow_mut().as_mut() {
            surface.present();
        }
    }

    fn dispatch(&self, actions: Vec<Action>) {
        if actions.is_empty() {
            return;
        }
        let mut needs_frame = false;
        let snapshot = {
            let mut guard = self.surface.borrow_mut();
            let Some(surface) = guard.as_mut() else {
                return;
            };
            let mut moved = false;
            for action in actions {
                match action {
                    Action::ViewportChanged(_) => moved = true,
                    Action::SetCursor(cursor) => surface.show_cursor(cursor),
                    Action::AnimationFrameNeeded => needs_frame = true,
                }
            }
            if moved {
                surface.present();
            }
            WallViewState::from_core(surface.core())
        };
        self.view.set(snapshot);
        if needs_frame {
            self.schedule_tick();
        }
    }

    fn schedule_tick(&self) {
        if self.frame_pending.replace(true) {
            return;
        }
        let driver = self.clone();
        let scheduled = request_frame(move |now_ms| {
            driver.frame_pending.set(false);
            driver.drive(|core| core.tick(now_ms));
        });
        if !scheduled {
            self.frame_pending.set(false);
        }
    }
}

/// Run `callback` on the next animation frame with the frame's timestamp.
/// Returns `false` if the browser refused the request.
///
/// Zoom animations start and advance on these timestamps only, so every
/// sample comes from the same monotonic clock.
#[cfg(feature = "csr")]
pub fn request_frame(callback: impl FnOnce(f64) + 'static) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let mut callback = Some(callback);
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if let Some(callback) = callback.take() {
            callback(ts);
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => {
            *holder.borrow_mut() = Some(cb);
            true
        }
        Err(e) => {
            leptos::logging::warn!("requestAnimationFrame failed: {e:?}");
            false
        }
    }
}
