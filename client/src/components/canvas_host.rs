//! Canvas wall renderer: a grid and one labelled rectangle per photo.
//!
//! ARCHITECTURE
//! ============
//! `CanvasHost` is the bridge between Leptos state and the imperative
//! `canvas::engine::Engine`. The engine sizes its surface to the photos'
//! bounding envelope and draws through the same viewport transform as the
//! DOM wall. There is no click or modal handling on this surface.

#[cfg(feature = "csr")]
use canvas::camera::{Cursor, Size};
#[cfg(feature = "csr")]
use canvas::engine::{Engine, EngineCore};
use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::state::gallery::GalleryState;
#[cfg(feature = "csr")]
use crate::state::wall_view::{WallViewState, ZoomRequest};
#[cfg(feature = "csr")]
use crate::util::sprites::photo_sprites;
#[cfg(feature = "csr")]
use crate::util::wall_driver::{WallDriver, WallSurface};

#[cfg(feature = "csr")]
struct CanvasWall {
    engine: Engine,
    element: web_sys::HtmlCanvasElement,
}

#[cfg(feature = "csr")]
impl WallSurface for CanvasWall {
    fn core(&self) -> &EngineCore {
        &self.engine.core
    }

    fn core_mut(&mut self) -> &mut EngineCore {
        &mut self.engine.core
    }

    /// Resizing the backing store clears it, so only resize on a real change.
    fn measure(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let size = Size::new(
            f64::from(self.element.client_width()).max(1.0),
            f64::from(self.element.client_height()).max(1.0),
        );
        let dpr = window.device_pixel_ratio().max(1.0);
        let core = &self.engine.core;
        if size == core.container && (dpr - core.dpr).abs() < f64::EPSILON {
            return;
        }
        self.engine.set_viewport(size.width, size.height, dpr);
        self.present();
    }

    fn present(&mut self) {
        if let Err(e) = self.engine.render() {
            leptos::logging::warn!("canvas render failed: {e:?}");
        }
    }

    fn show_cursor(&self, cursor: Cursor) {
        if let Err(e) = self.element.style().set_property("cursor", cursor.css()) {
            leptos::logging::warn!("could not set cursor: {e:?}");
        }
    }
}

#[component]
pub fn CanvasHost() -> impl IntoView {
    #[cfg(feature = "csr")]
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "csr")]
    let driver = WallDriver::<CanvasWall>::new(expect_context::<RwSignal<WallViewState>>());

    #[cfg(feature = "csr")]
    {
        let driver = driver.clone();
        Effect::new(move || {
            if driver.is_attached() {
                return;
            }
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            driver.attach(CanvasWall { engine: Engine::new(canvas.clone()), element: canvas });
        });
    }

    #[cfg(feature = "csr")]
    {
        let driver = driver.clone();
        Effect::new(move || {
            if canvas_ref.get().is_none() {
                return;
            }
            let sprites = gallery.with(|g| photo_sprites(&g.photos));
            driver.drive(|core| core.load_scene(sprites));
            driver.redraw();
        });
    }

    #[cfg(feature = "csr")]
    driver.follow_zoom_requests(expect_context::<RwSignal<ZoomRequest>>());

    let on_mouse_down = {
        #[cfg(feature = "csr")]
        {
            let driver = driver.clone();
            move |ev: leptos::ev::MouseEvent| {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    driver.mouse_down(&ev, &canvas);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_move = {
        #[cfg(feature = "csr")]
        {
            let driver = driver.clone();
            move |ev: leptos::ev::MouseEvent| {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    driver.mouse_move(&ev, &canvas);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_release = {
        #[cfg(feature = "csr")]
        {
            let driver = driver.clone();
            move |_ev: leptos::ev::MouseEvent| driver.drive(EngineCore::on_pointer_up)
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };
    let on_mouse_leave = on_mouse_release.clone();

    let on_touch_start = {
        #[cfg(feature = "csr")]
        {
            let driver = driver.clone();
            move |ev: leptos::ev::TouchEvent| {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    driver.touch_start(&ev, &canvas);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "csr")]
        {
            let driver = driver.clone();
            move |ev: leptos::ev::TouchEvent| {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    driver.touch_move(&ev, &canvas);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = {
        #[cfg(feature = "csr")]
        {
            let driver = driver.clone();
            move |_ev: leptos::ev::TouchEvent| driver.drive(EngineCore::on_touch_end)
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };
    let on_touch_cancel = on_touch_end.clone();

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::WheelEvent| driver.wheel(&ev)
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    view! {
        <canvas
            id="main-canvas"
            class="canvas-host"
            node_ref=canvas_ref
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_release
            on:mouseleave=on_mouse_leave
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
            on:wheel=on_wheel
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
