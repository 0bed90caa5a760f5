//! DOM wall renderer: photo tiles on a scaled, scrollable surface.
//!
//! ARCHITECTURE
//! ============
//! `#wall-container` scrolls. Inside it a sizer takes the scaled size of the
//! 2000×2000 wall so the browser's scroll bounds match the engine's clamp,
//! and `#wall` carries the tiles under `transform: scale(..)` with origin
//! `0 0`. The engine is the single source of truth for scale and scroll;
//! every change is written back through [`DomWall::present`].

use leptos::html::Div;
use leptos::prelude::*;

#[cfg(feature = "csr")]
use canvas::camera::Cursor;
#[cfg(feature = "csr")]
use canvas::engine::EngineCore;

use crate::components::photo_modal::open_photo;
use crate::components::photo_tile::PhotoTile;
use crate::net::types::Photo;
use crate::state::gallery::{EMPTY_WALL_MESSAGE, GalleryState};
use crate::state::photo_modal::PhotoModalState;
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::state::wall_view::{WallViewState, ZoomRequest};
use crate::util::config::WallConfig;
#[cfg(feature = "csr")]
use crate::util::wall_driver::{WallDriver, WallSurface};

#[cfg(feature = "csr")]
struct DomWall {
    core: EngineCore,
    container: web_sys::HtmlElement,
    sizer: web_sys::HtmlElement,
    wall: web_sys::HtmlElement,
}

#[cfg(feature = "csr")]
impl WallSurface for DomWall {
    fn core(&self) -> &EngineCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EngineCore {
        &mut self.core
    }

    fn measure(&mut self) {
        let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
        self.core.set_container(
            f64::from(self.container.client_width()),
            f64::from(self.container.client_height()),
            dpr,
        );
    }

    fn present(&mut self) {
        let viewport = self.core.viewport();
        let scaled = viewport.scaled_extent(self.core.surface);
        set_style(&self.wall, "transform", &viewport.css_transform());
        set_style(&self.sizer, "width", &format!("{}px", scaled.width));
        set_style(&self.sizer, "height", &format!("{}px", scaled.height));
        self.container.scroll_to_with_x_and_y(viewport.scroll_x, viewport.scroll_y);
    }

    fn show_cursor(&self, cursor: Cursor) {
        set_style(&self.container, "cursor", cursor.css());
    }
}

#[cfg(feature = "csr")]
fn set_style(element: &web_sys::HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        leptos::logging::warn!("could not set {property}: {e:?}");
    }
}

/// The DOM wall with its gesture handling, loading indicator and empty state.
#[component]
pub fn WallHost() -> impl IntoView {
    let config = expect_context::<WallConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let modal = expect_context::<RwSignal<Option<PhotoModalState>>>();

    let container_ref = NodeRef::<Div>::new();
    let sizer_ref = NodeRef::<Div>::new();
    let wall_ref = NodeRef::<Div>::new();

    #[cfg(feature = "csr")]
    let driver = WallDriver::<DomWall>::new(expect_context::<RwSignal<WallViewState>>());

    #[cfg(feature = "csr")]
    {
        let driver = driver.clone();
        Effect::new(move || {
            if driver.is_attached() {
                return;
            }
            let (Some(container), Some(sizer), Some(wall)) = (container_ref.get(), sizer_ref.get(), wall_ref.get())
            else {
                return;
            };
            driver.attach(DomWall {
                core: EngineCore::new(),
                container: container.into(),
                sizer: sizer.into(),
                wall: wall.into(),
            });
        });
    }

    #[cfg(feature = "csr")]
    driver.follow_zoom_requests(expect_context::<RwSignal<ZoomRequest>>());

    let on_mouse_down = {
        #[cfg(feature = "csr")]
        {
            let driver = driver.clone();
            move |ev: leptos::ev::MouseEvent| {
                if let Some(container) = container_ref.get_untracked() {
                    driver.mouse_down(&ev, &container);
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
                if let Some(container) = container_ref.get_untracked() {
                    driver.mouse_move(&ev, &container);
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
                if let Some(container) = container_ref.get_untracked() {
                    driver.touch_start(&ev, &container);
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
                if let Some(container) = container_ref.get_untracked() {
                    driver.touch_move(&ev, &container);
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
            let driver = driver.clone();
            move |ev: leptos::ev::WheelEvent| driver.wheel(&ev)
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    let on_scroll = {
        #[cfg(feature = "csr")]
        {
            move |_ev: leptos::ev::Event| {
                if let Some(container) = container_ref.get_untracked() {
                    driver.native_scroll(&container);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_open = Callback::new(move |photo: Photo| {
        let photo = gallery.with_untracked(|g| g.current(photo));
        open_photo(photo, &config, session, modal);
    });

    view! {
        <Show when=move || gallery.with(|g| g.loading_text().is_some())>
            <div id="loading" class="loading">
                {move || gallery.with(|g| g.loading_text().unwrap_or_default().to_owned())}
            </div>
        </Show>
        <div
            id="wall-container"
            class="wall-container"
            node_ref=container_ref
            on:mousedown=on_mouse_down
            on:mousemove=on_mouse_move
            on:mouseup=on_mouse_release
            on:mouseleave=on_mouse_leave
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
            on:wheel=on_wheel
            on:scroll=on_scroll
        >
            <div class="wall-sizer" node_ref=sizer_ref>
                <div id="wall" class="wall" node_ref=wall_ref>
                    <For
                        each=move || gallery.with(|g| g.photos.clone())
                        key=|photo| (photo.id.clone(), photo.likes)
                        children=move |photo: Photo| view! { <PhotoTile photo=photo on_open=on_open/> }
                    />
                    <Show when=move || gallery.with(GalleryState::shows_empty_state)>
                        <div class="wall__empty">{EMPTY_WALL_MESSAGE}</div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
