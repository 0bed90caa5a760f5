//! Grid view of the wall drawn on a single canvas.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::canvas_host::CanvasHost;
use crate::components::zoom_controls::ZoomControls;
use crate::net::loader::start_gallery_sync;
use crate::state::gallery::GalleryState;
use crate::util::config::WallConfig;

#[component]
pub fn CanvasPage() -> impl IntoView {
    let config = expect_context::<WallConfig>();
    let gallery = expect_context::<RwSignal<GalleryState>>();

    start_gallery_sync(&config, gallery);

    view! {
        <div class="page page--canvas">
            <header class="header">
                <h1 class="header__title">"🎨 Photo Wall"</h1>
                <A href="/" attr:class="header__link">
                    "Photo view"
                </A>
            </header>
            <CanvasHost/>
            <ZoomControls/>
        </div>
    }
}
