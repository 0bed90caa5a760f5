//! The photo wall: stats, the DOM wall, zoom controls and the photo modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the Mini App's landing route. It starts the gallery load and the
//! poll loop, and shortly after mount eases the wall to its natural scale
//! at the default scroll position.

#[cfg(feature = "csr")]
use canvas::input::ZoomCommand;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::photo_modal::PhotoModal;
use crate::components::stats_bar::StatsBar;
use crate::components::wall_host::WallHost;
use crate::components::zoom_controls::ZoomControls;
use crate::net::loader::start_gallery_sync;
use crate::state::gallery::GalleryState;
use crate::state::session::SessionState;
#[cfg(feature = "csr")]
use crate::state::wall_view::ZoomRequest;
use crate::util::config::WallConfig;

/// Delay before the initial reset zoom, letting the container lay out.
#[cfg(feature = "csr")]
const INITIAL_RESET_DELAY_MS: u32 = 100;

#[component]
pub fn WallPage() -> impl IntoView {
    let config = expect_context::<WallConfig>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let session = expect_context::<RwSignal<SessionState>>();

    start_gallery_sync(&config, gallery);

    #[cfg(feature = "csr")]
    {
        let zoom = expect_context::<RwSignal<ZoomRequest>>();
        gloo_timers::callback::Timeout::new(INITIAL_RESET_DELAY_MS, move || {
            zoom.update(|z| z.issue(ZoomCommand::Reset));
        })
        .forget();
    }

    view! {
        <div class="page page--wall">
            <header class="header">
                <h1 class="header__title">"🎨 Photo Wall"</h1>
                <StatsBar/>
                <A href="/canvas" attr:class="header__link">
                    "Grid view"
                </A>
            </header>
            <Show when=move || session.with(SessionState::is_read_only)>
                <p class="notice">"Browsing only: open the wall through the Telegram bot to like photos."</p>
            </Show>
            <WallHost/>
            <ZoomControls/>
            <PhotoModal/>
        </div>
    }
}
