//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{canvas::CanvasPage, wall::WallPage};
use crate::state::gallery::GalleryState;
use crate::state::photo_modal::PhotoModalState;
use crate::state::session::SessionState;
use crate::state::wall_view::{WallViewState, ZoomRequest};
use crate::util::config::WallConfig;
use crate::util::telegram;

/// Root application component.
///
/// Reads the query-string config and the Telegram user once, provides all
/// shared state contexts, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = WallConfig::from_location();
    let session = RwSignal::new(SessionState::new(telegram::read_host_user()));
    let gallery = RwSignal::new(GalleryState::default());
    let modal = RwSignal::new(None::<PhotoModalState>);
    let wall_view = RwSignal::new(WallViewState::default());
    let zoom = RwSignal::new(ZoomRequest::default());

    if session.with_untracked(SessionState::is_read_only) {
        leptos::logging::log!("no Telegram user; the wall is read-only");
    }

    provide_context(config);
    provide_context(session);
    provide_context(gallery);
    provide_context(modal);
    provide_context(wall_view);
    provide_context(zoom);

    view! {
        <Title text="Photo Wall"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WallPage/>
                <Route path=StaticSegment("canvas") view=CanvasPage/>
            </Routes>
        </Router>
    }
}
