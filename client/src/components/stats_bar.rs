//! Wall-wide counters above the wall.

use leptos::prelude::*;

use crate::state::gallery::GalleryState;

#[component]
pub fn StatsBar() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();

    view! {
        <div class="stats">
            <span id="total-photos" class="stats__item">
                {move || format!("📸 Photos: {}", gallery.with(|g| g.stats.total_photos))}
            </span>
            <span id="total-users" class="stats__item">
                {move || format!("👥 Members: {}", gallery.with(|g| g.stats.total_users))}
            </span>
            <span id="total-likes" class="stats__item">
                {move || format!("❤️ Likes: {}", gallery.with(|g| g.stats.total_likes))}
            </span>
        </div>
    }
}
