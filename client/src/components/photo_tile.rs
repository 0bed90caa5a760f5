//! One photo pinned to the DOM wall.

use leptos::prelude::*;

use crate::net::types::Photo;

/// Absolutely positioned tile: thumbnail, author credit and like count.
#[component]
pub fn PhotoTile(photo: Photo, on_open: Callback<Photo>) -> impl IntoView {
    let style = format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        photo.position_x,
        photo.position_y,
        photo.display_width(),
        photo.display_height()
    );
    let alt = format!("Photo by @{}", photo.username);
    let credit = format!("@{}", photo.username);
    let likes = format!("❤️ {}", photo.likes);
    let image_url = photo.image_url.clone();

    view! {
        <div
            class="photo"
            style=style
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.stop_propagation();
                on_open.run(photo.clone());
            }
        >
            <img class="photo__image" src=image_url alt=alt loading="lazy" draggable="false"/>
            <div class="photo-credits">{credit}</div>
            <div class="photo-likes">{likes}</div>
        </div>
    }
}
