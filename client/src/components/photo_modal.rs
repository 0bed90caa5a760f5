//! Photo detail modal with the like and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened by clicking a tile on the DOM wall. Opening kicks off the admin
//! check; the delete button appears only once it returns true. Clicking the
//! backdrop closes the modal, clicks inside the dialog do not.

use leptos::prelude::*;

use crate::net::api;
use crate::net::loader::refresh_after_mutation;
use crate::net::types::Photo;
use crate::state::gallery::GalleryState;
use crate::state::photo_modal::{DELETE_CONFIRM_PROMPT, DELETED_NOTICE, PhotoModalState};
use crate::state::session::SessionState;
use crate::util::config::WallConfig;
use crate::util::dialogs;

/// Show `photo` in the modal and check whether the viewer may delete it.
pub fn open_photo(
    photo: Photo,
    config: &WallConfig,
    session: RwSignal<SessionState>,
    modal: RwSignal<Option<PhotoModalState>>,
) {
    let viewer = session.get_untracked();
    let photo_id = photo.id.clone();
    modal.set(Some(PhotoModalState::open(photo, &viewer)));

    let Some(user) = viewer.user else {
        return;
    };
    let base = config.api_base.clone();
    leptos::task::spawn_local(async move {
        let result = api::fetch_is_admin(&base, user.id).await;
        if let Err(e) = &result {
            leptos::logging::warn!("admin check failed: {e}");
        }
        modal.update(|m| {
            if let Some(m) = m.as_mut().filter(|m| m.photo.id == photo_id) {
                m.set_admin(result);
            }
        });
    });
}

#[component]
pub fn PhotoModal() -> impl IntoView {
    let config = expect_context::<WallConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let modal = expect_context::<RwSignal<Option<PhotoModalState>>>();

    let field = move |read: fn(&PhotoModalState) -> String| modal.with(|m| m.as_ref().map(read).unwrap_or_default());
    let busy = move || modal.with(|m| m.as_ref().is_some_and(|m| m.busy));
    let like_class = move || modal.with(|m| m.as_ref().map_or("action-btn like-btn", PhotoModalState::like_button_class));
    let shows_delete = move || modal.with(|m| m.as_ref().is_some_and(PhotoModalState::shows_delete));

    let like_config = config.clone();
    let on_like = Callback::new(move |()| like_photo(&like_config, session, gallery, modal));
    let on_delete = Callback::new(move |()| delete_photo(&config, session, gallery, modal));

    view! {
        <Show when=move || modal.with(Option::is_some)>
            <div class="dialog-backdrop photo-modal" on:click=move |_| modal.set(None)>
                <div class="photo-modal__dialog" on:click=move |ev| ev.stop_propagation()>
                    <img
                        class="photo-modal__image"
                        src=move || field(|m| m.photo.image_url.clone())
                        alt=move || field(|m| format!("Photo by @{}", m.photo.username))
                    />
                    <div class="action-buttons">
                        <button class=like_class disabled=busy on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            on_like.run(());
                        }>
                            {move || field(PhotoModalState::like_button_label)}
                        </button>
                        <Show when=shows_delete>
                            <button
                                class="action-btn delete-btn"
                                disabled=busy
                                on:click=move |ev: leptos::ev::MouseEvent| {
                                    ev.stop_propagation();
                                    on_delete.run(());
                                }
                            >
                                "🗑️ Delete"
                            </button>
                        </Show>
                    </div>
                    <div class="photo-modal__info">
                        <strong>{move || field(|m| format!("@{}", m.photo.username))}</strong>
                        <span>{move || field(|m| format!("❤️ {} likes", m.likes))}</span>
                        <span>{move || field(PhotoModalState::position_label)}</span>
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn set_busy(modal: RwSignal<Option<PhotoModalState>>, busy: bool) {
    modal.update(|m| {
        if let Some(m) = m.as_mut() {
            m.busy = busy;
        }
    });
}

fn like_photo(
    config: &WallConfig,
    session: RwSignal<SessionState>,
    gallery: RwSignal<GalleryState>,
    modal: RwSignal<Option<PhotoModalState>>,
) {
    let Some(state) = modal.get_untracked() else {
        return;
    };
    let request = match state.prepare_like(&session.get_untracked()) {
        Ok(request) => request,
        Err(e) => {
            leptos::logging::warn!("like refused: {e}");
            dialogs::alert(&e.alert_text());
            return;
        }
    };

    let photo_id = state.photo.id.clone();
    set_busy(modal, true);
    let config = config.clone();
    leptos::task::spawn_local(async move {
        let result = api::post_like(&config.api_base, &request).await;
        set_busy(modal, false);
        match result {
            Ok(new_likes) => {
                modal.update(|m| {
                    if let Some(m) = m.as_mut().filter(|m| m.photo.id == photo_id) {
                        m.apply_like(new_likes);
                    }
                });
                let liked = !gallery.with_untracked(|g| {
                    g.photo(&photo_id)
                        .is_some_and(|p| p.is_liked_by(request.user_id))
                });
                refresh_after_mutation(&config, gallery, |g| {
                    g.apply_like(&photo_id, request.user_id, liked, new_likes);
                });
            }
            Err(e) => {
                leptos::logging::warn!("like failed: {e}");
                dialogs::alert(&e.alert_text());
            }
        }
    });
}

fn delete_photo(
    config: &WallConfig,
    session: RwSignal<SessionState>,
    gallery: RwSignal<GalleryState>,
    modal: RwSignal<Option<PhotoModalState>>,
) {
    let Some(state) = modal.get_untracked() else {
        return;
    };
    let request = match state.prepare_delete(&session.get_untracked(), || dialogs::confirm(DELETE_CONFIRM_PROMPT)) {
        Ok(Some(request)) => request,
        Ok(None) => return,
        Err(e) => {
            leptos::logging::warn!("delete refused: {e}");
            dialogs::alert(&e.alert_text());
            return;
        }
    };

    let photo_id = state.photo.id.clone();
    set_busy(modal, true);
    let config = config.clone();
    leptos::task::spawn_local(async move {
        match api::post_delete_photo(&config.api_base, &request).await {
            Ok(()) => {
                dialogs::alert(DELETED_NOTICE);
                modal.set(None);
                refresh_after_mutation(&config, gallery, |g| {
                    g.remove_photo(&photo_id);
                });
            }
            Err(e) => {
                set_busy(modal, false);
                leptos::logging::warn!("delete failed: {e}");
                dialogs::alert(&e.alert_text());
            }
        }
    });
}
