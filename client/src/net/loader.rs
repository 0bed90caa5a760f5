//! Gallery loading: one-shot loads, polling, and post-mutation refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads are started from several places (page mount, the poll timer, a
//! successful like or delete) and may overlap. Each takes a sequence number
//! from `GalleryState`, and only the newest may write its result.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use leptos::prelude::*;

use super::api;
use super::error::ApiError;
use super::types::{Photo, Stats};
use crate::state::gallery::GalleryState;
use crate::util::config::{AfterMutation, WallConfig};

/// Fetch stats and photos. Either failing fails the whole load.
async fn fetch_gallery(base: &str) -> Result<(Stats, Vec<Photo>), ApiError> {
    #[cfg(feature = "csr")]
    let (stats, photos) = futures::join!(api::fetch_stats(base), api::fetch_photos(base));
    #[cfg(not(feature = "csr"))]
    let (stats, photos) = (api::fetch_stats(base).await, api::fetch_photos(base).await);
    Ok((stats?, photos?))
}

/// Run one gallery load against `gallery`.
pub async fn load_gallery(base: String, gallery: RwSignal<GalleryState>) {
    let Some(seq) = gallery.try_update(GalleryState::begin_load) else {
        return;
    };
    let result = fetch_gallery(&base).await;
    if let Err(e) = &result {
        leptos::logging::warn!("gallery load #{seq} failed: {e}");
    }
    let applied = gallery.try_update(|g| g.finish_load(seq, result)).unwrap_or(false);
    if !applied {
        leptos::logging::log!("dropping stale gallery response #{seq}");
    }
}

/// Load now, then every `config.poll_interval()` until the calling
/// component is cleaned up.
pub fn start_gallery_sync(config: &WallConfig, gallery: RwSignal<GalleryState>) {
    leptos::task::spawn_local(load_gallery(config.api_base.clone(), gallery));

    #[cfg(feature = "csr")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let interval = config.poll_interval();
        let base = config.api_base.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(interval).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                load_gallery(base.clone(), gallery).await;
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
}

/// Bring the wall up to date after a successful like or delete.
///
/// `patch` is only applied under [`AfterMutation::Patch`]; the default
/// policy reloads the whole gallery instead.
pub fn refresh_after_mutation(
    config: &WallConfig,
    gallery: RwSignal<GalleryState>,
    patch: impl FnOnce(&mut GalleryState),
) {
    match config.after_mutation {
        AfterMutation::Reload => leptos::task::spawn_local(load_gallery(config.api_base.clone(), gallery)),
        AfterMutation::Patch => gallery.update(patch),
    }
}
