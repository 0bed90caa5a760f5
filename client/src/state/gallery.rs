//! Gallery state: the photos and counters currently on the wall.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wall page loads stats and photos together and polls for changes. A
//! poll can overlap a mutation-triggered reload, so every load takes a
//! sequence number from [`GalleryState::begin_load`] and only the newest one
//! may land.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::error::ApiError;
use crate::net::types::{Photo, Stats};

pub const LOAD_FAILED_MESSAGE: &str = "❌ Failed to load the gallery";
pub const EMPTY_WALL_MESSAGE: &str = "🎨 No photos on the wall yet. Be the first!";

/// Lifecycle of the most recent gallery load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading,
    Ready,
    /// The last load failed; the message replaces the loading indicator.
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub photos: Vec<Photo>,
    pub stats: Stats,
    pub status: LoadStatus,
    /// Sequence number of the newest load issued.
    issued_seq: u64,
}

impl GalleryState {
    /// Mark a load as in flight and return its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.issued_seq += 1;
        self.status = LoadStatus::Loading;
        self.issued_seq
    }

    /// Apply the outcome of load `seq`.
    ///
    /// Returns `false` (and changes nothing) when a newer load has been
    /// issued since.
    pub fn finish_load(&mut self, seq: u64, result: Result<(Stats, Vec<Photo>), ApiError>) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        match result {
            Ok((stats, photos)) => {
                self.stats = stats;
                self.photos = photos;
                self.status = LoadStatus::Ready;
            }
            Err(_) => {
                self.status = LoadStatus::Failed(LOAD_FAILED_MESSAGE.to_owned());
            }
        }
        true
    }

    /// Text for the `#loading` element, if it should be visible.
    #[must_use]
    pub fn loading_text(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Loading => Some("Loading…"),
            LoadStatus::Failed(message) => Some(message.as_str()),
            LoadStatus::Idle | LoadStatus::Ready => None,
        }
    }

    /// True once a successful load returned zero photos.
    #[must_use]
    pub fn shows_empty_state(&self) -> bool {
        self.status == LoadStatus::Ready && self.photos.is_empty()
    }

    #[must_use]
    pub fn photo(&self, photo_id: &str) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == photo_id)
    }

    /// The loaded copy of `photo`, falling back to `photo` itself when it
    /// is no longer on the wall. Tiles hold the copy they were rendered with.
    #[must_use]
    pub fn current(&self, photo: Photo) -> Photo {
        self.photo(&photo.id).cloned().unwrap_or(photo)
    }

    /// Patch a successful like into the loaded photos and counters.
    ///
    /// `liked` is the viewer's state after the toggle.
    pub fn apply_like(&mut self, photo_id: &str, user_id: i64, liked: bool, new_likes: i64) {
        let Some(photo) = self.photos.iter_mut().find(|p| p.id == photo_id) else {
            return;
        };
        let delta = new_likes - photo.likes;
        photo.likes = new_likes;
        if liked {
            if !photo.liked_by.contains(&user_id) {
                photo.liked_by.push(user_id);
            }
        } else {
            photo.liked_by.retain(|id| *id != user_id);
        }
        self.stats.total_likes = (self.stats.total_likes + delta).max(0);
    }

    /// Drop a deleted photo and its likes from the counters.
    pub fn remove_photo(&mut self, photo_id: &str) -> bool {
        let Some(index) = self.photos.iter().position(|p| p.id == photo_id) else {
            return false;
        };
        let removed = self.photos.remove(index);
        self.stats.total_photos = (self.stats.total_photos - 1).max(0);
        self.stats.total_likes = (self.stats.total_likes - removed.likes).max(0);
        true
    }
}
