//! State of the photo detail modal and the like/delete flows it drives.
//!
//! DESIGN
//! ======
//! Each action is split into a pure `prepare_*` step (preconditions, request
//! body) and an `apply_*` step (response handling), so the host component
//! only performs the network call in between.

#[cfg(test)]
#[path = "photo_modal_test.rs"]
mod photo_modal_test;

use crate::net::error::{ApiError, GuardedAction};
use crate::net::types::{DeletePhotoRequest, LikeRequest, Photo};
use crate::state::session::SessionState;

pub const DELETE_CONFIRM_PROMPT: &str = "Delete this photo?";
pub const DELETED_NOTICE: &str = "✅ Photo deleted";

/// Outcome of the admin check performed when the modal opens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminStatus {
    /// Check in flight.
    #[default]
    Checking,
    Admin,
    NotAdmin,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoModalState {
    pub photo: Photo,
    /// Whether the viewer currently likes the photo.
    pub liked: bool,
    /// Displayed like count; replaced by the backend's `new_likes`.
    pub likes: i64,
    pub admin: AdminStatus,
    /// A like or delete request is in flight.
    pub busy: bool,
}

impl PhotoModalState {
    /// Open the modal on `photo`. Anonymous viewers skip the admin check.
    #[must_use]
    pub fn open(photo: Photo, session: &SessionState) -> Self {
        let liked = session.has_liked(&photo);
        let admin = if session.is_read_only() { AdminStatus::NotAdmin } else { AdminStatus::Checking };
        Self { likes: photo.likes, liked, admin, busy: false, photo }
    }

    /// Record the admin check; a failed check counts as "not admin".
    pub fn set_admin(&mut self, result: Result<bool, ApiError>) {
        self.admin = match result {
            Ok(true) => AdminStatus::Admin,
            Ok(false) | Err(_) => AdminStatus::NotAdmin,
        };
    }

    #[must_use]
    pub fn shows_delete(&self) -> bool {
        self.admin == AdminStatus::Admin
    }

    #[must_use]
    pub fn like_button_class(&self) -> &'static str {
        if self.liked { "action-btn like-btn liked" } else { "action-btn like-btn" }
    }

    #[must_use]
    pub fn like_button_label(&self) -> String {
        format!("❤️ {}", self.likes)
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        format!("📍 ({:.0}, {:.0})", self.photo.position_x, self.photo.position_y)
    }

    /// Build the like request for the viewer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotSignedIn`] when there is no viewer; no request
    /// must be sent in that case.
    pub fn prepare_like(&self, session: &SessionState) -> Result<LikeRequest, ApiError> {
        let user = session.require_user(GuardedAction::Like)?;
        Ok(LikeRequest { photo_id: self.photo.mutation_id.clone(), user_id: user.id, username: user.display_name() })
    }

    /// Apply a confirmed like toggle: flip the liked state and adopt the
    /// backend's count.
    pub fn apply_like(&mut self, new_likes: i64) {
        self.liked = !self.liked;
        self.likes = new_likes;
    }

    /// Build the delete request after asking the viewer to confirm.
    ///
    /// Returns `Ok(None)` when the viewer declines. `confirm` is not called
    /// for anonymous viewers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotSignedIn`] when there is no viewer.
    pub fn prepare_delete(
        &self,
        session: &SessionState,
        confirm: impl FnOnce() -> bool,
    ) -> Result<Option<DeletePhotoRequest>, ApiError> {
        let user = session.require_user(GuardedAction::Delete)?;
        if !confirm() {
            return Ok(None);
        }
        Ok(Some(DeletePhotoRequest { photo_id: self.photo.mutation_id.clone(), user_id: user.id }))
    }
}
