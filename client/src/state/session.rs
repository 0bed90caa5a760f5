//! Viewer identity for this session.
//!
//! The Telegram host hands the Mini App its user once, at launch. Without it
//! the wall is read-only: photos can be browsed but not liked or deleted.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::{ApiError, GuardedAction};
use crate::net::types::{CurrentUser, Photo};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<CurrentUser>,
}

impl SessionState {
    #[must_use]
    pub fn new(user: Option<CurrentUser>) -> Self {
        Self { user }
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.user.is_none()
    }

    /// The signed-in viewer, or the warning for attempting `action` without one.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotSignedIn`] when the host supplied no user.
    pub fn require_user(&self, action: GuardedAction) -> Result<&CurrentUser, ApiError> {
        self.user.as_ref().ok_or(ApiError::NotSignedIn(action))
    }

    /// Whether the viewer is among the photo's likers.
    #[must_use]
    pub fn has_liked(&self, photo: &Photo) -> bool {
        self.user.as_ref().is_some_and(|u| photo.is_liked_by(u.id))
    }
}
