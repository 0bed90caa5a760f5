//! Wire types for the photo wall JSON API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly. Optional fields carry
//! `#[serde(default)]` so older documents (no `liked_by`, no explicit
//! dimensions) still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use canvas::consts::DEFAULT_PHOTO_SIZE;
use serde::{Deserialize, Serialize};

/// A photo pinned to the wall.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WirePhoto")]
pub struct Photo {
    /// Identity on the wall and in the canvas caption.
    pub id: String,
    /// Key the like and delete endpoints expect: `_id` when the backend
    /// sends one, otherwise `id`.
    #[serde(rename = "_id")]
    pub mutation_id: String,
    pub username: String,
    pub likes: i64,
    /// Telegram user ids that liked this photo.
    pub liked_by: Vec<i64>,
    pub image_url: String,
    pub position_x: f64,
    pub position_y: f64,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl Photo {
    /// Rendered tile width in world units.
    #[must_use]
    pub fn display_width(&self) -> f64 {
        self.width.filter(|w| *w > 0.0).unwrap_or(DEFAULT_PHOTO_SIZE)
    }

    /// Rendered tile height in world units.
    #[must_use]
    pub fn display_height(&self) -> f64 {
        self.height.filter(|h| *h > 0.0).unwrap_or(DEFAULT_PHOTO_SIZE)
    }

    #[must_use]
    pub fn is_liked_by(&self, user_id: i64) -> bool {
        self.liked_by.contains(&user_id)
    }
}

/// Photo as the backend sends it: the id may arrive as `id`, `_id`, or both.
#[derive(Deserialize)]
struct WirePhoto {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    mongo_id: Option<String>,
    #[serde(default)]
    username: String,
    #[serde(default)]
    likes: i64,
    #[serde(default)]
    liked_by: Vec<i64>,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    position_x: f64,
    #[serde(default)]
    position_y: f64,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
}

impl TryFrom<WirePhoto> for Photo {
    type Error = String;

    fn try_from(wire: WirePhoto) -> Result<Self, Self::Error> {
        let id = wire.id.filter(|id| !id.is_empty());
        let mongo_id = wire.mongo_id.filter(|id| !id.is_empty());
        let (id, mutation_id) = match (id, mongo_id) {
            (Some(id), Some(mongo_id)) => (id, mongo_id),
            (Some(id), None) => (id.clone(), id),
            (None, Some(mongo_id)) => (mongo_id.clone(), mongo_id),
            (None, None) => return Err("photo has neither `id` nor `_id`".to_owned()),
        };
        Ok(Self {
            id,
            mutation_id,
            username: wire.username,
            likes: wire.likes,
            liked_by: wire.liked_by,
            image_url: wire.image_url,
            position_x: wire.position_x,
            position_y: wire.position_y,
            width: wire.width,
            height: wire.height,
        })
    }
}

/// Aggregate counters shown in the stats bar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub total_photos: i64,
    pub total_users: i64,
    pub total_likes: i64,
}

/// Response of `GET /api/is_admin/{user_id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdminCheck {
    pub is_admin: bool,
}

/// Body of `POST /api/like`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LikeRequest {
    pub photo_id: String,
    pub user_id: i64,
    pub username: String,
}

/// Response of `POST /api/like`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LikeResponse {
    pub success: bool,
    pub new_likes: Option<i64>,
    pub error: Option<String>,
}

/// Body of `POST /api/delete_photo`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeletePhotoRequest {
    pub photo_id: String,
    pub user_id: i64,
}

/// Response of `POST /api/delete_photo`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeleteResponse {
    pub success: bool,
    pub error: Option<String>,
}

/// The Telegram user the Mini App was opened by.
///
/// Only the fields the wall needs; the host object carries more.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
}

impl CurrentUser {
    /// Name credited on likes: the Telegram handle, or `user_<id>`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.username.as_deref() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => format!("user_{}", self.id),
        }
    }
}
