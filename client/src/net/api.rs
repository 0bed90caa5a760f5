//! REST helpers for the photo wall backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): every call returns [`ApiError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; nothing here panics. Mutation
//! endpoints decode the body even on non-2xx statuses because the backend
//! reports `success: false` with an `error` message there.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{DeletePhotoRequest, LikeRequest, Photo, Stats};
#[cfg(any(test, feature = "csr"))]
use super::types::{DeleteResponse, LikeResponse};

#[cfg(any(test, feature = "csr"))]
const PHOTOS_PATH: &str = "/api/photos";
#[cfg(any(test, feature = "csr"))]
const STATS_PATH: &str = "/api/stats";
#[cfg(any(test, feature = "csr"))]
const LIKE_PATH: &str = "/api/like";
#[cfg(any(test, feature = "csr"))]
const DELETE_PHOTO_PATH: &str = "/api/delete_photo";

#[cfg(any(test, feature = "csr"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
fn is_admin_endpoint(base: &str, user_id: i64) -> String {
    endpoint(base, &format!("/api/is_admin/{user_id}"))
}

/// Resolve a like response into the new like count.
#[cfg(any(test, feature = "csr"))]
fn like_outcome(resp: LikeResponse) -> Result<i64, ApiError> {
    if !resp.success {
        return Err(ApiError::rejected(resp.error));
    }
    resp.new_likes
        .ok_or_else(|| ApiError::Decode("like response is missing `new_likes`".to_owned()))
}

#[cfg(any(test, feature = "csr"))]
fn delete_outcome(resp: DeleteResponse) -> Result<(), ApiError> {
    if resp.success { Ok(()) } else { Err(ApiError::rejected(resp.error)) }
}

/// Fetch every photo on the wall from `/api/photos`.
pub async fn fetch_photos(base: &str) -> Result<Vec<Photo>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(&endpoint(base, PHOTOS_PATH)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = base;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the wall-wide counters from `/api/stats`.
pub async fn fetch_stats(base: &str) -> Result<Stats, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(&endpoint(base, STATS_PATH)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = base;
        Err(ApiError::Unavailable)
    }
}

/// Ask whether `user_id` may delete photos.
pub async fn fetch_is_admin(base: &str, user_id: i64) -> Result<bool, ApiError> {
    #[cfg(feature = "csr")]
    {
        let check: super::types::AdminCheck = get_json(&is_admin_endpoint(base, user_id)).await?;
        Ok(check.is_admin)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, user_id);
        Err(ApiError::Unavailable)
    }
}

/// Toggle a like. Returns the photo's new like count.
pub async fn post_like(base: &str, body: &LikeRequest) -> Result<i64, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp: LikeResponse = post_json(&endpoint(base, LIKE_PATH), body).await?;
        like_outcome(resp)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, body);
        Err(ApiError::Unavailable)
    }
}

/// Delete a photo (admins only; the backend enforces it).
pub async fn post_delete_photo(base: &str, body: &DeletePhotoRequest) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp: DeleteResponse = post_json(&endpoint(base, DELETE_PHOTO_PATH), body).await?;
        delete_outcome(resp)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base, body);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let ok = resp.ok();
    match resp.json::<T>().await {
        Ok(parsed) => Ok(parsed),
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}
