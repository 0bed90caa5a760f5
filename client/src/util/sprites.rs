//! Conversion from wire photos to canvas sprites.

#[cfg(test)]
#[path = "sprites_test.rs"]
mod sprites_test;

use canvas::scene::Sprite;

use crate::net::types::Photo;

#[must_use]
pub fn photo_sprite(photo: &Photo) -> Sprite {
    Sprite {
        id: photo.id.clone(),
        label: photo.username.clone(),
        likes: photo.likes,
        x: photo.position_x,
        y: photo.position_y,
        width: photo.display_width(),
        height: photo.display_height(),
    }
}

/// Sprites for every photo, in load order (later photos draw on top).
#[must_use]
pub fn photo_sprites(photos: &[Photo]) -> Vec<Sprite> {
    photos.iter().map(photo_sprite).collect()
}
