//! Scene model for the canvas renderer: one labelled sprite per photo.
//!
//! The host converts its wire records into [`Sprite`]s and hands them to the
//! engine wholesale on every gallery load. The renderer reads the store to
//! draw, and the engine reads [`Scene::extent`] to size the scrollable
//! surface.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::camera::Size;
use crate::consts::WALL_EXTENT;

/// A photo as drawn by the canvas renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Photo id, printed as a debug caption.
    pub id: String,
    /// Author name shown without the leading `@`.
    pub label: String,
    pub likes: i64,
    /// Left edge in world coordinates.
    pub x: f64,
    /// Top edge in world coordinates.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Sprite {
    /// Right edge in world coordinates.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge in world coordinates.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Primary caption: author and like count.
    #[must_use]
    pub fn caption(&self) -> String {
        format!("@{} ({}❤️)", self.label, self.likes)
    }

    /// Secondary caption: the photo id.
    #[must_use]
    pub fn id_caption(&self) -> String {
        format!("ID: {}", self.id)
    }
}

/// The sprites currently on the wall, in draw order.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    sprites: Vec<Sprite>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every sprite.
    pub fn load(&mut self, sprites: Vec<Sprite>) {
        self.sprites = sprites;
    }

    #[must_use]
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Bounding envelope of all sprites, never smaller than the 2000×2000 wall.
    #[must_use]
    pub fn extent(&self) -> Size {
        let (width, height) = self
            .sprites
            .iter()
            .fold((WALL_EXTENT, WALL_EXTENT), |(w, h), s| (w.max(s.right()), h.max(s.bottom())));
        Size::new(width, height)
    }
}
