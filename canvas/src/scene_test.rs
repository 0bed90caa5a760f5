#![allow(clippy::float_cmp)]

use super::*;

fn sprite(id: &str, x: f64, y: f64, w: f64, h: f64) -> Sprite {
    Sprite { id: id.to_owned(), label: "alice".to_owned(), likes: 3, x, y, width: w, height: h }
}

#[test]
fn empty_scene_has_minimum_extent() {
    let scene = Scene::new();
    assert!(scene.sprites().is_empty());
    assert_eq!(scene.extent(), Size::new(2000.0, 2000.0));
}

#[test]
fn extent_grows_to_cover_far_sprites() {
    let mut scene = Scene::new();
    scene.load(vec![sprite("a", 2400.0, 100.0, 150.0, 150.0), sprite("b", 10.0, 3100.0, 200.0, 90.0)]);
    assert_eq!(scene.extent(), Size::new(2550.0, 3190.0));
}

#[test]
fn extent_ignores_sprites_inside_the_wall() {
    let mut scene = Scene::new();
    scene.load(vec![sprite("a", 100.0, 100.0, 150.0, 150.0)]);
    assert_eq!(scene.extent(), Size::new(2000.0, 2000.0));
}

#[test]
fn load_replaces_previous_sprites() {
    let mut scene = Scene::new();
    scene.load(vec![sprite("a", 0.0, 0.0, 1.0, 1.0), sprite("b", 0.0, 0.0, 1.0, 1.0)]);
    scene.load(vec![sprite("c", 0.0, 0.0, 1.0, 1.0)]);
    assert_eq!(scene.sprites().len(), 1);
    assert_eq!(scene.sprites()[0].id, "c");
}

#[test]
fn captions_format_author_likes_and_id() {
    let s = sprite("p-42", 0.0, 0.0, 10.0, 10.0);
    assert_eq!(s.caption(), "@alice (3❤️)");
    assert_eq!(s.id_caption(), "ID: p-42");
}

#[test]
fn sprite_edges() {
    let s = sprite("a", 10.0, 20.0, 30.0, 40.0);
    assert_eq!(s.right(), 40.0);
    assert_eq!(s.bottom(), 60.0);
}

#[test]
fn sprite_deserializes_from_json() {
    let s: Sprite = serde_json::from_value(serde_json::json!({
        "id": "x", "label": "bob", "likes": 0, "x": 1.0, "y": 2.0, "width": 3.0, "height": 4.0
    }))
    .unwrap();
    assert_eq!(s.label, "bob");
    assert_eq!(s.height, 4.0);
}
