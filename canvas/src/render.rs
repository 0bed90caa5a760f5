//! Rendering: draws the canvas rendition of the wall to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of the scene and viewport and produces
//! pixels. It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) returns the result
//! to the host.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{Size, ViewportState};
use crate::consts::GRID_SPACING;
use crate::scene::{Scene, Sprite};

const GRID_COLOR: &str = "#444";
const SPRITE_FILL: &str = "#555";
const CAPTION_COLOR: &str = "white";
const CAPTION_FONT: &str = "12px Arial";
const ID_COLOR: &str = "#ccc";
const ID_FONT: &str = "10px Arial";

/// Caption baseline offsets from the sprite's top-left corner, in world units.
const CAPTION_OFFSET: (f64, f64) = (5.0, 15.0);
const ID_OFFSET: (f64, f64) = (5.0, 30.0);

/// Draw the full scene: background grid, then every sprite in order.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    scene: &Scene,
    viewport: &ViewportState,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear in screen space, then enter world space.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    let (a, d, e, f) = viewport.canvas_transform();
    ctx.set_transform(a * dpr, 0.0, 0.0, d * dpr, e * dpr, f * dpr)?;

    // Layer 2: static grid over the whole surface.
    draw_grid(ctx, scene.extent(), viewport.scale);

    // Layer 3: sprites in load order.
    for sprite in scene.sprites() {
        draw_sprite(ctx, sprite)?;
    }

    Ok(())
}

// =============================================================
// Layers
// =============================================================

fn draw_grid(ctx: &CanvasRenderingContext2d, extent: Size, scale: f64) {
    ctx.set_stroke_style_str(GRID_COLOR);
    // One device-independent pixel regardless of zoom.
    ctx.set_line_width(1.0 / scale);

    let mut x = 0.0;
    while x <= extent.width {
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, extent.height);
        ctx.stroke();
        x += GRID_SPACING;
    }

    let mut y = 0.0;
    while y <= extent.height {
        ctx.begin_path();
        ctx.move_to(0.0, y);
        ctx.line_to(extent.width, y);
        ctx.stroke();
        y += GRID_SPACING;
    }
}

fn draw_sprite(ctx: &CanvasRenderingContext2d, sprite: &Sprite) -> Result<(), JsValue> {
    ctx.set_fill_style_str(SPRITE_FILL);
    ctx.fill_rect(sprite.x, sprite.y, sprite.width, sprite.height);

    ctx.set_fill_style_str(CAPTION_COLOR);
    ctx.set_font(CAPTION_FONT);
    ctx.fill_text(&sprite.caption(), sprite.x + CAPTION_OFFSET.0, sprite.y + CAPTION_OFFSET.1)?;

    ctx.set_fill_style_str(ID_COLOR);
    ctx.set_font(ID_FONT);
    ctx.fill_text(&sprite.id_caption(), sprite.x + ID_OFFSET.0, sprite.y + ID_OFFSET.1)?;

    Ok(())
}
