//! Mapping from DOM mouse, touch and wheel events to engine inputs.
//!
//! Engine points are relative to the wall container's top-left corner. Only
//! deltas and distances between them matter to the gesture engine, so the
//! container's page offset never needs to be exact.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use canvas::input::WheelDelta;

#[cfg(feature = "csr")]
use canvas::camera::Point;

/// `WheelEvent.deltaMode` values.
const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;

/// Pixels per wheel "line" for browsers that report line deltas.
const LINE_HEIGHT_PX: f64 = 16.0;
/// Pixels per wheel "page".
const PAGE_HEIGHT_PX: f64 = 800.0;

/// Convert a raw wheel delta into pixels.
#[must_use]
pub fn normalize_wheel(dx: f64, dy: f64, delta_mode: u32) -> WheelDelta {
    let factor = match delta_mode {
        DOM_DELTA_LINE => LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => PAGE_HEIGHT_PX,
        _ => 1.0,
    };
    WheelDelta { dx: dx * factor, dy: dy * factor }
}

#[cfg(feature = "csr")]
fn local_point(client_x: i32, client_y: i32, element: &web_sys::Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(f64::from(client_x) - rect.left(), f64::from(client_y) - rect.top())
}

#[cfg(feature = "csr")]
pub fn mouse_point(ev: &leptos::ev::MouseEvent, element: &web_sys::Element) -> Point {
    local_point(ev.client_x(), ev.client_y(), element)
}

/// Every touch currently on the screen, in the order the browser lists them.
#[cfg(feature = "csr")]
pub fn touch_points(ev: &leptos::ev::TouchEvent, element: &web_sys::Element) -> Vec<Point> {
    let touches = ev.touches();
    (0..touches.length())
        .filter_map(|i| touches.item(i))
        .map(|t| local_point(t.client_x(), t.client_y(), element))
        .collect()
}

#[cfg(feature = "csr")]
pub fn wheel_delta(ev: &leptos::ev::WheelEvent) -> WheelDelta {
    normalize_wheel(ev.delta_x(), ev.delta_y(), ev.delta_mode())
}
