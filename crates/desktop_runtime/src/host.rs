//! Browser-facing helpers: viewport and element queries, the frame clock, and the animation-frame
//! loop used by spawning windows.
//!
//! Everything that touches `web_sys` directly is gated on `wasm32`; native builds (tests) get
//! deterministic fallbacks.

mod frame_loop;

pub use frame_loop::FrameTask;

use leptos::*;
use window_manager::{Coordinates, Viewport};

const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;
const FALLBACK_VIEWPORT_HEIGHT: f64 = 768.0;

/// Current client-area size of the page, re-read on every call.
pub fn desktop_viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            return Viewport::new(
                f64::from(root.client_width()),
                f64::from(root.client_height()),
            );
        }
    }

    Viewport::new(FALLBACK_VIEWPORT_WIDTH, FALLBACK_VIEWPORT_HEIGHT)
}

/// High-resolution timestamp in milliseconds for sampling animations.
pub fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Center of a mounted element in viewport coordinates, used as a window spawn point.
pub fn element_center(node: NodeRef<html::Div>) -> Option<Coordinates> {
    let element = node.get_untracked()?;
    let rect = element.get_bounding_client_rect();
    Some(Coordinates::new(
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    ))
}

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Coordinates {
    Coordinates::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    use wasm_bindgen::JsCast;

    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Primary-button presses only; secondary touches and non-left mouse buttons are ignored.
pub(crate) fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}
