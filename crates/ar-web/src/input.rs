use ar_core::{PointerKind, PointerSample, Viewport};
use glam::Vec2;
use web_sys as web;

/// Pens behave like a finger; anything unrecognised too.
#[inline]
pub fn pointer_kind(pointer_type: &str) -> PointerKind {
    match pointer_type {
        "mouse" => PointerKind::Mouse,
        _ => PointerKind::Touch,
    }
}

/// Only a mouse leaving the surface ends its gesture; touches keep capture.
#[inline]
pub fn leave_ends_gesture(kind: PointerKind) -> bool {
    kind == PointerKind::Mouse
}

/// Mouse presses other than the primary button are not interaction input.
#[inline]
pub fn is_interaction_button(kind: PointerKind, button: i16) -> bool {
    kind != PointerKind::Mouse || button == 0
}

#[inline]
pub fn pointer_sample(ev: &web::PointerEvent) -> PointerSample {
    PointerSample {
        pointer_id: ev.pointer_id(),
        kind: pointer_kind(&ev.pointer_type()),
        position: Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        timestamp: ev.time_stamp(),
    }
}

#[inline]
pub fn viewport_of(canvas: &web::HtmlCanvasElement) -> Viewport {
    let rect = canvas.get_bounding_client_rect();
    Viewport {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}
