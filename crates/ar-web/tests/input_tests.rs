// Host-side tests for pure pointer helpers.
// The main crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use ar_core::PointerKind;
use input::*;

#[test]
fn pointer_kind_maps_dom_pointer_types() {
    assert_eq!(pointer_kind("mouse"), PointerKind::Mouse);
    assert_eq!(pointer_kind("touch"), PointerKind::Touch);
    assert_eq!(pointer_kind("pen"), PointerKind::Touch);
    assert_eq!(pointer_kind(""), PointerKind::Touch);
}

#[test]
fn only_mouse_leave_ends_gesture() {
    assert!(leave_ends_gesture(PointerKind::Mouse));
    assert!(!leave_ends_gesture(PointerKind::Touch));
}

#[test]
fn secondary_mouse_buttons_are_ignored() {
    assert!(is_interaction_button(PointerKind::Mouse, 0));
    assert!(!is_interaction_button(PointerKind::Mouse, 2));
    assert!(is_interaction_button(PointerKind::Touch, 0));
    // touch contacts report button 0 on down but -1 on move
    assert!(is_interaction_button(PointerKind::Touch, -1));
}
