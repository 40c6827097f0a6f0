pub mod buttons;
pub mod pointer;
pub mod tracking;

pub use buttons::wire_panel_buttons;
pub use pointer::wire_pointer_handlers;
pub use tracking::{start_session, wire_target_callbacks};
