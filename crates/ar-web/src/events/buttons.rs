use crate::app::App;
use crate::dom;
use web_sys as web;

pub fn wire_panel_buttons(app: &App, document: &web::Document) {
    let next = app.clone();
    dom::add_click_listener(document, "next-slide", move || {
        next.dispatch(|s| s.next_slide());
    });

    let prev = app.clone();
    dom::add_click_listener(document, "prev-slide", move || {
        prev.dispatch(|s| s.prev_slide());
    });

    let close = app.clone();
    dom::add_click_listener(document, "close-ar-panel", move || {
        close.dispatch(|s| s.close_panel());
    });
}
