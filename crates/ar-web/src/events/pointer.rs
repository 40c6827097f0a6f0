use crate::app::App;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(app: &App, container: &web::HtmlElement) {
    // keep touch drags from scrolling or zooming the page
    _ = container.style().set_property("touch-action", "none");

    wire_pointerdown(app, container);
    wire_pointermove(app, container);
    wire_pointerup(app, container);
    wire_pointer_end(app, container, "pointercancel");
    wire_pointer_end(app, container, "pointerleave");
    wire_pointer_end(app, container, "lostpointercapture");
}

fn listen(
    container: &web::HtmlElement,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
    _ = container.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(app: &App, container: &web::HtmlElement) {
    let app = app.clone();
    let target = container.clone();
    listen(container, "pointerdown", move |ev: web::PointerEvent| {
        let sample = input::pointer_sample(&ev);
        if !input::is_interaction_button(sample.kind, ev.button()) {
            return;
        }
        app.state.borrow_mut().pointer_down(sample);
        _ = target.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(app: &App, container: &web::HtmlElement) {
    let app = app.clone();
    listen(container, "pointermove", move |ev: web::PointerEvent| {
        let sample = input::pointer_sample(&ev);
        app.dispatch(|s| s.pointer_move(sample));
        ev.prevent_default();
    });
}

fn wire_pointerup(app: &App, container: &web::HtmlElement) {
    let app = app.clone();
    listen(container, "pointerup", move |ev: web::PointerEvent| {
        let sample = input::pointer_sample(&ev);
        let effects = {
            let scene = app.scene.borrow();
            let pick = scene.pick_context();
            app.state.borrow_mut().pointer_up(sample, &pick)
        };
        app.apply(effects);
    });
}

fn wire_pointer_end(app: &App, container: &web::HtmlElement, event: &'static str) {
    let app = app.clone();
    listen(container, event, move |ev: web::PointerEvent| {
        let kind = input::pointer_kind(&ev.pointer_type());
        if event == "pointerleave" && !input::leave_ends_gesture(kind) {
            return;
        }
        log::debug!("[gesture] {} on pointer {}", event, ev.pointer_id());
        app.state.borrow_mut().pointer_cancel(ev.pointer_id());
    });
}
