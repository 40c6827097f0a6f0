use ar_core::BannerState;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = wasm_bindgen::closure::Closure::wrap(
                Box::new(move || handler()) as Box<dyn FnMut()>
            );
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("[ui] missing #{}; button not wired", element_id),
    }
}

/// Toggle an element between `display:block` and `display:none`.
#[inline]
pub fn set_shown(document: &web::Document, element_id: &str, shown: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html
                .style()
                .set_property("display", if shown { "block" } else { "none" });
        } else {
            _ = el.set_attribute("style", if shown { "display:block" } else { "display:none" });
        }
    }
}

pub fn show_banners(document: &web::Document, banners: BannerState) {
    set_shown(document, "loading", banners.loading);
    set_shown(document, "scanning", banners.scanning);
    set_shown(document, "error", banners.error);
}
