use crate::app::App;
use crate::mindar::{Anchor, MindARThree};
use ar_core::FailureReport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};

pub fn wire_target_callbacks(app: &App, anchor: &Anchor) {
    let found = app.clone();
    let on_found = Closure::wrap(Box::new(move || {
        found.dispatch(|s| s.target_found());
    }) as Box<dyn FnMut()>);
    anchor.set_on_target_found(on_found.as_ref().unchecked_ref());
    on_found.forget();

    let lost = app.clone();
    let on_lost = Closure::wrap(Box::new(move || {
        lost.dispatch(|s| s.target_lost());
    }) as Box<dyn FnMut()>);
    anchor.set_on_target_lost(on_lost.as_ref().unchecked_ref());
    on_lost.forget();
}

/// Start the camera/tracking session; the outcome only drives the banners.
pub fn start_session(app: &App, mindar: &MindARThree) {
    let app = app.clone();
    let start = mindar.start();
    spawn_local(async move {
        match JsFuture::from(start).await {
            Ok(_) => app.dispatch(|s| s.session_started()),
            Err(e) => {
                let report = FailureReport::SessionStart {
                    message: format!("{:?}", e),
                };
                app.dispatch(|s| s.report_failure(report));
            }
        }
    });
}
