//! Fire-and-forget asset loads. Failures become core failure reports; nothing
//! is retried.

use crate::app::App;
use crate::three::{self, GLTFLoader, Gltf, Texture, TextureLoader};
use ar_core::{AssetKind, FailureReport};
use wasm_bindgen::prelude::*;

fn failure_callback(app: &App, asset: AssetKind, url: &str) -> Closure<dyn FnMut(JsValue)> {
    let app = app.clone();
    let url = url.to_string();
    Closure::wrap(Box::new(move |err: JsValue| {
        let report = FailureReport::AssetLoad {
            asset,
            url: url.clone(),
            message: format!("{:?}", err),
        };
        app.dispatch(|s| s.report_failure(report));
    }) as Box<dyn FnMut(JsValue)>)
}

fn load_texture(app: &App, loader: &TextureLoader, asset: AssetKind, url: &str) -> Texture {
    let on_error = failure_callback(app, asset, url);
    let texture = loader.load(url, &JsValue::UNDEFINED, &JsValue::UNDEFINED, on_error.as_ref());
    on_error.forget();
    texture
}

/// Request every slide texture in slideshow order, plus the callout sprite's.
pub fn load_textures(app: &App, slide_urls: &[String], callout_url: &str) {
    let loader = TextureLoader::new();
    let slides: Vec<Texture> = slide_urls
        .iter()
        .map(|url| load_texture(app, &loader, AssetKind::SlideTexture, url))
        .collect();
    let callout = load_texture(app, &loader, AssetKind::CalloutTexture, callout_url);

    let mut scene = app.scene.borrow_mut();
    scene.set_slide_textures(slides);
    scene.set_callout_texture(callout);
}

pub fn load_model(app: &App, url: &str) {
    let loader = GLTFLoader::new();

    let app_load = app.clone();
    let on_load = Closure::wrap(Box::new(move |gltf: Gltf| {
        log::info!("[asset] model loaded");
        app_load.scene.borrow_mut().attach_model(&gltf);
        app_load.dispatch(|s| s.model_loaded());
    }) as Box<dyn FnMut(Gltf)>);

    let app_progress = app.clone();
    let on_progress = Closure::wrap(Box::new(move |ev: JsValue| {
        let loaded = three::js_number(&ev, "loaded").unwrap_or(0.0);
        let total = three::js_number(&ev, "total").unwrap_or(0.0);
        app_progress.state.borrow().model_progress(loaded, total);
    }) as Box<dyn FnMut(JsValue)>);

    let on_error = failure_callback(app, AssetKind::Model, url);

    loader.load(url, on_load.as_ref(), on_progress.as_ref(), on_error.as_ref());
    on_load.forget();
    on_progress.forget();
    on_error.forget();
}
