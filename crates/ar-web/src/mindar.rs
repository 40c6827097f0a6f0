use crate::three::{Camera, Group, Scene, WebGLRenderer};
use ar_core::ExperienceConfig;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// Image-target tracking session (`window.MINDAR.IMAGE.MindARThree`).
    #[wasm_bindgen(js_namespace = ["MINDAR", "IMAGE"])]
    #[derive(Clone, Debug)]
    pub type MindARThree;
    #[wasm_bindgen(constructor, js_namespace = ["MINDAR", "IMAGE"], catch)]
    pub fn new(options: &JsValue) -> Result<MindARThree, JsValue>;
    #[wasm_bindgen(method, getter)]
    pub fn renderer(this: &MindARThree) -> WebGLRenderer;
    #[wasm_bindgen(method, getter)]
    pub fn scene(this: &MindARThree) -> Scene;
    #[wasm_bindgen(method, getter)]
    pub fn camera(this: &MindARThree) -> Camera;
    #[wasm_bindgen(method, js_name = addAnchor)]
    pub fn add_anchor(this: &MindARThree, target_index: u32) -> Anchor;
    #[wasm_bindgen(method)]
    pub fn start(this: &MindARThree) -> js_sys::Promise;

    #[derive(Clone, Debug)]
    pub type Anchor;
    #[wasm_bindgen(method, getter)]
    pub fn group(this: &Anchor) -> Group;
    #[wasm_bindgen(method, setter = onTargetFound)]
    pub fn set_on_target_found(this: &Anchor, callback: &js_sys::Function);
    #[wasm_bindgen(method, setter = onTargetLost)]
    pub fn set_on_target_lost(this: &Anchor, callback: &js_sys::Function);
}

/// Session options. MindAR's own banners are disabled: the core drives them.
pub fn session_options(container: &web::Element, config: &ExperienceConfig) -> JsValue {
    crate::three::js_options(&[
        ("container", JsValue::from(container.clone())),
        ("imageTargetSrc", config.target_src.as_str().into()),
        ("autoStart", false.into()),
        ("filterMinCF", config.filter_min_cf.into()),
        ("filterBeta", config.filter_beta.into()),
        ("uiLoading", "no".into()),
        ("uiScanning", "no".into()),
        ("uiError", "no".into()),
    ])
}
