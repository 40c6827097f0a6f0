//! Minimal bindings to the three.js globals the host page exposes as `THREE`
//! (including `THREE.GLTFLoader`). Only the surface this crate touches is
//! declared.

use glam::{Mat4, Vec3};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    // ---------------- scene graph ----------------
    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Object3D;

    #[wasm_bindgen(method)]
    pub fn add(this: &Object3D, child: &Object3D);
    #[wasm_bindgen(method)]
    pub fn remove(this: &Object3D, child: &Object3D);
    #[wasm_bindgen(method)]
    pub fn traverse(this: &Object3D, visitor: &js_sys::Function);
    #[wasm_bindgen(method, getter)]
    pub fn visible(this: &Object3D) -> bool;
    #[wasm_bindgen(method, setter)]
    pub fn set_visible(this: &Object3D, visible: bool);
    #[wasm_bindgen(method, setter = castShadow)]
    pub fn set_cast_shadow(this: &Object3D, on: bool);
    #[wasm_bindgen(method, setter = receiveShadow)]
    pub fn set_receive_shadow(this: &Object3D, on: bool);
    #[wasm_bindgen(method, getter)]
    pub fn position(this: &Object3D) -> Vector3;
    #[wasm_bindgen(method, getter)]
    pub fn scale(this: &Object3D) -> Vector3;
    #[wasm_bindgen(method, getter)]
    pub fn rotation(this: &Object3D) -> Euler;
    #[wasm_bindgen(method, getter = matrixWorld)]
    pub fn matrix_world(this: &Object3D) -> Matrix4;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Group;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> Group;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Scene;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Camera;
    #[wasm_bindgen(method, getter = projectionMatrix)]
    pub fn projection_matrix(this: &Camera) -> Matrix4;

    // ---------------- math ----------------
    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Vector3;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(x: f32, y: f32, z: f32) -> Vector3;
    #[wasm_bindgen(method)]
    pub fn set(this: &Vector3, x: f32, y: f32, z: f32);
    #[wasm_bindgen(method, setter)]
    pub fn set_y(this: &Vector3, y: f32);

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Euler;
    #[wasm_bindgen(method)]
    pub fn set(this: &Euler, x: f32, y: f32, z: f32);
    #[wasm_bindgen(method, setter)]
    pub fn set_y(this: &Euler, y: f32);

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Matrix4;
    #[wasm_bindgen(method, getter)]
    pub fn elements(this: &Matrix4) -> js_sys::Array;

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Raycaster;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> Raycaster;
    #[wasm_bindgen(method)]
    pub fn set(this: &Raycaster, origin: &Vector3, direction: &Vector3);
    #[wasm_bindgen(method, js_name = intersectObject)]
    pub fn intersect_object(this: &Raycaster, object: &Object3D, recursive: bool) -> js_sys::Array;

    // ---------------- meshes & materials ----------------
    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type PlaneGeometry;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(width: f32, height: f32) -> PlaneGeometry;

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type MeshBasicMaterial;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(params: &JsValue) -> MeshBasicMaterial;
    #[wasm_bindgen(method, setter)]
    pub fn set_map(this: &MeshBasicMaterial, map: &Texture);
    #[wasm_bindgen(method, setter = needsUpdate)]
    pub fn set_needs_update(this: &MeshBasicMaterial, on: bool);

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Mesh;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(geometry: &PlaneGeometry, material: &MeshBasicMaterial) -> Mesh;

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type SpriteMaterial;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(params: &JsValue) -> SpriteMaterial;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Sprite;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(material: &SpriteMaterial) -> Sprite;

    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type Texture;
    #[wasm_bindgen(method, setter = needsUpdate)]
    pub fn set_needs_update(this: &Texture, on: bool);

    #[wasm_bindgen(extends = Texture, js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type CanvasTexture;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(canvas: &web::HtmlCanvasElement) -> CanvasTexture;

    // ---------------- lights ----------------
    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    pub type AmbientLight;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(color: u32, intensity: f32) -> AmbientLight;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    pub type DirectionalLight;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(color: u32, intensity: f32) -> DirectionalLight;

    #[wasm_bindgen(extends = Object3D, js_namespace = THREE)]
    pub type HemisphereLight;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(sky: u32, ground: u32, intensity: f32) -> HemisphereLight;

    // ---------------- loaders ----------------
    #[wasm_bindgen(js_namespace = THREE)]
    pub type TextureLoader;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> TextureLoader;
    #[wasm_bindgen(method)]
    pub fn load(
        this: &TextureLoader,
        url: &str,
        on_load: &JsValue,
        on_progress: &JsValue,
        on_error: &JsValue,
    ) -> Texture;

    #[wasm_bindgen(js_namespace = THREE)]
    pub type GLTFLoader;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new() -> GLTFLoader;
    #[wasm_bindgen(method)]
    pub fn load(
        this: &GLTFLoader,
        url: &str,
        on_load: &JsValue,
        on_progress: &JsValue,
        on_error: &JsValue,
    );

    /// Result object handed to the GLTF load callback.
    pub type Gltf;
    #[wasm_bindgen(method, getter)]
    pub fn scene(this: &Gltf) -> Object3D;
    #[wasm_bindgen(method, getter)]
    pub fn animations(this: &Gltf) -> js_sys::Array;

    // ---------------- animation ----------------
    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type AnimationMixer;
    #[wasm_bindgen(constructor, js_namespace = THREE)]
    pub fn new(root: &Object3D) -> AnimationMixer;
    #[wasm_bindgen(method, js_name = clipAction)]
    pub fn clip_action(this: &AnimationMixer, clip: &JsValue) -> AnimationAction;
    #[wasm_bindgen(method)]
    pub fn update(this: &AnimationMixer, delta_sec: f64);

    pub type AnimationAction;
    #[wasm_bindgen(method)]
    pub fn play(this: &AnimationAction);

    // ---------------- renderer ----------------
    #[wasm_bindgen(js_namespace = THREE)]
    #[derive(Clone, Debug)]
    pub type WebGLRenderer;
    #[wasm_bindgen(method)]
    pub fn render(this: &WebGLRenderer, scene: &Scene, camera: &Camera);
    #[wasm_bindgen(method, getter = domElement)]
    pub fn dom_element(this: &WebGLRenderer) -> web::HtmlCanvasElement;
}

#[inline]
pub fn vec3(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

/// three.js stores matrices column-major, same as glam.
pub fn to_mat4(m: &Matrix4) -> Mat4 {
    let mut cols = [0.0_f32; 16];
    for (slot, v) in cols.iter_mut().zip(m.elements().iter()) {
        *slot = v.as_f64().unwrap_or(0.0) as f32;
    }
    Mat4::from_cols_array(&cols)
}

/// Build a plain JS options object.
pub fn js_options(pairs: &[(&str, JsValue)]) -> JsValue {
    let obj = js_sys::Object::new();
    for (key, value) in pairs {
        _ = js_sys::Reflect::set(&obj, &JsValue::from_str(key), value);
    }
    obj.into()
}

/// Read a numeric field from a JS object, e.g. a progress event or a hit.
pub fn js_number(obj: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .and_then(|v| v.as_f64())
}
