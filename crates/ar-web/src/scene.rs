//! Renderer side of the core's effects.
//!
//! `SceneBridge` owns every three.js object the experience creates and is the
//! only place that mutates them. Decorations are looked up by the core's
//! `DecorationId`, never by inspecting the scene graph.

use crate::dom;
use crate::panel::{self, PanelObjects};
use crate::three::{
    self, AmbientLight, AnimationMixer, Camera, DirectionalLight, Gltf, Group,
    HemisphereLight, Object3D, Raycaster, Scene, Sprite, SpriteMaterial, Texture, WebGLRenderer,
};
use ar_core::{
    CameraPose, DecorationId, PanelContent, PickContext, Ray, RayHit, RayHits, RaycastTarget,
    SceneEffect, MODEL_POSITION, MODEL_ROTATION, MODEL_SCALE,
};
use fnv::FnvHashMap;
use glam::Vec3;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct SceneBridge {
    document: web::Document,
    renderer: WebGLRenderer,
    scene: Scene,
    camera: Camera,
    anchor_group: Group,
    raycaster: Raycaster,
    model: Option<Object3D>,
    mixers: Vec<AnimationMixer>,
    slide_textures: Vec<Texture>,
    callout_texture: Option<Texture>,
    panel_content: PanelContent,
    decorations: FnvHashMap<DecorationId, Object3D>,
    callout: Option<Sprite>,
    panel: Option<PanelObjects>,
    panel_failure: Option<(DecorationId, String)>,
}

impl SceneBridge {
    pub fn new(
        document: web::Document,
        renderer: WebGLRenderer,
        scene: Scene,
        camera: Camera,
        anchor_group: Group,
        panel_content: PanelContent,
    ) -> Self {
        Self {
            document,
            renderer,
            scene,
            camera,
            anchor_group,
            raycaster: Raycaster::new(),
            model: None,
            mixers: Vec::new(),
            slide_textures: Vec::new(),
            callout_texture: None,
            panel_content,
            decorations: FnvHashMap::default(),
            callout: None,
            panel: None,
            panel_failure: None,
        }
    }

    pub fn set_slide_textures(&mut self, textures: Vec<Texture>) {
        self.slide_textures = textures;
    }

    pub fn set_callout_texture(&mut self, texture: Texture) {
        self.callout_texture = Some(texture);
    }

    pub fn setup_lighting(&self) {
        let ambient = AmbientLight::new(0xffffff, 0.5);
        self.scene.add(&ambient);

        let main = DirectionalLight::new(0xffffff, 1.0);
        main.position().set(1.0, 1.0, 1.0);
        main.set_cast_shadow(true);
        self.scene.add(&main);

        let fill = DirectionalLight::new(0xffffff, 0.5);
        fill.position().set(-1.0, 0.0, -1.0);
        self.scene.add(&fill);

        let hemi = HemisphereLight::new(0xffffff, 0x444444, 0.5);
        self.anchor_group.add(&hemi);
    }

    /// Place the loaded character under the anchor and start its clips.
    pub fn attach_model(&mut self, gltf: &Gltf) {
        let root = gltf.scene();
        root.scale().set(MODEL_SCALE, MODEL_SCALE, MODEL_SCALE);
        root.position()
            .set(MODEL_POSITION.x, MODEL_POSITION.y, MODEL_POSITION.z);
        root.rotation()
            .set(MODEL_ROTATION.x, MODEL_ROTATION.y, MODEL_ROTATION.z);

        let shadows = Closure::wrap(Box::new(|node: Object3D| {
            node.set_cast_shadow(true);
            node.set_receive_shadow(true);
        }) as Box<dyn FnMut(Object3D)>);
        root.traverse(shadows.as_ref().unchecked_ref());
        drop(shadows);

        let clips = gltf.animations();
        if clips.length() > 0 {
            let mixer = AnimationMixer::new(&root);
            for clip in clips.iter() {
                mixer.clip_action(&clip).play();
                log::info!(
                    "[asset] playing animation {}",
                    js_sys::Reflect::get(&clip, &"name".into())
                        .ok()
                        .and_then(|n| n.as_string())
                        .unwrap_or_default()
                );
            }
            self.mixers.push(mixer);
        }

        self.anchor_group.add(&root);
        self.model = Some(root);
        log::info!("[asset] model added to anchor");
    }

    pub fn update_mixers(&self, dt_sec: f64) {
        for mixer in &self.mixers {
            mixer.update(dt_sec);
        }
    }

    pub fn render(&self) {
        self.renderer.render(&self.scene, &self.camera);
    }

    pub fn pick_context(&self) -> PickContext<'_> {
        let camera = CameraPose::new(
            three::to_mat4(&self.camera.matrix_world()),
            three::to_mat4(&self.camera.projection_matrix()),
        );
        PickContext {
            viewport: crate::input::viewport_of(&self.renderer.dom_element()),
            camera,
            target: self.model.as_ref().map(|_| self as &dyn RaycastTarget),
        }
    }

    pub fn apply(&mut self, effects: &[SceneEffect]) {
        for effect in effects {
            self.apply_one(effect);
        }
    }

    fn apply_one(&mut self, effect: &SceneEffect) {
        match *effect {
            SceneEffect::SetModelYaw(yaw) => {
                if let Some(model) = &self.model {
                    model.rotation().set_y(yaw);
                }
            }
            SceneEffect::SpawnCallout {
                id,
                position,
                scale,
                visible,
            } => self.spawn_callout(id, position, scale, visible),
            SceneEffect::RemoveDecoration(id) => {
                if let Some(obj) = self.decorations.remove(&id) {
                    self.anchor_group.remove(&obj);
                }
            }
            SceneEffect::SetCalloutVisible(visible) => {
                if let Some(sprite) = &self.callout {
                    sprite.set_visible(visible);
                }
            }
            SceneEffect::SetCalloutHeight(y) => {
                if let Some(sprite) = &self.callout {
                    sprite.position().set_y(y);
                }
            }
            SceneEffect::BuildPanel { id, slide } => self.build_panel(id, slide),
            SceneEffect::SetPanelVisible(visible) => {
                if let Some(panel) = &self.panel {
                    panel.group.set_visible(visible);
                }
            }
            SceneEffect::ShowSlide(index) => self.show_slide(index),
            SceneEffect::SetControlsVisible(visible) => {
                dom::set_shown(&self.document, "ar-controls", visible);
            }
            SceneEffect::Banners(banners) => dom::show_banners(&self.document, banners),
        }
    }

    fn spawn_callout(&mut self, id: DecorationId, position: Vec3, scale: f32, visible: bool) {
        let params = match &self.callout_texture {
            Some(tex) => three::js_options(&[
                ("map", JsValue::from(tex.clone())),
                ("transparent", JsValue::TRUE),
                ("opacity", JsValue::from(1.0)),
            ]),
            None => three::js_options(&[("transparent", JsValue::TRUE)]),
        };
        let sprite = Sprite::new(&SpriteMaterial::new(&params));
        sprite.scale().set(scale, scale, scale);
        sprite.position().set(position.x, position.y, position.z);
        sprite
            .rotation()
            .set(0.0, std::f32::consts::FRAC_PI_2, 0.0);
        sprite.set_visible(visible);
        self.anchor_group.add(&sprite);
        self.decorations.insert(id, sprite.clone().into());
        self.callout = Some(sprite);
    }

    /// A panel the core asked for but that could not be built, to be handed
    /// back via `AppState::panel_build_failed`.
    pub fn take_panel_failure(&mut self) -> Option<(DecorationId, String)> {
        self.panel_failure.take()
    }

    fn build_panel(&mut self, id: DecorationId, slide: usize) {
        let built = match self.slide_textures.get(slide) {
            Some(texture) => panel::build_panel(&self.document, &self.panel_content, texture),
            None => Err(anyhow::anyhow!("no texture for slide {}", slide)),
        };
        match built {
            Ok(objects) => {
                self.anchor_group.add(&objects.group);
                self.decorations.insert(id, objects.group.clone().into());
                self.panel = Some(objects);
            }
            Err(e) => {
                log::error!("[panel] build failed: {:?}", e);
                self.panel_failure = Some((id, format!("{:#}", e)));
            }
        }
    }

    fn show_slide(&self, index: usize) {
        let (Some(panel), Some(texture)) = (&self.panel, self.slide_textures.get(index)) else {
            return;
        };
        panel.slide_material.set_map(texture);
        panel.slide_material.set_needs_update(true);
    }
}

impl RaycastTarget for SceneBridge {
    fn intersect(&self, ray: &Ray, recursive: bool) -> RayHits {
        let Some(model) = &self.model else {
            return RayHits::new();
        };
        self.raycaster
            .set(&three::vec3(ray.origin), &three::vec3(ray.direction));
        self.raycaster
            .intersect_object(model, recursive)
            .iter()
            .filter_map(|hit| three::js_number(&hit, "distance"))
            .map(|distance| RayHit {
                distance: distance as f32,
            })
            .collect()
    }
}
