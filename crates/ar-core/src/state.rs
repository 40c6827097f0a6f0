//! Application state for one AR session.
//!
//! `AppState` owns every component and routes external events into them. The
//! front-end keeps a single instance and applies the returned effects; no
//! component reaches into another's fields.

use crate::callout::CalloutAnimator;
use crate::config::ExperienceConfig;
use crate::effects::{Effects, SceneEffect};
use crate::error::CoreError;
use crate::gesture::{GestureEvent, GestureSession, GestureTracker, Millis, PointerSample};
use crate::hit_test::{HitTestService, PickContext};
use crate::presentation::{AnchorTrackingState, PresentationMode, PresentationStateMachine};
use crate::registry::{DecorationId, DecorationRegistry};
use crate::rotation::{CharacterModel, ModelRotationController};
use crate::session::{BannerState, FailureReport, SessionBanners};
use crate::slideshow::Slideshow;
use glam::Vec2;

pub struct AppState {
    gestures: GestureTracker,
    rotation: ModelRotationController,
    hit_test: HitTestService,
    model: Option<CharacterModel>,
    presentation: PresentationStateMachine,
    registry: DecorationRegistry,
    banners: SessionBanners,
}

impl AppState {
    pub fn new(config: &ExperienceConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let slideshow = Slideshow::new(config.slide_urls.clone())?;
        Ok(Self {
            gestures: GestureTracker::new(config.gestures),
            rotation: ModelRotationController::new(config.rotation_per_unit),
            hit_test: HitTestService,
            model: None,
            presentation: PresentationStateMachine::new(
                slideshow,
                CalloutAnimator::new(config.callout),
            ),
            registry: DecorationRegistry::new(),
            banners: SessionBanners::default(),
        })
    }

    pub fn mode(&self) -> PresentationMode {
        self.presentation.mode()
    }

    pub fn tracking(&self) -> AnchorTrackingState {
        self.presentation.tracking()
    }

    pub fn presentation(&self) -> &PresentationStateMachine {
        &self.presentation
    }

    pub fn model(&self) -> Option<&CharacterModel> {
        self.model.as_ref()
    }

    pub fn registry(&self) -> &DecorationRegistry {
        &self.registry
    }

    pub fn banners(&self) -> BannerState {
        self.banners.state()
    }

    pub fn failures(&self) -> &[FailureReport] {
        self.banners.failures()
    }

    pub fn gesture_session(&self) -> Option<&GestureSession> {
        self.gestures.session()
    }

    // ---------------- tracking engine ----------------

    pub fn session_started(&mut self) -> Effects {
        let mut out = Effects::new();
        self.banners.session_started(&mut out);
        out
    }

    pub fn target_found(&mut self) -> Effects {
        let mut out = Effects::new();
        self.banners.target_found(&mut out);
        self.presentation.target_found(&mut out);
        out
    }

    pub fn target_lost(&mut self) -> Effects {
        let mut out = Effects::new();
        self.banners.target_lost(&mut out);
        self.presentation.target_lost(&mut out);
        out
    }

    // ---------------- assets ----------------

    pub fn model_loaded(&mut self) -> Effects {
        let mut out = Effects::new();
        if self.model.is_some() {
            log::warn!("[asset] character model reported loaded twice");
        }
        let model = self.model.get_or_insert_with(CharacterModel::default);
        out.push(SceneEffect::SetModelYaw(model.yaw));
        self.presentation.model_loaded(&mut self.registry, &mut out);
        out
    }

    pub fn model_progress(&self, loaded: f64, total: f64) {
        if total > 0.0 {
            log::info!("[asset] model {:.0}% loaded", loaded / total * 100.0);
        }
    }

    pub fn report_failure(&mut self, failure: FailureReport) -> Effects {
        let mut out = Effects::new();
        self.banners.report(failure, &mut out);
        out
    }

    // ---------------- pointer input ----------------

    pub fn pointer_down(&mut self, sample: PointerSample) {
        self.gestures.pointer_down(sample);
    }

    pub fn pointer_move(&mut self, sample: PointerSample) -> Effects {
        let mut out = Effects::new();
        if let Some(GestureEvent::Drag { delta_x }) = self.gestures.pointer_move(sample) {
            if let Some(yaw) = self.rotation.apply(self.model.as_mut(), delta_x) {
                out.push(SceneEffect::SetModelYaw(yaw));
            }
        }
        out
    }

    pub fn pointer_up(&mut self, sample: PointerSample, pick: &PickContext<'_>) -> Effects {
        match self.gestures.pointer_up(sample) {
            Some(GestureEvent::Tap { at }) => self.tap(at, pick),
            _ => Effects::new(),
        }
    }

    pub fn pointer_cancel(&mut self, pointer_id: i32) {
        self.gestures.pointer_cancel(pointer_id);
    }

    /// Resolve a classified tap against the model.
    pub fn tap(&mut self, at: Vec2, pick: &PickContext<'_>) -> Effects {
        let mut out = Effects::new();
        if self.model.is_none() {
            return out;
        }
        if self
            .hit_test
            .hits_model(at, &pick.viewport, &pick.camera, pick.target)
        {
            log::info!("[gesture] model tapped at ({:.0}, {:.0})", at.x, at.y);
            self.presentation.activate(&mut self.registry, &mut out);
        } else {
            log::debug!("[gesture] tap at ({:.0}, {:.0}) missed the model", at.x, at.y);
        }
        out
    }

    /// The renderer could not build the panel it was asked for.
    pub fn panel_build_failed(&mut self, id: DecorationId, message: String) -> Effects {
        let mut out = Effects::new();
        self.presentation
            .panel_build_failed(id, &mut self.registry, &mut out);
        self.banners
            .report(FailureReport::PanelBuild { message }, &mut out);
        out
    }

    // ---------------- UI buttons ----------------

    pub fn close_panel(&mut self) -> Effects {
        let mut out = Effects::new();
        self.presentation.close_panel(&mut out);
        out
    }

    pub fn next_slide(&mut self) -> Effects {
        let mut out = Effects::new();
        self.presentation.next_slide(&mut out);
        out
    }

    pub fn prev_slide(&mut self) -> Effects {
        let mut out = Effects::new();
        self.presentation.prev_slide(&mut out);
        out
    }

    // ---------------- render loop ----------------

    /// Per-frame update; `now` is wall-clock milliseconds.
    pub fn frame(&mut self, now: Millis) -> Effects {
        let mut out = Effects::new();
        self.presentation.tick(now, &mut out);
        out
    }
}
