//! What the user sees: nothing, the callout, or the info panel.
//!
//! Mode and tracking state are updated together so that `CalloutShown` and
//! `PanelShown` only ever exist while the anchor is tracked.

use crate::callout::CalloutAnimator;
use crate::effects::{Effects, SceneEffect};
use crate::gesture::Millis;
use crate::registry::{DecorationId, DecorationKind, DecorationOwner, DecorationRegistry};
use crate::slideshow::Slideshow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnchorTrackingState {
    #[default]
    NotTracked,
    Tracked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PresentationMode {
    #[default]
    Hidden,
    CalloutShown,
    PanelShown,
}

/// The two-pane info panel. Built on first activation and only dropped if the
/// renderer fails to build it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoPanel {
    pub id: DecorationId,
    pub visible: bool,
    pub shown_slide: usize,
}

#[derive(Clone, Debug)]
pub struct PresentationStateMachine {
    tracking: AnchorTrackingState,
    mode: PresentationMode,
    panel: Option<InfoPanel>,
    slideshow: Slideshow<String>,
    callout: CalloutAnimator,
    panel_unavailable: bool,
}

impl PresentationStateMachine {
    pub fn new(slideshow: Slideshow<String>, callout: CalloutAnimator) -> Self {
        Self {
            tracking: AnchorTrackingState::NotTracked,
            mode: PresentationMode::Hidden,
            panel: None,
            slideshow,
            callout,
            panel_unavailable: false,
        }
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    pub fn tracking(&self) -> AnchorTrackingState {
        self.tracking
    }

    pub fn panel(&self) -> Option<&InfoPanel> {
        self.panel.as_ref()
    }

    pub fn slideshow(&self) -> &Slideshow<String> {
        &self.slideshow
    }

    pub fn callout(&self) -> &CalloutAnimator {
        &self.callout
    }

    /// False once the renderer has failed to build the panel.
    pub fn panel_available(&self) -> bool {
        !self.panel_unavailable
    }

    pub fn target_found(&mut self, out: &mut Effects) {
        log::info!("[tracking] target found");
        self.tracking = AnchorTrackingState::Tracked;
        if self.mode == PresentationMode::Hidden {
            self.mode = PresentationMode::CalloutShown;
            self.callout.set_visible(true, out);
        }
    }

    pub fn target_lost(&mut self, out: &mut Effects) {
        log::info!("[tracking] target lost");
        self.tracking = AnchorTrackingState::NotTracked;
        self.mode = PresentationMode::Hidden;
        self.hide_panel(out);
        self.callout.set_visible(false, out);
    }

    /// The character was tapped.
    pub fn activate(&mut self, registry: &mut DecorationRegistry, out: &mut Effects) {
        if self.tracking != AnchorTrackingState::Tracked {
            log::debug!("[panel] activation ignored while target is not tracked");
            return;
        }
        if self.mode == PresentationMode::PanelShown {
            return;
        }
        if self.panel_unavailable {
            log::debug!("[panel] activation ignored, panel could not be built");
            return;
        }
        log::info!("[panel] showing info panel");
        self.mode = PresentationMode::PanelShown;
        let slide = self.slideshow.current_index();
        match self.panel.as_mut() {
            Some(panel) => {
                panel.visible = true;
                panel.shown_slide = slide;
                out.push(SceneEffect::SetPanelVisible(true));
                out.push(SceneEffect::ShowSlide(slide));
            }
            None => {
                let id = registry.register(DecorationOwner::InfoPanel, DecorationKind::PanelGroup);
                self.panel = Some(InfoPanel {
                    id,
                    visible: true,
                    shown_slide: slide,
                });
                out.push(SceneEffect::BuildPanel { id, slide });
            }
        }
        out.push(SceneEffect::SetControlsVisible(true));
        self.callout.set_visible(false, out);
    }

    pub fn close_panel(&mut self, out: &mut Effects) {
        if self.mode != PresentationMode::PanelShown {
            return;
        }
        log::info!("[panel] closing info panel");
        self.mode = PresentationMode::CalloutShown;
        self.hide_panel(out);
        self.callout.set_visible(true, out);
    }

    /// The renderer could not build panel `id`. Drop it and fall back to the
    /// callout; activation stays disabled for the rest of the session.
    pub fn panel_build_failed(
        &mut self,
        id: DecorationId,
        registry: &mut DecorationRegistry,
        out: &mut Effects,
    ) {
        if self.panel.map(|p| p.id) != Some(id) {
            log::warn!("[panel] build failure for unknown panel {:?}", id);
            return;
        }
        self.panel = None;
        self.panel_unavailable = true;
        if let Err(e) = registry.remove(DecorationOwner::InfoPanel, id) {
            log::warn!("[panel] {}", e);
        }
        if self.mode == PresentationMode::PanelShown {
            self.mode = PresentationMode::CalloutShown;
            out.push(SceneEffect::SetControlsVisible(false));
            self.callout.set_visible(true, out);
        }
    }

    pub fn next_slide(&mut self, out: &mut Effects) {
        if self.mode == PresentationMode::PanelShown {
            self.slideshow.next();
            self.refresh_slide(out);
        }
    }

    pub fn prev_slide(&mut self, out: &mut Effects) {
        if self.mode == PresentationMode::PanelShown {
            self.slideshow.prev();
            self.refresh_slide(out);
        }
    }

    pub fn model_loaded(&mut self, registry: &mut DecorationRegistry, out: &mut Effects) {
        let visible = self.mode == PresentationMode::CalloutShown;
        self.callout.attach(registry, visible, out);
    }

    pub fn tick(&mut self, now: Millis, out: &mut Effects) {
        self.callout.tick(now, out);
    }

    fn refresh_slide(&mut self, out: &mut Effects) {
        let slide = self.slideshow.current_index();
        log::debug!("[panel] slide {}/{}", slide + 1, self.slideshow.len());
        if let Some(panel) = self.panel.as_mut() {
            panel.shown_slide = slide;
            out.push(SceneEffect::ShowSlide(slide));
        }
    }

    fn hide_panel(&mut self, out: &mut Effects) {
        if let Some(panel) = self.panel.as_mut() {
            if panel.visible {
                panel.visible = false;
                out.push(SceneEffect::SetPanelVisible(false));
                out.push(SceneEffect::SetControlsVisible(false));
            }
        }
    }
}
