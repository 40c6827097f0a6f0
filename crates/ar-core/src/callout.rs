//! Floating "notice me" sprite above the character.
//!
//! The oscillation is a flag-gated per-frame update: the render loop calls
//! [`CalloutAnimator::tick`] every frame, a hidden sprite disarms the
//! animation on the next tick, and showing the sprite again re-arms it.

use crate::config::CalloutParams;
use crate::constants::{CALLOUT_OFFSET, CALLOUT_SCALE};
use crate::effects::{Effects, SceneEffect};
use crate::gesture::Millis;
use crate::registry::{DecorationId, DecorationKind, DecorationOwner, DecorationRegistry};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalloutSprite {
    pub id: DecorationId,
    pub position: Vec3,
    pub baseline_y: f32,
    pub visible: bool,
}

#[derive(Clone, Debug, Default)]
pub struct CalloutAnimator {
    params: CalloutParams,
    sprite: Option<CalloutSprite>,
    armed: bool,
}

impl CalloutAnimator {
    pub fn new(params: CalloutParams) -> Self {
        Self {
            params,
            sprite: None,
            armed: false,
        }
    }

    pub fn sprite(&self) -> Option<&CalloutSprite> {
        self.sprite.as_ref()
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Create the one callout sprite for a freshly loaded character.
    ///
    /// Any sprite this animator created earlier is removed first, so the
    /// registry never holds more than one callout.
    pub fn attach(&mut self, registry: &mut DecorationRegistry, visible: bool, out: &mut Effects) {
        for stale in registry.owned_by(DecorationOwner::CalloutAnimator) {
            if registry.remove(DecorationOwner::CalloutAnimator, stale).is_ok() {
                log::debug!("[callout] removing stale sprite {:?}", stale);
                out.push(SceneEffect::RemoveDecoration(stale));
            }
        }
        let id = registry.register(DecorationOwner::CalloutAnimator, DecorationKind::CalloutSprite);
        self.sprite = Some(CalloutSprite {
            id,
            position: CALLOUT_OFFSET,
            baseline_y: CALLOUT_OFFSET.y,
            visible,
        });
        self.armed = visible;
        out.push(SceneEffect::SpawnCallout {
            id,
            position: CALLOUT_OFFSET,
            scale: CALLOUT_SCALE,
            visible,
        });
        log::info!("[callout] attached sprite {:?}", id);
    }

    /// Flip sprite visibility. Showing re-arms the oscillation; hiding leaves
    /// it to the next tick to notice.
    pub fn set_visible(&mut self, visible: bool, out: &mut Effects) {
        let Some(sprite) = self.sprite.as_mut() else {
            return;
        };
        if sprite.visible != visible {
            sprite.visible = visible;
            out.push(SceneEffect::SetCalloutVisible(visible));
        }
        if visible {
            self.armed = true;
        }
    }

    /// Per-frame update. `now` is wall-clock milliseconds.
    pub fn tick(&mut self, now: Millis, out: &mut Effects) {
        if !self.armed {
            return;
        }
        let Some(sprite) = self.sprite.as_mut() else {
            self.armed = false;
            return;
        };
        if !sprite.visible {
            self.armed = false;
            return;
        }
        let y = sprite.baseline_y + (now * self.params.speed).sin() as f32 * self.params.amplitude;
        sprite.position.y = y;
        out.push(SceneEffect::SetCalloutHeight(y));
    }
}
