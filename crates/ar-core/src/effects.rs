use crate::registry::DecorationId;
use crate::session::BannerState;
use glam::Vec3;
use smallvec::SmallVec;

/// A change the front-end must mirror onto the renderer or the DOM.
///
/// Core operations never touch the scene themselves; they return these in
/// the order they must be applied.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneEffect {
    SetModelYaw(f32),
    SpawnCallout {
        id: DecorationId,
        position: Vec3,
        scale: f32,
        visible: bool,
    },
    RemoveDecoration(DecorationId),
    SetCalloutVisible(bool),
    SetCalloutHeight(f32),
    /// First activation only; later activations use `SetPanelVisible`.
    BuildPanel { id: DecorationId, slide: usize },
    SetPanelVisible(bool),
    ShowSlide(usize),
    SetControlsVisible(bool),
    Banners(BannerState),
}

pub type Effects = SmallVec<[SceneEffect; 4]>;
