use crate::constants::ROTATION_RADIANS_PER_UNIT;

/// Core-side view of the loaded character: only the transform the core drives.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharacterModel {
    /// Rotation about the model's Y axis in radians. Accumulates without wrapping.
    pub yaw: f32,
}

/// Turns horizontal drag motion into free spin about the Y axis.
#[derive(Clone, Copy, Debug)]
pub struct ModelRotationController {
    radians_per_unit: f32,
}

impl Default for ModelRotationController {
    fn default() -> Self {
        Self::new(ROTATION_RADIANS_PER_UNIT)
    }
}

impl ModelRotationController {
    pub fn new(radians_per_unit: f32) -> Self {
        Self { radians_per_unit }
    }

    /// Returns the new yaw, or `None` when no model is loaded yet.
    pub fn apply(&self, model: Option<&mut CharacterModel>, delta_x: f32) -> Option<f32> {
        let model = model?;
        model.yaw += delta_x * self.radians_per_unit;
        Some(model.yaw)
    }
}
