//! Screen-point picking against the character model.
//!
//! The core builds the pick ray itself; the renderer only answers the
//! intersection query through [`RaycastTarget`].

use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

/// Client-space rectangle of the render surface (CSS pixels).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Map a client point to normalized device coordinates, Y up.
    /// Returns `None` for a zero-sized viewport.
    #[inline]
    pub fn to_ndc(&self, point: Vec2) -> Option<Vec2> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        let x = ((point.x - self.left) / self.width) * 2.0 - 1.0;
        let y = -((point.y - self.top) / self.height) * 2.0 + 1.0;
        Some(Vec2::new(x, y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

/// Camera matrices as the renderer holds them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Camera-to-world transform.
    pub world: Mat4,
    pub projection_inverse: Mat4,
}

impl CameraPose {
    pub fn new(world: Mat4, projection: Mat4) -> Self {
        Self {
            world,
            projection_inverse: projection.inverse(),
        }
    }

    /// Perspective pick ray through `ndc`: starts at the camera position and
    /// passes through the unprojected point at mid depth.
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let origin = self.world.w_axis.truncate();
        let view_point = self
            .projection_inverse
            .project_point3(Vec3::new(ndc.x, ndc.y, 0.5));
        let world_point = self.world.transform_point3(view_point);
        Ray {
            origin,
            direction: (world_point - origin).normalize_or_zero(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub distance: f32,
}

pub type RayHits = SmallVec<[RayHit; 4]>;

/// The renderer's ray-intersection primitive, bound to the character model.
pub trait RaycastTarget {
    /// Intersections of `ray` with the model, including all descendants when
    /// `recursive` is set.
    fn intersect(&self, ray: &Ray, recursive: bool) -> RayHits;
}

/// Renderer state sampled at the moment a tap is resolved.
#[derive(Clone, Copy)]
pub struct PickContext<'a> {
    pub viewport: Viewport,
    pub camera: CameraPose,
    pub target: Option<&'a dyn RaycastTarget>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HitTestService;

impl HitTestService {
    /// `target` is `None` until the model has loaded, which always misses.
    pub fn hits_model(
        &self,
        point: Vec2,
        viewport: &Viewport,
        camera: &CameraPose,
        target: Option<&dyn RaycastTarget>,
    ) -> bool {
        let Some(target) = target else {
            return false;
        };
        let Some(ndc) = viewport.to_ndc(point) else {
            return false;
        };
        let ray = camera.ray_through(ndc);
        !target.intersect(&ray, true).is_empty()
    }
}
