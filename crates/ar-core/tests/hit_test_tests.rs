// Host-side tests for screen-point picking.

use ar_core::*;
use glam::{Mat4, Vec2, Vec3};

/// Stand-in for the renderer: the model's geometry as bounding spheres.
struct SphereModel {
    spheres: Vec<(Vec3, f32)>,
}

fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

impl RaycastTarget for SphereModel {
    fn intersect(&self, ray: &Ray, _recursive: bool) -> RayHits {
        self.spheres
            .iter()
            .filter_map(|(c, r)| ray_sphere(ray.origin, ray.direction, *c, *r))
            .map(|distance| RayHit { distance })
            .collect()
    }
}

fn viewport() -> Viewport {
    Viewport {
        left: 0.0,
        top: 0.0,
        width: 800.0,
        height: 600.0,
    }
}

fn camera_at_z(z: f32) -> CameraPose {
    let world = Mat4::from_translation(Vec3::new(0.0, 0.0, z));
    let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 800.0 / 600.0, 0.1, 100.0);
    CameraPose::new(world, projection)
}

fn unit_model() -> SphereModel {
    SphereModel {
        spheres: vec![(Vec3::ZERO, 1.0)],
    }
}

#[test]
fn ndc_maps_corners_and_inverts_y() {
    let vp = Viewport {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };
    assert_eq!(vp.to_ndc(Vec2::new(100.0, 50.0)), Some(Vec2::new(-1.0, 1.0)));
    assert_eq!(vp.to_ndc(Vec2::new(300.0, 150.0)), Some(Vec2::new(1.0, -1.0)));
    assert_eq!(vp.to_ndc(Vec2::new(200.0, 100.0)), Some(Vec2::new(0.0, 0.0)));
}

#[test]
fn zero_sized_viewport_has_no_ndc() {
    let vp = Viewport {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 600.0,
    };
    assert_eq!(vp.to_ndc(Vec2::new(1.0, 1.0)), None);
}

#[test]
fn center_ray_points_down_camera_axis() {
    let ray = camera_at_z(5.0).ray_through(Vec2::ZERO);
    assert!((ray.origin - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-5);
    assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
}

#[test]
fn off_center_ray_leans_towards_the_point() {
    let ray = camera_at_z(5.0).ray_through(Vec2::new(0.5, -0.5));
    assert!(ray.direction.x > 0.0);
    assert!(ray.direction.y < 0.0);
    assert!(ray.direction.z < 0.0);
    assert!((ray.direction.length() - 1.0).abs() < 1e-5);
}

#[test]
fn tap_on_silhouette_hits_and_corner_misses() {
    let svc = HitTestService;
    let model = unit_model();
    let cam = camera_at_z(5.0);
    let target: Option<&dyn RaycastTarget> = Some(&model);
    assert!(svc.hits_model(Vec2::new(400.0, 300.0), &viewport(), &cam, target));
    assert!(!svc.hits_model(Vec2::new(5.0, 5.0), &viewport(), &cam, target));
}

#[test]
fn no_model_never_hits() {
    let svc = HitTestService;
    assert!(!svc.hits_model(
        Vec2::new(400.0, 300.0),
        &viewport(),
        &camera_at_z(5.0),
        None
    ));
}

#[test]
fn hierarchy_hit_on_any_part_counts() {
    let svc = HitTestService;
    let model = SphereModel {
        spheres: vec![(Vec3::new(-50.0, 0.0, 0.0), 0.5), (Vec3::ZERO, 0.5)],
    };
    let target: Option<&dyn RaycastTarget> = Some(&model);
    assert!(svc.hits_model(
        Vec2::new(400.0, 300.0),
        &viewport(),
        &camera_at_z(5.0),
        target
    ));
}
