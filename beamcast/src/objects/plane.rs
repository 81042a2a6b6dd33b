use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::render::intersection::{Hit, EPSILON};
use crate::scene::surface::Surface;

/// Infinite plane through `point` with unit `normal`. A plane has no
/// interior, so its hits never set the within flag; the reported normal
/// faces the side the ray came from.
pub struct Plane {

    point: Vector3,
    normal: Vector3,
    material: Material,
}

impl Plane {

    pub fn new(point: Vector3, normal: Vector3, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalized(),
            material,
        }
    }
}

impl Surface for Plane {

    fn material(&self) -> &Material {
        &self.material
    }

    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let direction = ray.direction().normalized();
        let denominator = self.normal.dot_product(&direction);

        if denominator.abs() <= EPSILON {
            return None;
        }

        let t = (self.point - *ray.origin()).dot_product(&self.normal) / denominator;
        if t <= EPSILON {
            return None;
        }

        let facing_normal = if denominator > 0.0 {
            -self.normal
        } else {
            self.normal
        };

        Some(Hit::new(t, facing_normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0), Material::new())
    }

    #[test]
    fn test_hit_from_above() {
        let ray = Ray::new(Vector3::new(0.0, 3.0, 0.0), Vector3::new(0.0, -1.0, 0.0));
        let hit = floor().intersect(&ray).expect("expected an intersection");

        assert!((hit.distance() - 3.0).abs() < 1e-9);
        assert_eq!(*hit.normal(), Vector3::new(0.0, 1.0, 0.0));
        assert!(!hit.is_within());
    }

    #[test]
    fn test_hit_from_below_flips_normal() {
        let ray = Ray::new(Vector3::new(0.0, -2.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        let hit = floor().intersect(&ray).expect("expected an intersection");
        assert_eq!(*hit.normal(), Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_parallel_ray_misses() {
        let ray = Ray::new(Vector3::new(0.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(floor().intersect(&ray).is_none());
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let ray = Ray::new(Vector3::new(0.0, 3.0, 0.0), Vector3::new(0.0, 1.0, 0.0));
        assert!(floor().intersect(&ray).is_none());
    }
}
