use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::render::intersection::{Hit, EPSILON};
use crate::scene::surface::Surface;

pub struct Sphere {

    center: Vector3,
    radius: f64,
    material: Material,
}

impl Sphere {

    pub fn new(center: Vector3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> &Vector3 {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn hit_at(&self, ray: &Ray, direction: &Vector3, distance: f64) -> Hit {
        let point = *ray.origin() + *direction * distance;
        let normal = (point - self.center).normalized();
        Hit::new(distance, normal)
    }
}

impl Surface for Sphere {

    fn material(&self) -> &Material {
        &self.material
    }

    // Ray(t) = origin + t * direction, |point - center|^2 = radius^2.
    // Substituting gives the quadratic a*t^2 + b*t + c = 0 with
    // a = |d|^2 (= 1, d normalized), b = 2 * d . (o - c),
    // c = |o - c|^2 - radius^2.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let direction = ray.direction().normalized();
        let l = *ray.origin() - self.center;

        let a = direction.dot_product(&direction);
        let b = 2.0 * direction.dot_product(&l);
        let c = l.dot_product(&l) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        if discriminant == 0.0 {
            // tangent ray, a single root
            let t = -0.5 * b / a;
            if t <= EPSILON {
                return None;
            }
            return Some(self.hit_at(ray, &direction, t));
        }

        // branch on the sign of b to avoid catastrophic cancellation
        let q = if b > 0.0 {
            -0.5 * (b + discriminant.sqrt())
        } else {
            -0.5 * (b - discriminant.sqrt())
        };
        let t1 = q / a;
        let t2 = c / q;

        if t1 > EPSILON && t2 > EPSILON {
            Some(self.hit_at(ray, &direction, t1.min(t2)))
        } else if t1 > EPSILON || t2 > EPSILON {
            // one root behind the origin: the ray starts inside the sphere
            let t = if t1 > EPSILON { t1 } else { t2 };
            Some(self.hit_at(ray, &direction, t).with_is_within(true))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_sphere() -> Sphere {
        Sphere::new(Vector3::zero(), 1.0, Material::new())
    }

    #[test]
    fn test_frontal_hit() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = unit_sphere().intersect(&ray).expect("expected an intersection");

        assert!((hit.distance() - 4.0).abs() < 1e-9);
        assert_eq!(*hit.normal(), Vector3::new(0.0, 0.0, 1.0));
        assert!(!hit.is_within());
    }

    #[test]
    fn test_hit_from_inside() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));
        let hit = unit_sphere().intersect(&ray).expect("expected an intersection");

        assert!((hit.distance() - 1.0).abs() < 1e-9);
        assert!(hit.is_within());
        // normal still points outward from the center through the hit point
        assert_eq!(*hit.normal(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_miss() {
        let ray = Ray::new(Vector3::new(0.0, 2.5, 5.0), Vector3::new(0.0, 0.0, -1.0));
        assert!(unit_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0));
        assert!(unit_sphere().intersect(&ray).is_none());
    }

    #[test]
    fn test_nearest_root_wins() {
        // entering hit at z = 1 (t = 4), exit at z = -1 (t = 6)
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -1.0));
        let hit = unit_sphere().intersect(&ray).unwrap();
        assert!((hit.distance() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_unnormalized_ray_direction() {
        // distance is measured along the unit direction regardless of the
        // producer's scaling
        let ray = Ray::new(Vector3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, -12.5));
        let hit = unit_sphere().intersect(&ray).unwrap();
        assert!((hit.distance() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_tangent_ray() {
        // grazing the sphere at x = 0, y = 1
        let ray = Ray::new(Vector3::new(-5.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        if let Some(hit) = unit_sphere().intersect(&ray) {
            assert!((hit.distance() - 5.0).abs() < 1e-6);
            assert_eq!(*hit.normal(), Vector3::new(0.0, 1.0, 0.0));
        }
        // a floating-point tangent may also legitimately miss; what it must
        // never do is report a hit behind the origin
        let behind = Ray::new(Vector3::new(5.0, 1.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(unit_sphere().intersect(&behind).is_none());
    }
}
