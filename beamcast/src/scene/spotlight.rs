use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::scene::light::Light;
use crate::scene::point_light::PointLight;
use crate::scene::surface::Surface;

/// A point light restricted to a cone: outside the cutoff angle around the
/// spot direction the contribution is exactly zero, inside it the point
/// light intensity is scaled by the cosine of the angle to the axis.
pub struct Spotlight {

    point_light: PointLight,
    direction: Vector3,
    cutoff_cosine: f64,
}

impl Spotlight {

    pub fn new(position: Vector3, direction: Vector3, intensity: Vector3, cutoff_angle: f64) -> Self {
        Spotlight {
            point_light: PointLight::new(position, intensity),
            direction: direction.normalized(),
            cutoff_cosine: cutoff_angle.cos(),
        }
    }

    pub fn with_decay_factors(mut self, kc: f64, kl: f64, kq: f64) -> Self {
        self.point_light = self.point_light.with_decay_factors(kc, kl, kq);
        self
    }
}

impl Light for Spotlight {

    fn ray_to_light(&self, point: &Vector3) -> Ray {
        self.point_light.ray_to_light(point)
    }

    fn intensity(&self, point: &Vector3, ray_to_light: &Ray) -> Vector3 {
        let to_point = (*point - *self.point_light.position()).normalized();
        let axis_cosine = self.direction.dot_product(&to_point);

        if axis_cosine < self.cutoff_cosine {
            return Vector3::zero();
        }

        self.point_light.intensity(point, ray_to_light) * axis_cosine
    }

    fn is_occluded_by(&self, surface: &dyn Surface, ray_to_light: &Ray) -> bool {
        self.point_light.is_occluded_by(surface, ray_to_light)
    }
}
