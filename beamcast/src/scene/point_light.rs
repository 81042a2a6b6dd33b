use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::scene::light::Light;
use crate::scene::surface::Surface;

/// Light radiating from a position, attenuated with distance by the usual
/// constant/linear/quadratic decay polynomial.
pub struct PointLight {

    position: Vector3,
    intensity: Vector3,
    kc: f64,
    kl: f64,
    kq: f64,
}

impl PointLight {

    pub fn new(position: Vector3, intensity: Vector3) -> Self {
        PointLight {
            position,
            intensity,
            kc: 1.0,
            kl: 0.0,
            kq: 0.0,
        }
    }

    pub fn with_decay_factors(mut self, kc: f64, kl: f64, kq: f64) -> Self {
        self.kc = kc;
        self.kl = kl;
        self.kq = kq;
        self
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    fn decay(&self, distance: f64) -> f64 {
        self.kc + self.kl * distance + self.kq * distance * distance
    }
}

impl Light for PointLight {

    fn ray_to_light(&self, point: &Vector3) -> Ray {
        Ray::towards(*point, self.position)
    }

    fn intensity(&self, point: &Vector3, _ray_to_light: &Ray) -> Vector3 {
        self.intensity * (1.0 / self.decay(point.distance_to(&self.position)))
    }

    // only hits strictly between the point and the light position block it
    fn is_occluded_by(&self, surface: &dyn Surface, ray_to_light: &Ray) -> bool {
        let distance_to_light = ray_to_light.origin().distance_to(&self.position);

        match surface.intersect(ray_to_light) {
            Some(hit) => hit.distance() < distance_to_light,
            None => false,
        }
    }
}
