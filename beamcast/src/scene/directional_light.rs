use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::scene::light::Light;
use crate::scene::surface::Surface;

/// Light infinitely far away, shining in a fixed direction with constant
/// intensity everywhere.
pub struct DirectionalLight {

    direction: Vector3,
    intensity: Vector3,
}

impl DirectionalLight {

    pub fn new(direction: Vector3, intensity: Vector3) -> Self {
        DirectionalLight {
            direction: direction.normalized(),
            intensity,
        }
    }
}

impl Light for DirectionalLight {

    fn ray_to_light(&self, point: &Vector3) -> Ray {
        Ray::new(*point, -self.direction)
    }

    fn intensity(&self, _point: &Vector3, _ray_to_light: &Ray) -> Vector3 {
        self.intensity
    }

    fn is_occluded_by(&self, surface: &dyn Surface, ray_to_light: &Ray) -> bool {
        surface.intersect(ray_to_light).is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::materials::material::Material;
    use crate::objects::sphere::Sphere;

    use super::*;

    #[test]
    fn test_ray_to_light_points_against_direction() {
        let light = DirectionalLight::new(Vector3::new(0.0, -2.0, 0.0), Vector3::one());
        let ray = light.ray_to_light(&Vector3::new(1.0, 0.0, 1.0));
        assert_eq!(*ray.direction(), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_occlusion() {
        let light = DirectionalLight::new(Vector3::new(0.0, -1.0, 0.0), Vector3::one());
        let blocker = Sphere::new(Vector3::new(0.0, 3.0, 0.0), 1.0, Material::new());

        let shadow_ray = light.ray_to_light(&Vector3::zero());
        assert!(light.is_occluded_by(&blocker, &shadow_ray));

        let clear_ray = light.ray_to_light(&Vector3::new(5.0, 0.0, 0.0));
        assert!(!light.is_occluded_by(&blocker, &clear_ray));
    }
}
