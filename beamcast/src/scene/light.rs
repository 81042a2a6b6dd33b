use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::scene::surface::Surface;

/// A light source. Shading only needs three answers from a light: a shadow
/// ray from a world point towards it, its intensity at that point, and
/// whether a given surface blocks that shadow ray.
pub trait Light {

    fn ray_to_light(&self, point: &Vector3) -> Ray;

    fn intensity(&self, point: &Vector3, ray_to_light: &Ray) -> Vector3;

    fn is_occluded_by(&self, surface: &dyn Surface, ray_to_light: &Ray) -> bool;
}
