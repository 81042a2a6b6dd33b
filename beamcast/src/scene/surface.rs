use crate::geometry::ray::Ray;
use crate::materials::material::Material;
use crate::render::intersection::Hit;

/// Anything a ray can hit.
///
/// `intersect` must return the nearest intersection strictly further than
/// `EPSILON` ahead of the ray origin, or `None`. A ray that starts inside
/// the surface reports its exit through `Hit::is_within` instead of being
/// silently treated as an exterior hit. Normals always point outward.
pub trait Surface {

    fn material(&self) -> &Material;

    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}
