use crate::geometry::vector3::Vector3;
use crate::render::intersection::Hit;

/// Phong-style surface material. `reflection_intensity` attenuates both the
/// reflected and the refracted recursive contributions: there is one scalar
/// for both, not a separate refraction coefficient.
#[derive(Clone, Debug)]
pub struct Material {

    ka: Vector3,
    kd: Vector3,
    ks: Vector3,
    shininess: i32,
    reflection_intensity: f64,
    transparent: bool,
    refraction_index_outside: f64,
    refraction_index_inside: f64,
}

impl Material {

    pub fn new() -> Self {
        Self {
            ka: Vector3::new(0.1, 0.1, 0.1),
            kd: Vector3::new(0.7, 0.7, 0.7),
            ks: Vector3::one(),
            shininess: 10,
            reflection_intensity: 0.3,
            transparent: false,
            refraction_index_outside: 1.0,
            refraction_index_inside: 1.5,
        }
    }

    pub fn with_ambient(mut self, ka: Vector3) -> Self {
        self.ka = ka;
        self
    }

    pub fn with_diffuse(mut self, kd: Vector3) -> Self {
        self.kd = kd;
        self
    }

    pub fn with_specular(mut self, ks: Vector3) -> Self {
        self.ks = ks;
        self
    }

    pub fn with_shininess(mut self, shininess: i32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_reflection_intensity(mut self, reflection_intensity: f64) -> Self {
        self.reflection_intensity = reflection_intensity;
        self
    }

    pub fn with_transparency(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn with_refraction_indices(mut self, outside: f64, inside: f64) -> Self {
        self.refraction_index_outside = outside;
        self.refraction_index_inside = inside;
        self
    }

    pub fn ka(&self) -> &Vector3 {
        &self.ka
    }

    pub fn kd(&self) -> &Vector3 {
        &self.kd
    }

    pub fn ks(&self) -> &Vector3 {
        &self.ks
    }

    pub fn shininess(&self) -> i32 {
        self.shininess
    }

    pub fn reflection_intensity(&self) -> f64 {
        self.reflection_intensity
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    /// Refractive index on the incident side of the hit.
    pub fn n1(&self, hit: &Hit) -> f64 {
        if hit.is_within() {
            self.refraction_index_inside
        } else {
            self.refraction_index_outside
        }
    }

    /// Refractive index on the transmitted side of the hit.
    pub fn n2(&self, hit: &Hit) -> f64 {
        if hit.is_within() {
            self.refraction_index_outside
        } else {
            self.refraction_index_inside
        }
    }
}

pub fn reflect(v: &Vector3, normal: &Vector3) -> Vector3 {
    *v - *normal * (2.0 * v.dot_product(normal))
}

/// Snell's-law refraction of `v` through a surface with outward `normal`.
/// `n1` is the refractive index on the incident side, `n2` on the
/// transmitted side. Falls back to reflection on total internal reflection.
pub fn refract(v: &Vector3, normal: &Vector3, n1: f64, n2: f64) -> Vector3 {
    let v = v.normalized();
    let mut normal = normal.normalized();
    let mut cos_incident = -v.dot_product(&normal);

    if cos_incident < 0.0 {
        // the ray hits the back side of the surface
        normal = -normal;
        cos_incident = -cos_incident;
    }

    let eta = n1 / n2;
    let sin_transmitted_squared = eta * eta * (1.0 - cos_incident * cos_incident);

    if sin_transmitted_squared > 1.0 {
        return reflect(&v, &normal);
    }

    let cos_transmitted = (1.0 - sin_transmitted_squared).sqrt();
    v * eta + normal * (eta * cos_incident - cos_transmitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect() {
        let incident = Vector3::new(1.0, -1.0, 0.0).normalized();
        let normal = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(reflect(&incident, &normal), Vector3::new(1.0, 1.0, 0.0).normalized());
    }

    #[test]
    fn test_refract_same_medium_is_straight() {
        let incident = Vector3::new(1.0, -1.0, 0.0).normalized();
        let normal = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(refract(&incident, &normal, 1.0, 1.0), incident);
    }

    #[test]
    fn test_refract_bends_towards_normal_in_denser_medium() {
        let incident = Vector3::new(1.0, -1.0, 0.0).normalized();
        let normal = Vector3::new(0.0, 1.0, 0.0);
        let refracted = refract(&incident, &normal, 1.0, 1.5);

        let sin_incident = incident.cross_product(&normal).length();
        let sin_transmitted = refracted.normalized().cross_product(&normal).length();
        assert!((sin_incident - 1.5 * sin_transmitted).abs() < 1e-9);
        assert!(refracted.y < 0.0);
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        // grazing exit from glass to air, well past the critical angle
        let incident = Vector3::new(1.0, -0.2, 0.0).normalized();
        let normal = Vector3::new(0.0, 1.0, 0.0);
        let result = refract(&incident, &normal, 1.5, 1.0);
        assert_eq!(result, reflect(&incident, &normal));
    }

    #[test]
    fn test_index_selection_by_hit_orientation() {
        let material = Material::new().with_refraction_indices(1.0, 1.5);
        let outside_hit = Hit::new(1.0, Vector3::new(0.0, 0.0, 1.0));
        let inside_hit = Hit::new(1.0, Vector3::new(0.0, 0.0, 1.0)).with_is_within(true);

        assert_eq!(material.n1(&outside_hit), 1.0);
        assert_eq!(material.n2(&outside_hit), 1.5);
        assert_eq!(material.n1(&inside_hit), 1.5);
        assert_eq!(material.n2(&inside_hit), 1.0);
    }
}
