use crate::geometry::vector3::Vector3;

/// Minimal positive hit distance. Anything closer is treated as the ray
/// re-intersecting its own origin surface and rejected.
pub const EPSILON: f64 = 1e-5;

/// Where and how a ray met a surface. Built fresh per intersection test and
/// consumed immediately by the shading step.
pub struct Hit {

    distance: f64,
    normal: Vector3,
    is_within: bool,
}

impl Hit {

    pub fn new(distance: f64, normal: Vector3) -> Self {
        Self {
            distance,
            normal,
            is_within: false,
        }
    }

    /// Marks the hit as originating inside the surface. Downstream this
    /// selects which refractive index is incident.
    pub fn with_is_within(mut self, is_within: bool) -> Self {
        self.is_within = is_within;
        self
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    pub fn is_within(&self) -> bool {
        self.is_within
    }
}
