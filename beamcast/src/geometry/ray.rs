use super::vector3::Vector3;

pub struct Ray {
    origin: Vector3,
    direction: Vector3,
}

impl Ray {

    /// The direction is normalized on construction, so `point(t)` measures
    /// world distance along the ray for every producer.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Ray {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Ray from `origin` through `target`.
    pub fn towards(origin: Vector3, target: Vector3) -> Self {
        Self::new(origin, target - origin)
    }

    pub fn origin(&self) -> &Vector3 {
        &self.origin
    }

    pub fn direction(&self) -> &Vector3 {
        &self.direction
    }

    pub fn point(&self, distance: f64) -> Vector3 {
        self.origin + self.direction * distance
    }
}
