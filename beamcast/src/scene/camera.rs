use std::f64::consts::PI;

use custom_error::custom_error;

use crate::geometry::vector3::Vector3;

custom_error! {pub CameraError
    NotConfigured = "camera resolution is not configured, call init_resolution before transforming pixels",
    InvalidResolution {description: String} = "invalid camera resolution: {description}",
}

/// Pinhole camera: an eye position plus an orthonormal right-handed basis,
/// projecting pixels onto a virtual image plane at `distance_to_plane`.
///
/// `init_resolution` must be called before `transform`; transforming with an
/// unconfigured camera is an explicit error, never silent zero-pixel math.
#[derive(Clone)]
pub struct PinholeCamera {

    position: Vector3,
    towards: Vector3,
    up: Vector3,
    right: Vector3,
    distance_to_plane: f64,
    plane_center: Vector3,
    plane: Option<ImagePlane>,
}

#[derive(Clone)]
struct ImagePlane {

    pixel_size: f64,
    mid_x: f64,
    mid_y: f64,
}

impl PinholeCamera {

    /// The caller's `up` does not have to be orthogonal to `towards`: the
    /// basis is rebuilt with two cross products, so the stored frame is
    /// always orthonormal and right-handed.
    pub fn new(position: Vector3, towards: Vector3, up: Vector3, distance_to_plane: f64) -> Self {
        let towards = towards.normalized();
        let right = towards.cross_product(&up).normalized();
        let up = right.cross_product(&towards).normalized();
        let plane_center = position + towards * distance_to_plane;

        Self {
            position,
            towards,
            up,
            right,
            distance_to_plane,
            plane_center,
            plane: None,
        }
    }

    /// Derives the image-plane geometry for a target resolution.
    ///
    /// The plane width follows from the horizontal view angle; the plane
    /// height follows from the pixel count at the same pixel size. Vertical
    /// field of view is therefore governed by the aspect ratio implied by
    /// the resolution, by definition rather than approximation.
    pub fn init_resolution(&mut self, height: usize, width: usize, view_angle: f64) -> Result<(), CameraError> {
        if width == 0 || height == 0 {
            return Err(CameraError::InvalidResolution {
                description: format!("resolution must be positive, got {}x{}", width, height),
            });
        }
        if view_angle <= 0.0 || view_angle >= PI {
            return Err(CameraError::InvalidResolution {
                description: format!("view angle must be in (0, pi), got {}", view_angle),
            });
        }

        let plane_width = 2.0 * self.distance_to_plane * (view_angle / 2.0).tan();
        let pixel_size = plane_width / width as f64;

        self.plane = Some(ImagePlane {
            pixel_size,
            mid_x: (width / 2) as f64,
            mid_y: (height / 2) as f64,
        });

        Ok(())
    }

    /// Maps pixel coordinates to the corresponding point on the image plane
    /// in world coordinates. Fractional coordinates address sub-pixel sample
    /// positions for supersampling.
    ///
    /// Pure and side-effect free, safe to call from any number of threads.
    pub fn transform(&self, x: f64, y: f64) -> Result<Vector3, CameraError> {
        let plane = self.plane.as_ref().ok_or(CameraError::NotConfigured)?;

        let v_right = self.right * ((x - plane.mid_x) * plane.pixel_size);
        let v_up = self.up * ((y - plane.mid_y) * plane.pixel_size);

        Ok(self.plane_center + v_right - v_up)
    }

    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    pub fn towards(&self) -> &Vector3 {
        &self.towards
    }

    pub fn up(&self) -> &Vector3 {
        &self.up
    }

    pub fn right(&self) -> &Vector3 {
        &self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera() -> PinholeCamera {
        PinholeCamera::new(
            Vector3::zero(),
            Vector3::new(0.0, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
            1.0,
        )
    }

    #[test]
    fn test_basis_is_orthonormal_for_skewed_up() {
        let camera = PinholeCamera::new(
            Vector3::zero(),
            Vector3::new(0.0, 0.0, -2.0),
            Vector3::new(0.3, 1.0, -0.5), // deliberately not orthogonal to towards
            1.0,
        );

        assert!((camera.towards().length() - 1.0).abs() < 1e-9);
        assert!((camera.right().length() - 1.0).abs() < 1e-9);
        assert!((camera.up().length() - 1.0).abs() < 1e-9);
        assert!(camera.towards().dot_product(camera.right()).abs() < 1e-9);
        assert!(camera.towards().dot_product(camera.up()).abs() < 1e-9);
        assert!(camera.right().dot_product(camera.up()).abs() < 1e-9);
        // rebuilt frame stays right-handed: right x up runs against towards
        assert_eq!(camera.right().cross_product(camera.up()), *camera.towards() * -1.0);
    }

    #[test]
    fn test_center_pixel_maps_to_plane_center() {
        let mut camera = test_camera();
        camera.init_resolution(200, 200, PI / 2.0).unwrap();

        let center = camera.transform(100.0, 100.0).unwrap();
        assert_eq!(center, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_pixel_size_follows_view_angle() {
        let mut camera = test_camera();
        camera.init_resolution(100, 200, PI / 2.0).unwrap();

        // plane width = 2 * 1 * tan(pi/4) = 2, so a pixel is 2/200 wide
        let right_neighbour = camera.transform(101.0, 50.0).unwrap();
        assert_eq!(right_neighbour, Vector3::new(0.01, 0.0, -1.0));

        // y grows downward in pixel space, so +1 in y moves down in world space
        let below = camera.transform(100.0, 51.0).unwrap();
        assert_eq!(below, Vector3::new(0.0, -0.01, -1.0));
    }

    #[test]
    fn test_transform_before_init_resolution_fails() {
        let camera = test_camera();
        assert!(camera.transform(0.0, 0.0).is_err());
    }

    #[test]
    fn test_init_resolution_rejects_bad_arguments() {
        let mut camera = test_camera();
        assert!(camera.init_resolution(0, 200, PI / 2.0).is_err());
        assert!(camera.init_resolution(200, 0, PI / 2.0).is_err());
        assert!(camera.init_resolution(200, 200, 0.0).is_err());
        assert!(camera.init_resolution(200, 200, PI).is_err());
    }
}
