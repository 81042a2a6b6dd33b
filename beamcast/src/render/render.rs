use std::f64::consts::PI;

use custom_error::custom_error;

use beamcast_core::models::image::Image;

use crate::scene::camera::CameraError;
use crate::scene::scene::Scene;

custom_error! {pub RenderError
    InvalidArgument {description: String} = "invalid render argument: {description}",
    MissingCamera = "scene has no camera configured",
    Camera {source: CameraError} = "camera error: {source}",
    WorkerPool {description: String} = "failed to initialize worker pool: {description}",
}

/// Renders a scene into a raster of the requested resolution.
///
/// A render is all-or-nothing: any failure inside a pixel computation
/// aborts the whole call with that error, no partially filled image is ever
/// returned.
pub trait Render {

    fn render(&self, scene: &Scene, width: usize, height: usize, view_angle: f64)
        -> Result<Image, RenderError>;
}

pub(crate) fn validate_arguments(width: usize, height: usize, view_angle: f64) -> Result<(), RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidArgument {
            description: format!("image resolution must be positive, got {}x{}", width, height),
        });
    }

    if view_angle <= 0.0 || view_angle >= PI {
        return Err(RenderError::InvalidArgument {
            description: format!("view angle must be in (0, pi) radians, got {}", view_angle),
        });
    }

    Ok(())
}
