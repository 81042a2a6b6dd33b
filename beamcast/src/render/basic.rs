use log::info;

use beamcast_core::models::image::Image;

use crate::render::render::{validate_arguments, Render, RenderError};
use crate::render::whitted::render_pixel;
use crate::scene::scene::Scene;

/// Single-threaded reference renderer. Walks the raster in row-major order
/// and shades one pixel at a time; the multithreaded renderer must produce
/// exactly the same image.
pub struct BasicRender {
}

impl BasicRender {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl Render for BasicRender {

    fn render(&self, scene: &Scene, width: usize, height: usize, view_angle: f64)
            -> Result<Image, RenderError> {
        validate_arguments(width, height, view_angle)?;

        let mut camera = scene.camera().ok_or(RenderError::MissingCamera)?.clone();
        camera.init_resolution(height, width, view_angle)?;

        let factor = scene.antialiasing_factor();
        info!("rendering {} ({}x{}, {} rays) on a single thread", scene.name(), width, height,
            width * height * factor * factor);

        let mut image = Image::new(width, height);
        for y in 0..height {
            for x in 0..width {
                image.set_pixel(x, y, render_pixel(scene, &camera, x, y)?);
            }
        }

        info!("ray tracing of {} has been completed", scene.name());
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use beamcast_core::models::pixel::Pixel;

    use crate::geometry::vector3::Vector3;
    use crate::materials::material::Material;
    use crate::objects::sphere::Sphere;
    use crate::scene::camera::PinholeCamera;

    use super::*;

    fn small_scene() -> Scene {
        Scene::new()
            .with_camera(PinholeCamera::new(
                Vector3::new(0.0, 0.0, 5.0),
                Vector3::new(0.0, 0.0, -1.0),
                Vector3::new(0.0, 1.0, 0.0),
                1.0,
            ))
            .with_background_color(Vector3::new(0.0, 0.5, 1.0))
            .add_surface(Box::new(Sphere::new(
                Vector3::zero(),
                1.0,
                Material::new().with_ambient(Vector3::one()).with_diffuse(Vector3::zero()),
            )))
    }

    #[test]
    fn test_center_pixel_sees_the_sphere_corners_see_background() {
        let image = BasicRender::new().render(&small_scene(), 21, 21, PI / 2.0)
            .expect("render failed");

        // ambient-lit sphere in front of the camera center
        assert_eq!(image.get_pixel(10, 10), Pixel::from_normalized(1.0, 1.0, 1.0));
        // corners escape to the background
        assert_eq!(image.get_pixel(0, 0), Pixel::from_normalized(0.0, 0.5, 1.0));
        assert_eq!(image.get_pixel(20, 20), Pixel::from_normalized(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_rejects_invalid_arguments() {
        let scene = small_scene();
        assert!(BasicRender::new().render(&scene, 0, 10, PI / 2.0).is_err());
        assert!(BasicRender::new().render(&scene, 10, 10, PI).is_err());
    }

    #[test]
    fn test_scene_without_camera_fails() {
        let scene = Scene::new();
        assert!(BasicRender::new().render(&scene, 10, 10, PI / 2.0).is_err());
    }
}
