use std::thread::available_parallelism;

use log::info;
use rayon::prelude::*;

use beamcast_core::models::image::Image;
use beamcast_core::models::pixel::Pixel;

use crate::render::render::{validate_arguments, Render, RenderError};
use crate::render::whitted::render_pixel;
use crate::scene::scene::Scene;

/// Parallel renderer: a worker pool of max(2, hardware parallelism) threads,
/// one independent unit of work per output pixel.
///
/// Workers only read the immutable scene and each one produces the color of
/// its own pixel, so the raster is bit-identical no matter how the pool
/// schedules the units: results are collected back in the row-major
/// submission order. The pool lives for a single render call.
pub struct MultithreadedRender {
}

impl MultithreadedRender {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl Render for MultithreadedRender {

    fn render(&self, scene: &Scene, width: usize, height: usize, view_angle: f64)
            -> Result<Image, RenderError> {
        validate_arguments(width, height, view_angle)?;

        let mut camera = scene.camera().ok_or(RenderError::MissingCamera)?.clone();
        camera.init_resolution(height, width, view_angle)?;

        let threads = available_parallelism().map(|v| v.get()).unwrap_or(1).max(2);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|err| RenderError::WorkerPool { description: err.to_string() })?;
        info!("initialized worker pool with {} threads to render {}", threads, scene.name());

        let factor = scene.antialiasing_factor();
        info!("starting to shoot {} rays over {}", width * height * factor * factor, scene.name());

        // one task per pixel; the indexed collect puts every result back at
        // its submission index, and the first failed pixel aborts the render
        let camera = &camera;
        let pixels = pool.install(|| {
            (0..width * height)
                .into_par_iter()
                .map(|position| render_pixel(scene, camera, position % width, position / width))
                .collect::<Result<Vec<Pixel>, RenderError>>()
        })?;

        info!("done shooting rays over {}", scene.name());

        let mut image = Image::new(width, height);
        for y in 0..height {
            for x in 0..width {
                image.set_pixel(x, y, pixels[y * width + x]);
            }
        }

        info!("ray tracing of {} has been completed", scene.name());
        Ok(image)
    }
}
