use std::fmt;

use crate::geometry::vector3::Vector3;
use crate::scene::camera::PinholeCamera;
use crate::scene::light::Light;
use crate::scene::surface::Surface;

/// Scene description: camera, colors, rendering parameters, surfaces and
/// lights. Assembled once with the fluent `with_*`/`add_*` methods; every
/// renderer takes `&Scene`, so nothing can mutate mid-render and worker
/// threads share it freely without locking.
pub struct Scene {

    name: String,
    camera: Option<PinholeCamera>,
    ambient: Vector3,
    background_color: Vector3,
    max_recursion_level: usize,
    antialiasing_factor: usize, // 1, 2 or 3
    render_reflections: bool,
    render_refractions: bool,
    surfaces: Vec<Box<dyn Surface + Sync + Send>>,
    lights: Vec<Box<dyn Light + Sync + Send>>,
}

impl Scene {

    pub fn new() -> Self {
        Self {
            name: "scene".to_string(),
            camera: None,
            ambient: Vector3::one(),                      // white
            background_color: Vector3::new(0.0, 0.5, 1.0), // blue sky
            max_recursion_level: 1,
            antialiasing_factor: 1,
            render_reflections: false,
            render_refractions: false,
            surfaces: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn with_camera(mut self, camera: PinholeCamera) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn with_ambient(mut self, ambient: Vector3) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_background_color(mut self, background_color: Vector3) -> Self {
        self.background_color = background_color;
        self
    }

    pub fn with_max_recursion_level(mut self, max_recursion_level: usize) -> Self {
        self.max_recursion_level = max_recursion_level;
        self
    }

    /// Linear supersampling density, clamped to the supported 1..=3 range.
    pub fn with_antialiasing_factor(mut self, antialiasing_factor: usize) -> Self {
        self.antialiasing_factor = antialiasing_factor.max(1).min(3);
        self
    }

    pub fn with_reflections(mut self, render_reflections: bool) -> Self {
        self.render_reflections = render_reflections;
        self
    }

    pub fn with_refractions(mut self, render_refractions: bool) -> Self {
        self.render_refractions = render_refractions;
        self
    }

    pub fn add_surface(mut self, surface: Box<dyn Surface + Sync + Send>) -> Self {
        self.surfaces.push(surface);
        self
    }

    pub fn add_light(mut self, light: Box<dyn Light + Sync + Send>) -> Self {
        self.lights.push(light);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn camera(&self) -> Option<&PinholeCamera> {
        self.camera.as_ref()
    }

    pub fn ambient(&self) -> &Vector3 {
        &self.ambient
    }

    pub fn background_color(&self) -> &Vector3 {
        &self.background_color
    }

    pub fn max_recursion_level(&self) -> usize {
        self.max_recursion_level
    }

    pub fn antialiasing_factor(&self) -> usize {
        self.antialiasing_factor
    }

    pub fn render_reflections(&self) -> bool {
        self.render_reflections
    }

    pub fn render_refractions(&self) -> bool {
        self.render_refractions
    }

    pub fn surfaces(&self) -> &Vec<Box<dyn Surface + Sync + Send>> {
        &self.surfaces
    }

    pub fn lights(&self) -> &Vec<Box<dyn Light + Sync + Send>> {
        &self.lights
    }
}

impl fmt::Display for Scene {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: ambient {:?}, background {:?}, max recursion {}, antialiasing {}, reflections {}, refractions {}, {} surfaces, {} lights",
            self.name,
            self.ambient,
            self.background_color,
            self.max_recursion_level,
            self.antialiasing_factor,
            self.render_reflections,
            self.render_refractions,
            self.surfaces.len(),
            self.lights.len(),
        )
    }
}
