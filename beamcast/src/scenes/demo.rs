use std::f64::consts::PI;

use crate::geometry::vector3::Vector3;
use crate::materials::material::Material;
use crate::objects::plane::Plane;
use crate::objects::sphere::Sphere;
use crate::scene::camera::PinholeCamera;
use crate::scene::directional_light::DirectionalLight;
use crate::scene::point_light::PointLight;
use crate::scene::scene::Scene;
use crate::scene::spotlight::Spotlight;
use crate::scenes::provider::SceneProvider;

pub struct DemoSceneProvider {
}

impl DemoSceneProvider {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl SceneProvider for DemoSceneProvider {

    fn scene(&self) -> Scene {
        let matte_red = Material::new()
            .with_ambient(Vector3::new(0.15, 0.02, 0.02))
            .with_diffuse(Vector3::new(0.8, 0.15, 0.1))
            .with_specular(Vector3::new(0.4, 0.4, 0.4))
            .with_shininess(8)
            .with_reflection_intensity(0.05);

        let mirror = Material::new()
            .with_ambient(Vector3::new(0.02, 0.02, 0.02))
            .with_diffuse(Vector3::new(0.05, 0.05, 0.05))
            .with_specular(Vector3::one())
            .with_shininess(60)
            .with_reflection_intensity(0.85);

        let glass = Material::new()
            .with_ambient(Vector3::new(0.01, 0.01, 0.02))
            .with_diffuse(Vector3::new(0.05, 0.05, 0.1))
            .with_specular(Vector3::one())
            .with_shininess(90)
            .with_reflection_intensity(0.9)
            .with_transparency(true)
            .with_refraction_indices(1.0, 1.5);

        let floor = Material::new()
            .with_ambient(Vector3::new(0.05, 0.05, 0.05))
            .with_diffuse(Vector3::new(0.5, 0.5, 0.45))
            .with_specular(Vector3::new(0.1, 0.1, 0.1))
            .with_shininess(4)
            .with_reflection_intensity(0.15);

        Scene::new()
            .with_name("demo")
            .with_camera(PinholeCamera::new(
                Vector3::new(0.0, 1.4, 6.5),
                Vector3::new(0.0, -0.15, -1.0),
                Vector3::new(0.0, 1.0, 0.0),
                1.5,
            ))
            .with_ambient(Vector3::new(0.9, 0.9, 1.0))
            .with_background_color(Vector3::new(0.0, 0.5, 1.0))
            .with_max_recursion_level(4)
            .with_antialiasing_factor(2)
            .with_reflections(true)
            .with_refractions(true)
            .add_surface(Box::new(Sphere::new(Vector3::new(-1.6, 0.7, -0.5), 0.7, matte_red)))
            .add_surface(Box::new(Sphere::new(Vector3::new(0.0, 0.9, -1.5), 0.9, mirror)))
            .add_surface(Box::new(Sphere::new(Vector3::new(1.5, 0.6, 0.3), 0.6, glass)))
            .add_surface(Box::new(Plane::new(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0), floor)))
            .add_light(Box::new(PointLight::new(
                Vector3::new(3.0, 5.0, 4.0),
                Vector3::new(0.9, 0.9, 0.85),
            ).with_decay_factors(1.0, 0.04, 0.002)))
            .add_light(Box::new(DirectionalLight::new(
                Vector3::new(-0.5, -1.0, -0.7),
                Vector3::new(0.25, 0.25, 0.3),
            )))
            .add_light(Box::new(Spotlight::new(
                Vector3::new(-3.0, 6.0, 2.0),
                Vector3::new(0.5, -1.0, -0.4),
                Vector3::new(0.6, 0.6, 0.5),
                PI / 6.0,
            ).with_decay_factors(1.0, 0.02, 0.001)))
    }
}
