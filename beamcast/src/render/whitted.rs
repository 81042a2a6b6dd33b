use beamcast_core::models::pixel::Pixel;

use crate::geometry::ray::Ray;
use crate::geometry::vector3::Vector3;
use crate::materials::material::{reflect, refract};
use crate::render::intersection::Hit;
use crate::render::render::RenderError;
use crate::scene::camera::PinholeCamera;
use crate::scene::light::Light;
use crate::scene::scene::Scene;
use crate::scene::surface::Surface;

/// Recursive Whitted shading of a single ray.
///
/// At the recursion bound the contribution is zero, not the background
/// color: the bound is an energy cutoff for secondary rays, while the
/// background only means "this ray escaped the scene".
pub fn trace(ray: &Ray, scene: &Scene, depth: usize) -> Vector3 {
    if depth == scene.max_recursion_level() {
        return Vector3::zero();
    }

    let (surface, hit) = match find_intersection(ray, scene) {
        Some(v) => v,
        None => return *scene.background_color(),
    };

    let hit_point = ray.point(hit.distance());
    let mut color = calc_ambient(surface, scene);

    for light in scene.lights() {
        let ray_to_light = light.ray_to_light(&hit_point);

        if is_occluded(light.as_ref(), &ray_to_light, scene) {
            continue;
        }

        color = color + calc_diffusion(surface, &hit, &hit_point, light.as_ref());
        color = color + calc_specular(ray, surface, &hit, &hit_point, light.as_ref());
    }

    if scene.render_reflections() {
        let reflection = reflect(ray.direction(), hit.normal()).normalized();
        let reflected_ray = Ray::new(hit_point, reflection);
        color = color + trace(&reflected_ray, scene, depth + 1) * surface.material().reflection_intensity();
    }

    if scene.render_refractions() && surface.material().is_transparent() {
        let material = surface.material();
        let refraction = refract(ray.direction(), hit.normal(), material.n1(&hit), material.n2(&hit)).normalized();
        let refracted_ray = Ray::new(hit_point, refraction);
        // the same scalar attenuates both bounce kinds, there is no separate
        // refraction coefficient
        color = color + trace(&refracted_ray, scene, depth + 1) * material.reflection_intensity();
    }

    color
}

/// Nearest intersection over all surfaces, linear scan. A strictly smaller
/// distance wins, so on an exact tie the earlier surface in the list is
/// kept.
pub fn find_intersection<'a>(ray: &Ray, scene: &'a Scene) -> Option<(&'a (dyn Surface + Sync + Send), Hit)> {
    let mut min_distance = f64::MAX;
    let mut min_hit = None;

    for surface in scene.surfaces() {
        if let Some(hit) = surface.intersect(ray) {
            if hit.distance() < min_distance {
                min_distance = hit.distance();
                min_hit = Some((surface.as_ref(), hit));
            }
        }
    }

    min_hit
}

/// A light is occluded when any opaque surface blocks the shadow ray.
/// Transparent surfaces never occlude.
pub fn is_occluded(light: &dyn Light, ray_to_light: &Ray, scene: &Scene) -> bool {
    scene.surfaces().iter().any(|surface| {
        !surface.material().is_transparent() && light.is_occluded_by(surface.as_ref(), ray_to_light)
    })
}

fn calc_ambient(surface: &dyn Surface, scene: &Scene) -> Vector3 {
    *surface.material().ka() * *scene.ambient()
}

fn calc_diffusion(surface: &dyn Surface, hit: &Hit, hit_point: &Vector3, light: &dyn Light) -> Vector3 {
    let ray_to_light = light.ray_to_light(hit_point);
    let light_intensity = light.intensity(hit_point, &ray_to_light);

    let cos_theta = ray_to_light.direction().normalized().dot_product(hit.normal());
    if cos_theta <= 0.0 {
        return Vector3::zero();
    }

    *surface.material().kd() * cos_theta * light_intensity
}

fn calc_specular(ray: &Ray, surface: &dyn Surface, hit: &Hit, hit_point: &Vector3, light: &dyn Light) -> Vector3 {
    let ray_to_light = light.ray_to_light(hit_point);
    let light_intensity = light.intensity(hit_point, &ray_to_light);

    // reflect the vector pointing away from the light about the normal and
    // compare it with the direction back towards the viewer
    let light_reflection = reflect(&(-ray_to_light.direction().normalized()), hit.normal());
    let to_viewer = -ray.direction().normalized();

    let base = to_viewer.dot_product(&light_reflection);
    if base <= 0.0 {
        return Vector3::zero();
    }

    *surface.material().ks() * base.powi(surface.material().shininess()) * light_intensity
}

/// Full color computation for one output pixel: one primary ray through the
/// pixel center, or with an antialiasing factor k > 1 the box-filter mean of
/// a k x k sub-grid of samples. Sub-samples are computed sequentially inside
/// the single pixel unit of work.
pub fn render_pixel(scene: &Scene, camera: &PinholeCamera, x: usize, y: usize) -> Result<Pixel, RenderError> {
    let factor = scene.antialiasing_factor();

    if factor == 1 {
        let target = camera.transform(x as f64, y as f64)?;
        let ray = Ray::towards(*camera.position(), target);
        let color = trace(&ray, scene, 0);
        return Ok(Pixel::from_normalized(color.x, color.y, color.z));
    }

    let step = 1.0 / factor as f64;
    let mut total = Vector3::zero();

    for i in 0..factor {
        for j in 0..factor {
            let target = camera.transform(x as f64 + i as f64 * step, y as f64 + j as f64 * step)?;
            let ray = Ray::towards(*camera.position(), target);
            total = total + trace(&ray, scene, 0);
        }
    }

    let color = total * (1.0 / (factor * factor) as f64);
    Ok(Pixel::from_normalized(color.x, color.y, color.z))
}
