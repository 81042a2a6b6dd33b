#[macro_use]
extern crate log;
extern crate custom_error;

pub mod geometry;
pub mod materials;
pub mod objects;
pub mod render;
pub mod scene;
pub mod scenes;

use std::error::Error;
use std::f64::consts::PI;
use std::fs;
use std::process::exit;

use env_logger::Env;

use beamcast_core::models::io::ImageWriterOptions;
use beamcast_core::plugins::plugins::ImageFormatSupportPlugin;
use beamcast_core::utils::print_intro;
use ppm_support::PpmFormatSupportPlugin;

use render::multithreaded::MultithreadedRender;
use render::render::Render;
use scenes::demo::DemoSceneProvider;
use scenes::provider::SceneProvider;

const DEFAULT_LOGGING_LEVEL: &str = "info";

const OUTPUT_WIDTH: usize = 800;
const OUTPUT_HEIGHT: usize = 600;
const VIEW_ANGLE: f64 = PI / 2.0;
const OUTPUT_FILE: &str = "result.ppm";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    if let Err(err) = render_scene() {
        error!("render failed: {}", err);
        exit(1);
    }

    info!("done");
}

fn render_scene() -> Result<(), Box<dyn Error>> {
    let scene = DemoSceneProvider::new().scene();
    info!("rendering scene: {}", scene);

    let render = MultithreadedRender::new();
    let output = render.render(&scene, OUTPUT_WIDTH, OUTPUT_HEIGHT, VIEW_ANGLE)?;

    info!("saving rendered image");
    let plugin = PpmFormatSupportPlugin::new();
    let options = ImageWriterOptions::default().with_option("comment", scene.name());
    let image_bytes = plugin.writer().write(&output, &options)?;
    fs::write(OUTPUT_FILE, &image_bytes)?;
    info!("saved {} render to {}", plugin.format_name(), OUTPUT_FILE);

    Ok(())
}
