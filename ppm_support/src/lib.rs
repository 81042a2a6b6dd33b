use beamcast_core::models::io::ImageWriter;
use beamcast_core::plugins::plugins::ImageFormatSupportPlugin;

use writer::PpmWriter;

pub mod writer;

pub struct PpmFormatSupportPlugin {
}

impl PpmFormatSupportPlugin {

    pub fn new() -> Self {
        PpmFormatSupportPlugin {}
    }
}

impl ImageFormatSupportPlugin for PpmFormatSupportPlugin {

    fn format_name(&self) -> String {
        "PPM".to_string()
    }

    fn writer(&self) -> Box<dyn ImageWriter> {
        Box::new(PpmWriter {})
    }
}
