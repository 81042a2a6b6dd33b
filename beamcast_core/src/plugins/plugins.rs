use crate::models::io::ImageWriter;

pub trait ImageFormatSupportPlugin {

    fn format_name(&self) -> String;

    fn writer(&self) -> Box<dyn ImageWriter>;
}
