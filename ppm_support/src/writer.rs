use beamcast_core::models::image::Image;
use beamcast_core::models::io::{ImageIOError, ImageWriter, ImageWriterOptions};

/// Writes plain-text PPM (P3) by default; the boolean `binary` option
/// switches to the raw variant (P6) with one byte per channel.
pub struct PpmWriter {
}

impl ImageWriter for PpmWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        if image.width == 0 || image.height == 0 {
            return Err(ImageIOError::FailedToWrite {
                description: format!("image has zero dimension: {}x{}", image.width, image.height),
            });
        }

        let binary = options.get_bool("binary", false)?;

        let mut header = String::new();
        header.push_str(if binary { "P6\n" } else { "P3\n" });

        if let Some(comment) = options.get("comment") {
            header.push_str(&format!("# {}\n", comment));
        }

        header.push_str(&format!("{} {}\n255\n", image.width, image.height));

        if binary {
            let mut output = header.into_bytes();
            for y in 0..image.height {
                for x in 0..image.width {
                    let pixel = image.get_pixel(x, y);
                    output.push(pixel.red);
                    output.push(pixel.green);
                    output.push(pixel.blue);
                }
            }
            return Ok(output);
        }

        let mut output = header;
        for y in 0..image.height {
            let mut row = String::new();
            for x in 0..image.width {
                let pixel = image.get_pixel(x, y);
                if x > 0 {
                    row.push(' ');
                }
                row.push_str(&format!("{} {} {}", pixel.red, pixel.green, pixel.blue));
            }
            row.push('\n');
            output.push_str(&row);
        }

        Ok(output.into_bytes())
    }
}
