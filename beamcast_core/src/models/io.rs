use std::collections::HashMap;

use custom_error::custom_error;

use super::image::Image;

custom_error! {pub ImageIOError
    FailedToWrite {description: String} = "Failed to write image: {description}",
    InvalidOptions {description: String} = "Invalid options are set for this io operation: {description}",
}

pub trait ImageWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError>;
}

pub struct ImageWriterOptions {

    options: HashMap<String, String>,
}

impl ImageWriterOptions {

    pub fn default() -> Self {
        Self {
            options: HashMap::new(),
        }
    }

    pub fn with_option(&self, key: &str, value: &str) -> Self {
        let mut options = self.options.clone();
        options.insert(key.to_string(), value.to_string());

        Self {
            options,
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.options.get(key).map(|v| v.clone())
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, ImageIOError> {
        if !&self.options.contains_key(key) {
            return Ok(default);
        }

        match self.options.get(key).map(|v| v.clone()).unwrap().to_lowercase().trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ImageIOError::InvalidOptions {
                description: format!("failed to parse option value as a bool: {}", other),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_roundtrip() {
        let options = ImageWriterOptions::default().with_option("comment", "demo render");
        assert_eq!(options.get("comment"), Some("demo render".to_string()));
        assert_eq!(options.get("missing"), None);
    }

    #[test]
    fn test_options_get_bool() {
        let options = ImageWriterOptions::default().with_option("flip", "TRUE");
        assert_eq!(options.get_bool("flip", false).unwrap(), true);
        assert_eq!(options.get_bool("missing", true).unwrap(), true);
        assert!(ImageWriterOptions::default().with_option("flip", "yes").get_bool("flip", false).is_err());
    }
}
