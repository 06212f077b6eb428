use std::collections::HashMap;

use custom_error::custom_error;

use super::image::Image;

custom_error! {pub ImageIOError
    FailedToRead {description: String} = "Failed to read image: {description}",
    FailedToWrite {description: String} = "Failed to write image: {description}",
}

pub trait ImageReader {

    fn read(&self, data: &Vec<u8>) -> Result<Image, ImageIOError>;
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

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.options.get(key).map(|v| v.clone())
    }
}
