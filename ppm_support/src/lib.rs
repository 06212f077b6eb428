use sitf_core::models::io::{ImageReader, ImageWriter};
use sitf_core::plugins::ImageFormatSupportPlugin;

use reader::PpmReader;
use writer::PpmWriter;

pub mod reader;
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

    fn reader(&self) -> Box<dyn ImageReader> {
        Box::new(PpmReader::new())
    }

    fn writer(&self) -> Box<dyn ImageWriter> {
        Box::new(PpmWriter::new())
    }
}
