use sitf_core::models::io::{ImageReader, ImageWriter};
use sitf_core::plugins::ImageFormatSupportPlugin;

use reader::SitfReader;
use writer::SitfWriter;

pub mod reader;
pub mod writer;

pub struct SitfFormatSupportPlugin {
}

impl SitfFormatSupportPlugin {

    pub fn new() -> Self {
        SitfFormatSupportPlugin {}
    }
}

impl ImageFormatSupportPlugin for SitfFormatSupportPlugin {

    fn format_name(&self) -> String {
        "SITF".to_string()
    }

    fn reader(&self) -> Box<dyn ImageReader> {
        Box::new(SitfReader::new())
    }

    fn writer(&self) -> Box<dyn ImageWriter> {
        Box::new(SitfWriter::new())
    }
}
