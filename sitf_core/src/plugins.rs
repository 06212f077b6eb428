use crate::models::io::{ImageReader, ImageWriter};

/// Support for one image format. Plugins are ordinary crates constructed by
/// the binary and collected into a vec, there is no dynamic loading.
pub trait ImageFormatSupportPlugin {

    fn format_name(&self) -> String;

    fn reader(&self) -> Box<dyn ImageReader>;
    fn writer(&self) -> Box<dyn ImageWriter>;
}

pub fn find_by_format_name<'a>(
    plugins: &'a [Box<dyn ImageFormatSupportPlugin>],
    format_name: &str,
) -> Option<&'a Box<dyn ImageFormatSupportPlugin>> {
    plugins.iter().find(|v| v.format_name().eq_ignore_ascii_case(format_name))
}
