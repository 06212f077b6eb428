use std::path::PathBuf;

use sitf_core::models::{Image, Pixel};

/// Where the source file comes from. `None` means the user cancelled.
pub trait FilePicker {

    fn pick_source(&self) -> Option<PathBuf>;
}

/// The document the decoded grid is painted into.
pub trait DocumentSink {

    fn create(&mut self, width: usize, height: usize);
    fn set_pixel(&mut self, x: usize, y: usize, color: Pixel);
    fn document(&self) -> Option<&Image>;
}

/// User-facing notifications for import results.
pub trait Notifier {

    fn info(&self, message: &str);
    fn warning(&self, message: &str);
}

/// Picks the path given on the command line, filtered by extension the way
/// a host file dialog would filter its listing.
pub struct ArgsFilePicker {
    source: Option<String>,
    extension_filter: String,
}

impl ArgsFilePicker {

    pub fn new(source: Option<String>, extension_filter: &str) -> Self {
        ArgsFilePicker {
            source,
            extension_filter: extension_filter.to_string(),
        }
    }
}

impl FilePicker for ArgsFilePicker {

    fn pick_source(&self) -> Option<PathBuf> {
        let source = self.source.as_ref()?;
        let path = PathBuf::from(source);

        let extension = path.extension()?.to_string_lossy().to_lowercase();
        if !extension.eq_ignore_ascii_case(&self.extension_filter) {
            warn!("{} does not match the *.{} filter", source, self.extension_filter);
            return None;
        }

        Some(path)
    }
}

pub struct ImageDocumentSink {
    document: Option<Image>,
}

impl ImageDocumentSink {

    pub fn new() -> Self {
        ImageDocumentSink {
            document: None,
        }
    }
}

impl DocumentSink for ImageDocumentSink {

    fn create(&mut self, width: usize, height: usize) {
        self.document = Some(Image::new(width, height));
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Pixel) {
        if let Some(document) = self.document.as_mut() {
            document.set_pixel(x, y, color);
        }
    }

    fn document(&self) -> Option<&Image> {
        self.document.as_ref()
    }
}

pub struct LogNotifier {
}

impl LogNotifier {

    pub fn new() -> Self {
        LogNotifier {}
    }
}

impl Notifier for LogNotifier {

    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warning(&self, message: &str) {
        warn!("{}", message);
    }
}

/// Paints one triple per pixel coordinate. The document width is the first
/// row's length: longer rows are cut there, shorter rows leave the blank
/// document pixels untouched.
pub fn paint_grid(sink: &mut dyn DocumentSink, grid: &[Vec<Pixel>]) {
    let width = grid.first().map(|row| row.len()).unwrap_or(0);
    let height = grid.len();

    sink.create(width, height);
    for (y, row) in grid.iter().enumerate() {
        for (x, color) in row.iter().take(width).enumerate() {
            sink.set_pixel(x, y, *color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn painting_uses_the_first_row_width() {
        let grid = vec![
            vec![Pixel::white(), Pixel::black()],
            vec![Pixel::from_rgb(255, 0, 0), Pixel::from_rgb(0, 255, 0), Pixel::from_rgb(0, 0, 255)],
            vec![Pixel::gray()],
        ];

        let mut sink = ImageDocumentSink::new();
        paint_grid(&mut sink, &grid);

        let document = sink.document().expect("expected a document to be created");
        assert_eq!(document.width, 2);
        assert_eq!(document.height, 3);
        // the third entry of the long row never lands
        assert_eq!(document.get_pixel(1, 1), Pixel::from_rgb(0, 255, 0));
        // the short row keeps the blank document pixel
        assert_eq!(document.get_pixel(1, 2), Pixel::transparent());
    }

    #[test]
    fn picker_rejects_other_extensions() {
        let picker = ArgsFilePicker::new(Some("drawing.png".to_string()), "sitf");

        assert_eq!(picker.pick_source(), None);
    }

    #[test]
    fn picker_without_a_source_is_a_cancellation() {
        let picker = ArgsFilePicker::new(None, "sitf");

        assert_eq!(picker.pick_source(), None);
    }

    #[test]
    fn picker_accepts_sitf_files() {
        let picker = ArgsFilePicker::new(Some("drawing.SITF".to_string()), "sitf");

        assert_eq!(picker.pick_source(), Some(PathBuf::from("drawing.SITF")));
    }
}
