use rayon::prelude::*;

use sitf_core::models::io::ImageWriterOptions;
use sitf_core::models::{Image, ImageIOError, ImageWriter, Pixel};

/// Writer option carrying free-form metadata lines for the file preamble.
pub const METADATA_OPTION: &str = "metadata";

const HEADER_LINE: &str = "@sitf";

pub struct SitfWriter {
}

impl SitfWriter {

    pub fn new() -> Self {
        SitfWriter {}
    }
}

impl ImageWriter for SitfWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        if image.width == 0 || image.height == 0 {
            return Err(ImageIOError::FailedToWrite {
                description: "image has no pixels to encode".to_string(),
            });
        }

        let mut output = String::new();
        if let Some(metadata) = options.get_string(METADATA_OPTION) {
            for line in metadata.lines() {
                output.push_str(line);
                output.push('\n');
            }
        }
        output.push_str(HEADER_LINE);
        output.push('\n');

        let rows: Vec<String> = (0..image.height)
            .into_par_iter()
            .map(|y| encode_row(image, y))
            .collect();

        for row in rows {
            output.push_str(&row);
            output.push('\n');
        }

        Ok(output.into_bytes())
    }
}

fn encode_row(image: &Image, y: usize) -> String {
    (0..image.width)
        .map(|x| encode_entry(&image.get_pixel(x, y)))
        .collect::<Vec<String>>()
        .join(",")
}

fn encode_entry(pixel: &Pixel) -> String {
    let token = token_for_color(pixel);
    if pixel.alpha == 255 {
        token
    } else {
        // the numeric prefix slot is reserved and ignored by decoders, so
        // the alpha scalar can ride along without changing decode results
        format!("{:.2}{}", pixel.alpha as f32 / 255.0, token)
    }
}

fn token_for_color(pixel: &Pixel) -> String {
    match (pixel.red, pixel.green, pixel.blue) {
        (255, 255, 255) => "!F#FFFFFF".to_string(),
        (0, 0, 0) => "!0#000000".to_string(),
        (255, 0, 0) => "!R#FF0000".to_string(),
        (0, 255, 0) => "!G#00FF00".to_string(),
        (0, 0, 255) => "!B#0000FF".to_string(),
        (red, green, blue) => format!("#{:02X}{:02X}{:02X}", red, green, blue),
    }
}
