use std::str::from_utf8;

use custom_error::custom_error;

use sitf_core::models::{Image, ImageIOError, ImageReader, Pixel};

custom_error! {pub PpmReaderError
    InvalidHeader {description: String} = "Invalid header: {description}",
    InvalidRaster {description: String} = "Invalid raster: {description}",
    NotImplemented {description: String} = "Not implemented: {description}",
}

pub struct PpmReader {
}

impl PpmReader {

    pub fn new() -> Self {
        PpmReader {}
    }
}

impl ImageReader for PpmReader {

    fn read(&self, data: &Vec<u8>) -> Result<Image, ImageIOError> {
        read_p3(data).map_err(|err| ImageIOError::FailedToRead {
            description: format!("failed to read as ppm: {}", err),
        })
    }
}

fn read_p3(data: &[u8]) -> Result<Image, PpmReaderError> {
    let text = from_utf8(data).map_err(|err| PpmReaderError::InvalidHeader {
        description: format!("expected plain ppm text: {}", err),
    })?;

    let mut samples = sample_tokens(text);

    let magic_number = samples.next().ok_or_else(|| PpmReaderError::InvalidHeader {
        description: "missing magic number".to_string(),
    })?;
    if magic_number != "P3" {
        return Err(PpmReaderError::NotImplemented {
            description: format!("magic number {} (only P3 is supported)", magic_number),
        });
    }

    let width = read_header_number(&mut samples, "width")?;
    let height = read_header_number(&mut samples, "height")?;
    let max_color_value = read_header_number(&mut samples, "max color value")?;
    if max_color_value == 0 {
        return Err(PpmReaderError::InvalidHeader {
            description: "max color value must be positive".to_string(),
        });
    }

    let mut image = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let red = read_sample(&mut samples, x, y)?;
            let green = read_sample(&mut samples, x, y)?;
            let blue = read_sample(&mut samples, x, y)?;
            image.set_pixel(x, y, Pixel::from_rgb(
                normalize(red, max_color_value),
                normalize(green, max_color_value),
                normalize(blue, max_color_value),
            ));
        }
    }

    Ok(image)
}

// comments run from `#` to the end of the line and may appear anywhere
// between samples
fn sample_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split_ascii_whitespace())
}

fn read_header_number<'a>(
    samples: &mut impl Iterator<Item = &'a str>,
    field: &str,
) -> Result<usize, PpmReaderError> {
    let token = samples.next().ok_or_else(|| PpmReaderError::InvalidHeader {
        description: format!("missing {}", field),
    })?;

    token.parse().map_err(|err| PpmReaderError::InvalidHeader {
        description: format!("failed to parse {}: {}", field, err),
    })
}

fn read_sample<'a>(
    samples: &mut impl Iterator<Item = &'a str>,
    x: usize,
    y: usize,
) -> Result<usize, PpmReaderError> {
    let token = samples.next().ok_or_else(|| PpmReaderError::InvalidRaster {
        description: format!("raster ends before pixel ({}, {})", x, y),
    })?;

    token.parse().map_err(|err| PpmReaderError::InvalidRaster {
        description: format!("bad sample at ({}, {}): {}", x, y, err),
    })
}

fn normalize(value: usize, max_color_value: usize) -> u8 {
    (255 * value.min(max_color_value) / max_color_value) as u8
}

#[cfg(test)]
mod tests {
    use std::fs::read;

    use super::*;

    #[test]
    fn simple_test() {
        let simple_ppm = read("assets/simple.ppm")
            .expect("Failed to load assets/simple.ppm");
        let reader = PpmReader::new();
        let image = reader.read(&simple_ppm).expect("Failed to read the image");

        assert_eq!(image.width, 4);
        assert_eq!(image.height, 4);
        assert_eq!(image.pixels.len(), 16);
        assert_eq!(image.get_pixel(0, 0), Pixel::white());
        assert_eq!(image.get_pixel(2, 0), Pixel::from_rgb(255, 0, 0));
        assert_eq!(image.get_pixel(1, 1), Pixel::gray());
    }

    #[test]
    fn samples_are_normalized_to_the_max_color_value() {
        let reader = PpmReader::new();
        let image = reader.read(&b"P3 1 1 100\n100 0 50".to_vec())
            .expect("Failed to read the image");

        assert_eq!(image.get_pixel(0, 0), Pixel::from_rgb(255, 0, 127));
    }

    #[test]
    fn binary_ppm_is_not_implemented() {
        let reader = PpmReader::new();

        assert!(reader.read(&b"P6 1 1 255".to_vec()).is_err());
    }

    #[test]
    fn truncated_raster_is_a_read_error() {
        let reader = PpmReader::new();

        assert!(reader.read(&b"P3 2 2 255\n255 0 0".to_vec()).is_err());
    }
}
