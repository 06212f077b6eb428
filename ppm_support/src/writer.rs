use sitf_core::models::io::ImageWriterOptions;
use sitf_core::models::{Image, ImageIOError, ImageWriter, Pixel};

pub struct PpmWriter {
}

impl PpmWriter {

    pub fn new() -> Self {
        PpmWriter {}
    }
}

impl ImageWriter for PpmWriter {

    fn write(&self, image: &Image, _options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        // P3 has no alpha channel, flatten over a white page first
        let flattened = image.compose_alpha_over_background(&Pixel::white());

        let mut output = String::new();
        output.push_str("P3\n");
        output.push_str(&format!("{} {}\n", flattened.width, flattened.height));
        output.push_str("255\n");

        for y in 0..flattened.height {
            let row = (0..flattened.width)
                .map(|x| {
                    let pixel = flattened.get_pixel(x, y);
                    format!("{} {} {}", pixel.red, pixel.green, pixel.blue)
                })
                .collect::<Vec<String>>()
                .join(" ");
            output.push_str(&row);
            output.push('\n');
        }

        Ok(output.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::reader::PpmReader;
    use sitf_core::models::ImageReader;

    #[test]
    fn writes_one_image_row_per_line() {
        let mut image = Image::new(2, 2);
        image.set_pixel(0, 0, Pixel::from_rgb(255, 0, 0));
        image.set_pixel(1, 0, Pixel::from_rgb(0, 255, 0));
        image.set_pixel(0, 1, Pixel::from_rgb(0, 0, 255));
        image.set_pixel(1, 1, Pixel::black());

        let written = PpmWriter::new().write(&image, &ImageWriterOptions::default())
            .expect("Failed to write the image");

        assert_eq!(
            String::from_utf8(written).expect("writer produced invalid utf-8"),
            "P3\n2 2\n255\n255 0 0 0 255 0\n0 0 255 0 0 0\n",
        );
    }

    #[test]
    fn transparent_pixels_flatten_to_the_white_page() {
        let image = Image::new(1, 1);

        let written = PpmWriter::new().write(&image, &ImageWriterOptions::default())
            .expect("Failed to write the image");

        assert_eq!(
            String::from_utf8(written).expect("writer produced invalid utf-8"),
            "P3\n1 1\n255\n255 255 255\n",
        );
    }

    #[test]
    fn written_images_read_back_with_the_same_pixels() {
        let mut image = Image::new(2, 1);
        image.set_pixel(0, 0, Pixel::from_rgb(12, 34, 56));
        image.set_pixel(1, 0, Pixel::white());

        let written = PpmWriter::new().write(&image, &ImageWriterOptions::default())
            .expect("Failed to write the image");
        let read_back = PpmReader::new().read(&written).expect("Failed to read the image");

        assert_eq!(read_back.get_pixel(0, 0), Pixel::from_rgb(12, 34, 56));
        assert_eq!(read_back.get_pixel(1, 0), Pixel::white());
    }
}
