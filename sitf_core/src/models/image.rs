use super::pixel::Pixel;

#[derive(Clone)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Pixel>, // starting at top left pixel of the image, pos = y * width + x
}

impl Image {

    /// A blank RGBA document: every pixel starts out fully transparent.
    pub fn new(width: usize, height: usize) -> Self {
        Image {
            width,
            height,
            pixels: vec![Pixel::transparent(); width * height],
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        self.pixels[y * self.width + x] = pixel;
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * self.width + x]
    }

    pub fn compose_alpha_over_background(&self, background: &Pixel) -> Self {
        let mut image = Self::new(self.width, self.height);

        for y in 0..self.height {
            for x in 0..self.width {
                image.set_pixel(x, y, self.get_pixel(x, y).compose_alpha_over_background(&background))
            }
        }

        image
    }
}
