use std::str::from_utf8;

use custom_error::custom_error;
use lazy_static::lazy_static;
use log::*;
use regex::Regex;

use sitf_core::models::{Image, ImageIOError, ImageReader, Pixel};

custom_error! {pub SitfReaderError
    InvalidEncoding {description: String} = "Invalid encoding: {description}",
    NoPixelData {description: String} = "No pixel data: {description}",
}

// Color selection is by token prefix, checked in this order. The first match
// wins, any other token becomes the gray fallback.
const COLOR_TOKENS: [(&str, Pixel); 5] = [
    ("!F", Pixel { red: 255, green: 255, blue: 255, alpha: 255 }),
    ("!0", Pixel { red: 0, green: 0, blue: 0, alpha: 255 }),
    ("!R", Pixel { red: 255, green: 0, blue: 0, alpha: 255 }),
    ("!G", Pixel { red: 0, green: 255, blue: 0, alpha: 255 }),
    ("!B", Pixel { red: 0, green: 0, blue: 255, alpha: 255 }),
];

const FALLBACK_COLOR: Pixel = Pixel { red: 128, green: 128, blue: 128, alpha: 255 };

lazy_static! {
    // an optional numeric prefix, then the color token: an optional `!` with
    // its selector letters, a mandatory `#` or `%` marker and the marker's
    // word/slash characters. The numeric prefix is reserved and takes no
    // part in color selection.
    static ref ENTRY_PATTERN: Regex = Regex::new(r"([+-]?\d*\.?\d*)(!?[\w/]*[#%][\w/]+)")
        .expect("entry pattern is a valid regex");
}

/// Decodes SITF text into rows of colors.
///
/// Lines before the `@` header line are metadata and are skipped, the header
/// line itself never contributes pixel data. After the header every non-blank
/// line becomes one row, blank lines are skipped without ending the data
/// section. Entries that do not contain a color token are dropped, so rows
/// are not guaranteed to have equal lengths.
pub fn decode_grid(text: &str) -> Vec<Vec<Pixel>> {
    let mut grid = Vec::new();
    let mut reading = false;

    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('@') {
            reading = true;
            continue;
        }
        if !reading || line.is_empty() {
            continue;
        }

        let mut row = Vec::new();
        for entry in line.split(',') {
            if let Some(token) = ENTRY_PATTERN.captures(entry).and_then(|captures| captures.get(2)) {
                row.push(color_for_token(token.as_str()));
            }
        }
        grid.push(row);
    }

    grid
}

fn color_for_token(token: &str) -> Pixel {
    for (prefix, color) in &COLOR_TOKENS {
        if token.starts_with(prefix) {
            return *color;
        }
    }

    FALLBACK_COLOR
}

fn decode_document(data: &[u8]) -> Result<Image, SitfReaderError> {
    let text = from_utf8(data).map_err(|err| SitfReaderError::InvalidEncoding {
        description: format!("expected utf-8 text: {}", err),
    })?;

    let grid = decode_grid(text);
    debug!("decoded {} pixel rows", grid.len());

    materialize(&grid).ok_or_else(|| SitfReaderError::NoPixelData {
        description: "no decodable pixel rows after the header".to_string(),
    })
}

// The document width is the first row's length. Longer rows are cut at that
// width and shorter rows keep the blank document pixels.
fn materialize(grid: &[Vec<Pixel>]) -> Option<Image> {
    let width = grid.first()?.len();
    if width == 0 {
        return None;
    }

    let mut image = Image::new(width, grid.len());
    for (y, row) in grid.iter().enumerate() {
        for (x, color) in row.iter().take(width).enumerate() {
            image.set_pixel(x, y, *color);
        }
    }

    Some(image)
}

pub struct SitfReader {
}

impl SitfReader {

    pub fn new() -> Self {
        SitfReader {}
    }
}

impl ImageReader for SitfReader {

    fn read(&self, data: &Vec<u8>) -> Result<Image, ImageIOError> {
        decode_document(data).map_err(|err| ImageIOError::FailedToRead {
            description: format!("failed to read as sitf: {}", err),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read;

    use super::*;

    #[test]
    fn no_header_means_no_rows() {
        assert!(decode_grid("!F#1,!R#2\n!G#3").is_empty());
    }

    #[test]
    fn blank_lines_after_header_do_not_create_rows() {
        assert!(decode_grid("@start\n\n   \n").is_empty());
    }

    #[test]
    fn known_prefixes_map_to_exact_colors() {
        let grid = decode_grid("@\n12!F#x,-3.5!0#y,!R#zz/w,0.1!G#a,!B#b");

        assert_eq!(grid, vec![vec![
            Pixel::white(),
            Pixel::black(),
            Pixel::from_rgb(255, 0, 0),
            Pixel::from_rgb(0, 255, 0),
            Pixel::from_rgb(0, 0, 255),
        ]]);
    }

    #[test]
    fn unknown_tokens_fall_back_to_gray() {
        let grid = decode_grid("@\n#FFAA00,%1/2,!X#1");

        assert_eq!(grid, vec![vec![Pixel::gray(); 3]]);
    }

    #[test]
    fn entries_without_a_token_are_dropped() {
        let grid = decode_grid("@header tail is ignored\na,1#F,b");

        // only "1#F" carries a token, and without the "!" it is gray
        assert_eq!(grid, vec![vec![Pixel::gray()]]);
    }

    #[test]
    fn rows_follow_input_order() {
        let grid = decode_grid("meta: ignore\n@start\n!F#1,!R#2\n!G#3\n");

        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0], vec![Pixel::white(), Pixel::from_rgb(255, 0, 0)]);
        assert_eq!(grid[1], vec![Pixel::from_rgb(0, 255, 0)]);
    }

    #[test]
    fn dropped_entries_leave_rows_with_different_lengths() {
        let grid = decode_grid("@\n!F#1,bad,!0#2\n!R#1");

        assert_eq!(grid[0].len(), 2);
        assert_eq!(grid[1].len(), 1);
    }

    #[test]
    fn simple_test() {
        let simple_sitf = read("assets/simple.sitf")
            .expect("Failed to load assets/simple.sitf");
        let reader = SitfReader::new();
        let image = reader.read(&simple_sitf).expect("Failed to read the image");

        assert_eq!(image.width, 4);
        assert_eq!(image.height, 4);
        assert_eq!(image.get_pixel(0, 0), Pixel::white());
        assert_eq!(image.get_pixel(1, 1), Pixel::from_rgb(255, 0, 0));
        assert_eq!(image.get_pixel(2, 2), Pixel::gray());
        assert_eq!(image.get_pixel(0, 3), Pixel::black());
    }

    #[test]
    fn first_row_sets_the_document_width() {
        let example_sitf = read("assets/example1.sitf")
            .expect("Failed to load assets/example1.sitf");
        let reader = SitfReader::new();
        let image = reader.read(&example_sitf).expect("Failed to read the image");

        assert_eq!(image.width, 3);
        assert_eq!(image.height, 2);
        // the second row has a single entry, the rest of it stays blank
        assert_eq!(image.get_pixel(0, 1), Pixel::from_rgb(0, 0, 255));
        assert_eq!(image.get_pixel(1, 1), Pixel::transparent());
    }

    #[test]
    fn extra_entries_beyond_the_width_are_ignored() {
        let reader = SitfReader::new();
        let image = reader.read(&b"@\n!F#1,!0#2\n!R#1,!G#2,!B#3".to_vec())
            .expect("Failed to read the image");

        assert_eq!(image.width, 2);
        assert_eq!(image.get_pixel(1, 1), Pixel::from_rgb(0, 255, 0));
    }

    #[test]
    fn empty_documents_are_read_errors() {
        let reader = SitfReader::new();

        assert!(reader.read(&b"no header here".to_vec()).is_err());
        assert!(reader.read(&b"@data\n\n".to_vec()).is_err());
        assert!(reader.read(&b"@data\nnothing decodable".to_vec()).is_err());
    }
}
