// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Decoded poster thumbnails.
//!
//! Posters are downscaled to a small fixed grid of pixels which the movie
//! cards draw with half-block characters, two pixels per terminal cell.

use image::{ImageError, imageops::FilterType};

/// Width of a poster thumbnail in terminal cells (and pixels).
pub(crate) const POSTER_COLUMNS: u32 = 16;

/// Height of a poster thumbnail in terminal cells, each cell holds two rows
/// of pixels.
pub(crate) const POSTER_ROWS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Thumbnail {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    /// Decodes an encoded image (JPEG, PNG or WebP) into a thumbnail of
    /// [`POSTER_COLUMNS`] by [`POSTER_ROWS`] cells.
    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, ImageError> {
        let width = POSTER_COLUMNS;
        let height = POSTER_ROWS * 2;

        let image = image::load_from_memory(bytes)?
            .resize_exact(width, height, FilterType::Triangle)
            .to_rgb8();

        let pixels = image.pixels().map(|p| p.0).collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub(crate) fn width(&self) -> u32 {
        self.width
    }

    pub(crate) fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`, or black when out of range.
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        if x >= self.width || y >= self.height {
            return [0, 0, 0];
        }
        self.pixels[(y * self.width + x) as usize]
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgb, RgbImage};

    use super::*;

    fn encoded(image: &RgbImage) -> Vec<u8> {
        let mut bytes = Cursor::new(vec![]);
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    #[test]
    fn decodes_to_fixed_size() {
        let image = RgbImage::from_pixel(300, 450, Rgb([200, 10, 30]));

        let thumbnail = Thumbnail::decode(&encoded(&image)).unwrap();

        assert_eq!(thumbnail.width(), POSTER_COLUMNS);
        assert_eq!(thumbnail.height(), POSTER_ROWS * 2);
        assert_eq!(thumbnail.pixel(0, 0), [200, 10, 30]);
        assert_eq!(thumbnail.pixel(POSTER_COLUMNS - 1, POSTER_ROWS * 2 - 1), [200, 10, 30]);
    }

    #[test]
    fn out_of_range_pixel_is_black() {
        let image = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let thumbnail = Thumbnail::decode(&encoded(&image)).unwrap();

        assert_eq!(thumbnail.pixel(POSTER_COLUMNS, 0), [0, 0, 0]);
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(Thumbnail::decode(b"<html>not found</html>").is_err());
    }
}
