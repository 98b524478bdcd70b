//! Color segmentation: RGB image to binary mask.

use image::{GrayImage, Luma, RgbImage};

use crate::color::{rgb_to_hsv, HsvRange};

/// Foreground value in produced masks.
pub const FOREGROUND: u8 = 255;
/// Background value in produced masks.
pub const BACKGROUND: u8 = 0;

/// Build a binary mask of the pixels whose HSV representation falls
/// inside `range`.
///
/// The petal and sepal masks are computed independently from the same
/// image; a pixel may satisfy both ranges or neither. That overlap is
/// accepted imprecision of the heuristic, not resolved here.
pub fn color_mask(image: &RgbImage, range: &HsvRange) -> GrayImage {
    let mut mask = GrayImage::new(image.width(), image.height());
    for (x, y, pixel) in image.enumerate_pixels() {
        let value = if range.contains(rgb_to_hsv(*pixel)) {
            FOREGROUND
        } else {
            BACKGROUND
        };
        mask.put_pixel(x, y, Luma([value]));
    }
    mask
}
