//! Dimension estimation from a selected region.

use crate::region::Region;

/// Length and width of a region in pixels.
///
/// Length is the larger bounding-box extent, width the smaller. This is
/// an axis-aligned approximation of the true major/minor axes: object
/// orientation is not modelled, and a rotated minimum-area rectangle
/// would change the numbers. Keep the approximation as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelMeasurement {
    pub length_px: u32,
    pub width_px: u32,
}

impl PixelMeasurement {
    /// Measurement for a mask with no foreground region.
    pub const ZERO: Self = Self {
        length_px: 0,
        width_px: 0,
    };
}

/// Measure a region's length and width from its bounding box.
pub fn length_width(region: &Region) -> PixelMeasurement {
    let w = region.bbox.width;
    let h = region.bbox.height;
    PixelMeasurement {
        length_px: w.max(h),
        width_px: w.min(h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::largest_region;
    use image::{GrayImage, Luma};

    #[test]
    fn test_tall_rectangle_long_side_is_length() {
        // 50 px wide, 100 px tall
        let mut mask = GrayImage::new(200, 200);
        for y in 30..130 {
            for x in 60..110 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }

        let region = largest_region(&mask).unwrap();
        let measurement = length_width(&region);
        assert_eq!(measurement.length_px, 100);
        assert_eq!(measurement.width_px, 50);
    }

    #[test]
    fn test_wide_rectangle_long_side_is_length() {
        let mut mask = GrayImage::new(200, 200);
        for y in 10..40 {
            for x in 20..140 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }

        let region = largest_region(&mask).unwrap();
        let measurement = length_width(&region);
        assert_eq!(measurement.length_px, 120);
        assert_eq!(measurement.width_px, 30);
    }

    #[test]
    fn test_square_has_equal_length_and_width() {
        let mut mask = GrayImage::new(50, 50);
        for y in 5..25 {
            for x in 5..25 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }

        let region = largest_region(&mask).unwrap();
        let measurement = length_width(&region);
        assert_eq!(measurement.length_px, 20);
        assert_eq!(measurement.width_px, 20);
    }
}
