//! Pixel-to-physical-unit conversion.

/// Convert a pixel extent to centimeters, rounded to two decimals.
pub fn px_to_cm(px: u32, cm_per_pixel: f64) -> f64 {
    round2(px as f64 * cm_per_pixel)
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_CM_PER_PIXEL;

    #[test]
    fn test_default_factor() {
        assert_eq!(px_to_cm(300, DEFAULT_CM_PER_PIXEL), 6.0);
        assert_eq!(px_to_cm(0, DEFAULT_CM_PER_PIXEL), 0.0);
        assert_eq!(px_to_cm(1, DEFAULT_CM_PER_PIXEL), 0.02);
    }

    #[test]
    fn test_doubling_pixels_doubles_centimeters() {
        for px in [1u32, 7, 50, 123, 300] {
            let single = px_to_cm(px, DEFAULT_CM_PER_PIXEL);
            let double = px_to_cm(px * 2, DEFAULT_CM_PER_PIXEL);
            assert!((double - 2.0 * single).abs() < 1e-9);
        }
    }

    #[test]
    fn test_monotonic_in_pixels() {
        let mut last = -1.0;
        for px in 0..500 {
            let cm = px_to_cm(px, DEFAULT_CM_PER_PIXEL);
            assert!(cm >= last);
            last = cm;
        }
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(px_to_cm(333, 0.0153), 5.09);
        assert_eq!(px_to_cm(1, 0.333), 0.33);
    }
}
