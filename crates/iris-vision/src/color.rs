//! RGB to HSV conversion and inclusive HSV range predicates.
//!
//! Values use the OpenCV 8-bit convention: hue in `0..180` (degrees
//! halved), saturation and value in `0..=255`. The segmentation
//! thresholds in [`crate::config`] are expressed on this scale.

use image::Rgb;
use serde::{Deserialize, Serialize};

/// A pixel in hue/saturation/value form, OpenCV 8-bit scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue, 0..180 (two degrees per step).
    pub h: u8,
    /// Saturation, 0..=255.
    pub s: u8,
    /// Value (brightness), 0..=255.
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u8, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

/// Convert an RGB pixel to HSV on the OpenCV 8-bit scale.
pub fn rgb_to_hsv(pixel: Rgb<u8>) -> Hsv {
    let [r, g, b] = pixel.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = (max - min) as f32;

    let v = max;

    let s = if max == 0 {
        0
    } else {
        (255.0 * delta / max as f32).round() as u8
    };

    if delta == 0.0 {
        return Hsv::new(0, s, v);
    }

    let hue_degrees = if max == r {
        60.0 * (g as f32 - b as f32) / delta
    } else if max == g {
        120.0 + 60.0 * (b as f32 - r as f32) / delta
    } else {
        240.0 + 60.0 * (r as f32 - g as f32) / delta
    };
    let hue_degrees = if hue_degrees < 0.0 {
        hue_degrees + 360.0
    } else {
        hue_degrees
    };

    let h = ((hue_degrees / 2.0).round() as u16 % 180) as u8;
    Hsv::new(h, s, v)
}

/// An inclusive HSV threshold range, matching `cv2.inRange` semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HsvRange {
    pub lower: Hsv,
    pub upper: Hsv,
}

impl HsvRange {
    pub const fn new(lower: Hsv, upper: Hsv) -> Self {
        Self { lower, upper }
    }

    /// Check whether a pixel falls inside the range on all three channels.
    pub fn contains(&self, hsv: Hsv) -> bool {
        self.lower.h <= hsv.h
            && hsv.h <= self.upper.h
            && self.lower.s <= hsv.s
            && hsv.s <= self.upper.s
            && self.lower.v <= hsv.v
            && hsv.v <= self.upper.v
    }
}
