//! Connected-region selection from a binary mask.

use image::{GrayImage, Luma};
use imageproc::region_labelling::{connected_components, Connectivity};

/// Axis-aligned bounding box in pixel coordinates, inclusive extents
/// (a single pixel has width and height 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Summary of one connected foreground component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Label assigned during raster-order component labelling.
    pub label: u32,
    /// Number of foreground pixels in the component.
    pub area: u32,
    pub bbox: BoundingBox,
}

/// Running per-label accumulator while scanning the label image.
#[derive(Debug, Clone, Copy)]
struct Extents {
    area: u32,
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
}

/// Find the largest connected foreground region of a mask.
///
/// Components are 8-connected; nested holes are not modelled. Returns
/// `None` for an empty mask — callers must keep that case distinct from
/// a valid tiny region. Area ties resolve to the smallest label, which
/// is assigned in raster order and therefore stable across runs.
pub fn largest_region(mask: &GrayImage) -> Option<Region> {
    let labels = connected_components(mask, Connectivity::Eight, Luma([0u8]));

    let mut extents: Vec<Option<Extents>> = Vec::new();
    for (x, y, pixel) in labels.enumerate_pixels() {
        let label = pixel.0[0];
        if label == 0 {
            continue;
        }
        let index = label as usize;
        if extents.len() <= index {
            extents.resize(index + 1, None);
        }
        match &mut extents[index] {
            Some(e) => {
                e.area += 1;
                e.min_x = e.min_x.min(x);
                e.min_y = e.min_y.min(y);
                e.max_x = e.max_x.max(x);
                e.max_y = e.max_y.max(y);
            }
            slot @ None => {
                *slot = Some(Extents {
                    area: 1,
                    min_x: x,
                    min_y: y,
                    max_x: x,
                    max_y: y,
                });
            }
        }
    }

    let mut best: Option<Region> = None;
    for (label, extent) in extents.iter().enumerate() {
        let Some(e) = extent else { continue };
        let candidate = Region {
            label: label as u32,
            area: e.area,
            bbox: BoundingBox {
                x: e.min_x,
                y: e.min_y,
                width: e.max_x - e.min_x + 1,
                height: e.max_y - e.min_y + 1,
            },
        };
        // Strict greater-than keeps the lowest label on ties
        match best {
            Some(b) if candidate.area <= b.area => {}
            _ => best = Some(candidate),
        }
    }
    best
}
