//! Letterbox fit of a loaded image onto the drawing surface.
//!
//! Preserves the image's aspect ratio, scaling to the limiting canvas axis
//! and centering along the other with integer-truncated offsets.

use serde::{Deserialize, Serialize};

/// Placement of an image on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageFit {
    /// Horizontal offset of the image's left edge, in surface pixels.
    pub offset_x: f64,
    /// Vertical offset of the image's top edge, in surface pixels.
    pub offset_y: f64,
    /// Uniform image-to-surface scale factor.
    pub scale: f64,
}

/// Computes the letterbox placement of an `image_w` x `image_h` image on a
/// `canvas_w` x `canvas_h` surface.
pub fn fit_image(image_w: f64, image_h: f64, canvas_w: f64, canvas_h: f64) -> ImageFit {
    let image_aspect = image_w / image_h;
    let canvas_aspect = canvas_w / canvas_h;

    if canvas_aspect > image_aspect {
        let scale = canvas_h / image_h;
        ImageFit {
            offset_x: ((canvas_w - scale * image_w) / 2.0).trunc(),
            offset_y: 0.0,
            scale,
        }
    } else {
        let scale = canvas_w / image_w;
        ImageFit {
            offset_x: 0.0,
            offset_y: ((canvas_h - scale * image_h) / 2.0).trunc(),
            scale,
        }
    }
}
