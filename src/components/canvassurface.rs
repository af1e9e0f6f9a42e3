//! Drawing surface owned by a sprite canvas.
//!
//! [`CanvasSurface`] is a CPU-side RGBA buffer of `size × size` pixels. Decoded
//! frames are scaled into it; the render pass uploads it to a GPU texture when
//! it is marked dirty. Only the owning entity ever writes to it.
//!
//! The [`DrawTarget`] trait is the seam between the frame-apply system and the
//! pixels, so tests can observe draws without a window.

use bevy_ecs::prelude::Component;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::resources::imageloader::DecodedFrame;

/// Something a decoded frame can be drawn onto.
pub trait DrawTarget {
    /// Erase previously drawn content.
    fn clear(&mut self);
    /// Draw `frame` scaled to exactly fill the target.
    fn draw_scaled(&mut self, frame: &DecodedFrame);
}

/// Clear `target` and draw `frame` over it.
pub fn draw_frame<T: DrawTarget + ?Sized>(target: &mut T, frame: &DecodedFrame) {
    target.clear();
    target.draw_scaled(frame);
}

/// Square RGBA surface.
#[derive(Component, Debug, Clone)]
pub struct CanvasSurface {
    pixels: RgbaImage,
    /// Set when pixels changed since the last GPU upload.
    pub dirty: bool,
    /// Index of the frame currently shown, if any.
    pub shown_frame: Option<usize>,
}

impl CanvasSurface {
    /// Transparent surface of `size × size` pixels (at least 1×1).
    pub fn new(size: u32) -> Self {
        let size = size.max(1);
        Self {
            pixels: RgbaImage::new(size, size),
            dirty: false,
            shown_frame: None,
        }
    }

    pub fn size(&self) -> u32 {
        self.pixels.width()
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixels.get_pixel_checked(x, y).map(|p| p.0)
    }
}

impl DrawTarget for CanvasSurface {
    fn clear(&mut self) {
        for px in self.pixels.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
        self.dirty = true;
    }

    fn draw_scaled(&mut self, frame: &DecodedFrame) {
        let size = self.size();
        let src = &frame.image;
        if src.width() == 0 || src.height() == 0 {
            return;
        }
        let scaled = if src.width() == size && src.height() == size {
            src.clone()
        } else {
            imageops::resize(src, size, size, FilterType::Triangle)
        };
        imageops::overlay(&mut self.pixels, &scaled, 0, 0);
        self.shown_frame = Some(frame.index);
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(index: usize, w: u32, h: u32, color: [u8; 4]) -> DecodedFrame {
        DecodedFrame {
            index,
            image: RgbaImage::from_pixel(w, h, Rgba(color)),
        }
    }

    #[test]
    fn test_new_surface_is_transparent() {
        let s = CanvasSurface::new(8);
        assert_eq!(s.size(), 8);
        assert_eq!(s.as_bytes().len(), 8 * 8 * 4);
        assert!(s.as_bytes().iter().all(|b| *b == 0));
        assert!(!s.dirty);
    }

    #[test]
    fn test_zero_size_is_clamped() {
        assert_eq!(CanvasSurface::new(0).size(), 1);
    }

    #[test]
    fn test_draw_fills_whole_surface() {
        let mut s = CanvasSurface::new(16);
        draw_frame(&mut s, &solid(3, 4, 2, [255, 0, 0, 255]));
        assert_eq!(s.pixel(0, 0), Some([255, 0, 0, 255]));
        assert_eq!(s.pixel(15, 15), Some([255, 0, 0, 255]));
        assert_eq!(s.shown_frame, Some(3));
        assert!(s.dirty);
    }

    #[test]
    fn test_draw_replaces_previous_content() {
        let mut s = CanvasSurface::new(4);
        draw_frame(&mut s, &solid(0, 4, 4, [255, 255, 255, 255]));
        draw_frame(&mut s, &solid(1, 4, 4, [0, 0, 255, 0]));
        // fully transparent frame over a cleared surface leaves it empty
        assert_eq!(s.pixel(2, 2), Some([0, 0, 0, 0]));
        assert_eq!(s.shown_frame, Some(1));
    }

    #[test]
    fn test_empty_frame_is_ignored() {
        let mut s = CanvasSurface::new(4);
        s.draw_scaled(&solid(9, 0, 0, [1, 2, 3, 4]));
        assert_eq!(s.shown_frame, None);
    }
}
