//! Demo sprite-sequence generator.
//!
//! Writes a synthetic PNG sequence (a dot orbiting the centre while its color
//! cycles) plus a `frames.json` manifest, so the page can run without any
//! real artwork.

use image::{Rgba, RgbaImage};
use std::f32::consts::TAU;
use std::path::Path;

/// Edge length of generated frames in pixels.
pub const DEMO_FRAME_SIZE: u32 = 128;

/// Manifest file written next to the frames.
pub const MANIFEST_NAME: &str = "frames.json";

/// File name of frame `index`, zero padded so name order equals frame order.
pub fn frame_file_name(index: usize) -> String {
    format!("frame_{:04}.png", index)
}

/// Fully saturated RGB for `hue` in turns (`[0, 1)`).
fn hue_to_rgb(hue: f32) -> [u8; 3] {
    let h = hue.rem_euclid(1.0) * 6.0;
    let x = 1.0 - (h % 2.0 - 1.0).abs();
    let (r, g, b) = match h as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

/// Draw frame `index` of a `count` frame loop.
///
/// The background stays transparent.
pub fn render_demo_frame(index: usize, count: usize, size: u32) -> RgbaImage {
    let size = size.max(1);
    let t = if count == 0 {
        0.0
    } else {
        index as f32 / count as f32
    };
    let [r, g, b] = hue_to_rgb(t);
    let half = size as f32 / 2.0;
    let orbit = half * 0.55;
    let radius = (half * 0.3).max(1.0);
    let (cx, cy) = (
        half + orbit * (t * TAU).cos(),
        half + orbit * (t * TAU).sin(),
    );

    let mut img = RgbaImage::new(size, size);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        if dx * dx + dy * dy <= radius * radius {
            *px = Rgba([r, g, b, 255]);
        }
    }
    img
}

/// Manifest content listing `count` frames.
pub fn manifest_json(count: usize) -> Result<String, String> {
    let names: Vec<String> = (0..count).map(frame_file_name).collect();
    serde_json::to_string_pretty(&names).map_err(|e| format!("Failed to encode manifest: {}", e))
}

/// Write `count` frames and the manifest into `dir`, creating it if needed.
///
/// Returns the number of frames written.
pub fn write_demo_frames(dir: &Path, count: usize, size: u32) -> Result<usize, String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create {}: {}", dir.display(), e))?;
    for index in 0..count {
        let path = dir.join(frame_file_name(index));
        render_demo_frame(index, count, size)
            .save(&path)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    }
    let manifest = dir.join(MANIFEST_NAME);
    std::fs::write(&manifest, manifest_json(count)?)
        .map_err(|e| format!("Failed to write {}: {}", manifest.display(), e))?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::framelist::FrameList;

    #[test]
    fn test_file_names_sort_in_frame_order() {
        let mut names: Vec<String> = (0..120).rev().map(frame_file_name).collect();
        names.sort();
        assert_eq!(names[0], "frame_0000.png");
        assert_eq!(names[119], "frame_0119.png");
    }

    #[test]
    fn test_frames_differ() {
        let a = render_demo_frame(0, 8, 32);
        let b = render_demo_frame(4, 8, 32);
        assert_eq!(a.dimensions(), (32, 32));
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_frame_has_opaque_dot_on_transparent_background() {
        let img = render_demo_frame(0, 4, 64);
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert!(img.pixels().any(|p| p.0[3] == 255));
    }

    #[test]
    fn test_manifest_lists_every_frame() {
        let json = manifest_json(3).unwrap();
        let names: Vec<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(names, vec!["frame_0000.png", "frame_0001.png", "frame_0002.png"]);
    }

    #[test]
    fn test_written_frames_load_as_frame_list() {
        let dir = std::env::temp_dir().join(format!("spritecanvas_demo_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        assert_eq!(write_demo_frames(&dir, 5, 16).unwrap(), 5);

        let list = FrameList::load(dir.join(MANIFEST_NAME)).unwrap();
        assert_eq!(list.len(), 5);
        let first = list.get(0).unwrap();
        assert!(first.ends_with("frame_0000.png"));
        assert_eq!(image::open(first).unwrap().width(), 16);

        let scanned = FrameList::load(&dir).unwrap();
        assert_eq!(scanned.len(), 5);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
