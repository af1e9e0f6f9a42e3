//! Sprite canvas component.
//!
//! A [`SpriteCanvas`] plays a range of the global frame list
//! ([`FrameList`](crate::resources::framelist::FrameList)) in a loop. The
//! playback position comes from a [`TweenProgress`] on the same entity; this
//! component only turns progress into a frame index and remembers which frame
//! was last requested from the image loader.
//!
//! # Related
//!
//! - [`crate::systems::spritecanvas`] – advances playback and requests frames
//! - [`crate::components::canvassurface::CanvasSurface`] – the pixels drawn to

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::components::tween::TweenProgress;

/// Per-instance animation parameters, as found in the layout file.
///
/// Every field is required; there are no defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    /// First index into the frame list.
    pub start_index: usize,
    /// Number of frames in the sequence.
    pub num_images: usize,
    /// Seconds for one full loop.
    pub duration: f32,
    /// Edge length of the square surface in pixels.
    pub size: u32,
    /// Vertical position, percent of the containing region.
    pub top: f32,
    /// Horizontal position, percent of the containing region.
    pub left: f32,
    /// Stacking order.
    pub z_index: i32,
}

impl AnimationConfig {
    /// Index of the last frame of the sequence, `None` if it does not fit in `usize`.
    pub fn last_index(&self) -> Option<usize> {
        self.start_index
            .checked_add(self.num_images.saturating_sub(1))
    }
}

/// Map loop progress to a frame index.
///
/// `start_index + round(progress * (num_images - 1))`. Progress is clamped to
/// `[0, 1]`, and `num_images` of 0 or 1 always yields `start_index`.
///
/// Returns `None` when the index does not fit in `usize`; such a frame can
/// never be in the frame list.
pub fn frame_for_progress(progress: f32, start_index: usize, num_images: usize) -> Option<usize> {
    let span = num_images.saturating_sub(1);
    if span == 0 {
        return Some(start_index);
    }
    let offset = (progress.clamp(0.0, 1.0) * span as f32).round() as usize;
    start_index.checked_add(offset.min(span))
}

/// Playback state of one mounted sprite canvas.
#[derive(Component, Debug, Clone)]
pub struct SpriteCanvas {
    pub config: AnimationConfig,
    /// Frame index for the current progress, `None` if it overflowed.
    pub frame_index: Option<usize>,
    /// Frame last handed to the loader, `None` right after mounting.
    pub requested: Option<usize>,
}

impl SpriteCanvas {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            frame_index: Some(config.start_index),
            requested: None,
        }
    }

    /// A progress driver matching this canvas' duration.
    pub fn progress_driver(&self) -> TweenProgress {
        TweenProgress::new(self.config.duration)
    }

    /// Store the frame for `progress` and return it.
    pub fn sync_progress(&mut self, progress: f32) -> Option<usize> {
        self.frame_index =
            frame_for_progress(progress, self.config.start_index, self.config.num_images);
        self.frame_index
    }

    /// Advance `driver` by `dt` seconds and return the new frame index.
    pub fn tick(&mut self, driver: &mut TweenProgress, dt: f32) -> Option<usize> {
        let progress = driver.tick(dt);
        self.sync_progress(progress)
    }

    /// Returns the frame to load if it differs from the last request.
    ///
    /// Marks the frame as requested.
    pub fn take_pending_request(&mut self) -> Option<usize> {
        let frame_index = self.frame_index?;
        if self.requested == Some(frame_index) {
            return None;
        }
        self.requested = Some(frame_index);
        Some(frame_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(start_index: usize, num_images: usize, duration: f32) -> AnimationConfig {
        AnimationConfig {
            start_index,
            num_images,
            duration,
            size: 64,
            top: 0.0,
            left: 0.0,
            z_index: 0,
        }
    }

    #[test]
    fn test_frame_at_endpoints() {
        assert_eq!(frame_for_progress(0.0, 3, 8), Some(3));
        assert_eq!(frame_for_progress(1.0, 3, 8), Some(10));
    }

    #[test]
    fn test_frame_at_half() {
        assert_eq!(frame_for_progress(0.5, 5, 10), Some(10));
    }

    #[test]
    fn test_frame_is_monotonic() {
        let mut last = 0;
        for step in 0..=1000 {
            let frame = frame_for_progress(step as f32 / 1000.0, 0, 37).unwrap();
            assert!(frame >= last);
            last = frame;
        }
        assert_eq!(last, 36);
    }

    #[test]
    fn test_single_frame_never_moves() {
        for step in 0..=10 {
            assert_eq!(frame_for_progress(step as f32 / 10.0, 7, 1), Some(7));
        }
    }

    #[test]
    fn test_zero_frames_stays_at_start() {
        assert_eq!(frame_for_progress(0.8, 4, 0), Some(4));
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(frame_for_progress(-0.5, 2, 5), Some(2));
        assert_eq!(frame_for_progress(1.5, 2, 5), Some(6));
    }

    #[test]
    fn test_half_duration_scenario() {
        let mut canvas = SpriteCanvas::new(config(0, 20, 2.0));
        let mut driver = canvas.progress_driver();
        let frame = canvas.tick(&mut driver, 1.0).unwrap();
        assert!((frame as i64 - 10).abs() <= 1);
    }

    #[test]
    fn test_overflowing_start_index_yields_no_frame() {
        assert_eq!(frame_for_progress(0.0, usize::MAX, 2), Some(usize::MAX));
        assert_eq!(frame_for_progress(1.0, usize::MAX, 2), None);
        assert_eq!(frame_for_progress(1.0, usize::MAX - 1, 2), Some(usize::MAX));

        let cfg = config(usize::MAX, 3, 1.0);
        assert_eq!(cfg.last_index(), None);

        let mut canvas = SpriteCanvas::new(cfg);
        assert_eq!(canvas.take_pending_request(), Some(usize::MAX));
        assert_eq!(canvas.sync_progress(1.0), None);
        assert_eq!(canvas.take_pending_request(), None);
        // recovers once the loop wraps back into range
        assert_eq!(canvas.sync_progress(0.0), Some(usize::MAX));
    }

    #[test]
    fn test_pending_request_only_on_change() {
        let mut canvas = SpriteCanvas::new(config(2, 4, 1.0));
        assert_eq!(canvas.take_pending_request(), Some(2));
        assert_eq!(canvas.take_pending_request(), None);
        canvas.sync_progress(1.0);
        assert_eq!(canvas.take_pending_request(), Some(5));
        assert_eq!(canvas.take_pending_request(), None);
    }

    #[test]
    fn test_config_deserializes_camel_case() {
        let json = r#"{"startIndex":1,"numImages":4,"duration":1.5,"size":120,"top":10.0,"left":20.5,"zIndex":3}"#;
        let cfg: AnimationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.start_index, 1);
        assert_eq!(cfg.num_images, 4);
        assert_eq!(cfg.size, 120);
        assert_eq!(cfg.z_index, 3);
        assert_eq!(cfg.last_index(), Some(4));
    }

    #[test]
    fn test_config_requires_every_field() {
        let json = r#"{"startIndex":1,"numImages":4,"duration":1.5,"size":120,"top":10.0,"left":20.5}"#;
        assert!(serde_json::from_str::<AnimationConfig>(json).is_err());
    }
}
