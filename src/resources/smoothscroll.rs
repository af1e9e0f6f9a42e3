//! Smooth-scroll controller for the page's content region.
//!
//! The wheel moves a `target` offset; each frame `current` eases toward it.
//! Both are clamped to the scrollable range, which is re-measured with
//! [`SmoothScroll::resize`] whenever the window or content changes.
//!
//! The controller exists only while the page is mounted:
//! [`mount_scroll_container`] inserts it and [`destroy_scroll_container`]
//! removes it. Canvases may mount and unmount any number of times in between.

use bevy_ecs::prelude::*;

/// How far a wheel notch scrolls before the multiplier, in pixels.
pub const WHEEL_STEP: f32 = 60.0;
/// Scales [`ParallaxSpeed`](crate::components::parallax::ParallaxSpeed) into pixels per scrolled pixel.
pub const PARALLAX_SCALE: f32 = 0.1;

/// Eased scroll offset of the content region.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    /// Offset currently shown, in pixels.
    pub current: f32,
    /// Offset the controller eases toward.
    pub target: f32,
    /// Fraction of the remaining distance covered per 60 Hz frame.
    pub lerp: f32,
    /// Wheel sensitivity.
    pub multiplier: f32,
    pub content_height: f32,
    pub viewport_height: f32,
}

impl SmoothScroll {
    pub fn new(lerp: f32, multiplier: f32) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            lerp: lerp.clamp(0.01, 1.0),
            multiplier,
            content_height: 0.0,
            viewport_height: 0.0,
        }
    }

    /// Largest valid offset.
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Re-measure the region and clamp both offsets.
    pub fn resize(&mut self, content_height: f32, viewport_height: f32) {
        self.content_height = content_height.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        let max = self.max_scroll();
        self.target = self.target.clamp(0.0, max);
        self.current = self.current.clamp(0.0, max);
    }

    /// Apply a wheel movement (positive = scroll up, raylib convention).
    pub fn scroll_wheel(&mut self, wheel: f32) {
        self.scroll_by(-wheel * WHEEL_STEP);
    }

    /// Move the target by `delta` pixels, scaled by the multiplier.
    pub fn scroll_by(&mut self, delta: f32) {
        self.target = (self.target + delta * self.multiplier).clamp(0.0, self.max_scroll());
    }

    /// Ease `current` toward `target` and return the new offset.
    pub fn update(&mut self, dt: f32) -> f32 {
        let frames = (dt.max(0.0) * 60.0).min(60.0);
        let keep = (1.0 - self.lerp).powf(frames);
        self.current = self.target + (self.current - self.target) * keep;
        if (self.current - self.target).abs() < 0.05 {
            self.current = self.target;
        }
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

/// Insert the controller over the content region.
pub fn mount_scroll_container(world: &mut World, lerp: f32, multiplier: f32) {
    log::info!("Scroll container mounted (lerp={}, multiplier={})", lerp, multiplier);
    world.insert_resource(SmoothScroll::new(lerp, multiplier));
}

/// Tear the controller down.
pub fn destroy_scroll_container(world: &mut World) {
    if world.remove_resource::<SmoothScroll>().is_some() {
        log::info!("Scroll container destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroller() -> SmoothScroll {
        let mut s = SmoothScroll::new(0.1, 1.0);
        s.resize(2000.0, 500.0);
        s
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut s = scroller();
        s.scroll_by(-100.0);
        assert_eq!(s.target, 0.0);
        s.scroll_by(5000.0);
        assert_eq!(s.target, 1500.0);
    }

    #[test]
    fn test_wheel_down_scrolls_forward() {
        let mut s = scroller();
        s.scroll_wheel(-1.0);
        assert_eq!(s.target, WHEEL_STEP);
    }

    #[test]
    fn test_multiplier_scales_delta() {
        let mut s = SmoothScroll::new(0.1, 2.0);
        s.resize(2000.0, 500.0);
        s.scroll_by(100.0);
        assert_eq!(s.target, 200.0);
    }

    #[test]
    fn test_update_eases_toward_target() {
        let mut s = scroller();
        s.scroll_by(1000.0);
        let first = s.update(1.0 / 60.0);
        assert!(first > 0.0 && first < 1000.0);
        let second = s.update(1.0 / 60.0);
        assert!(second > first && second < 1000.0);
        for _ in 0..2000 {
            s.update(1.0 / 60.0);
        }
        assert!(s.is_settled());
        assert_eq!(s.current, 1000.0);
    }

    #[test]
    fn test_lerp_one_snaps() {
        let mut s = SmoothScroll::new(1.0, 1.0);
        s.resize(1000.0, 100.0);
        s.scroll_by(300.0);
        assert_eq!(s.update(1.0 / 60.0), 300.0);
    }

    #[test]
    fn test_resize_reclamps() {
        let mut s = scroller();
        s.scroll_by(1500.0);
        s.update(10.0);
        s.resize(800.0, 500.0);
        assert_eq!(s.target, 300.0);
        assert_eq!(s.current, 300.0);
    }

    #[test]
    fn test_short_content_cannot_scroll() {
        let mut s = SmoothScroll::new(0.1, 1.0);
        s.resize(300.0, 500.0);
        s.scroll_by(100.0);
        assert_eq!(s.max_scroll(), 0.0);
        assert_eq!(s.target, 0.0);
    }

    #[test]
    fn test_mount_and_destroy() {
        let mut world = World::new();
        mount_scroll_container(&mut world, 0.2, 1.0);
        assert!(world.contains_resource::<SmoothScroll>());
        destroy_scroll_container(&mut world);
        assert!(!world.contains_resource::<SmoothScroll>());
        destroy_scroll_container(&mut world);
    }
}
