//! Page-space placement of a sprite canvas.
//!
//! Canvases are positioned in percent of their containing region, the way
//! absolutely positioned elements are. The region itself starts `region_y`
//! pixels below the top of the scroll content and spans the page width.

use bevy_ecs::prelude::Component;

/// Placement relative to a containing region.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PagePosition {
    /// Percent of the region height.
    pub top: f32,
    /// Percent of the region width.
    pub left: f32,
    /// Top of the region in content pixels.
    pub region_y: f32,
}

impl PagePosition {
    pub fn new(top: f32, left: f32, region_y: f32) -> Self {
        Self {
            top,
            left,
            region_y,
        }
    }

    /// Top-left corner in content pixels for a region of `width × height`.
    pub fn resolve(&self, width: f32, height: f32) -> (f32, f32) {
        let x = width * self.left / 100.0;
        let y = self.region_y + height * self.top / 100.0;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_percentages() {
        let p = PagePosition::new(50.0, 25.0, 0.0);
        assert_eq!(p.resolve(800.0, 600.0), (200.0, 300.0));
    }

    #[test]
    fn test_resolve_adds_region_offset() {
        let p = PagePosition::new(10.0, 0.0, 300.0);
        assert_eq!(p.resolve(1000.0, 1000.0), (0.0, 400.0));
    }
}
