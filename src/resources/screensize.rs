//! Screen size resource.
//!
//! Stores the current window dimensions in pixels. The page layout is
//! recomputed from it whenever the window is resized.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
