//! Debug toggle resource.
//!
//! The mere presence of this resource enables the diagnostics overlay (FPS,
//! mounted canvases, scroll offsets). Remove it to disable.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws the overlay.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
