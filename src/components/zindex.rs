//! Z-index component for canvas stacking.
//!
//! Sprite canvases are drawn in painter's order: lower [`ZIndex`] first,
//! higher values on top.

use bevy_ecs::prelude::Component;

/// Stacking order of a canvas inside the page.
///
/// A section's `z_offset` is already folded in when the canvas is mounted.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZIndex(pub i32);
