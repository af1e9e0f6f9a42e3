//! Page toggle events.
//!
//! [`ToggleThemeEvent`] and [`ToggleAnimationsEvent`] are triggered by the
//! navigation button, the hero block and keyboard shortcuts. Their observers
//! replace [`PageToggles`] with a new value rather than editing it, so every
//! reader sees either the old or the new toggles, never a mix.
//!
//! Flipping `animations_enabled` is what mounts and unmounts the sprite
//! canvases; see [`crate::systems::canvasmount::sync_canvas_mounts`].
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::resources::pagetoggles::PageToggles;

/// Switch between dark and light theme.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleThemeEvent {}

/// Enable or disable the sprite canvases.
#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleAnimationsEvent {}

pub fn toggle_theme_observer(
    _trigger: On<ToggleThemeEvent>,
    mut commands: Commands,
    toggles: Res<PageToggles>,
) {
    let next = toggles.with_dark_mode(!toggles.dark_mode);
    log::info!("Theme: {}", if next.dark_mode { "dark" } else { "light" });
    commands.insert_resource(next);
}

pub fn toggle_animations_observer(
    _trigger: On<ToggleAnimationsEvent>,
    mut commands: Commands,
    toggles: Res<PageToggles>,
) {
    let next = toggles.with_animations(!toggles.animations_enabled);
    log::info!("Animations enabled: {}", next.animations_enabled);
    commands.insert_resource(next);
}
