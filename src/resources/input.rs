//! Per-frame input resource.
//!
//! Captures the keys and pointer state the page cares about and exposes it
//! to systems via the [`InputState`] resource.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Pointer state for the current frame, in screen pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    /// Primary button went down this frame.
    pub just_pressed: bool,
    /// Wheel movement this frame (positive = up).
    pub wheel: f32,
}

/// Resource capturing the per-frame input relevant to the page.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub toggle_theme: BoolState,
    pub toggle_animations: BoolState,
    pub mode_debug: BoolState,
    pub scroll_down: BoolState,
    pub scroll_up: BoolState,
    pub pointer: PointerState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            toggle_theme: BoolState::bound_to(KeyboardKey::KEY_T),
            toggle_animations: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            scroll_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            scroll_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            pointer: PointerState::default(),
        }
    }
}
