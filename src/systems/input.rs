//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from raylib each frame and
//!   writes the results into [`InputState`]. Keyboard shortcuts trigger
//!   their events directly.
//! - [`pointer_click_system`] resolves pointer presses against the
//!   [`PageLayout`]: the navigation button toggles the theme, the hero block
//!   toggles the canvases.
use bevy_ecs::prelude::*;
use raylib::ffi::{KeyboardKey, MouseButton};

use crate::events::switchdebug::SwitchDebugEvent;
use crate::events::toggle::{ToggleAnimationsEvent, ToggleThemeEvent};
use crate::resources::input::{BoolState, InputState};
use crate::resources::pagelayout::{PageHit, PageLayout};
use crate::resources::smoothscroll::SmoothScroll;

/// Poll raylib for keyboard and pointer input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let is_key_down = |key: KeyboardKey| rl.is_key_down(key);
    let is_key_pressed = |key: KeyboardKey| rl.is_key_pressed(key);

    let poll = |state: &mut BoolState| {
        state.active = is_key_down(state.key_binding);
        state.just_pressed = is_key_pressed(state.key_binding);
    };
    poll(&mut input.toggle_theme);
    poll(&mut input.toggle_animations);
    poll(&mut input.mode_debug);
    poll(&mut input.scroll_down);
    poll(&mut input.scroll_up);

    let mouse = rl.get_mouse_position();
    input.pointer.x = mouse.x;
    input.pointer.y = mouse.y;
    input.pointer.just_pressed = rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
    input.pointer.wheel = rl.get_mouse_wheel_move();

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
    if input.toggle_theme.just_pressed {
        commands.trigger(ToggleThemeEvent {});
    }
    if input.toggle_animations.just_pressed {
        commands.trigger(ToggleAnimationsEvent {});
    }
}

/// Trigger page toggles for pointer presses.
pub fn pointer_click_system(
    input: Res<InputState>,
    layout: Res<PageLayout>,
    scroll: Option<Res<SmoothScroll>>,
    mut commands: Commands,
) {
    if !input.pointer.just_pressed {
        return;
    }
    let offset = scroll.map(|s| s.current).unwrap_or(0.0);
    match layout.hit_test(input.pointer.x, input.pointer.y, offset) {
        Some(PageHit::ThemeButton) => commands.trigger(ToggleThemeEvent {}),
        Some(PageHit::Hero) => commands.trigger(ToggleAnimationsEvent {}),
        None => {}
    }
}
