//! Configuration change detection system.
//!
//! Monitors [`AppConfig`] for changes and applies settings to the window and
//! the smooth-scroll controller.

use crate::resources::appconfig::AppConfig;
use crate::resources::smoothscroll::SmoothScroll;
use bevy_ecs::prelude::*;
use raylib::ffi;

/// Copy scroll tuning from the config into the controller.
pub fn apply_scroll_tuning(config: &AppConfig, scroll: &mut SmoothScroll) {
    scroll.lerp = config.scroll_lerp.clamp(0.01, 1.0);
    scroll.multiplier = config.scroll_multiplier;
}

/// System that applies configuration changes.
///
/// Runs the first frame after insertion and whenever the resource changes.
pub fn apply_config_changes(
    maybe_config: Option<Res<AppConfig>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    scroll: Option<ResMut<SmoothScroll>>,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !config.is_changed() {
        return;
    }

    if let Some(mut scroll) = scroll {
        apply_scroll_tuning(&config, &mut scroll);
    }

    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }
    rl.set_target_fps(config.target_fps);

    log::info!(
        "Config applied: fps={}, vsync={}",
        config.target_fps,
        config.vsync
    );
}
