//! Application configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and a method to load configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//! vsync = true
//!
//! [page]
//! frames = ./assets/frames/frames.json
//! layout = ./assets/layout.json
//! dark_mode = true
//! animations_enabled = false
//!
//! [scroll]
//! lerp = 0.1
//! multiplier = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FRAMES_PATH: &str = "./assets/frames/frames.json";
const DEFAULT_LAYOUT_PATH: &str = "./assets/layout.json";
const DEFAULT_DARK_MODE: bool = true;
const DEFAULT_ANIMATIONS_ENABLED: bool = false;
const DEFAULT_SCROLL_LERP: f32 = 0.1;
const DEFAULT_SCROLL_MULTIPLIER: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Application configuration resource.
///
/// Stores window settings, asset locations, initial page toggles and the
/// smooth-scroll tuning. The
/// [`apply_config_changes`](crate::systems::appconfig::apply_config_changes)
/// system pushes changes into the running page.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Frame manifest or directory of frames.
    pub frames_path: PathBuf,
    /// Canvas layout file.
    pub layout_path: PathBuf,
    /// Initial theme.
    pub dark_mode: bool,
    /// Initial animation gate.
    pub animations_enabled: bool,
    /// Smooth-scroll easing factor.
    pub scroll_lerp: f32,
    /// Wheel sensitivity.
    pub scroll_multiplier: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            frames_path: PathBuf::from(DEFAULT_FRAMES_PATH),
            layout_path: PathBuf::from(DEFAULT_LAYOUT_PATH),
            dark_mode: DEFAULT_DARK_MODE,
            animations_enabled: DEFAULT_ANIMATIONS_ENABLED,
            scroll_lerp: DEFAULT_SCROLL_LERP,
            scroll_multiplier: DEFAULT_SCROLL_MULTIPLIER,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [page] section
        if let Some(frames) = config.get("page", "frames") {
            self.frames_path = PathBuf::from(frames);
        }
        if let Some(layout) = config.get("page", "layout") {
            self.layout_path = PathBuf::from(layout);
        }
        if let Some(dark) = config.getbool("page", "dark_mode").ok().flatten() {
            self.dark_mode = dark;
        }
        if let Some(enabled) = config.getbool("page", "animations_enabled").ok().flatten() {
            self.animations_enabled = enabled;
        }

        // [scroll] section
        if let Some(lerp) = config.getfloat("scroll", "lerp").ok().flatten() {
            self.scroll_lerp = lerp as f32;
        }
        if let Some(multiplier) = config.getfloat("scroll", "multiplier").ok().flatten() {
            self.scroll_multiplier = multiplier as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, vsync={}, frames={:?}, layout={:?}, scroll lerp={} x{}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.frames_path,
            self.layout_path,
            self.scroll_lerp,
            self.scroll_multiplier
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
