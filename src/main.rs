//! Sprite canvas page main entry point.
//!
//! A scrolling demo page written in Rust using:
//! - **raylib** for windowing, input, text and textures
//! - **bevy_ecs** for entity-component-system architecture
//! - **image** on a background thread for decoding sprite frames
//!
//! The page has a fixed navigation bar with a theme button, a banner, a hero
//! block and a footer. Clicking the hero (or pressing Space) mounts a set of
//! sprite canvases that loop through image sequences and drift with the
//! scroll position.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (sprite canvas, progress driver, surface, etc.)
//! - [`events`] – Event types (toggles, debug switch, loader messages)
//! - [`resources`] – ECS resources (config, frame list, layout, scroll, etc.)
//! - [`systems`] – ECS systems (playback, loading, input, scrolling, rendering)
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, the frame list and the canvas layout
//! 2. Initialize raylib window, ECS world, resources and the loader thread
//! 3. Register observers and systems
//! 4. Run the main loop:
//!    - Update input, toggles, layout and scroll
//!    - Mount/unmount canvases, advance progress, request and draw frames
//!    - Render the page
//! 5. Destroy the scroll container and stop the loader thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --generate-demo-frames
//! cargo run --release -- --animations
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod demoframes;
mod events;
mod resources;
mod systems;

use crate::components::canvassurface::CanvasSurface;
use crate::events::switchdebug::switch_debug_observer;
use crate::events::toggle::{toggle_animations_observer, toggle_theme_observer};
use crate::resources::appconfig::AppConfig;
use crate::resources::canvastextures::CanvasTextures;
use crate::resources::framelist::FrameList;
use crate::resources::imageloader::{FileImageSource, setup_image_loader, shutdown_image_loader};
use crate::resources::input::InputState;
use crate::resources::layoutstore::LayoutStore;
use crate::resources::pagelayout::PageLayout;
use crate::resources::pagetoggles::PageToggles;
use crate::resources::screensize::ScreenSize;
use crate::resources::smoothscroll::{destroy_scroll_container, mount_scroll_container};
use crate::resources::worldtime::WorldTime;
use crate::systems::appconfig::apply_config_changes;
use crate::systems::canvasmount::sync_canvas_mounts;
use crate::systems::imageloader::{poll_loader_messages, update_loader_messages};
use crate::systems::input::{pointer_click_system, update_input_state};
use crate::systems::pagelayout::update_page_layout;
use crate::systems::render::{render_system, upload_canvas_textures};
use crate::systems::scroll::smooth_scroll_system;
use crate::systems::spritecanvas::{apply_loaded_frames, sprite_frame_system};
use crate::systems::time::update_world_time;
use crate::systems::tween::tween_progress_system;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Sprite canvas demo page
#[derive(Parser)]
#[command(version, about = "Scrolling demo page with animated sprite-sequence canvases.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Start with the sprite canvases mounted.
    #[arg(long)]
    animations: bool,

    /// Start in light mode.
    #[arg(long)]
    light: bool,

    /// Write a synthetic PNG sequence and frames.json, then exit.
    /// Optionally provide a directory (default: assets/frames).
    #[arg(long, value_name = "DIR")]
    generate_demo_frames: Option<Option<PathBuf>>,

    /// Number of frames written by --generate-demo-frames.
    #[arg(long, value_name = "N", default_value_t = 60)]
    frame_count: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: generate demo frames and quit (no window needed)
    if let Some(maybe_dir) = cli.generate_demo_frames {
        let dir = maybe_dir.unwrap_or_else(|| PathBuf::from("assets/frames"));
        match demoframes::write_demo_frames(&dir, cli.frame_count, demoframes::DEMO_FRAME_SIZE) {
            Ok(count) => println!("{} demo frames written to {}", count, dir.display()),
            Err(e) => {
                eprintln!("Error generating demo frames: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // --------------- Config & page assets ---------------
    let mut config = AppConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    let frames = FrameList::load(&config.frames_path).unwrap_or_else(|e| {
        log::error!("{}", e);
        FrameList::default()
    });
    log::info!("Frame list: {} frames", frames.len());

    let layout = LayoutStore::load_from_file(&config.layout_path).unwrap_or_else(|e| {
        log::error!("{}", e);
        LayoutStore::default()
    });
    log::info!("Layout: {} canvases", layout.canvas_count());

    let toggles = PageToggles::default()
        .with_dark_mode(config.dark_mode && !cli.light)
        .with_animations(config.animations_enabled || cli.animations);

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Sprite Canvas")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(PageLayout::compute(
        rl.get_screen_width() as f32,
        rl.get_screen_height() as f32,
    ));
    world.insert_resource(InputState::default());
    world.insert_resource(toggles);
    world.insert_resource(frames);
    world.insert_resource(layout);

    // Loader must exist before any canvas can request a frame
    setup_image_loader(&mut world, FileImageSource);
    mount_scroll_container(&mut world, config.scroll_lerp, config.scroll_multiplier);
    world.insert_resource(config);

    world.insert_non_send_resource(CanvasTextures::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(toggle_theme_observer));
    world.spawn(Observer::new(toggle_animations_observer));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(apply_config_changes); // Must run early to apply config before other systems
    update.add_systems(update_input_state);
    update.add_systems(pointer_click_system.after(update_input_state));
    update.add_systems(update_page_layout);
    update.add_systems(
        smooth_scroll_system
            .after(update_input_state)
            .after(update_page_layout)
            .after(apply_config_changes),
    );
    update.add_systems(
        // canvas playback must be together
        (sync_canvas_mounts, tween_progress_system, sprite_frame_system)
            .chain()
            .after(pointer_click_system),
    );
    update.add_systems(
        // loader systems must be together
        (
            poll_loader_messages,
            update_loader_messages,
            apply_loaded_frames::<CanvasSurface>,
        )
            .chain()
            .after(sprite_frame_system),
    );
    update.add_systems(
        (upload_canvas_textures, render_system)
            .chain()
            .after(apply_loaded_frames::<CanvasSurface>)
            .after(smooth_scroll_system),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update screen size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        let size = ScreenSize { w: new_w, h: new_h };
        if *world.resource::<ScreenSize>() != size {
            world.insert_resource(size);
        }
    }
    destroy_scroll_container(&mut world);
    shutdown_image_loader(&mut world);
}
