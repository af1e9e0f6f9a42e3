//! Page systems.
//!
//! This module groups all ECS systems that advance playback, input, scrolling
//! and rendering.
//!
//! Submodules overview
//! - [`appconfig`] – apply [`crate::resources::appconfig::AppConfig`] changes to the window and scroll
//! - [`canvasmount`] – mount and unmount sprite canvases from the layout
//! - [`imageloader`] – bridge with the image loader thread (poll/update message queues)
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`pagelayout`] – recompute region rectangles on resize
//! - [`render`] – upload canvas textures and draw the page using Raylib
//! - [`scroll`] – drive the smooth-scroll controller
//! - [`spritecanvas`] – request frames for canvases and draw loaded ones
//! - [`time`] – update simulation time and delta
//! - [`tween`] – advance progress drivers

pub mod appconfig;
pub mod canvasmount;
pub mod imageloader;
pub mod input;
pub mod pagelayout;
pub mod render;
pub mod scroll;
pub mod spritecanvas;
pub mod time;
pub mod tween;
