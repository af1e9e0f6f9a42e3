//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: configuration, timing, page state,
//! asset lists and the loader bridge.
//!
//! Overview
//! - `appconfig` – INI-backed window, asset and scroll settings
//! - `canvastextures` – GPU textures for mounted canvases (non-send)
//! - `debugmode` – presence toggles the diagnostics overlay
//! - `framelist` – the global, read-only image-frame list
//! - `imageloader` – bridge and channels for the background image loader
//! - `input` – per-frame keyboard and pointer state
//! - `layoutstore` – static canvas layout sections
//! - `pagelayout` – page region geometry for the current window
//! - `pagetoggles` – theme and animation gate
//! - `screensize` – current window dimensions in pixels
//! - `smoothscroll` – eased scroll offset of the content region
//! - `worldtime` – frame time and delta
pub mod appconfig;
pub mod canvastextures;
pub mod debugmode;
pub mod framelist;
pub mod imageloader;
pub mod input;
pub mod layoutstore;
pub mod pagelayout;
pub mod pagetoggles;
pub mod screensize;
pub mod smoothscroll;
pub mod worldtime;
