//! Event types and observers used by the page.
//!
//! Submodules:
//! - [`imageloader`] – commands and results exchanged with the loader thread
//! - [`switchdebug`] – toggle the diagnostics overlay on/off
//! - [`toggle`] – theme and animation toggles of the page shell
pub mod imageloader;
pub mod switchdebug;
pub mod toggle;
