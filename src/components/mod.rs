//! ECS components for page entities.
//!
//! Every mounted sprite canvas is one entity carrying the components below.
//!
//! Submodules overview:
//! - [`canvassurface`] – the square RGBA surface a canvas draws into
//! - [`pageposition`] – percent-based placement inside a page region
//! - [`parallax`] – per-canvas scroll coupling coefficient
//! - [`spritecanvas`] – animation parameters and frame selection
//! - [`tween`] – looping progress driver
//! - [`zindex`] – stacking order hint for drawing

pub mod canvassurface;
pub mod pageposition;
pub mod parallax;
pub mod spritecanvas;
pub mod tween;
pub mod zindex;
