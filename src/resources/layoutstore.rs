//! Canvas layout data.
//!
//! Static per-instance animation parameters grouped into page sections. A
//! section is a region of the scroll content that starts `offset_y` pixels
//! from the top; its canvases are positioned in percent of that region and
//! get `z_offset` added to their own z-index.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "sections": [
//!     {
//!       "offset_y": 0.0,
//!       "z_offset": 100,
//!       "canvases": [
//!         { "startIndex": 0, "numImages": 60, "duration": 2.0, "size": 180,
//!           "top": 5.0, "left": 60.0, "zIndex": 1 }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::components::spritecanvas::AnimationConfig;

/// A region of the page holding a group of canvases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasSection {
    /// Top of the region in content pixels.
    #[serde(default)]
    pub offset_y: f32,
    /// Added to every canvas z-index in this section.
    #[serde(default)]
    pub z_offset: i32,
    pub canvases: Vec<AnimationConfig>,
}

/// All canvas sections of the page.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutStore {
    pub sections: Vec<CanvasSection>,
}

impl LayoutStore {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read layout {}: {}", path.display(), e))?;
        Self::from_json(&content)
            .map_err(|e| format!("Failed to parse layout {}: {}", path.display(), e))
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Every canvas with its section, in declaration order.
    pub fn iter_canvases(&self) -> impl Iterator<Item = (&CanvasSection, &AnimationConfig)> {
        self.sections
            .iter()
            .flat_map(|section| section.canvases.iter().map(move |c| (section, c)))
    }

    pub fn canvas_count(&self) -> usize {
        self.sections.iter().map(|s| s.canvases.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = r#"{
        "sections": [
            { "offset_y": 0.0, "z_offset": 100, "canvases": [
                { "startIndex": 0, "numImages": 10, "duration": 1.0, "size": 100, "top": 0.0, "left": 10.0, "zIndex": 1 },
                { "startIndex": 10, "numImages": 5, "duration": 2.0, "size": 50, "top": 20.0, "left": 30.0, "zIndex": 2 }
            ]},
            { "offset_y": 300.0, "canvases": [
                { "startIndex": 3, "numImages": 1, "duration": 0.5, "size": 80, "top": 40.0, "left": 70.0, "zIndex": 0 }
            ]}
        ]
    }"#;

    #[test]
    fn test_parse_sections() {
        let layout = LayoutStore::from_json(LAYOUT).unwrap();
        assert_eq!(layout.sections.len(), 2);
        assert_eq!(layout.canvas_count(), 3);
        assert_eq!(layout.sections[1].z_offset, 0);
        assert_eq!(layout.sections[1].offset_y, 300.0);
    }

    #[test]
    fn test_iter_keeps_declaration_order() {
        let layout = LayoutStore::from_json(LAYOUT).unwrap();
        let starts: Vec<usize> = layout.iter_canvases().map(|(_, c)| c.start_index).collect();
        assert_eq!(starts, vec![0, 10, 3]);
    }

    #[test]
    fn test_missing_canvas_field_is_rejected() {
        let bad = r#"{ "sections": [ { "canvases": [ { "startIndex": 0 } ] } ] }"#;
        assert!(LayoutStore::from_json(bad).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(LayoutStore::load_from_file("/definitely/not/here.json").is_err());
    }
}
