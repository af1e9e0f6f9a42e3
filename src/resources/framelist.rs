//! Global image-frame list.
//!
//! The ordered list of frame locators every sprite canvas indexes into. It is
//! loaded once at startup and shared read-only; cloning the resource only
//! clones the `Arc`.
//!
//! # Sources
//!
//! - a JSON manifest: an array of paths, relative to the manifest's directory
//!
//! ```json
//! ["frame_000.png", "frame_001.png", "frame_002.png"]
//! ```
//!
//! - a directory: every `png`/`jpg`/`jpeg` file, sorted by file name

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bevy_ecs::prelude::Resource;

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Read-only, index-addressable list of frame locators.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameList {
    frames: Arc<[PathBuf]>,
}

impl FrameList {
    pub fn new(frames: Vec<PathBuf>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// Load from a manifest file or a directory of images.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        if path.is_dir() {
            Self::from_dir(path)
        } else {
            Self::from_manifest(path)
        }
    }

    /// Parse a JSON manifest. Relative entries resolve against its directory.
    pub fn from_manifest(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read frame manifest {}: {}", path.display(), e))?;
        let entries: Vec<PathBuf> = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse frame manifest {}: {}", path.display(), e))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let frames = entries
            .into_iter()
            .map(|p| if p.is_absolute() { p } else { base.join(p) })
            .collect();
        Ok(Self::new(frames))
    }

    /// Collect image files from `dir`, sorted by file name.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, String> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir)
            .map_err(|e| format!("Failed to read frame directory {}: {}", dir.display(), e))?;
        let mut frames: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && has_image_extension(p))
            .collect();
        frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(Self::new(frames))
    }

    /// Locator at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.frames.get(index).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "spritecanvas_framelist_{}_{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_get_is_bounds_checked() {
        let list = FrameList::new(vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1), Some(Path::new("b.png")));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_clone_shares_storage() {
        let list = FrameList::new(vec![PathBuf::from("a.png")]);
        let other = list.clone();
        assert!(Arc::ptr_eq(&list.frames, &other.frames));
    }

    #[test]
    fn test_manifest_resolves_relative_paths() {
        let dir = scratch_dir("manifest");
        let manifest = dir.join("frames.json");
        std::fs::write(&manifest, r#"["f0.png", "sub/f1.png"]"#).unwrap();
        let list = FrameList::load(&manifest).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Some(dir.join("f0.png").as_path()));
        assert_eq!(list.get(1), Some(dir.join("sub/f1.png").as_path()));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_manifest_errors_are_reported() {
        let dir = scratch_dir("bad_manifest");
        let manifest = dir.join("frames.json");
        std::fs::write(&manifest, "{not json").unwrap();
        assert!(FrameList::load(&manifest).is_err());
        assert!(FrameList::load(dir.join("missing.json")).is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_dir_scan_sorts_and_filters() {
        let dir = scratch_dir("scan");
        for name in ["b.png", "a.PNG", "c.jpg", "notes.txt"] {
            std::fs::write(dir.join(name), b"x").unwrap();
        }
        let list = FrameList::load(&dir).unwrap();
        let names: Vec<_> = (0..list.len())
            .map(|i| list.get(i).unwrap().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.PNG", "b.png", "c.jpg"]);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
