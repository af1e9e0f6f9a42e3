//! Page-level toggles.
//!
//! [`PageToggles`] is owned by the page shell and read by everything that
//! depends on the theme or on whether canvases are mounted. Toggling never
//! mutates the value in place: the observers in
//! [`crate::events::toggle`] insert a fresh value built with
//! [`PageToggles::with_dark_mode`] / [`PageToggles::with_animations`].

use bevy_ecs::prelude::Resource;

/// Theme and animation gate. Not persisted.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageToggles {
    pub dark_mode: bool,
    pub animations_enabled: bool,
}

impl Default for PageToggles {
    fn default() -> Self {
        Self {
            dark_mode: true,
            animations_enabled: false,
        }
    }
}

impl PageToggles {
    pub fn with_dark_mode(self, dark_mode: bool) -> Self {
        Self { dark_mode, ..self }
    }

    pub fn with_animations(self, animations_enabled: bool) -> Self {
        Self {
            animations_enabled,
            ..self
        }
    }

    /// Label of the theme button: names the mode it switches to.
    pub fn theme_button_label(&self) -> &'static str {
        if self.dark_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}
