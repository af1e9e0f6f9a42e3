//! Page layout system.
//!
//! Recomputes [`PageLayout`] when the window size changes.

use bevy_ecs::prelude::*;

use crate::resources::pagelayout::PageLayout;
use crate::resources::screensize::ScreenSize;

pub fn update_page_layout(screen: Res<ScreenSize>, mut layout: ResMut<PageLayout>) {
    if !screen.is_changed() {
        return;
    }
    let next = PageLayout::compute(screen.w as f32, screen.h as f32);
    if *layout != next {
        log::debug!("Page layout for {}x{}", screen.w, screen.h);
        *layout = next;
    }
}
