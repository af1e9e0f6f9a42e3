//! Smooth scroll system.
//!
//! Feeds wheel and arrow-key input into the
//! [`SmoothScroll`](crate::resources::smoothscroll::SmoothScroll) controller,
//! keeps its measurements in sync with the page layout and eases the offset.
//! Does nothing while the scroll container is not mounted.

use bevy_ecs::prelude::*;

use crate::resources::input::InputState;
use crate::resources::pagelayout::PageLayout;
use crate::resources::smoothscroll::SmoothScroll;
use crate::resources::worldtime::WorldTime;

/// Pixels per second scrolled while an arrow key is held.
const KEY_SCROLL_SPEED: f32 = 600.0;

pub fn smooth_scroll_system(
    input: Res<InputState>,
    time: Res<WorldTime>,
    layout: Res<PageLayout>,
    scroll: Option<ResMut<SmoothScroll>>,
) {
    let Some(mut scroll) = scroll else {
        return;
    };
    if scroll.content_height != layout.content_height
        || scroll.viewport_height != layout.viewport_height
    {
        scroll.resize(layout.content_height, layout.viewport_height);
    }
    if input.pointer.wheel != 0.0 {
        scroll.scroll_wheel(input.pointer.wheel);
    }
    let mut keys = 0.0;
    if input.scroll_down.active {
        keys += 1.0;
    }
    if input.scroll_up.active {
        keys -= 1.0;
    }
    if keys != 0.0 {
        scroll.scroll_by(keys * KEY_SCROLL_SPEED * time.delta);
    }
    if !scroll.is_settled() {
        scroll.update(time.delta);
    }
}
