//! Page geometry.
//!
//! [`PageLayout`] places the page regions (navigation bar, banner, hero,
//! footer) for the current window size. Everything except the navigation bar
//! lives in *content* coordinates: y grows down from the top of the scroll
//! content, and the screen shows `content_y - scroll`.
//!
//! The canvas container spans the banner and hero, the way the scroll
//! container does on the original page; the footer sits below it.

use bevy_ecs::prelude::Resource;

/// Height of the fixed navigation bar.
pub const NAV_HEIGHT: f32 = 64.0;
/// Space above the banner so it starts below the navigation bar.
pub const CONTENT_PADDING_TOP: f32 = 80.0;
pub const BANNER_HEIGHT: f32 = 260.0;
pub const HERO_HEIGHT: f32 = 460.0;
pub const FOOTER_HEIGHT: f32 = 340.0;
/// Scroll slack below the hero so canvases further down can be reached.
pub const CONTAINER_TAIL: f32 = 240.0;
const THEME_BUTTON_WIDTH: f32 = 132.0;
const THEME_BUTTON_HEIGHT: f32 = 32.0;

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// What a pointer press landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageHit {
    ThemeButton,
    Hero,
}

/// Region rectangles for the current window.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub viewport_height: f32,
    /// Fixed, screen coordinates.
    pub nav: Rect,
    /// Fixed, screen coordinates.
    pub theme_button: Rect,
    pub banner: Rect,
    pub hero: Rect,
    /// Height of the region canvases are positioned in.
    pub container_height: f32,
    pub footer: Rect,
    /// Total scrollable height.
    pub content_height: f32,
}

impl PageLayout {
    pub fn compute(width: f32, viewport_height: f32) -> Self {
        let width = width.max(1.0);
        let nav = Rect::new(0.0, 0.0, width, NAV_HEIGHT);
        let theme_button = Rect::new(
            (width - THEME_BUTTON_WIDTH - 24.0).max(0.0),
            (NAV_HEIGHT - THEME_BUTTON_HEIGHT) / 2.0,
            THEME_BUTTON_WIDTH,
            THEME_BUTTON_HEIGHT,
        );
        let banner = Rect::new(0.0, CONTENT_PADDING_TOP, width, BANNER_HEIGHT);
        let hero = Rect::new(0.0, banner.bottom(), width, HERO_HEIGHT);
        let container_height = hero.bottom() + CONTAINER_TAIL;
        let footer = Rect::new(0.0, container_height, width, FOOTER_HEIGHT);
        Self {
            width,
            viewport_height: viewport_height.max(0.0),
            nav,
            theme_button,
            banner,
            hero,
            container_height,
            content_height: footer.bottom(),
            footer,
        }
    }

    /// Screen y of a content y.
    pub fn to_screen_y(&self, content_y: f32, scroll: f32) -> f32 {
        content_y - scroll
    }

    /// Resolve a press at screen position `(x, y)` with the given scroll.
    ///
    /// The navigation bar is on top of the content, so presses inside it never
    /// reach the hero.
    pub fn hit_test(&self, x: f32, y: f32, scroll: f32) -> Option<PageHit> {
        if self.nav.contains(x, y) {
            return self
                .theme_button
                .contains(x, y)
                .then_some(PageHit::ThemeButton);
        }
        if self.hero.contains(x, y + scroll) {
            return Some(PageHit::Hero);
        }
        None
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::compute(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_stack_without_gaps() {
        let l = PageLayout::compute(1000.0, 600.0);
        assert_eq!(l.banner.y, CONTENT_PADDING_TOP);
        assert_eq!(l.hero.y, l.banner.bottom());
        assert_eq!(l.footer.y, l.container_height);
        assert_eq!(l.content_height, l.footer.bottom());
    }

    #[test]
    fn test_theme_button_is_inside_nav() {
        let l = PageLayout::compute(1000.0, 600.0);
        let b = l.theme_button;
        assert!(l.nav.contains(b.x, b.y));
        assert!(l.nav.contains(b.x + b.w - 1.0, b.bottom() - 1.0));
    }

    #[test]
    fn test_hit_theme_button() {
        let l = PageLayout::compute(1000.0, 600.0);
        let b = l.theme_button;
        assert_eq!(
            l.hit_test(b.x + 1.0, b.y + 1.0, 500.0),
            Some(PageHit::ThemeButton)
        );
        assert_eq!(l.hit_test(10.0, 10.0, 0.0), None);
    }

    #[test]
    fn test_hit_hero_accounts_for_scroll() {
        let l = PageLayout::compute(1000.0, 600.0);
        let y = l.hero.y + 10.0;
        assert_eq!(l.hit_test(500.0, y, 0.0), Some(PageHit::Hero));
        // scrolled by 200: the hero is drawn 200px higher
        assert_eq!(l.hit_test(500.0, y - 200.0, 200.0), Some(PageHit::Hero));
        assert_eq!(l.hit_test(500.0, l.hero.bottom() + 5.0, 0.0), None);
    }

    #[test]
    fn test_nav_shadows_content() {
        let l = PageLayout::compute(1000.0, 600.0);
        // hero scrolled under the nav bar
        let scroll = l.hero.y;
        assert_eq!(l.hit_test(100.0, 10.0, scroll), None);
    }
}
