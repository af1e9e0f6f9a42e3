//! Page rendering.
//!
//! - [`upload_canvas_textures`] copies dirty canvas surfaces into raylib
//!   textures and releases textures of unmounted canvases.
//! - [`render_system`] draws the page: content background, canvases in
//!   z-order with their parallax offset, the banner and hero text, the
//!   footer, the fixed navigation bar, and the debug overlay on top.
//!
//! Canvases sit below all page text, as they do on the original page where
//! their containers are stacked under the banner and hero.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::canvassurface::CanvasSurface;
use crate::components::pageposition::PagePosition;
use crate::components::parallax::ParallaxSpeed;
use crate::components::spritecanvas::SpriteCanvas;
use crate::components::zindex::ZIndex;
use crate::resources::canvastextures::CanvasTextures;
use crate::resources::debugmode::DebugMode;
use crate::resources::framelist::FrameList;
use crate::resources::pagelayout::{PageLayout, Rect};
use crate::resources::pagetoggles::PageToggles;
use crate::resources::smoothscroll::{PARALLAX_SCALE, SmoothScroll};

const BRAND: &str = "Brand";
const NAV_LINKS: [&str; 3] = ["Home", "About", "Contact"];
const BANNER_LEAD: &str = "GSAP itself is completely framework-agnostic and can be used in any JS framework without any special wrappers or dependencies.";
const BANNER_DETAIL: &str = "Define a container as a scope in the config object to ensure that all GSAP selector text inside the the useGSAP() hook will be scoped to the descendants of that container.";
const BANNER_HINT: &str = "Scroll";
const HERO_TITLE: &str = "THE MAIN TEXT";
const HERO_WELCOME: &str = "Welcome to the demo page! Click on the MAIN TEXT above to enable the animated canvases!.";
const HERO_SCROLL: &str = "Scroll down to see the footer and more content.";
const FOOTER_BLURB: &str = "Creating immersive digital experiences with cutting-edge technology and innovative design solutions.";
const QUICK_LINKS: [&str; 5] = ["Home", "About", "Services", "Portfolio", "Contact"];
const SERVICES: [&str; 5] = ["Web Design", "Development", "UI/UX Design", "Branding", "Animation"];
const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];
const COPYRIGHT: &str = "(c) 2024 Brand. All rights reserved.";
/// Banner and hero scroll slightly slower than the page.
const TEXT_PARALLAX: ParallaxSpeed = ParallaxSpeed(-0.5);

/// Colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub content: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

/// Colors for the current toggles.
///
/// The content region turns red while canvases are enabled, whatever the theme.
pub fn palette(toggles: &PageToggles) -> Palette {
    let (background, text, muted, border) = if toggles.dark_mode {
        (
            Color::BLACK,
            Color::WHITE,
            Color::new(156, 163, 175, 255),
            Color::new(31, 41, 55, 255),
        )
    } else {
        (
            Color::WHITE,
            Color::BLACK,
            Color::new(75, 85, 99, 255),
            Color::new(229, 231, 235, 255),
        )
    };
    let content = if toggles.animations_enabled {
        Color::new(220, 38, 38, 255)
    } else {
        background
    };
    Palette {
        background,
        content,
        text,
        muted,
        border,
    }
}

/// Width estimate of `text` in raylib's default font.
pub fn text_width(text: &str, font_size: i32) -> i32 {
    (text.chars().count() as f32 * font_size as f32 * 0.6).ceil() as i32
}

/// Greedy word wrap. Words longer than `max_width` get a line of their own.
pub fn wrap_words(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", line, word);
        if measure(&candidate) <= max_width {
            line = candidate;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Screen rectangle of a canvas for the current scroll offset.
pub fn canvas_screen_rect(
    position: &PagePosition,
    speed: &ParallaxSpeed,
    size: u32,
    layout: &PageLayout,
    scroll: f32,
) -> Rect {
    let (x, y) = position.resolve(layout.width, layout.container_height);
    let y = layout.to_screen_y(y, scroll) + speed.offset(scroll, PARALLAX_SCALE);
    Rect::new(x, y, size as f32, size as f32)
}

/// Upload dirty surfaces and drop textures of unmounted canvases.
pub fn upload_canvas_textures(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut textures: NonSendMut<CanvasTextures>,
    mut surfaces: Query<(Entity, &mut CanvasSurface)>,
) {
    let released = textures.retain(|entity| surfaces.contains(entity));
    if released > 0 {
        log::debug!("Released {} canvas textures", released);
    }

    for (entity, mut surface) in surfaces.iter_mut() {
        if !surface.dirty {
            continue;
        }
        if textures.get(entity).is_none() {
            let size = surface.size() as i32;
            let blank = Image::gen_image_color(size, size, Color::BLANK);
            match rl.load_texture_from_image(&th, &blank) {
                Ok(texture) => textures.insert(entity, texture),
                Err(e) => {
                    log::error!("Failed to create canvas texture: {}", e);
                    continue;
                }
            }
        }
        if let Some(texture) = textures.get_mut(entity) {
            let result = texture.update_texture(surface.as_bytes());
            finish_upload(&mut surface, result);
        }
    }
}

/// Settle a surface after a texture upload.
///
/// A failed upload is logged and leaves the surface dirty so the next frame
/// retries it. Returns whether the upload went through.
pub fn finish_upload<E: std::fmt::Display>(
    surface: &mut CanvasSurface,
    result: Result<(), E>,
) -> bool {
    match result {
        Ok(()) => {
            surface.dirty = false;
            true
        }
        Err(e) => {
            log::error!("Failed to upload canvas texture: {}", e);
            false
        }
    }
}

/// Draw the whole page for this frame.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: NonSend<CanvasTextures>,
    toggles: Res<PageToggles>,
    layout: Res<PageLayout>,
    frames: Res<FrameList>,
    scroll: Option<Res<SmoothScroll>>,
    debug: Option<Res<DebugMode>>,
    canvases: Query<(Entity, &SpriteCanvas, &PagePosition, &ZIndex, &ParallaxSpeed)>,
) {
    let colors = palette(&toggles);
    let (offset, target) = scroll
        .as_ref()
        .map(|s| (s.current, s.target))
        .unwrap_or((0.0, 0.0));

    let mut to_draw: Vec<(Entity, Rect, ZIndex)> = canvases
        .iter()
        .map(|(entity, canvas, pos, z, speed)| {
            (
                entity,
                canvas_screen_rect(pos, speed, canvas.config.size, &layout, offset),
                *z,
            )
        })
        .filter(|(_, rect, _)| rect.bottom() >= 0.0 && rect.y <= layout.viewport_height)
        .collect();
    to_draw.sort_by_key(|(_, _, z)| *z);

    let mut d = rl.begin_drawing(&th);
    d.clear_background(colors.background);

    let container_top = layout.to_screen_y(0.0, offset);
    d.draw_rectangle(
        0,
        container_top as i32,
        layout.width as i32,
        layout.container_height as i32,
        colors.content,
    );

    for (entity, rect, _z) in to_draw.iter() {
        if let Some(texture) = textures.get(*entity) {
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: texture.width as f32,
                height: texture.height as f32,
            };
            let dest = Rectangle {
                x: rect.x,
                y: rect.y,
                width: rect.w,
                height: rect.h,
            };
            d.draw_texture_pro(texture, src, dest, Vector2 { x: 0.0, y: 0.0 }, 0.0, Color::WHITE);
        }
    }

    let text_shift = TEXT_PARALLAX.offset(offset, PARALLAX_SCALE);
    draw_banner(&mut d, &layout, &colors, offset, text_shift);
    draw_hero(&mut d, &layout, &colors, offset, text_shift);
    draw_footer(&mut d, &layout, &colors, offset);
    draw_nav(&mut d, &layout, &colors, &toggles);

    if debug.is_some() {
        let fps = d.get_fps();
        let lines = [
            format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps),
            format!(
                "Canvases: {} mounted, {} visible | Frames: {}",
                canvases.iter().count(),
                to_draw.len(),
                frames.len()
            ),
            format!("Scroll: {:.1} -> {:.1}", offset, target),
        ];
        let y0 = layout.nav.bottom() as i32 + 8;
        for (i, line) in lines.iter().enumerate() {
            d.draw_text(line, 10, y0 + i as i32 * 14, 10, Color::LIME);
        }
    }
}

fn draw_nav(d: &mut RaylibDrawHandle, layout: &PageLayout, colors: &Palette, toggles: &PageToggles) {
    let nav = layout.nav;
    d.draw_rectangle(0, 0, nav.w as i32, nav.h as i32, colors.background);
    d.draw_text(BRAND, 24, (nav.h as i32 - 20) / 2, 20, colors.text);

    let button = layout.theme_button;
    let label = toggles.theme_button_label();
    d.draw_rectangle_lines(
        button.x as i32,
        button.y as i32,
        button.w as i32,
        button.h as i32,
        colors.border,
    );
    d.draw_text(
        label,
        (button.x + (button.w - text_width(label, 16) as f32) / 2.0) as i32,
        (button.y + (button.h - 16.0) / 2.0) as i32,
        16,
        colors.text,
    );

    let mut x = button.x as i32 - 32;
    for link in NAV_LINKS.iter().rev() {
        x -= text_width(link, 16);
        d.draw_text(link, x, (nav.h as i32 - 16) / 2, 16, colors.text);
        x -= 32;
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_paragraph(
    d: &mut RaylibDrawHandle,
    text: &str,
    x: i32,
    y: i32,
    max_width: i32,
    font_size: i32,
    line_height: i32,
    color: Color,
) -> i32 {
    let lines = wrap_words(text, max_width, |s| text_width(s, font_size));
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, x, y + i as i32 * line_height, font_size, color);
    }
    y + lines.len() as i32 * line_height
}

fn draw_banner(
    d: &mut RaylibDrawHandle,
    layout: &PageLayout,
    colors: &Palette,
    offset: f32,
    shift: f32,
) {
    let banner = layout.banner;
    let y = (layout.to_screen_y(banner.y, offset) + shift) as i32 + 24;
    let x = (banner.w * 0.1) as i32 + 40;
    let y = draw_paragraph(d, BANNER_LEAD, x, y, (banner.w * 0.5) as i32, 24, 31, colors.text);
    let y = draw_paragraph(
        d,
        BANNER_DETAIL,
        x,
        y + 20,
        (banner.w * 0.6) as i32,
        12,
        15,
        colors.text,
    );
    d.draw_text(BANNER_HINT, x, y + 40, 14, colors.text);
}

fn draw_hero(
    d: &mut RaylibDrawHandle,
    layout: &PageLayout,
    colors: &Palette,
    offset: f32,
    shift: f32,
) {
    let hero = layout.hero;
    let top = (layout.to_screen_y(hero.y, offset) + shift) as i32;
    let title_size = 96;
    let title_x = ((hero.w - text_width(HERO_TITLE, title_size) as f32) / 2.0) as i32;
    d.draw_text(HERO_TITLE, title_x.max(0), top + 60, title_size, colors.text);

    let column = (hero.w.min(672.0)) as i32 - 48;
    let x = ((hero.w as i32 - column) / 2).max(24);
    let y = draw_paragraph(d, HERO_WELCOME, x, top + 230, column, 18, 26, colors.text);
    draw_paragraph(d, HERO_SCROLL, x, y + 16, column, 16, 22, colors.muted);
}

fn draw_footer(d: &mut RaylibDrawHandle, layout: &PageLayout, colors: &Palette, offset: f32) {
    let footer = layout.footer;
    let top = layout.to_screen_y(footer.y, offset) as i32;
    if top > layout.viewport_height as i32 {
        return;
    }
    d.draw_rectangle(0, top, footer.w as i32, footer.h as i32, colors.background);
    d.draw_line(0, top, footer.w as i32, top, colors.border);

    let left = 48;
    let column = ((footer.w as i32 - left * 2) / 4).max(120);
    d.draw_text(BRAND, left, top + 48, 24, colors.text);
    draw_paragraph(d, FOOTER_BLURB, left, top + 84, column * 2 - 32, 14, 20, colors.muted);

    let lists: [(&str, &[&str]); 2] = [("Quick Links", &QUICK_LINKS), ("Services", &SERVICES)];
    for (i, (title, items)) in lists.iter().enumerate() {
        let x = left + column * (2 + i as i32);
        d.draw_text(title, x, top + 48, 18, colors.text);
        for (row, item) in items.iter().enumerate() {
            d.draw_text(item, x, top + 80 + row as i32 * 22, 14, colors.muted);
        }
    }

    let bottom = top + footer.h as i32 - 56;
    d.draw_line(left, bottom - 16, footer.w as i32 - left, bottom - 16, colors.border);
    d.draw_text(COPYRIGHT, left, bottom, 14, colors.muted);
    let mut x = footer.w as i32 - left;
    for link in LEGAL_LINKS.iter().rev() {
        x -= text_width(link, 14);
        d.draw_text(link, x, bottom, 14, colors.muted);
        x -= 24;
    }
}
