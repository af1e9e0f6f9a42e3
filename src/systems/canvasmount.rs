//! Canvas mounting for the page shell.
//!
//! [`sync_canvas_mounts`] watches [`PageToggles`] and mounts one entity per
//! configured canvas when animations are switched on, or despawns all of them
//! when switched off. Mounting is idempotent: flipping the gate on twice does
//! not mount a second set.
//!
//! A mounted canvas carries:
//! [`SpriteCanvas`], [`TweenProgress`], [`CanvasSurface`], [`PagePosition`],
//! [`ZIndex`] and [`ParallaxSpeed`].

use bevy_ecs::prelude::*;
use fastrand::Rng;

use crate::components::canvassurface::CanvasSurface;
use crate::components::pageposition::PagePosition;
use crate::components::parallax::ParallaxSpeed;
use crate::components::spritecanvas::{AnimationConfig, SpriteCanvas};
use crate::components::tween::TweenProgress;
use crate::components::zindex::ZIndex;
use crate::resources::layoutstore::{CanvasSection, LayoutStore};
use crate::resources::pagetoggles::PageToggles;

/// Component bundle for one canvas of `section`.
pub fn canvas_bundle(
    section: &CanvasSection,
    config: &AnimationConfig,
    rng: &mut Rng,
) -> (
    SpriteCanvas,
    TweenProgress,
    CanvasSurface,
    PagePosition,
    ZIndex,
    ParallaxSpeed,
) {
    let canvas = SpriteCanvas::new(*config);
    let driver = canvas.progress_driver();
    (
        canvas,
        driver,
        CanvasSurface::new(config.size),
        PagePosition::new(config.top, config.left, section.offset_y),
        ZIndex(config.z_index + section.z_offset),
        ParallaxSpeed::random(rng),
    )
}

/// Spawn every canvas of `layout`.
pub fn mount_canvases(commands: &mut Commands, layout: &LayoutStore, rng: &mut Rng) -> usize {
    let mut count = 0;
    for (section, config) in layout.iter_canvases() {
        commands.spawn(canvas_bundle(section, config, rng));
        count += 1;
    }
    count
}

/// Mount or unmount canvases when the animation gate changes.
pub fn sync_canvas_mounts(
    mut commands: Commands,
    toggles: Res<PageToggles>,
    layout: Res<LayoutStore>,
    mounted: Query<Entity, With<SpriteCanvas>>,
    mut rng: Local<Rng>,
) {
    if !toggles.is_changed() {
        return;
    }
    let mounted_count = mounted.iter().count();
    if toggles.animations_enabled {
        if mounted_count == 0 {
            let count = mount_canvases(&mut commands, &layout, &mut rng);
            log::info!("Mounted {} canvases", count);
        }
    } else if mounted_count > 0 {
        for entity in mounted.iter() {
            commands.entity(entity).despawn();
        }
        log::info!("Unmounted {} canvases", mounted_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(offset_y: f32, z_offset: i32) -> CanvasSection {
        CanvasSection {
            offset_y,
            z_offset,
            canvases: vec![],
        }
    }

    fn config() -> AnimationConfig {
        AnimationConfig {
            start_index: 4,
            num_images: 6,
            duration: 3.0,
            size: 90,
            top: 12.0,
            left: 34.0,
            z_index: 5,
        }
    }

    #[test]
    fn test_bundle_applies_section() {
        let mut rng = Rng::with_seed(1);
        let (canvas, driver, surface, pos, z, speed) =
            canvas_bundle(&section(300.0, 100), &config(), &mut rng);
        assert_eq!(canvas.frame_index, Some(4));
        assert_eq!(canvas.requested, None);
        assert_eq!(driver.duration, 3.0);
        assert_eq!(surface.size(), 90);
        assert_eq!(pos, PagePosition::new(12.0, 34.0, 300.0));
        assert_eq!(z, ZIndex(105));
        assert!((-2.0..=2.0).contains(&speed.0));
    }
}
