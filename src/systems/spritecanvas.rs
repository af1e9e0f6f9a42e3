//! Sprite canvas systems.
//!
//! - [`sprite_frame_system`] turns each canvas' progress into a frame index
//!   and asks the image loader for frames that changed.
//! - [`apply_loaded_frames`] draws finished loads onto their surfaces and
//!   logs failures.
//!
//! # Frame Flow
//!
//! 1. [`tween_progress_system`](crate::systems::tween::tween_progress_system) advances progress
//! 2. `sprite_frame_system` maps progress to `start_index + round(p * (n - 1))`
//! 3. Changed frames that exist in the [`FrameList`] go to the loader thread
//! 4. [`poll_loader_messages`](crate::systems::imageloader::poll_loader_messages) brings results back
//! 5. `apply_loaded_frames` clears the surface and draws the frame scaled to fit
//!
//! Frames outside the list are skipped silently. Results for canvases that
//! were unmounted while loading are dropped.

use bevy_ecs::component::Mutable;
use bevy_ecs::prelude::*;

use crate::components::canvassurface::{DrawTarget, draw_frame};
use crate::components::spritecanvas::SpriteCanvas;
use crate::components::tween::TweenProgress;
use crate::events::imageloader::LoaderMessage;
use crate::resources::framelist::FrameList;
use crate::resources::imageloader::ImageLoaderBridge;

/// Sync frame indices with progress and request changed frames.
///
/// Runs after the tween system. Without a loader bridge the frame index is
/// still tracked but nothing is requested.
pub fn sprite_frame_system(
    mut query: Query<(Entity, &mut SpriteCanvas, &TweenProgress)>,
    frames: Res<FrameList>,
    bridge: Option<Res<ImageLoaderBridge>>,
) {
    for (entity, mut canvas, progress) in query.iter_mut() {
        canvas.sync_progress(progress.progress());
        let Some(frame_index) = canvas.take_pending_request() else {
            continue;
        };
        let Some(locator) = frames.get(frame_index) else {
            continue;
        };
        if let Some(bridge) = bridge.as_ref()
            && !bridge.request(entity, frame_index, locator.to_path_buf())
        {
            log::warn!("Image loader is gone, frame {} not requested", frame_index);
        }
    }
}

/// Draw loaded frames onto surfaces of type `S`.
///
/// The surface is looked up when the result arrives, so a canvas that was
/// unmounted in the meantime is simply not found and nothing is drawn.
pub fn apply_loaded_frames<S>(
    mut reader: MessageReader<LoaderMessage>,
    mut surfaces: Query<&mut S>,
) where
    S: Component<Mutability = Mutable> + DrawTarget,
{
    for msg in reader.read() {
        match msg {
            LoaderMessage::FrameLoaded { entity, frame } => {
                if let Ok(mut surface) = surfaces.get_mut(*entity) {
                    draw_frame(&mut *surface, frame);
                } else {
                    log::debug!(
                        "Dropping frame {} for unmounted canvas {:?}",
                        frame.index,
                        entity
                    );
                }
            }
            LoaderMessage::FrameLoadFailed {
                frame_index,
                locator,
                error,
                ..
            } => {
                log::error!(
                    "Failed to load image at index: {} ({}): {}",
                    frame_index,
                    locator.display(),
                    error
                );
            }
        }
    }
}
