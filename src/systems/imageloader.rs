//! Image loader worker and its ECS bridge systems.
//!
//! - [`image_loader_thread`] runs on its own OS thread, decodes frames through
//!   an [`ImageSource`] and memoizes them by locator.
//! - [`poll_loader_messages`] drains finished loads into the ECS
//!   `Messages<LoaderMessage>` queue without blocking.
//! - [`update_loader_messages`] advances that queue once per frame.
//!
//! Completions can arrive in a different order than the requests that caused
//! them. Nothing here reorders them: the most recently resolved frame is the
//! one that ends up on the surface.

use std::path::PathBuf;
use std::sync::Arc;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use image::RgbaImage;
use rustc_hash::FxHashMap;

use crate::events::imageloader::{LoaderCmd, LoaderMessage};
use crate::resources::imageloader::{DecodedFrame, ImageLoaderBridge, ImageSource};

/// Entry point of the loader thread.
///
/// Blocks on the command channel until [`LoaderCmd::Shutdown`] arrives or every
/// sender is dropped.
pub fn image_loader_thread(
    source: Box<dyn ImageSource>,
    rx_cmd: Receiver<LoaderCmd>,
    tx_msg: Sender<LoaderMessage>,
) {
    log::debug!(
        "[loader] thread starting (id={:?})",
        std::thread::current().id()
    );
    // Keyed by locator only: one image can sit at several frame indices.
    let mut cache: FxHashMap<PathBuf, RgbaImage> = FxHashMap::default();

    for cmd in rx_cmd.iter() {
        match cmd {
            LoaderCmd::Load {
                entity,
                frame_index,
                locator,
            } => {
                let loaded = match cache.get(&locator) {
                    Some(image) => Ok(image.clone()),
                    None => source.load(&locator).inspect(|image| {
                        cache.insert(locator.clone(), image.clone());
                    }),
                };
                let msg = match loaded {
                    Ok(image) => LoaderMessage::FrameLoaded {
                        entity,
                        frame: Arc::new(DecodedFrame {
                            index: frame_index,
                            image,
                        }),
                    },
                    Err(error) => LoaderMessage::FrameLoadFailed {
                        entity,
                        frame_index,
                        locator,
                        error,
                    },
                };
                if tx_msg.send(msg).is_err() {
                    break;
                }
            }
            LoaderCmd::Shutdown => break,
        }
    }

    log::debug!("[loader] thread exiting, {} frames cached", cache.len());
}

/// Drain finished loads into `Messages<LoaderMessage>`.
pub fn poll_loader_messages(
    bridge: Res<ImageLoaderBridge>,
    mut writer: MessageWriter<LoaderMessage>,
) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`LoaderMessage`].
pub fn update_loader_messages(mut msgs: ResMut<Messages<LoaderMessage>>) {
    msgs.update();
}
