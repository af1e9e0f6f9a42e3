//! Background image loader.
//!
//! Use [`setup_image_loader`] once during initialization to spawn the worker
//! thread and insert the [`ImageLoaderBridge`] and `Messages<LoaderMessage>`
//! resources. Call [`shutdown_image_loader`] during teardown to stop and join
//! the thread.
//!
//! Decoding goes through an [`ImageSource`]; [`FileImageSource`] reads files
//! from disk with the `image` crate. The worker memoizes decoded frames by
//! locator, but results are always delivered through the channel, even for
//! frames that are already cached.

use std::path::{Path, PathBuf};
use std::thread::JoinHandle;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use image::RgbaImage;

use crate::events::imageloader::{LoaderCmd, LoaderMessage};
use crate::systems::imageloader::image_loader_thread;

/// A decoded frame, shared between the loader cache and every canvas drawing it.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFrame {
    /// Index of the frame in the frame list.
    pub index: usize,
    pub image: RgbaImage,
}

/// Turns a locator into pixels.
pub trait ImageSource: Send + 'static {
    fn load(&self, locator: &Path) -> Result<RgbaImage, String>;
}

/// Decodes image files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageSource;

impl ImageSource for FileImageSource {
    fn load(&self, locator: &Path) -> Result<RgbaImage, String> {
        let img = image::open(locator)
            .map_err(|e| format!("Failed to decode {}: {}", locator.display(), e))?;
        Ok(img.to_rgba8())
    }
}

/// Shared bridge between the ECS world and the loader thread.
#[derive(Resource)]
pub struct ImageLoaderBridge {
    /// Sender for [`LoaderCmd`] messages (ECS -> loader thread).
    pub tx_cmd: Sender<LoaderCmd>,
    /// Receiver for [`LoaderMessage`] messages (loader thread -> ECS).
    pub rx_msg: Receiver<LoaderMessage>,
    /// Join handle for the worker.
    pub handle: JoinHandle<()>,
}

impl ImageLoaderBridge {
    /// Spawn a worker around `source`.
    pub fn spawn(source: impl ImageSource) -> Self {
        let (tx_cmd, rx_cmd) = unbounded::<LoaderCmd>();
        let (tx_msg, rx_msg) = unbounded::<LoaderMessage>();
        let source: Box<dyn ImageSource> = Box::new(source);
        let handle = std::thread::spawn(move || image_loader_thread(source, rx_cmd, tx_msg));
        Self {
            tx_cmd,
            rx_msg,
            handle,
        }
    }

    /// Queue a load. Returns false once the worker is gone.
    pub fn request(&self, entity: Entity, frame_index: usize, locator: PathBuf) -> bool {
        self.tx_cmd
            .send(LoaderCmd::Load {
                entity,
                frame_index,
                locator,
            })
            .is_ok()
    }

    /// Stop the worker and wait for it.
    pub fn shutdown(self) {
        let _ = self.tx_cmd.send(LoaderCmd::Shutdown);
        if self.handle.join().is_err() {
            log::error!("image loader thread panicked");
        }
    }
}

/// Spawn the loader thread and register bridge resources.
pub fn setup_image_loader(world: &mut World, source: impl ImageSource) {
    world.insert_resource(ImageLoaderBridge::spawn(source));
    world.insert_resource(Messages::<LoaderMessage>::default());
}

/// Gracefully request shutdown of the loader thread and join it.
pub fn shutdown_image_loader(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<ImageLoaderBridge>() {
        bridge.shutdown();
    }
}
