//! Messages exchanged with the image loader thread.
//!
//! [`LoaderCmd`] goes *to* the worker, [`LoaderMessage`] comes *back*. The
//! worker never touches the ECS world; every result is routed through
//! [`crate::systems::imageloader::poll_loader_messages`].

use std::path::PathBuf;
use std::sync::Arc;

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;

use crate::resources::imageloader::DecodedFrame;

/// Commands sent *to* the loader thread.
#[derive(Debug, Clone)]
pub enum LoaderCmd {
    /// Decode the frame at `locator` on behalf of `entity`.
    Load {
        entity: Entity,
        frame_index: usize,
        locator: PathBuf,
    },
    Shutdown,
}

/// Results sent *back* from the loader thread.
#[derive(Message, Debug, Clone)]
pub enum LoaderMessage {
    FrameLoaded {
        entity: Entity,
        frame: Arc<DecodedFrame>,
    },
    FrameLoadFailed {
        entity: Entity,
        frame_index: usize,
        locator: PathBuf,
        error: String,
    },
}

impl LoaderMessage {
    /// Entity the result was requested for.
    pub fn entity(&self) -> Entity {
        match self {
            LoaderMessage::FrameLoaded { entity, .. } => *entity,
            LoaderMessage::FrameLoadFailed { entity, .. } => *entity,
        }
    }
}
