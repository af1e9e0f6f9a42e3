//! GPU textures backing mounted canvases.
//!
//! A non-send resource mapping each canvas entity to the raylib texture its
//! [`CanvasSurface`](crate::components::canvassurface::CanvasSurface) is
//! uploaded to. Entries for unmounted canvases are dropped by the render
//! system, which unloads the texture.
//!
//! Note: This is a non-send resource because raylib textures must be accessed
//! from the main thread only.

use bevy_ecs::prelude::Entity;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

// NonSend resource: insert with insert_non_send_resource and access via NonSend/NonSendMut
#[derive(Default)]
pub struct CanvasTextures {
    textures: FxHashMap<Entity, Texture2D>,
}

impl CanvasTextures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, entity: Entity) -> Option<&Texture2D> {
        self.textures.get(&entity)
    }

    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut Texture2D> {
        self.textures.get_mut(&entity)
    }

    pub fn insert(&mut self, entity: Entity, texture: Texture2D) {
        self.textures.insert(entity, texture);
    }

    /// Drop every texture whose entity fails `keep`. Returns how many went.
    pub fn retain(&mut self, mut keep: impl FnMut(Entity) -> bool) -> usize {
        let before = self.textures.len();
        self.textures.retain(|entity, _| keep(*entity));
        before - self.textures.len()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
