//! Progress tween system.
//!
//! [`tween_progress_system`] advances every [`TweenProgress`] by the frame
//! delta from [`WorldTime`](crate::resources::worldtime::WorldTime). Progress
//! only ever moves for entities that still exist: once a canvas is despawned
//! its driver is gone with it.

use crate::components::tween::TweenProgress;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;

/// Advance all progress drivers.
pub fn tween_progress_system(
    world_time: Res<WorldTime>,
    mut query: Query<&mut TweenProgress>,
) {
    let dt = world_time.delta.max(0.0);
    if dt == 0.0 {
        return;
    }
    for mut tw in query.iter_mut() {
        if !tw.playing {
            continue;
        }
        tw.tick(dt);
    }
}
