//! Progress tween component.
//!
//! [`TweenProgress`] is the progress driver behind every sprite canvas: a
//! value that moves linearly from 0.0 to 1.0 over `duration` seconds and then
//! restarts at 0.0 forever.
//!
//! The component is pull-based. [`TweenProgress::tick`] advances it by a delta
//! and returns the new progress, so the timing logic can be exercised without
//! a running frame loop. See [`crate::systems::tween`] for the update system.

use bevy_ecs::prelude::Component;

/// Repeating linear progress driver.
///
/// `time` is always kept inside `[0, duration)`.
#[derive(Component, Clone, Debug)]
pub struct TweenProgress {
    /// Duration of one pass in seconds.
    pub duration: f32,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the pass.
    pub time: f32,
}

impl TweenProgress {
    pub fn new(duration: f32) -> Self {
        TweenProgress {
            duration,
            playing: true,
            time: 0.0,
        }
    }

    /// Progress in `[0, 1)`.
    ///
    /// A non-positive duration reports 0.0 instead of dividing by zero.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.time / self.duration).clamp(0.0, 1.0)
    }

    /// Advance by `dt` seconds and return the new progress.
    pub fn tick(&mut self, dt: f32) -> f32 {
        if self.playing && self.duration > 0.0 {
            self.time = advance(self.time, self.duration, dt.max(0.0));
        }
        self.progress()
    }
}

/// Advance tween time, wrapping at `duration`.
///
/// Wrapping keeps the overshoot so long frames do not drift the cycle.
pub(crate) fn advance(time: f32, duration: f32, dt: f32) -> f32 {
    let time = time + dt;
    if time >= duration {
        time.rem_euclid(duration)
    } else {
        time
    }
}
