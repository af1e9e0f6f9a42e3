//! Scroll parallax hint.
//!
//! [`ParallaxSpeed`] tags a canvas with the coefficient the smooth-scroll
//! controller uses to shift it while scrolling. The value is rolled once when
//! the canvas is mounted and then never changes.

use bevy_ecs::prelude::Component;
use fastrand::Rng;

/// Lowest speed a canvas can roll.
pub const MIN_PARALLAX_SPEED: f32 = -2.0;
/// Highest speed a canvas can roll.
pub const MAX_PARALLAX_SPEED: f32 = 2.0;

/// Scroll-coupling coefficient, in `[-2.0, 2.0]`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct ParallaxSpeed(pub f32);

impl ParallaxSpeed {
    /// Roll a speed rounded to one decimal.
    pub fn random(rng: &mut Rng) -> Self {
        let raw = rng.f32() * (MAX_PARALLAX_SPEED - MIN_PARALLAX_SPEED) + MIN_PARALLAX_SPEED;
        let rounded = (raw * 10.0).round() / 10.0;
        ParallaxSpeed(rounded.clamp(MIN_PARALLAX_SPEED, MAX_PARALLAX_SPEED))
    }

    /// Vertical offset in pixels for a scroll distance.
    pub fn offset(&self, scroll: f32, scale: f32) -> f32 {
        -scroll * self.0 * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_stays_in_range() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..10_000 {
            let s = ParallaxSpeed::random(&mut rng);
            assert!((MIN_PARALLAX_SPEED..=MAX_PARALLAX_SPEED).contains(&s.0));
        }
    }

    #[test]
    fn test_random_has_one_decimal() {
        let mut rng = Rng::with_seed(42);
        for _ in 0..1000 {
            let s = ParallaxSpeed::random(&mut rng).0;
            let tenths = s * 10.0;
            assert!((tenths - tenths.round()).abs() < 1e-4);
        }
    }

    #[test]
    fn test_offset_direction() {
        let s = ParallaxSpeed(1.0);
        assert_eq!(s.offset(100.0, 0.1), -10.0);
        assert_eq!(ParallaxSpeed(0.0).offset(100.0, 0.1), 0.0);
        assert!(ParallaxSpeed(-0.5).offset(100.0, 0.1) > 0.0);
    }
}
