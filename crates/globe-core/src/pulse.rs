//! Time-driven depth pulse for markers.
//!
//! Each marker yoyos linearly between its resting depth scale (1.0) and a
//! random target, one leg every [`PULSE_LEG_SEC`], after a random start
//! delay. Evaluated from elapsed time each frame, so there is no scheduler
//! state to keep in sync.

use crate::constants::{PULSE_LEG_SEC, PULSE_MAX_DELAY_SEC, PULSE_MAX_SCALE, PULSE_MIN_SCALE};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseTrack {
    pub target: f32,
    pub leg_sec: f32,
    pub delay_sec: f32,
}

impl PulseTrack {
    pub fn new(target: f32, leg_sec: f32, delay_sec: f32) -> Self {
        Self {
            target: target.max(PULSE_MIN_SCALE),
            leg_sec: leg_sec.max(1e-3),
            delay_sec: delay_sec.max(0.0),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let target = rng.gen::<f32>() * PULSE_MAX_SCALE;
        let delay = rng.gen::<f32>() * PULSE_MAX_DELAY_SEC;
        Self::new(target, PULSE_LEG_SEC, delay)
    }

    /// A track that never leaves the resting scale.
    pub fn still() -> Self {
        Self::new(1.0, PULSE_LEG_SEC, 0.0)
    }

    pub fn scale_at(&self, elapsed_sec: f32) -> f32 {
        let t = elapsed_sec - self.delay_sec;
        if t <= 0.0 {
            return 1.0;
        }
        let legs = t / self.leg_sec;
        let leg = legs.floor();
        let frac = legs - leg;
        let (from, to) = if (leg as u64) % 2 == 0 {
            (1.0, self.target)
        } else {
            (self.target, 1.0)
        };
        (from + (to - from) * frac).max(PULSE_MIN_SCALE)
    }
}
