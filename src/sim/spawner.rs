//! Egg spawner
//!
//! Counts running ticks and releases one egg per interval. The caller only
//! invokes it while the game is running, so the countdown simply holds during
//! a pause instead of catching up afterwards.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spawner {
    /// Running ticks since the last spawn
    pub timer: u32,
}

impl Spawner {
    /// Advance one tick. Returns the horizontal center for a new egg when
    /// the interval elapses, drawn so the egg is fully on screen.
    pub fn try_spawn<R: Rng>(&mut self, rng: &mut R) -> Option<f32> {
        self.timer += 1;
        if self.timer < SPAWN_INTERVAL_TICKS {
            return None;
        }
        self.timer = 0;
        Some(rng.random_range(EGG_RADIUS..=SCREEN_WIDTH - EGG_RADIUS))
    }

    pub fn reset(&mut self) {
        self.timer = 0;
    }
}
