//! Fixed-rate tick timing

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Frame-time accumulator that converts variable frame deltas into a whole
/// number of fixed simulation ticks.
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed `dt` seconds of wall time, returns how many ticks to run now.
    /// Long stalls (tab switches, debugger) are clamped so the game never
    /// fast-forwards more than `MAX_SUBSTEPS` ticks in one frame.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, 0.1);

        let mut ticks = 0;
        while self.accumulator >= SIM_DT && ticks < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            ticks += 1;
        }
        if ticks == MAX_SUBSTEPS {
            // Drop the backlog instead of carrying it into the next frame
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        ticks
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

/// Blocking tick pacer for native loops.
///
/// `wait` sleeps until the next tick boundary. If the loop has fallen behind
/// by more than a tick it re-anchors instead of bursting.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct TickGovernor {
    period: std::time::Duration,
    next: std::time::Instant,
}

#[cfg(not(target_arch = "wasm32"))]
impl TickGovernor {
    pub fn new(ticks_per_second: u32) -> Self {
        let period = std::time::Duration::from_secs(1) / ticks_per_second.max(1);
        Self {
            period,
            next: std::time::Instant::now() + period,
        }
    }

    pub fn period(&self) -> std::time::Duration {
        self.period
    }

    pub fn wait(&mut self) {
        let now = std::time::Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
            self.next += self.period;
        } else {
            if now - self.next > self.period {
                log::debug!("Tick overran by {:?}", now - self.next);
            }
            self.next = now + self.period;
        }
    }
}
