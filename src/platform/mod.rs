//! Platform abstraction layer
//!
//! Handles browser/native differences for tick timing. The browser drives
//! frames from `requestAnimationFrame` and feeds elapsed time into a
//! [`FixedStep`]; native builds block on a [`TickGovernor`].

pub mod clock;

pub use clock::FixedStep;
#[cfg(not(target_arch = "wasm32"))]
pub use clock::TickGovernor;
