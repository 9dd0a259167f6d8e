//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod actuator;
pub mod autopilot;
pub mod collision;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use actuator::{HeldKeys, apply_input};
pub use autopilot::autopilot_keys;
pub use collision::Aabb;
pub use physics::{StepOutcome, advance};
pub use spawner::Spawner;
pub use state::{
    Basket, Egg, EggColor, EggSprite, FrameSnapshot, GameEvent, GamePhase, GameSession,
};
pub use tick::{GameAction, LoopControl, TickInput, apply_action, tick};
