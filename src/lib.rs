//! Egg Drop - catch the falling eggs before they hit the ground
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, basket motion, collisions, game state)
//! - `demo`: Headless autopilot run used by the native binary
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Tick timing for native and browser loops
//! - `ui`: Control buttons, click hit-testing and debouncing
//! - `settings`: Data-driven configuration

pub mod demo;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Logical screen size in pixels (y grows downward)
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Fixed simulation rate
    pub const TICK_RATE: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Egg defaults
    pub const EGG_RADIUS: f32 = 20.0;
    /// Pixels per tick
    pub const EGG_FALL_SPEED: f32 = 6.0;
    /// One egg per second at 60 Hz
    pub const SPAWN_INTERVAL_TICKS: u32 = 60;

    /// Basket defaults - rides 60px above the bottom edge
    pub const BASKET_WIDTH: f32 = 100.0;
    pub const BASKET_HEIGHT: f32 = 20.0;
    pub const BASKET_Y: f32 = SCREEN_HEIGHT - 60.0;
    /// Pixels per tick
    pub const BASKET_SPEED: f32 = 10.0;

    /// Misses allowed before the run ends
    pub const MAX_MISSES: u32 = 3;

    /// Minimum gap between two accepted button clicks
    pub const CLICK_DEBOUNCE_MS: f64 = 200.0;
}
