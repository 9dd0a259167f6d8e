//! Game state and core simulation types
//!
//! Everything the loop mutates during a tick lives in [`GameSession`].

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::spawner::Spawner;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Frozen by the player; nothing advances
    Paused,
    /// Miss limit reached, waiting for a restart
    GameOver,
}

/// Egg shell colors, picked once when the egg spawns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EggColor {
    Pink,
    Gold,
    Lime,
}

impl EggColor {
    pub const ALL: [EggColor; 3] = [EggColor::Pink, EggColor::Gold, EggColor::Lime];
}

/// A falling egg
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Egg {
    pub id: u32,
    /// Center of the egg
    pub pos: Vec2,
    pub radius: f32,
    pub color: EggColor,
}

impl Egg {
    pub fn new(id: u32, pos: Vec2, color: EggColor) -> Self {
        Self {
            id,
            pos,
            radius: EGG_RADIUS,
            color,
        }
    }

    /// Collision box (the egg's bounding square)
    pub fn bounds(&self) -> Aabb {
        Aabb::around_circle(self.pos, self.radius)
    }
}

/// The player's basket. Only moves horizontally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Basket {
    /// Left edge
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Basket {
    fn default() -> Self {
        Self {
            x: Self::centered_x(),
            y: BASKET_Y,
            width: BASKET_WIDTH,
            height: BASKET_HEIGHT,
        }
    }
}

impl Basket {
    /// Left edge that puts the basket in the middle of the screen
    pub fn centered_x() -> f32 {
        ((SCREEN_WIDTH - BASKET_WIDTH) / 2.0).floor()
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_xywh(self.x, self.y, self.width, self.height)
    }

    pub fn recenter(&mut self) {
        self.x = Self::centered_x();
    }
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EggSpawned { id: u32, x: f32 },
    EggCaught { id: u32 },
    EggMissed { id: u32 },
    Paused,
    Resumed,
    Restarted,
    GameOver { score: u32 },
}

impl GameEvent {
    /// Write the event to the log at a level matching its importance
    pub fn log(&self) {
        match self {
            GameEvent::EggSpawned { id, x } => log::debug!("Egg {} spawned at x={:.0}", id, x),
            GameEvent::EggCaught { id } => log::debug!("Egg {} caught", id),
            GameEvent::EggMissed { id } => log::info!("Egg {} missed", id),
            GameEvent::Paused => log::info!("Paused"),
            GameEvent::Resumed => log::info!("Resumed"),
            GameEvent::Restarted => log::info!("Restarted"),
            GameEvent::GameOver { score } => log::info!("Game over - final score {}", score),
        }
    }
}

/// Read-only view of an egg for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EggSprite {
    pub bounds: Aabb,
    pub color: EggColor,
}

/// Immutable per-frame view of the session handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub basket: Aabb,
    pub eggs: Vec<EggSprite>,
    pub score: u32,
    pub misses: u32,
    pub phase: GamePhase,
}

/// Complete game session, owned by the loop
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub score: u32,
    pub misses: u32,
    pub phase: GamePhase,
    pub basket: Basket,
    /// Active eggs (sorted by id since they are only ever appended)
    pub eggs: Vec<Egg>,
    pub spawner: Spawner,
    /// Eggs spawned since the last restart
    pub eggs_spawned: u32,
    /// Running ticks since the last restart
    pub time_ticks: u64,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameSession {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            misses: 0,
            phase: GamePhase::Running,
            basket: Basket::default(),
            eggs: Vec::new(),
            spawner: Spawner::default(),
            eggs_spawned: 0,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Drop a new egg at the top of the screen, returns its id
    pub fn spawn_egg_at(&mut self, x: f32) -> u32 {
        let id = self.next_entity_id();
        let color = EggColor::ALL[self.rng.random_range(0..EggColor::ALL.len())];
        self.eggs.push(Egg::new(id, Vec2::new(x, 0.0), color));
        self.eggs_spawned += 1;
        self.events.push(GameEvent::EggSpawned { id, x });
        id
    }

    /// Back to a fresh Running game. The RNG keeps its stream so the
    /// next run gets different spawn positions.
    pub fn reset(&mut self) {
        self.score = 0;
        self.misses = 0;
        self.phase = GamePhase::Running;
        self.basket.recenter();
        self.eggs.clear();
        self.spawner.reset();
        self.eggs_spawned = 0;
        self.time_ticks = 0;
        self.events.push(GameEvent::Restarted);
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            basket: self.basket.bounds(),
            eggs: self
                .eggs
                .iter()
                .map(|egg| EggSprite {
                    bounds: egg.bounds(),
                    color: egg.color,
                })
                .collect(),
            score: self.score,
            misses: self.misses,
            phase: self.phase,
        }
    }
}
