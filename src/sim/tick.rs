//! Fixed timestep simulation tick
//!
//! Core game loop step: queued actions, spawner, basket, eggs, game-over check.

use super::actuator::{HeldKeys, apply_input};
use super::physics::advance;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::consts::*;

/// Discrete player commands from buttons or shortcut keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Pause while running, resume while paused
    TogglePause,
    /// Start over from any phase
    Restart,
    /// Leave the game
    Quit,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement keys currently held
    pub keys: HeldKeys,
    /// Actions queued since the previous tick, applied in order
    pub actions: Vec<GameAction>,
}

impl TickInput {
    pub fn held(keys: HeldKeys) -> Self {
        Self {
            keys,
            actions: Vec::new(),
        }
    }

    pub fn action(action: GameAction) -> Self {
        Self {
            keys: HeldKeys::default(),
            actions: vec![action],
        }
    }
}

/// What the loop should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Apply one player action. Returns `Exit` for quit.
pub fn apply_action(session: &mut GameSession, action: GameAction) -> LoopControl {
    match action {
        GameAction::TogglePause => match session.phase {
            GamePhase::Running => {
                session.phase = GamePhase::Paused;
                session.events.push(GameEvent::Paused);
            }
            GamePhase::Paused => {
                session.phase = GamePhase::Running;
                session.events.push(GameEvent::Resumed);
            }
            // A finished game can't be paused
            GamePhase::GameOver => {}
        },
        GameAction::Restart => session.reset(),
        GameAction::Quit => return LoopControl::Exit,
    }
    LoopControl::Continue
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut GameSession, input: &TickInput) -> LoopControl {
    for &action in &input.actions {
        if apply_action(session, action) == LoopControl::Exit {
            return LoopControl::Exit;
        }
    }

    // Nothing moves unless running
    if session.phase != GamePhase::Running {
        return LoopControl::Continue;
    }

    session.time_ticks += 1;

    if let Some(x) = session.spawner.try_spawn(&mut session.rng) {
        session.spawn_egg_at(x);
    }

    apply_input(&mut session.basket, input.keys);

    let outcome = advance(&mut session.eggs, &session.basket);
    for id in outcome.caught {
        session.score += 1;
        session.events.push(GameEvent::EggCaught { id });
    }
    for id in outcome.missed {
        session.misses = (session.misses + 1).min(MAX_MISSES);
        session.events.push(GameEvent::EggMissed { id });
    }

    if session.misses >= MAX_MISSES {
        session.phase = GamePhase::GameOver;
        session.events.push(GameEvent::GameOver {
            score: session.score,
        });
    }

    LoopControl::Continue
}
