//! Headless autopilot run
//!
//! Drives a session with the autopilot until the game ends or a tick limit is
//! reached. Pacing is supplied by the caller so the same loop runs at real
//! time in the native binary and flat out in tests.

use serde::Serialize;

use crate::sim::{GameAction, GameSession, LoopControl, TickInput, autopilot_keys, tick};

/// Final numbers of a demo run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoSummary {
    pub seed: u64,
    pub ticks: u64,
    pub score: u32,
    pub misses: u32,
    pub eggs_spawned: u32,
    pub game_over: bool,
}

/// Run until game over or `tick_limit`, calling `pace` after every tick
pub fn run_demo<F: FnMut()>(
    session: &mut GameSession,
    tick_limit: Option<u64>,
    mut pace: F,
) -> DemoSummary {
    let mut ticks = 0u64;
    let mut input = TickInput::default();

    loop {
        let limit_reached = tick_limit.is_some_and(|limit| ticks >= limit);
        if session.is_over() || limit_reached {
            input.actions.push(GameAction::Quit);
        }
        input.keys = autopilot_keys(session);

        let control = tick(session, &input);
        input.actions.clear();
        for event in session.drain_events() {
            event.log();
        }
        if control == LoopControl::Exit {
            break;
        }

        ticks += 1;
        pace();
    }

    DemoSummary {
        seed: session.seed,
        ticks,
        score: session.score,
        misses: session.misses,
        eggs_spawned: session.eggs_spawned,
        game_over: session.is_over(),
    }
}
