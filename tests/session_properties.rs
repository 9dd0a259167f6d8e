//! Property tests for the invariants that must hold on every tick

use std::collections::HashMap;

use egg_drop::consts::*;
use egg_drop::sim::{GameAction, GamePhase, GameSession, HeldKeys, TickInput, tick};
use proptest::prelude::*;

/// Random held keys plus the occasional pause toggle or restart
fn tick_input() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), 0u16..400).prop_map(|(left, right, roll)| {
        let actions = match roll {
            0..=3 => vec![GameAction::TogglePause],
            4 => vec![GameAction::Restart],
            _ => Vec::new(),
        };
        TickInput {
            keys: HeldKeys { left, right },
            actions,
        }
    })
}

fn inputs() -> impl Strategy<Value = Vec<TickInput>> {
    prop::collection::vec(tick_input(), 1..2000)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn basket_stays_on_screen(seed in any::<u64>(), inputs in inputs()) {
        let mut session = GameSession::new(seed);
        for input in &inputs {
            tick(&mut session, input);
            prop_assert!(session.basket.x >= 0.0);
            prop_assert!(session.basket.x <= SCREEN_WIDTH - BASKET_WIDTH);
        }
    }

    #[test]
    fn eggs_never_rise(seed in any::<u64>(), inputs in inputs()) {
        let mut session = GameSession::new(seed);
        let mut last_y: HashMap<u32, f32> = HashMap::new();
        for input in &inputs {
            tick(&mut session, input);
            for egg in &session.eggs {
                if let Some(&prev) = last_y.get(&egg.id) {
                    prop_assert!(egg.pos.y >= prev, "egg {} rose from {} to {}", egg.id, prev, egg.pos.y);
                }
                last_y.insert(egg.id, egg.pos.y);
            }
        }
    }

    #[test]
    fn every_spawned_egg_is_accounted_for(seed in any::<u64>(), inputs in inputs()) {
        let mut session = GameSession::new(seed);
        for input in &inputs {
            tick(&mut session, input);
            prop_assert_eq!(
                session.score + session.misses + session.eggs.len() as u32,
                session.eggs_spawned
            );
        }
    }

    #[test]
    fn game_over_is_sticky_until_restart(seed in any::<u64>(), inputs in inputs()) {
        let mut session = GameSession::new(seed);
        for input in &inputs {
            let was_over = session.phase == GamePhase::GameOver;
            let restarting = input.actions.contains(&GameAction::Restart);
            tick(&mut session, input);

            prop_assert!(session.misses <= MAX_MISSES);
            prop_assert_eq!(session.misses == MAX_MISSES, session.phase == GamePhase::GameOver);
            if was_over && !restarting {
                prop_assert_eq!(session.phase, GamePhase::GameOver);
            }
        }
    }

    #[test]
    fn restart_always_gives_a_fresh_game(seed in any::<u64>(), inputs in inputs()) {
        let mut session = GameSession::new(seed);
        for input in &inputs {
            tick(&mut session, input);
        }
        let restart = TickInput {
            keys: HeldKeys::default(),
            actions: vec![GameAction::Restart],
        };
        tick(&mut session, &restart);
        prop_assert_eq!(session.phase, GamePhase::Running);
        prop_assert_eq!(session.score, 0);
        prop_assert_eq!(session.misses, 0);
        prop_assert!(session.eggs.is_empty());
        prop_assert_eq!(session.basket.x, (SCREEN_WIDTH - BASKET_WIDTH) / 2.0);
    }
}
