//! End-to-end gameplay scenarios

use egg_drop::consts::*;
use egg_drop::sim::{GameAction, GamePhase, GameSession, HeldKeys, TickInput, tick};

fn run(session: &mut GameSession, ticks: u32) {
    for _ in 0..ticks {
        tick(session, &TickInput::default());
    }
}

#[test]
fn egg_over_basket_is_caught() {
    let mut session = GameSession::new(1);
    assert_eq!(session.basket.bounds().min.x, 250.0);
    assert_eq!(session.basket.bounds().max.x, 350.0);

    let id = session.spawn_egg_at(300.0);
    run(&mut session, 124);

    assert_eq!(session.score, 1);
    assert_eq!(session.misses, 0);
    assert!(session.eggs.iter().all(|e| e.id != id));
}

#[test]
fn egg_away_from_basket_is_missed() {
    let mut session = GameSession::new(1);
    session.basket.x = 480.0;
    let id = session.spawn_egg_at(10.0);

    // Still on screen at y = 798
    run(&mut session, 133);
    assert!(session.eggs.iter().any(|e| e.id == id));
    assert_eq!(session.misses, 0);

    run(&mut session, 1);
    assert!(session.eggs.iter().all(|e| e.id != id));
    assert_eq!(session.misses, 1);
    assert_eq!(session.score, 0);
}

#[test]
fn third_miss_ends_the_game() {
    let mut session = GameSession::new(5);
    // Park the basket in the far corner and keep only our own eggs in play
    session.basket.x = 490.0;
    for _ in 0..2 {
        session.spawn_egg_at(20.0);
        for _ in 0..134 {
            session.spawner.reset();
            tick(&mut session, &TickInput::default());
        }
        assert_eq!(session.phase, GamePhase::Running);
    }
    assert_eq!(session.misses, 2);

    session.spawn_egg_at(20.0);
    for _ in 0..133 {
        session.spawner.reset();
        tick(&mut session, &TickInput::default());
    }
    assert_eq!(session.phase, GamePhase::Running);
    tick(&mut session, &TickInput::default());
    assert_eq!(session.misses, MAX_MISSES);
    assert_eq!(session.phase, GamePhase::GameOver);

    // Frozen from here on
    let snapshot = session.snapshot();
    run(&mut session, 300);
    assert_eq!(session.snapshot(), snapshot);
}

#[test]
fn pause_is_invisible_to_the_simulation() {
    let mut paused = GameSession::new(4242);
    let mut reference = GameSession::new(4242);
    let right = TickInput::held(HeldKeys {
        left: false,
        right: true,
    });

    // Same first 90 running ticks
    for _ in 0..90 {
        tick(&mut paused, &right);
        tick(&mut reference, &right);
    }

    // Pause for five seconds while keys are held
    tick(&mut paused, &TickInput::action(GameAction::TogglePause));
    for _ in 0..300 {
        tick(&mut paused, &right);
    }
    assert_eq!(paused.eggs_spawned, reference.eggs_spawned);

    // Resume tick is also a running tick
    let mut resume = TickInput::action(GameAction::TogglePause);
    resume.keys = right.keys;
    tick(&mut paused, &resume);
    tick(&mut reference, &right);

    for _ in 0..200 {
        tick(&mut paused, &right);
        tick(&mut reference, &right);
    }

    assert_eq!(paused.time_ticks, reference.time_ticks);
    assert_eq!(paused.eggs_spawned, reference.eggs_spawned);
    assert_eq!(paused.score, reference.score);
    assert_eq!(paused.misses, reference.misses);
    assert_eq!(paused.basket.x, reference.basket.x);
    let a: Vec<_> = paused.eggs.iter().map(|e| (e.id, e.pos)).collect();
    let b: Vec<_> = reference.eggs.iter().map(|e| (e.id, e.pos)).collect();
    assert_eq!(a, b);
}

#[test]
fn restart_after_game_over_plays_again() {
    let mut session = GameSession::new(9);
    session.misses = MAX_MISSES;
    session.phase = GamePhase::GameOver;

    tick(&mut session, &TickInput::action(GameAction::Restart));
    assert_eq!(session.phase, GamePhase::Running);
    run(&mut session, SPAWN_INTERVAL_TICKS);
    assert_eq!(session.eggs_spawned, 1);
}
