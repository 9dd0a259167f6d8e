//! On-screen controls and HUD text
//!
//! The three control buttons live in the top-right corner of the playfield.
//! Clicks arrive in screen coordinates, get debounced, and become
//! [`GameAction`]s queued for the next tick.

use glam::Vec2;

use crate::sim::{Aabb, FrameSnapshot, GameAction, GamePhase};

/// Clickable controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    PauseResume,
    Restart,
    Quit,
}

impl ControlButton {
    pub const ALL: [ControlButton; 3] = [
        ControlButton::PauseResume,
        ControlButton::Restart,
        ControlButton::Quit,
    ];

    /// Screen rectangle of the button
    pub fn bounds(&self) -> Aabb {
        let y = match self {
            ControlButton::PauseResume => 20.0,
            ControlButton::Restart => 70.0,
            ControlButton::Quit => 120.0,
        };
        Aabb::from_xywh(420.0, y, 150.0, 40.0)
    }

    pub fn action(&self) -> GameAction {
        match self {
            ControlButton::PauseResume => GameAction::TogglePause,
            ControlButton::Restart => GameAction::Restart,
            ControlButton::Quit => GameAction::Quit,
        }
    }

    pub fn label(&self, phase: GamePhase) -> &'static str {
        match self {
            ControlButton::PauseResume if phase == GamePhase::Paused => "Resume",
            ControlButton::PauseResume => "Pause",
            ControlButton::Restart => "Restart",
            ControlButton::Quit => "Quit",
        }
    }

    /// DOM element id of the button label (web HUD)
    pub fn element_id(&self) -> &'static str {
        match self {
            ControlButton::PauseResume => "btn-pause",
            ControlButton::Restart => "btn-restart",
            ControlButton::Quit => "btn-quit",
        }
    }
}

/// Button under a screen point, if any (borders don't count)
pub fn button_at(point: Vec2) -> Option<ControlButton> {
    ControlButton::ALL
        .into_iter()
        .find(|button| button.bounds().contains_point(point))
}

/// Drops clicks that land too soon after the last accepted one, so a single
/// press can't fire an action twice.
#[derive(Debug, Clone)]
pub struct ClickDebouncer {
    window_ms: f64,
    last_accepted_ms: Option<f64>,
}

impl ClickDebouncer {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Returns true if a click at `now_ms` should be handled
    pub fn accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_accepted_ms {
            if now_ms - last < self.window_ms {
                return false;
            }
        }
        self.last_accepted_ms = Some(now_ms);
        true
    }
}

/// Map a click to an action, honoring the debounce window
pub fn click_action(debouncer: &mut ClickDebouncer, point: Vec2, now_ms: f64) -> Option<GameAction> {
    let button = button_at(point)?;
    if !debouncer.accept(now_ms) {
        log::debug!("Debounced click on {:?}", button);
        return None;
    }
    Some(button.action())
}

pub fn score_text(snapshot: &FrameSnapshot) -> String {
    format!("Score: {}", snapshot.score)
}

pub fn misses_text(snapshot: &FrameSnapshot) -> String {
    format!("Misses: {}", snapshot.misses)
}

pub const GAME_OVER_TEXT: &str = "Game Over!";
