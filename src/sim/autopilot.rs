//! Idle/demo mode - picks movement keys so the basket chases eggs

use super::actuator::HeldKeys;
use super::state::GameSession;
use crate::consts::*;

/// Choose keys for this tick: line the basket up under the lowest egg that
/// is still above it. Within one step of the target the basket holds still.
pub fn autopilot_keys(session: &GameSession) -> HeldKeys {
    let basket = &session.basket;
    let target = session
        .eggs
        .iter()
        .filter(|egg| egg.pos.y - egg.radius < basket.y)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let Some(egg) = target else {
        return HeldKeys::default();
    };

    let basket_center = basket.x + basket.width / 2.0;
    let delta = egg.pos.x - basket_center;
    if delta.abs() <= BASKET_SPEED {
        HeldKeys::default()
    } else {
        HeldKeys {
            left: delta < 0.0,
            right: delta > 0.0,
        }
    }
}
