//! Keyboard-driven basket motion

use serde::{Deserialize, Serialize};

use super::state::Basket;
use crate::consts::*;

/// Movement keys held down during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// Move the basket one step per held direction.
///
/// Left is applied first and right sees the result, so holding both keys
/// cancels out in open space but walks the basket off the left wall.
pub fn apply_input(basket: &mut Basket, keys: HeldKeys) {
    if keys.left && basket.x - BASKET_SPEED > 0.0 {
        basket.x -= BASKET_SPEED;
    }
    if keys.right && basket.x + BASKET_SPEED < SCREEN_WIDTH - basket.width {
        basket.x += BASKET_SPEED;
    }
}
