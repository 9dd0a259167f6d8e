//! Falling eggs: movement plus catch/miss resolution

use super::state::{Basket, Egg};
use crate::consts::*;

/// Eggs resolved during one physics step, by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub caught: Vec<u32>,
    pub missed: Vec<u32>,
}

impl StepOutcome {
    pub fn is_empty(&self) -> bool {
        self.caught.is_empty() && self.missed.is_empty()
    }
}

/// Advance every egg by one tick of fall and resolve it.
///
/// The basket check runs before the bottom-edge check, so an egg that is both
/// overlapping and past the bottom counts as caught. Each egg is removed in
/// the tick it resolves.
pub fn advance(eggs: &mut Vec<Egg>, basket: &Basket) -> StepOutcome {
    let basket_box = basket.bounds();
    let mut outcome = StepOutcome::default();

    eggs.retain_mut(|egg| {
        egg.pos.y += EGG_FALL_SPEED;

        if egg.bounds().overlaps(&basket_box) {
            outcome.caught.push(egg.id);
            false
        } else if egg.pos.y > SCREEN_HEIGHT {
            outcome.missed.push(egg.id);
            false
        } else {
            true
        }
    });

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::EggColor;
    use glam::Vec2;

    fn egg(id: u32, x: f32, y: f32) -> Egg {
        Egg::new(id, Vec2::new(x, y), EggColor::Gold)
    }

    #[test]
    fn test_eggs_fall() {
        let mut eggs = vec![egg(1, 100.0, 0.0), egg(2, 500.0, 50.0)];
        let basket = Basket::default();
        let outcome = advance(&mut eggs, &basket);
        assert!(outcome.is_empty());
        assert_eq!(eggs[0].pos.y, 6.0);
        assert_eq!(eggs[1].pos.y, 56.0);
    }

    #[test]
    fn test_catch_over_basket() {
        let mut eggs = vec![egg(1, 300.0, 0.0)];
        let basket = Basket::default();

        let mut caught_at = None;
        for t in 1..=124 {
            let outcome = advance(&mut eggs, &basket);
            if !outcome.caught.is_empty() {
                caught_at = Some(t);
                assert_eq!(outcome.caught, vec![1]);
                break;
            }
        }
        // Egg bottom passes the basket top (740) once y > 720
        assert_eq!(caught_at, Some(121));
        assert!(eggs.is_empty());
    }

    #[test]
    fn test_miss_past_bottom() {
        let mut eggs = vec![egg(7, 10.0, 0.0)];
        let basket = Basket::default();
        let mut missed = Vec::new();
        let mut ticks = 0;
        while !eggs.is_empty() {
            let outcome = advance(&mut eggs, &basket);
            assert!(outcome.caught.is_empty());
            missed.extend(outcome.missed);
            ticks += 1;
        }
        assert_eq!(missed, vec![7]);
        // 134 * 6 = 804 is the first y past 800
        assert_eq!(ticks, 134);
    }

    #[test]
    fn test_catch_wins_over_miss() {
        // Degenerate basket hanging below the screen edge
        let basket = Basket {
            x: 250.0,
            y: 790.0,
            width: 100.0,
            height: 40.0,
        };
        let mut eggs = vec![egg(3, 300.0, 798.0)];
        let outcome = advance(&mut eggs, &basket);
        assert_eq!(outcome.caught, vec![3]);
        assert!(outcome.missed.is_empty());
    }

    #[test]
    fn test_independent_resolution() {
        let basket = Basket::default();
        let mut eggs = vec![
            egg(1, 300.0, 720.0), // caught
            egg(2, 20.0, 798.0),  // missed
            egg(3, 550.0, 100.0), // still falling
        ];
        let outcome = advance(&mut eggs, &basket);
        assert_eq!(outcome.caught, vec![1]);
        assert_eq!(outcome.missed, vec![2]);
        assert_eq!(eggs.len(), 1);
        assert_eq!(eggs[0].id, 3);
    }
}
