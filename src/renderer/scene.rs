//! Frame composition: turns a [`FrameSnapshot`] into one triangle list
//!
//! Draw order is back to front: background, eggs, basket, controls, overlays.
//! Text is not drawn here; the HUD labels are DOM elements on the web build.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{Aabb, EggColor, EggSprite, FrameSnapshot, GamePhase};
use crate::ui::ControlButton;

const EGG_SEGMENTS: u32 = 24;
const CORNER_SEGMENTS: u32 = 6;
const CORNER_RADIUS: f32 = 10.0;

/// Per-frame presentation state that isn't part of the simulation
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneOptions {
    /// Control under the mouse pointer
    pub hovered: Option<ControlButton>,
    pub high_contrast: bool,
}

pub fn egg_color(color: EggColor) -> [f32; 4] {
    match color {
        EggColor::Pink => colors::EGG_PINK,
        EggColor::Gold => colors::EGG_GOLD,
        EggColor::Lime => colors::EGG_LIME,
    }
}

fn screen_bounds() -> Aabb {
    Aabb::from_xywh(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT)
}

/// Egg body plus a glossy highlight toward the upper left
fn egg(sprite: &EggSprite) -> Vec<Vertex> {
    let center = sprite.bounds.center();
    let r = sprite.bounds.width() / 2.0;
    let mut vertices = shapes::ellipse(
        center,
        Vec2::new(r * 0.6, r * 0.8),
        egg_color(sprite.color),
        EGG_SEGMENTS,
    );
    vertices.extend(shapes::ellipse(
        center + Vec2::new(-r * 0.25, -r * 0.35),
        Vec2::splat(r * 0.2),
        colors::EGG_SHINE,
        EGG_SEGMENTS / 2,
    ));
    vertices
}

/// Build every vertex for one frame, in screen coordinates
pub fn build_scene(snapshot: &FrameSnapshot, options: &SceneOptions) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(1024 + snapshot.eggs.len() * 108);

    if options.high_contrast {
        vertices.extend(shapes::rect(&screen_bounds(), colors::HIGH_CONTRAST_BG));
    } else {
        vertices.extend(shapes::vertical_gradient(
            &screen_bounds(),
            colors::GRADIENT_TOP,
            colors::GRADIENT_BOTTOM,
        ));
    }

    for sprite in &snapshot.eggs {
        vertices.extend(egg(sprite));
    }

    vertices.extend(shapes::rounded_rect(
        &snapshot.basket,
        CORNER_RADIUS,
        colors::BASKET,
        CORNER_SEGMENTS,
    ));

    match snapshot.phase {
        GamePhase::Running => {}
        GamePhase::Paused => {
            vertices.extend(shapes::rect(&screen_bounds(), colors::PAUSE_DIM));
        }
        GamePhase::GameOver => {
            vertices.extend(shapes::rect(&screen_bounds(), colors::GAME_OVER_DIM));
        }
    }

    // Controls stay on top of the overlays so they remain clickable-looking
    for button in ControlButton::ALL {
        let color = if options.hovered == Some(button) {
            colors::BUTTON_HOVER
        } else {
            colors::BUTTON
        };
        vertices.extend(shapes::rounded_rect(
            &button.bounds(),
            CORNER_RADIUS,
            color,
            CORNER_SEGMENTS,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameSession;

    fn count_color(vertices: &[Vertex], color: [f32; 4]) -> usize {
        vertices.iter().filter(|v| v.color == color).count()
    }

    #[test]
    fn test_empty_field() {
        let session = GameSession::new(1);
        let verts = build_scene(&session.snapshot(), &SceneOptions::default());
        assert_eq!(verts.len() % 3, 0);
        assert!(count_color(&verts, colors::BASKET) > 0);
        assert_eq!(count_color(&verts, colors::EGG_SHINE), 0);
        assert_eq!(count_color(&verts, colors::BUTTON_HOVER), 0);
    }

    #[test]
    fn test_eggs_drawn_with_their_color() {
        let mut session = GameSession::new(1);
        session.spawn_egg_at(100.0);
        session.spawn_egg_at(200.0);
        let snap = session.snapshot();
        let verts = build_scene(&snap, &SceneOptions::default());
        for sprite in &snap.eggs {
            assert!(count_color(&verts, egg_color(sprite.color)) >= (EGG_SEGMENTS * 3) as usize);
        }
        assert_eq!(
            count_color(&verts, colors::EGG_SHINE),
            2 * (EGG_SEGMENTS / 2 * 3) as usize
        );
    }

    #[test]
    fn test_hovered_button_highlighted() {
        let session = GameSession::new(1);
        let options = SceneOptions {
            hovered: Some(ControlButton::Quit),
            high_contrast: false,
        };
        let verts = build_scene(&session.snapshot(), &options);
        assert!(count_color(&verts, colors::BUTTON_HOVER) > 0);
        for v in verts.iter().filter(|v| v.color == colors::BUTTON_HOVER) {
            assert!(v.position[1] >= 120.0 - 1e-3);
        }
    }

    #[test]
    fn test_phase_overlays() {
        let mut session = GameSession::new(1);
        session.phase = GamePhase::GameOver;
        let verts = build_scene(&session.snapshot(), &SceneOptions::default());
        assert_eq!(count_color(&verts, colors::GAME_OVER_DIM), 6);

        session.phase = GamePhase::Paused;
        let verts = build_scene(&session.snapshot(), &SceneOptions::default());
        assert_eq!(count_color(&verts, colors::PAUSE_DIM), 6);
        assert_eq!(count_color(&verts, colors::GAME_OVER_DIM), 0);
    }

    #[test]
    fn test_high_contrast_background() {
        let session = GameSession::new(1);
        let options = SceneOptions {
            hovered: None,
            high_contrast: true,
        };
        let verts = build_scene(&session.snapshot(), &options);
        assert_eq!(count_color(&verts, colors::HIGH_CONTRAST_BG), 6);
        assert_eq!(count_color(&verts, colors::GRADIENT_TOP), 0);
    }
}
