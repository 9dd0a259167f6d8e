//! Shape generation for 2D primitives
//!
//! All shapes are emitted as plain triangle lists in screen coordinates.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, PI};

use super::vertex::Vertex;
use crate::sim::Aabb;

/// Generate vertices for a filled rectangle
pub fn rect(r: &Aabb, color: [f32; 4]) -> Vec<Vertex> {
    quad(r.min, r.max, color, color)
}

/// Rectangle with a top-to-bottom color gradient
pub fn vertical_gradient(r: &Aabb, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    quad(r.min, r.max, top, bottom)
}

fn quad(min: Vec2, max: Vec2, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, top),
        Vertex::new(max.x, min.y, top),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(min.x, max.y, bottom),
        Vertex::new(max.x, min.y, top),
        Vertex::new(max.x, max.y, bottom),
    ]
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Rectangle with rounded corners: a cross of two rects plus four quarter fans
pub fn rounded_rect(r: &Aabb, radius: f32, color: [f32; 4], corner_segments: u32) -> Vec<Vertex> {
    let radius = radius.min(r.width() / 2.0).min(r.height() / 2.0).max(0.0);
    if radius == 0.0 {
        return rect(r, color);
    }

    let mut vertices = Vec::with_capacity((12 + corner_segments * 12) as usize);

    // Horizontal band (full width) and vertical band (full height)
    vertices.extend(rect(
        &Aabb {
            min: Vec2::new(r.min.x, r.min.y + radius),
            max: Vec2::new(r.max.x, r.max.y - radius),
        },
        color,
    ));
    vertices.extend(rect(
        &Aabb {
            min: Vec2::new(r.min.x + radius, r.min.y),
            max: Vec2::new(r.max.x - radius, r.max.y),
        },
        color,
    ));

    // Corner centers with the angle each quarter starts at (y down)
    let corners = [
        (Vec2::new(r.max.x - radius, r.max.y - radius), 0.0),
        (Vec2::new(r.min.x + radius, r.max.y - radius), FRAC_PI_2),
        (Vec2::new(r.min.x + radius, r.min.y + radius), PI),
        (Vec2::new(r.max.x - radius, r.min.y + radius), PI + FRAC_PI_2),
    ];
    for (center, start) in corners {
        for i in 0..corner_segments {
            let theta1 = start + (i as f32 / corner_segments as f32) * FRAC_PI_2;
            let theta2 = start + ((i + 1) as f32 / corner_segments as f32) * FRAC_PI_2;
            vertices.push(Vertex::new(center.x, center.y, color));
            vertices.push(Vertex::new(
                center.x + radius * theta1.cos(),
                center.y + radius * theta1.sin(),
                color,
            ));
            vertices.push(Vertex::new(
                center.x + radius * theta2.cos(),
                center.y + radius * theta2.sin(),
                color,
            ));
        }
    }

    vertices
}
