//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Convert 8-bit RGB to a linear-ish float color
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const GRADIENT_TOP: [f32; 4] = rgb(173, 216, 230);
    pub const GRADIENT_BOTTOM: [f32; 4] = rgb(135, 206, 250);
    pub const HIGH_CONTRAST_BG: [f32; 4] = rgb(10, 10, 20);
    pub const BASKET: [f32; 4] = rgb(160, 82, 45);
    pub const EGG_PINK: [f32; 4] = rgb(255, 105, 180);
    pub const EGG_GOLD: [f32; 4] = rgb(255, 215, 0);
    pub const EGG_LIME: [f32; 4] = rgb(173, 255, 47);
    pub const EGG_SHINE: [f32; 4] = rgb(255, 255, 255);
    pub const BUTTON: [f32; 4] = rgb(40, 40, 40);
    pub const BUTTON_HOVER: [f32; 4] = rgb(70, 70, 70);
    pub const GAME_OVER_DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.35];
    pub const PAUSE_DIM: [f32; 4] = [1.0, 1.0, 1.0, 0.25];
}
