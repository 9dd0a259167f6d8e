//! WebGPU rendering module
//!
//! Scene composition is pure (`scene`, `shapes`) and runs anywhere; only
//! `pipeline` touches the GPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{SceneOptions, build_scene};
pub use vertex::Vertex;
