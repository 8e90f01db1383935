//! Rendering module
//!
//! The scene painter emits draw calls against [`Canvas`]; the WebGPU backend
//! tessellates them into flat-coloured triangles.

pub mod canvas;
pub mod mesh;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use mesh::MeshCanvas;
pub use pipeline::RenderState;
pub use scene::render;
