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

/// Colors for game elements
pub mod colors {
    use crate::sim::Color;

    pub const ROAD: Color = Color::rgb(0x22, 0x22, 0x22);
    pub const SIDEWALK: Color = Color::rgb(0x66, 0x66, 0x66);
    pub const LANE_MARK: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const OUTLINE: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WINDSHIELD: Color = Color::rgb(0x77, 0xcc, 0xff);
    pub const WHEEL: Color = Color::rgb(0x22, 0x22, 0x22);
}
