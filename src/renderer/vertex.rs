//! Flat-colored vertex format

use bytemuck::{Pod, Zeroable};

/// Play-area position (NDC once uploaded) plus RGBA
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

    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    /// Buffer layout matching `shader.wgsl`
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Palette
pub mod colors {
    pub const BORDER: [f32; 4] = [1.0, 1.0, 1.0, 0.2];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const OBSTACLE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const SHIP_HULL: [f32; 4] = [0.55, 0.8, 1.0, 1.0];
    pub const SHIP_COCKPIT: [f32; 4] = [0.1, 0.2, 0.45, 1.0];
    pub const SHIP_ENGINE: [f32; 4] = [1.0, 0.6, 0.15, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
