//! WebGPU rendering module
//!
//! Frames are turned into flat-colored triangle lists (`shapes`) in play-area
//! coordinates and drawn by a single pipeline (`pipeline`).

pub mod pipeline;
pub mod shapes;
pub mod vertex;
pub mod viewport;

pub use pipeline::RenderState;
pub use vertex::Vertex;
pub use viewport::Viewport;

use thiserror::Error;

use crate::frontend::{Frame, Renderer};

/// GPU acquisition failures. Any of these keeps the game from starting.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to acquire GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

impl Renderer for RenderState {
    fn draw(&mut self, frame: &Frame<'_>) {
        let vertices = shapes::frame_vertices(frame);
        match self.render(&vertices) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => {
                self.resize(self.size.0, self.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}
