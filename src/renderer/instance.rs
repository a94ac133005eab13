//! Per-object instance records, laid out for direct upload to a GPU
//! instance buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// One drawable: translate, yaw about +y, scale, tint
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub translation: [f32; 3],
    /// Degrees about the vertical axis
    pub yaw: f32,
    pub scale: [f32; 3],
    pub color: [f32; 4],
}

impl Instance {
    pub fn new(translation: Vec3, scale: Vec3, color: [f32; 4]) -> Self {
        Self {
            translation: translation.to_array(),
            yaw: 0.0,
            scale: scale.to_array(),
            color,
        }
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }
}

/// Unit meshes the render collaborator is expected to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mesh {
    /// Unit quad in the xz plane
    Floor,
    /// Unit cube centered on the origin
    Cube,
    /// Unit-radius sphere
    Sphere,
    /// Composite cat model: body, head, ears, tail
    Cat,
}

/// All instances of one mesh
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub mesh: Mesh,
    pub instances: Vec<Instance>,
}

impl DrawBatch {
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            instances: Vec::new(),
        }
    }

    /// Raw bytes for the instance buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.5, 0.8, 1.0, 1.0];
    pub const FLOOR: [f32; 4] = [0.82, 0.71, 0.55, 1.0];
    pub const WALL: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const OBSTACLE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const MOUSE: [f32; 4] = [0.7, 0.7, 0.7, 1.0];
    pub const CAT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HUD_TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
