//! Chase camera and scene layout
//!
//! The camera orbits the cat on the ground plane at a fixed height and
//! radius, always looking at a point just above the cat.

use glam::{Mat4, Vec3};

use super::instance::{DrawBatch, Instance, Mesh, colors};
use crate::sim::GameState;

/// Height of the point the camera looks at
pub const LOOK_HEIGHT: f32 = 0.8;
pub const FOV_Y_DEGREES: f32 = 60.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 200.0;

pub const WALL_HEIGHT: f32 = 2.2;
pub const WALL_THICKNESS: f32 = 0.2;
pub const OBSTACLE_HEIGHT: f32 = 1.0;
pub const MOUSE_RADIUS: f32 = 0.18;
pub const MOUSE_HEIGHT: f32 = 0.12;

/// Resolved camera placement for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraView {
    /// Place the chase camera for the current snapshot
    pub fn chase(state: &GameState) -> Self {
        let cam = &state.camera;
        let a = cam.angle.to_radians();
        let cat = state.cat.pos;
        Self {
            eye: Vec3::new(
                cat.x + a.cos() * cam.radius,
                cam.height,
                cat.y + a.sin() * cam.radius,
            ),
            target: Vec3::new(cat.x, LOOK_HEIGHT, cat.y),
            up: Vec3::Y,
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}

/// Build draw batches for floor, walls, obstacles, mice and the cat
pub fn build_batches(state: &GameState) -> Vec<DrawBatch> {
    let half = state.arena.half_extent;

    let mut floor = DrawBatch::new(Mesh::Floor);
    floor.instances.push(Instance::new(
        Vec3::ZERO,
        Vec3::new(2.0 * half, 1.0, 2.0 * half),
        colors::FLOOR,
    ));

    let mut cubes = DrawBatch::new(Mesh::Cube);
    let y = WALL_HEIGHT / 2.0;
    let offset = half + WALL_THICKNESS / 2.0;
    let span = 2.0 * half + WALL_THICKNESS;
    for (pos, scale) in [
        (Vec3::new(0.0, y, -offset), Vec3::new(span, WALL_HEIGHT, WALL_THICKNESS)),
        (Vec3::new(0.0, y, offset), Vec3::new(span, WALL_HEIGHT, WALL_THICKNESS)),
        (Vec3::new(-offset, y, 0.0), Vec3::new(WALL_THICKNESS, WALL_HEIGHT, span)),
        (Vec3::new(offset, y, 0.0), Vec3::new(WALL_THICKNESS, WALL_HEIGHT, span)),
    ] {
        cubes.instances.push(Instance::new(pos, scale, colors::WALL));
    }
    for ob in &state.obstacles {
        cubes.instances.push(Instance::new(
            Vec3::new(ob.pos.x, OBSTACLE_HEIGHT / 2.0, ob.pos.y),
            Vec3::new(ob.size.x, OBSTACLE_HEIGHT, ob.size.y),
            colors::OBSTACLE,
        ));
    }

    let mut spheres = DrawBatch::new(Mesh::Sphere);
    for mouse in &state.mice {
        spheres.instances.push(Instance::new(
            Vec3::new(mouse.pos.x, MOUSE_HEIGHT, mouse.pos.y),
            Vec3::splat(MOUSE_RADIUS),
            colors::MOUSE,
        ));
    }

    let mut cat = DrawBatch::new(Mesh::Cat);
    cat.instances.push(
        Instance::new(state.cat.world_pos(), Vec3::ONE, colors::CAT).with_yaw(-state.cat.heading),
    );

    vec![floor, cubes, spheres, cat]
}
