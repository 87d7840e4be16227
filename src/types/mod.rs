//! Shared types used throughout the library.

mod block_state;
mod direction;
mod orientation;
mod shape;

pub use block_state::BlockState;
pub use direction::{Axis, Direction};
pub use orientation::PlacementOrientation;
pub use shape::{Aabb, VoxelShape};

/// A block position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPosition {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Get the neighboring position in the given direction.
    pub fn neighbor(&self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }
}
