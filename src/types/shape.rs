//! Collision and outline shapes, in 0-16 block-local coordinates.

use glam::Vec3;

/// An axis-aligned box in block-local coordinates (0..16 per axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The full 16x16x16 block box.
    pub fn full_block() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::splat(16.0),
        }
    }
}

/// A voxel shape: a union of axis-aligned boxes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoxelShape {
    boxes: Vec<Aabb>,
}

impl VoxelShape {
    /// Shape with no volume at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The full single-block cube.
    pub fn full_cube() -> Self {
        Self {
            boxes: vec![Aabb::full_block()],
        }
    }

    pub fn from_boxes(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// True when the shape is exactly one box covering the whole block.
    /// Theme candidates must pass this check; stairs, slabs, fences and the
    /// like do not.
    pub fn is_full_cube(&self) -> bool {
        self.boxes.len() == 1 && {
            let b = &self.boxes[0];
            b.min == Vec3::ZERO && b.max == Vec3::splat(16.0)
        }
    }

    pub fn boxes(&self) -> &[Aabb] {
        &self.boxes
    }
}
