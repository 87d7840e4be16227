//! Mapping from canonical model faces to world-space faces.

use crate::types::{Direction, PlacementOrientation};

/// A precomputed bijection from a base model's canonical face directions to
/// the world directions they end up on after placement rotation/mirroring.
///
/// Derived once per placement orientation and shared by every cache entry
/// for that orientation class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacePermutation {
    map: [Direction; 6],
}

impl FacePermutation {
    /// The identity permutation (unrotated placement).
    pub fn identity() -> Self {
        Self { map: Direction::ALL }
    }

    /// Derive the permutation for a placement orientation: X rotation, then
    /// Y rotation, then the mirror.
    pub fn from_orientation(orientation: &PlacementOrientation) -> Self {
        let mut map = Direction::ALL;
        for canonical in Direction::ALL {
            let mut world = canonical.rotate_x(orientation.x).rotate_y(orientation.y);
            if orientation.mirrored {
                world = world.mirror_x();
            }
            map[canonical.index()] = world;
        }
        Self { map }
    }

    /// The world direction a canonical face resolves to.
    pub fn world_direction(&self, canonical: Direction) -> Direction {
        self.map[canonical.index()]
    }
}

impl Default for FacePermutation {
    fn default() -> Self {
        Self::identity()
    }
}
