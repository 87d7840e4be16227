//! Placement orientation for baked block models.

use crate::error::{Result, TemplateError};

/// How a block model was oriented when baked: quarter-turn rotations around
/// the X and Y axes, an optional mirror, and whether UVs stay locked to
/// world space instead of rotating with the block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementOrientation {
    /// X rotation in degrees (0, 90, 180, 270).
    pub x: i32,
    /// Y rotation in degrees (0, 90, 180, 270).
    pub y: i32,
    /// Mirror across the YZ plane, applied after rotation.
    pub mirrored: bool,
    /// If true, UV coordinates don't rotate with the block.
    pub uvlock: bool,
}

impl PlacementOrientation {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            mirrored: false,
            uvlock: false,
        }
    }

    pub fn mirrored(mut self) -> Self {
        self.mirrored = true;
        self
    }

    pub fn with_uvlock(mut self, uvlock: bool) -> Self {
        self.uvlock = uvlock;
        self
    }

    /// Check if this is an identity orientation (no rotation or mirror).
    pub fn is_identity(&self) -> bool {
        self.x % 360 == 0 && self.y % 360 == 0 && !self.mirrored
    }

    /// Reject rotations that are not multiples of 90 degrees.
    pub fn validate(&self) -> Result<()> {
        if self.x % 90 != 0 || self.y % 90 != 0 {
            return Err(TemplateError::InvalidOrientation(format!(
                "rotation must be in 90-degree steps, got x={} y={}",
                self.x, self.y
            )));
        }
        Ok(())
    }
}
