//! Interfaces onto the host rendering engine.
//!
//! Everything in this module is implemented by the embedding game engine;
//! the retexturing model only consumes it.

use crate::model::mesh::Mesh;
use crate::types::{BlockPosition, BlockState};
use std::sync::Arc;

/// Supplies the un-retextured baked geometry for a block state.
///
/// Retrieval is assumed infallible for valid states; a failure here is a
/// host contract violation, not a runtime condition this crate recovers
/// from.
pub trait BaseMeshProvider: Send + Sync {
    fn base_mesh(&self, state: &BlockState) -> Arc<Mesh>;
}

/// Render-time side channel: the host attaches each template block's theme
/// state to its position, out of band of the block state itself.
pub trait BlockRenderView {
    /// The theme attached at a position, if any. Air counts as "no theme".
    fn attached_theme(&self, pos: BlockPosition) -> Option<BlockState>;
}

/// Host color-provider registries, keyed by block identity.
///
/// `None` means the theme block has no color provider registered, i.e. it
/// never tints. A provider returns an 0xRRGGBB color; the alpha channel is
/// filled in by the caller.
pub trait ColorProviders: Send + Sync {
    /// Block color for world rendering (may vary by position, e.g. biome
    /// foliage gradients).
    fn block_color(
        &self,
        theme: &BlockState,
        view: &dyn BlockRenderView,
        pos: BlockPosition,
    ) -> Option<u32>;

    /// Item color for inventory rendering of the same theme.
    fn item_color(&self, theme: &BlockState) -> Option<u32>;
}
