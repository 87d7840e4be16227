//! # Template Blocks
//!
//! A Rust library implementing "template blocks": blocks whose visual
//! appearance imitates another block chosen at runtime (the theme), and
//! which track a small set of one-shot upgrades, each consumable by a
//! specific item.
//!
//! ## Overview
//!
//! The crate has two halves. The render half rewrites a base block mesh to
//! use the theme block's sprites, materials and tint capability, memoizing
//! the rewritten mesh per (base state, appearance) pair so the hot render
//! path mostly hands out a shared immutable mesh. The interaction half is
//! the state machine that produces those themes and upgrade flags from
//! player interactions, persists them through NBT, and reconstructs item
//! drops on removal.
//!
//! ## Quick Start
//!
//! ```ignore
//! use template_blocks::{
//!     AppearanceManager, MeshEmitter, PlacementOrientation, RetexturedModel,
//! };
//!
//! // Wire the model up to host collaborators (mesh provider, color
//! // registries, appearance resolver)
//! let model = RetexturedModel::new(
//!     base_meshes,
//!     color_providers,
//!     AppearanceManager::new(appearance_resolver),
//!     PlacementOrientation::default(),
//!     item_model_state,
//! );
//!
//! // Per block render call, from any worker thread
//! let mut emitter = MeshEmitter::new();
//! model.emit_block_quads(&view, &state, pos, &mut emitter);
//! ```
//!
//! Interactions run on the world-update thread through
//! [`interaction::on_use`], with the host supplying a
//! [`interaction::TemplateWorld`] implementation.

pub mod error;
pub mod interaction;
pub mod model;
pub mod types;

// Re-export main types for convenience
pub use error::{Result, TemplateError};
pub use interaction::{ActionResult, Actor, HeldItem, ItemStack, TemplateData, TemplateWorld};
pub use model::{
    Appearance, AppearanceManager, AppearanceResolver, BaseMeshProvider, BlockRenderView,
    ColorProviders, FacePermutation, Mesh, MeshEmitter, Quad, QuadTransform, RenderMaterial,
    RetexturedModel, Sprite,
};
pub use types::{
    Aabb, Axis, BlockPosition, BlockState, Direction, PlacementOrientation, VoxelShape,
};
