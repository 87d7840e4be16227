//! Render model for template blocks.
//!
//! This module turns a resolved theme into geometry: an appearance is
//! resolved per theme state, a face permutation maps model faces to world
//! faces for the block's placement orientation, and the retexture cache
//! memoizes the rewritten mesh so the hot render path mostly hands out a
//! shared immutable mesh.

pub mod appearance;
pub mod face_permutation;
pub mod host;
pub mod mesh;
pub mod retexture;

pub use appearance::{Appearance, AppearanceManager, AppearanceResolver, FaceAppearance};
pub use face_permutation::FacePermutation;
pub use host::{BaseMeshProvider, BlockRenderView, ColorProviders};
pub use mesh::{Mesh, MeshEmitter, Quad, QuadTransform, RenderMaterial, Sprite};
pub use retexture::{RetexturedModel, DEFAULT_CACHE_CAPACITY};
