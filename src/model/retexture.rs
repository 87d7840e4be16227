//! The retexturing model: rewrites a base block mesh to wear another
//! block's textures, memoizing the expensive rewrite per
//! (base state, appearance) pair.
//!
//! Tint is deliberately NOT part of the cache key. The specific tint might
//! vary a lot; imagine grass color smoothly changing across a biome border.
//! Baking it into the cached mesh would pollute the cache with a ton of
//! single-use meshes differing only slightly in color, so tint is layered
//! on at emission time via a transient transform instead.

use crate::model::appearance::{Appearance, AppearanceManager};
use crate::model::face_permutation::FacePermutation;
use crate::model::host::{BaseMeshProvider, BlockRenderView, ColorProviders};
use crate::model::mesh::{
    Mesh, MeshEmitter, Quad, QuadTransform, Sprite, BAKE_LOCK_UV, BAKE_NORMALIZED, WHITE,
};
use crate::types::{BlockPosition, BlockState, Direction, PlacementOrientation};
use lru::LruCache;
use quartz_nbt::NbtCompound;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

/// Default bound on distinct (base state, appearance) mesh entries.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Identifies one cached untinted mesh. Equality and hashing are
/// structural: distinct block instances sharing a base state and theme
/// land on the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    state: BlockState,
    appearance: Arc<Appearance>,
}

/// A baked model that imitates another block's appearance.
///
/// Wraps the base model's geometry and serves retextured, untinted meshes
/// out of a bounded LRU cache. Shared across all render worker threads.
pub struct RetexturedModel<M: BaseMeshProvider, C: ColorProviders> {
    base: M,
    colors: C,
    appearances: AppearanceManager,
    face_permutation: FacePermutation,
    uvlock: bool,
    item_model_state: BlockState,
    cache: Mutex<LruCache<CacheKey, Arc<Mesh>>>,
}

impl<M: BaseMeshProvider, C: ColorProviders> RetexturedModel<M, C> {
    pub fn new(
        base: M,
        colors: C,
        appearances: AppearanceManager,
        orientation: PlacementOrientation,
        item_model_state: BlockState,
    ) -> Self {
        Self::with_cache_capacity(
            base,
            colors,
            appearances,
            orientation,
            item_model_state,
            DEFAULT_CACHE_CAPACITY,
        )
    }

    pub fn with_cache_capacity(
        base: M,
        colors: C,
        appearances: AppearanceManager,
        orientation: PlacementOrientation,
        item_model_state: BlockState,
        capacity: usize,
    ) -> Self {
        Self {
            base,
            colors,
            appearances,
            face_permutation: FacePermutation::from_orientation(&orientation),
            uvlock: orientation.uvlock,
            item_model_state,
            cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity.max(1)).unwrap(),
            )),
        }
    }

    /// Particle sprite: the default (no-theme) appearance's particle.
    pub fn particle_sprite(&self) -> Sprite {
        self.appearances.default_appearance().particle_sprite()
    }

    /// Number of retextured meshes currently cached.
    pub fn cached_mesh_count(&self) -> usize {
        self.cache.lock().expect("retexture cache lock poisoned").len()
    }

    /// Emit the quads for a template block in the world.
    ///
    /// The theme comes from the render-attachment side channel at `pos`.
    /// No attachment, or an air attachment, renders the default appearance.
    pub fn emit_block_quads(
        &self,
        view: &dyn BlockRenderView,
        state: &BlockState,
        pos: BlockPosition,
        emitter: &mut MeshEmitter,
    ) {
        let theme = view.attached_theme(pos).filter(|theme| !theme.is_air());
        let Some(theme) = theme else {
            let mesh = self.untinted_mesh(state, &self.appearances.default_appearance());
            emitter.emit_mesh(&mesh);
            return;
        };

        let appearance = self.appearances.appearance(&theme);
        let tint = match self.colors.block_color(&theme, view, pos) {
            Some(rgb) => 0xFF00_0000 | rgb,
            None => WHITE,
        };
        let mesh = self.untinted_mesh(state, &appearance);

        if tint == WHITE {
            emitter.emit_mesh(&mesh);
        } else {
            emitter.push_transform(TintingTransformer::new(
                Arc::clone(&appearance),
                self.face_permutation,
                tint,
            ));
            emitter.emit_mesh(&mesh);
            emitter.pop_transform();
        }
    }

    /// Emit the quads for a template item stack.
    ///
    /// The theme comes from the stack's embedded block entity tag; a stack
    /// without one renders the default appearance.
    pub fn emit_item_quads(&self, stack_nbt: Option<&NbtCompound>, emitter: &mut MeshEmitter) {
        let theme = stack_nbt
            .and_then(|tag| tag.get::<_, &NbtCompound>("BlockState").ok())
            .and_then(|tag| BlockState::from_nbt(tag).ok())
            .filter(|theme| !theme.is_air());

        let (appearance, tint) = match &theme {
            Some(theme) => {
                let tint = match self.colors.item_color(theme) {
                    Some(rgb) => 0xFF00_0000 | rgb,
                    None => WHITE,
                };
                (self.appearances.appearance(theme), tint)
            }
            None => (self.appearances.default_appearance(), WHITE),
        };

        let mesh = self.untinted_mesh(&self.item_model_state, &appearance);

        if tint == WHITE {
            emitter.emit_mesh(&mesh);
        } else {
            emitter.push_transform(TintingTransformer::new(
                Arc::clone(&appearance),
                self.face_permutation,
                tint,
            ));
            emitter.emit_mesh(&mesh);
            emitter.pop_transform();
        }
    }

    /// Get-or-create the untinted retextured mesh for one cache key.
    ///
    /// Misses build outside the lock; two threads racing on the same key may
    /// both build (the results are equal by construction), but only the
    /// first publish is retained.
    pub fn untinted_mesh(&self, state: &BlockState, appearance: &Arc<Appearance>) -> Arc<Mesh> {
        let key = CacheKey {
            state: state.clone(),
            appearance: Arc::clone(appearance),
        };

        {
            let mut cache = self.cache.lock().expect("retexture cache lock poisoned");
            if let Some(mesh) = cache.get(&key) {
                return Arc::clone(mesh);
            }
        }

        log::debug!("building retextured mesh for {}", key.state);
        let mesh = Arc::new(self.build_untinted_mesh(&key));

        let mut cache = self.cache.lock().expect("retexture cache lock poisoned");
        if let Some(existing) = cache.get(&key) {
            return Arc::clone(existing);
        }
        cache.put(key, Arc::clone(&mesh));
        mesh
    }

    fn build_untinted_mesh(&self, key: &CacheKey) -> Mesh {
        let base = self.base.base_mesh(&key.state);
        base.transformed(&RetexturingTransformer {
            appearance: Arc::clone(&key.appearance),
            face_permutation: self.face_permutation,
            uvlock: self.uvlock,
        })
    }
}

/// The cache-fill transform: rewrites material, sprite, bake flags and
/// (for tintable faces) a neutral white color onto each tagged quad.
struct RetexturingTransformer {
    appearance: Arc<Appearance>,
    face_permutation: FacePermutation,
    uvlock: bool,
}

impl QuadTransform for RetexturingTransformer {
    fn transform(&self, quad: &mut Quad) -> bool {
        // Tag 0 marks decorative geometry; unknown tags pass through too.
        let Some(canonical) = tag_direction(quad.tag()) else {
            return true;
        };
        let world = self.face_permutation.world_direction(canonical);

        quad.set_material(self.appearance.material());
        if self.appearance.has_color(world) {
            // Neutral placeholder; the real tint is layered on at emission
            // time so the cached mesh stays tint-independent.
            quad.set_color(WHITE);
        }

        let mut flags = BAKE_NORMALIZED | self.appearance.bake_flags(world);
        if self.uvlock {
            flags |= BAKE_LOCK_UV;
        }
        quad.bake_sprite(self.appearance.sprite(world), flags);

        true
    }
}

/// The emission-time tint transform: re-walks the same tag mapping but only
/// touches the color of tintable faces. Sprite and material stay as cached.
struct TintingTransformer {
    appearance: Arc<Appearance>,
    face_permutation: FacePermutation,
    tint: u32,
}

impl TintingTransformer {
    fn new(appearance: Arc<Appearance>, face_permutation: FacePermutation, tint: u32) -> Self {
        Self {
            appearance,
            face_permutation,
            tint,
        }
    }
}

impl QuadTransform for TintingTransformer {
    fn transform(&self, quad: &mut Quad) -> bool {
        let Some(canonical) = tag_direction(quad.tag()) else {
            return true;
        };
        let world = self.face_permutation.world_direction(canonical);
        if self.appearance.has_color(world) {
            quad.set_color(self.tint);
        }
        true
    }
}

/// Map a quad face tag to its canonical direction. Tags were chosen so that
/// 1..=6 index [`Direction::ALL`]; anything else is untagged.
fn tag_direction(tag: u32) -> Option<Direction> {
    match tag {
        1..=6 => Some(Direction::ALL[tag as usize - 1]),
        _ => None,
    }
}
