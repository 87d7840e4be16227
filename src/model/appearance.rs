//! Resolved theme appearances and their per-theme cache.

use crate::model::mesh::{RenderMaterial, Sprite};
use crate::types::{BlockState, Direction};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Rendering data for one face of a resolved theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceAppearance {
    /// Sprite this face samples from.
    pub sprite: Sprite,
    /// Bake flags the sprite was registered with (rotation, flips).
    pub bake_flags: u32,
    /// Whether a color provider tint applies to this face.
    pub tintable: bool,
}

impl FaceAppearance {
    pub fn new(sprite: Sprite) -> Self {
        Self {
            sprite,
            bake_flags: 0,
            tintable: false,
        }
    }

    pub fn with_bake_flags(mut self, flags: u32) -> Self {
        self.bake_flags = flags;
        self
    }

    pub fn tintable(mut self) -> Self {
        self.tintable = true;
        self
    }
}

/// The resolved, direction-indexed rendering data for one theme state.
///
/// Immutable once built; equality and hashing are structural so that two
/// themes resolving to identical appearances share retexture cache entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Appearance {
    faces: [FaceAppearance; 6],
    particle: Sprite,
    material: RenderMaterial,
}

impl Appearance {
    pub fn new(faces: [FaceAppearance; 6], particle: Sprite, material: RenderMaterial) -> Self {
        Self {
            faces,
            particle,
            material,
        }
    }

    /// Appearance using one face everywhere (single-texture themes).
    pub fn uniform(face: FaceAppearance, particle: Sprite, material: RenderMaterial) -> Self {
        Self {
            faces: [face; 6],
            particle,
            material,
        }
    }

    pub fn sprite(&self, direction: Direction) -> Sprite {
        self.faces[direction.index()].sprite
    }

    pub fn bake_flags(&self, direction: Direction) -> u32 {
        self.faces[direction.index()].bake_flags
    }

    /// Whether this face takes a per-instance tint.
    pub fn has_color(&self, direction: Direction) -> bool {
        self.faces[direction.index()].tintable
    }

    pub fn particle_sprite(&self) -> Sprite {
        self.particle
    }

    pub fn material(&self) -> RenderMaterial {
        self.material
    }
}

/// Host hook turning a theme block state into rendering data.
///
/// Implementations wrap the host's sprite atlas and model lookups. They are
/// expected to be cheap-ish but not free, which is why resolved appearances
/// are memoized by [`AppearanceManager`].
pub trait AppearanceResolver: Send + Sync {
    /// Resolve the appearance of a theme state.
    fn resolve(&self, theme: &BlockState) -> Appearance;

    /// The appearance used when no theme is assigned (the template's own
    /// placeholder texture).
    fn default_appearance(&self) -> Appearance;
}

/// Memoizes resolved appearances per theme state.
pub struct AppearanceManager {
    resolver: Box<dyn AppearanceResolver>,
    default_appearance: Arc<Appearance>,
    cache: Mutex<HashMap<BlockState, Arc<Appearance>>>,
}

impl AppearanceManager {
    pub fn new(resolver: impl AppearanceResolver + 'static) -> Self {
        let default_appearance = Arc::new(resolver.default_appearance());
        Self {
            resolver: Box::new(resolver),
            default_appearance,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The no-theme appearance.
    pub fn default_appearance(&self) -> Arc<Appearance> {
        Arc::clone(&self.default_appearance)
    }

    /// Look up or resolve the appearance for a theme state.
    pub fn appearance(&self, theme: &BlockState) -> Arc<Appearance> {
        let mut cache = self.cache.lock().expect("appearance cache lock poisoned");
        if let Some(appearance) = cache.get(theme) {
            return Arc::clone(appearance);
        }
        log::debug!("resolving appearance for theme {theme}");
        let appearance = Arc::new(self.resolver.resolve(theme));
        cache.insert(theme.clone(), Arc::clone(&appearance));
        appearance
    }
}
