//! Quad-based render meshes and the transform pipeline over them.
//!
//! A [`Mesh`] here is the host renderer's baked geometry: a flat list of
//! quads carrying sprite, material, bake flags and per-corner colors.
//! Transforms rewrite quads either ahead of time ([`Mesh::transformed`],
//! used when filling the retexture cache) or transiently during emission
//! ([`MeshEmitter`] transform stack, used for per-instance tint).

use glam::{Vec2, Vec3};

/// Handle to a sprite in the host texture atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sprite(pub u32);

/// Handle to a host render material (render layer, shading mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderMaterial(pub u32);

/// Fully opaque white, the neutral "no tint" color.
pub const WHITE: u32 = 0xFFFF_FFFF;

/// Rotate baked UVs by 90-degree steps (low two bits of the flag set).
pub const BAKE_ROTATE_90: u32 = 1;
pub const BAKE_ROTATE_180: u32 = 2;
pub const BAKE_ROTATE_270: u32 = 3;
/// Keep UVs locked to world coordinates instead of rotating with the block.
pub const BAKE_LOCK_UV: u32 = 4;
pub const BAKE_FLIP_U: u32 = 8;
pub const BAKE_FLIP_V: u32 = 16;
/// Interpolate raw 0-16 model UVs into the sprite's atlas region.
pub const BAKE_NORMALIZED: u32 = 32;

/// One baked quad.
///
/// The `tag` links geometry back to the canonical face it was modelled on:
/// 0 means "not retexturable" (decorative geometry), 1..=6 index
/// [`crate::Direction::ALL`]. Tags outside that range are passed through
/// untouched by every transform in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct Quad {
    tag: u32,
    material: RenderMaterial,
    sprite: Sprite,
    bake_flags: u32,
    /// Packed 0xAARRGGBB, one per corner.
    colors: [u32; 4],
    positions: [Vec3; 4],
    uvs: [Vec2; 4],
}

impl Quad {
    pub fn new(tag: u32, material: RenderMaterial, sprite: Sprite, positions: [Vec3; 4]) -> Self {
        Self {
            tag,
            material,
            sprite,
            bake_flags: 0,
            colors: [WHITE; 4],
            positions,
            uvs: [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y],
        }
    }

    pub fn tag(&self) -> u32 {
        self.tag
    }

    pub fn material(&self) -> RenderMaterial {
        self.material
    }

    pub fn set_material(&mut self, material: RenderMaterial) {
        self.material = material;
    }

    pub fn sprite(&self) -> Sprite {
        self.sprite
    }

    pub fn bake_flags(&self) -> u32 {
        self.bake_flags
    }

    pub fn colors(&self) -> [u32; 4] {
        self.colors
    }

    /// Set all four corner colors at once.
    pub fn set_color(&mut self, color: u32) {
        self.colors = [color; 4];
    }

    /// Rebake this quad onto another sprite with the given flag set.
    pub fn bake_sprite(&mut self, sprite: Sprite, flags: u32) {
        self.sprite = sprite;
        self.bake_flags = flags;
    }

    pub fn positions(&self) -> [Vec3; 4] {
        self.positions
    }

    pub fn uvs(&self) -> [Vec2; 4] {
        self.uvs
    }

    pub fn set_uvs(&mut self, uvs: [Vec2; 4]) {
        self.uvs = uvs;
    }
}

/// Stateless per-quad rewrite. Returning `false` drops the quad.
pub trait QuadTransform {
    fn transform(&self, quad: &mut Quad) -> bool;
}

/// A baked quad mesh. Never mutated once it lands in the retexture cache;
/// all rewriting happens on copies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    quads: Vec<Quad>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, quad: Quad) {
        self.quads.push(quad);
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Apply a transform to every quad, producing a new mesh. Quads for
    /// which the transform returns `false` are omitted.
    pub fn transformed(&self, transform: &dyn QuadTransform) -> Mesh {
        let mut out = Mesh::new();
        for quad in &self.quads {
            let mut quad = quad.clone();
            if transform.transform(&mut quad) {
                out.push(quad);
            }
        }
        out
    }
}

/// Emission sink with a push/pop transform stack.
///
/// The host's render context hands one of these to a model per block/item
/// render call. Transforms pushed around an emission rewrite quads on the
/// way out; the most recently pushed transform runs first. The source mesh
/// is never modified.
#[derive(Default)]
pub struct MeshEmitter {
    out: Mesh,
    transforms: Vec<Box<dyn QuadTransform>>,
}

impl MeshEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_transform(&mut self, transform: impl QuadTransform + 'static) {
        self.transforms.push(Box::new(transform));
    }

    pub fn pop_transform(&mut self) {
        self.transforms.pop();
    }

    /// Emit every quad of a mesh through the current transform stack.
    pub fn emit_mesh(&mut self, mesh: &Mesh) {
        'quads: for quad in mesh.quads() {
            let mut quad = quad.clone();
            for transform in self.transforms.iter().rev() {
                if !transform.transform(&mut quad) {
                    continue 'quads;
                }
            }
            self.out.push(quad);
        }
    }

    /// Quads emitted so far.
    pub fn emitted(&self) -> &Mesh {
        &self.out
    }

    pub fn finish(self) -> Mesh {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(tag: u32) -> Quad {
        Quad::new(
            tag,
            RenderMaterial(0),
            Sprite(0),
            [Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y],
        )
    }

    struct Recolor(u32);
    impl QuadTransform for Recolor {
        fn transform(&self, quad: &mut Quad) -> bool {
            quad.set_color(self.0);
            true
        }
    }

    struct DropTagged;
    impl QuadTransform for DropTagged {
        fn transform(&self, quad: &mut Quad) -> bool {
            quad.tag() == 0
        }
    }

    #[test]
    fn test_transformed_leaves_source_untouched() {
        let mut mesh = Mesh::new();
        mesh.push(quad(1));

        let recolored = mesh.transformed(&Recolor(0xFF00FF00));
        assert_eq!(recolored.quads()[0].colors(), [0xFF00FF00; 4]);
        assert_eq!(mesh.quads()[0].colors(), [WHITE; 4]);
    }

    #[test]
    fn test_transformed_can_drop_quads() {
        let mut mesh = Mesh::new();
        mesh.push(quad(0));
        mesh.push(quad(3));

        let filtered = mesh.transformed(&DropTagged);
        assert_eq!(filtered.quad_count(), 1);
        assert_eq!(filtered.quads()[0].tag(), 0);
    }

    #[test]
    fn test_emitter_transform_stack() {
        let mut mesh = Mesh::new();
        mesh.push(quad(1));

        let mut emitter = MeshEmitter::new();
        emitter.emit_mesh(&mesh);

        emitter.push_transform(Recolor(0xFF123456));
        emitter.emit_mesh(&mesh);
        emitter.pop_transform();

        emitter.emit_mesh(&mesh);

        let out = emitter.finish();
        assert_eq!(out.quad_count(), 3);
        assert_eq!(out.quads()[0].colors(), [WHITE; 4]);
        assert_eq!(out.quads()[1].colors(), [0xFF123456; 4]);
        assert_eq!(out.quads()[2].colors(), [WHITE; 4]);
        // Source mesh untouched by the transient transform
        assert_eq!(mesh.quads()[0].colors(), [WHITE; 4]);
    }
}
