//! Player interaction with template blocks.
//!
//! Template blocks carry three one-shot upgrades, each consumable by a
//! specific item, plus a one-time theme assignment:
//!
//! - glowstone dust grants light emission,
//! - a redstone torch grants a full-strength redstone signal,
//! - popped chorus fruit removes solidity,
//! - any full-cube block item becomes the theme.
//!
//! The state machine runs on the authoritative world-update thread; the
//! host guarantees no concurrent mutation of one block's data.

pub mod data;

pub use data::TemplateData;

use crate::types::{BlockPosition, BlockState, Direction, VoxelShape};
use glam::Vec3;
use quartz_nbt::NbtCompound;

/// Block-state property: the block emits light.
pub const LIGHT: &str = "templates_light";
/// Block-state property: the block emits a redstone signal.
pub const REDSTONE: &str = "templates_redstone";
/// Block-state property: the block has a collision shape.
pub const SOLID: &str = "templates_solid";

/// Apply the default values of the three template properties.
pub fn default_state(state: BlockState) -> BlockState {
    state
        .with_property(LIGHT, "false")
        .with_property(REDSTONE, "false")
        .with_property(SOLID, "true")
}

/// Registration-time block settings for a template block.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateBlockSettings {
    pub hardness: f32,
    pub opaque: bool,
    /// Host sound group id used for step/break sounds.
    pub sound_group: String,
}

impl Default for TemplateBlockSettings {
    fn default() -> Self {
        Self {
            hardness: 0.2,
            opaque: false,
            sound_group: "wood".to_string(),
        }
    }
}

/// Outcome of an interaction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// A transition fired; the interaction is consumed.
    Success,
    /// No guard matched; let further handlers run.
    Pass,
}

/// Classification of the item a player is holding.
///
/// The host resolves its open-ended item types into this closed set once,
/// at decision time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeldItem {
    GlowstoneDust,
    RedstoneTorch,
    PoppedChorusFruit,
    /// An item that places the named block.
    Block(String),
    Other,
}

/// A held item stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub item: HeldItem,
    pub count: u32,
}

impl ItemStack {
    pub fn new(item: HeldItem, count: u32) -> Self {
        Self { item, count }
    }

    pub fn decrement(&mut self, amount: u32) {
        self.count = self.count.saturating_sub(amount);
    }
}

/// The interacting player, reduced to what the guards need.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    /// Player may modify blocks at all (gamemode, permissions).
    pub can_modify_blocks: bool,
    /// Creative players don't consume items.
    pub creative: bool,
}

impl Actor {
    pub fn survival() -> Self {
        Self {
            can_modify_blocks: true,
            creative: false,
        }
    }

    pub fn creative() -> Self {
        Self {
            can_modify_blocks: true,
            creative: true,
        }
    }
}

/// Where and how the player clicked the block.
#[derive(Debug, Clone, Copy)]
pub struct BlockHitResult {
    pub side: Direction,
    /// Exact hit position, block-local.
    pub cursor: Vec3,
}

/// Sounds the state machine asks the host to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sound {
    GlassHit,
    LeverClick,
    ChorusTeleport,
    /// The theme block's own placement sound, by sound group id.
    BlockPlace(String),
}

/// What the held block would become if placed at the clicked position,
/// computed by the host with its normal placement-context logic.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub state: BlockState,
    pub collision: VoxelShape,
    pub luminance: u8,
    /// Weak redstone power the placed state would emit northward. Probing a
    /// single fixed direction mirrors the original behavior; a theme that
    /// only powers other directions is not auto-detected.
    pub weak_power_north: u8,
    /// Whether the block keeps per-instance data of its own. Such blocks
    /// cannot be themes; template data does not nest.
    pub provides_block_entity: bool,
    pub place_sound: Sound,
}

/// Host world operations the state machine needs.
///
/// All mutation goes through this trait so the host keeps authority over
/// block states, sounds and item scattering.
pub trait TemplateWorld {
    fn is_client(&self) -> bool;

    /// Whether this actor may modify the block at `pos` (claims, spawn
    /// protection).
    fn can_modify_at(&self, actor: &Actor, pos: BlockPosition) -> bool;

    fn set_block_state(&mut self, pos: BlockPosition, state: BlockState);

    fn play_sound(&mut self, pos: BlockPosition, sound: Sound);

    /// Hypothetical placement of `block` at `pos` for the given hit, using
    /// the same placement-context logic as normal block placement. `None`
    /// when the block cannot be placed there at all.
    fn placement_at(
        &self,
        block: &str,
        pos: BlockPosition,
        hit: &BlockHitResult,
    ) -> Option<Placement>;

    /// Scatter item drops into the world around `pos`.
    fn scatter_items(&mut self, pos: BlockPosition, drops: Vec<HeldItem>);
}

/// Interaction entry point.
///
/// Exactly one transition fires per attempt; guards are checked in the
/// fixed order glowstone, redstone torch, chorus fruit, theme. A failed
/// guard is not an error; the attempt passes through to other handlers.
pub fn on_use(
    state: &BlockState,
    world: &mut dyn TemplateWorld,
    pos: BlockPosition,
    data: &mut TemplateData,
    actor: &Actor,
    held: &mut ItemStack,
    hit: &BlockHitResult,
) -> ActionResult {
    if !actor.can_modify_blocks || !world.can_modify_at(actor, pos) {
        return ActionResult::Pass;
    }

    // Glowstone
    if held.item == HeldItem::GlowstoneDust
        && !state.bool_property(LIGHT, false)
        && !data.has_spent_glowstone_dust()
    {
        log::trace!("granting light at {pos:?}");
        world.set_block_state(pos, state.clone().with_property(LIGHT, "true"));
        data.spend_glowstone_dust();

        if !actor.creative {
            held.decrement(1);
        }
        world.play_sound(pos, Sound::GlassHit);
        return ActionResult::Success;
    }

    // Redstone torch
    if held.item == HeldItem::RedstoneTorch
        && !state.bool_property(REDSTONE, false)
        && !data.has_spent_redstone_torch()
    {
        log::trace!("granting redstone at {pos:?}");
        world.set_block_state(pos, state.clone().with_property(REDSTONE, "true"));
        data.spend_redstone_torch();

        if !actor.creative {
            held.decrement(1);
        }
        world.play_sound(pos, Sound::LeverClick);
        return ActionResult::Success;
    }

    // Popped chorus fruit
    if held.item == HeldItem::PoppedChorusFruit
        && state.bool_property(SOLID, true)
        && !data.has_spent_popped_chorus()
    {
        log::trace!("removing solidity at {pos:?}");
        world.set_block_state(pos, state.clone().with_property(SOLID, "false"));
        data.spend_popped_chorus();

        if !actor.creative {
            held.decrement(1);
        }
        world.play_sound(pos, Sound::ChorusTeleport);
        return ActionResult::Success;
    }

    // Changing the theme
    if let HeldItem::Block(block) = &held.item {
        if data.theme().is_none() {
            let Some(placement) = world.placement_at(block, pos, hit) else {
                return ActionResult::Pass;
            };
            if !placement.collision.is_full_cube() || placement.provides_block_entity {
                return ActionResult::Pass;
            }

            log::trace!("assigning theme {} at {pos:?}", placement.state);
            if !world.is_client() {
                data.set_rendered_state(placement.state.clone());
            }
            data.set_theme(placement.state.clone());

            let light = data.has_spent_glowstone_dust() || placement.luminance != 0;
            let redstone = data.has_spent_redstone_torch() || placement.weak_power_north != 0;
            world.set_block_state(
                pos,
                state
                    .clone()
                    .with_property(LIGHT, if light { "true" } else { "false" })
                    .with_property(REDSTONE, if redstone { "true" } else { "false" }),
            );

            if !actor.creative {
                held.decrement(1);
            }
            world.play_sound(pos, placement.place_sound);
            return ActionResult::Success;
        }
    }

    ActionResult::Pass
}

/// Item drops for a removed template block, in the fixed order
/// theme, redstone torch, glowstone dust, popped chorus fruit.
pub fn drops(data: &TemplateData) -> Vec<HeldItem> {
    let mut out = Vec::new();
    if let Some(theme) = data.theme() {
        out.push(HeldItem::Block(theme.name().to_string()));
    }
    if data.has_spent_redstone_torch() {
        out.push(HeldItem::RedstoneTorch);
    }
    if data.has_spent_glowstone_dust() {
        out.push(HeldItem::GlowstoneDust);
    }
    if data.has_spent_popped_chorus() {
        out.push(HeldItem::PoppedChorusFruit);
    }
    out
}

/// Removal hook. Drops are produced only when the block identity changed,
/// never for a state update of the same block.
pub fn on_state_replaced(
    world: &mut dyn TemplateWorld,
    pos: BlockPosition,
    data: &TemplateData,
    same_block: bool,
) {
    if same_block {
        return;
    }
    world.scatter_items(pos, drops(data));
}

/// Placement hook. Loads the item stack's embedded block entity tag on the
/// client so the first rendered frame already shows the persisted theme.
pub fn on_placed(
    world: &dyn TemplateWorld,
    data: &mut TemplateData,
    stack_nbt: Option<&NbtCompound>,
) {
    if !world.is_client() {
        return;
    }
    if let Some(tag) = stack_nbt {
        if let Err(e) = data.read_nbt(tag) {
            log::warn!("ignoring malformed stack data on placement: {e}");
        }
    }
}

/// Light level of the block: 15 with the light upgrade, else 0.
pub fn luminance(state: &BlockState) -> u8 {
    if state.bool_property(LIGHT, false) {
        15
    } else {
        0
    }
}

pub fn emits_redstone_power(state: &BlockState) -> bool {
    state.bool_property(REDSTONE, false)
}

/// Weak redstone power: 15 or 0, the same in every direction.
pub fn weak_redstone_power(state: &BlockState, _direction: Direction) -> u8 {
    if state.bool_property(REDSTONE, false) {
        15
    } else {
        0
    }
}

/// Strong power mirrors weak power; there is no directional attenuation.
pub fn strong_redstone_power(state: &BlockState, direction: Direction) -> u8 {
    weak_redstone_power(state, direction)
}

/// Collision override: an empty shape once solidity was removed, `None` to
/// keep the host default otherwise.
pub fn collision_shape_override(state: &BlockState) -> Option<VoxelShape> {
    if state.bool_property(SOLID, true) {
        None
    } else {
        Some(VoxelShape::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MockWorld {
        client: bool,
        modifiable: bool,
        states: HashMap<BlockPosition, BlockState>,
        sounds: Vec<Sound>,
        scattered: Vec<HeldItem>,
        placements: HashMap<String, Placement>,
    }

    impl MockWorld {
        fn new() -> Self {
            Self {
                client: false,
                modifiable: true,
                states: HashMap::new(),
                sounds: Vec::new(),
                scattered: Vec::new(),
                placements: HashMap::new(),
            }
        }

        fn with_placement(mut self, block: &str, placement: Placement) -> Self {
            self.placements.insert(block.to_string(), placement);
            self
        }
    }

    impl TemplateWorld for MockWorld {
        fn is_client(&self) -> bool {
            self.client
        }

        fn can_modify_at(&self, _actor: &Actor, _pos: BlockPosition) -> bool {
            self.modifiable
        }

        fn set_block_state(&mut self, pos: BlockPosition, state: BlockState) {
            self.states.insert(pos, state);
        }

        fn play_sound(&mut self, _pos: BlockPosition, sound: Sound) {
            self.sounds.push(sound);
        }

        fn placement_at(
            &self,
            block: &str,
            _pos: BlockPosition,
            _hit: &BlockHitResult,
        ) -> Option<Placement> {
            self.placements.get(block).cloned()
        }

        fn scatter_items(&mut self, _pos: BlockPosition, drops: Vec<HeldItem>) {
            self.scattered.extend(drops);
        }
    }

    fn pos() -> BlockPosition {
        BlockPosition::new(1, 64, -3)
    }

    fn hit() -> BlockHitResult {
        BlockHitResult {
            side: Direction::Up,
            cursor: Vec3::new(0.5, 1.0, 0.5),
        }
    }

    fn template_state() -> BlockState {
        default_state(BlockState::new("templates:cube"))
    }

    fn stone_placement() -> Placement {
        Placement {
            state: BlockState::new("minecraft:stone"),
            collision: VoxelShape::full_cube(),
            luminance: 0,
            weak_power_north: 0,
            provides_block_entity: false,
            place_sound: Sound::BlockPlace("stone".to_string()),
        }
    }

    #[test]
    fn test_glowstone_grants_light_once() {
        let mut world = MockWorld::new();
        let mut data = TemplateData::new();
        let mut held = ItemStack::new(HeldItem::GlowstoneDust, 4);
        let state = template_state();

        let result = on_use(
            &state,
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Success);
        assert!(data.has_spent_glowstone_dust());
        assert_eq!(held.count, 3);
        assert_eq!(world.sounds, vec![Sound::GlassHit]);

        let updated = world.states[&pos()].clone();
        assert!(updated.bool_property(LIGHT, false));
        assert_eq!(luminance(&updated), 15);

        // Second attempt against the updated state is a no-op
        let result = on_use(
            &updated,
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Pass);
        assert_eq!(held.count, 3);
    }

    #[test]
    fn test_spent_flag_blocks_regrant_even_after_state_reset() {
        // The spent flag is the authoritative one-shot: even if the state
        // property were reset, a second grant must not fire.
        let mut world = MockWorld::new();
        let mut data = TemplateData::new();
        data.spend_glowstone_dust();
        let mut held = ItemStack::new(HeldItem::GlowstoneDust, 1);

        let result = on_use(
            &template_state(),
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Pass);
        assert_eq!(held.count, 1);
    }

    #[test]
    fn test_redstone_torch_grants_signal() {
        let mut world = MockWorld::new();
        let mut data = TemplateData::new();
        let mut held = ItemStack::new(HeldItem::RedstoneTorch, 1);
        let state = template_state();

        let result = on_use(
            &state,
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Success);
        assert!(data.has_spent_redstone_torch());
        assert_eq!(world.sounds, vec![Sound::LeverClick]);

        let updated = world.states[&pos()].clone();
        for dir in Direction::ALL {
            assert_eq!(weak_redstone_power(&updated, dir), 15);
            assert_eq!(strong_redstone_power(&updated, dir), 15);
        }
        assert!(emits_redstone_power(&updated));
    }

    #[test]
    fn test_no_redstone_power_by_default() {
        let state = template_state();
        for dir in Direction::ALL {
            assert_eq!(weak_redstone_power(&state, dir), 0);
            assert_eq!(strong_redstone_power(&state, dir), 0);
        }
        assert!(!emits_redstone_power(&state));
    }

    #[test]
    fn test_chorus_removes_solidity() {
        let mut world = MockWorld::new();
        let mut data = TemplateData::new();
        let mut held = ItemStack::new(HeldItem::PoppedChorusFruit, 2);
        let state = template_state();

        let result = on_use(
            &state,
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Success);
        assert!(data.has_spent_popped_chorus());
        assert_eq!(world.sounds, vec![Sound::ChorusTeleport]);

        let updated = world.states[&pos()].clone();
        assert_eq!(collision_shape_override(&updated), Some(VoxelShape::empty()));
        assert_eq!(collision_shape_override(&state), None);
    }

    #[test]
    fn test_upgrades_are_independent() {
        let mut world = MockWorld::new();
        let mut data = TemplateData::new();
        let mut state = template_state();

        // Chorus first, then redstone, then glowstone; each still fires.
        for item in [
            HeldItem::PoppedChorusFruit,
            HeldItem::RedstoneTorch,
            HeldItem::GlowstoneDust,
        ] {
            let mut held = ItemStack::new(item, 1);
            let result = on_use(
                &state,
                &mut world,
                pos(),
                &mut data,
                &Actor::survival(),
                &mut held,
                &hit(),
            );
            assert_eq!(result, ActionResult::Success);
            state = world.states[&pos()].clone();
        }

        assert!(data.has_spent_glowstone_dust());
        assert!(data.has_spent_redstone_torch());
        assert!(data.has_spent_popped_chorus());
        assert!(state.bool_property(LIGHT, false));
        assert!(state.bool_property(REDSTONE, false));
        assert!(!state.bool_property(SOLID, true));
    }

    #[test]
    fn test_creative_does_not_consume_items() {
        let mut world = MockWorld::new();
        let mut data = TemplateData::new();
        let mut held = ItemStack::new(HeldItem::GlowstoneDust, 1);

        let result = on_use(
            &template_state(),
            &mut world,
            pos(),
            &mut data,
            &Actor::creative(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Success);
        assert_eq!(held.count, 1);
    }

    #[test]
    fn test_permission_denied_passes_through() {
        let mut world = MockWorld::new();
        world.modifiable = false;
        let mut data = TemplateData::new();
        let mut held = ItemStack::new(HeldItem::GlowstoneDust, 1);

        let result = on_use(
            &template_state(),
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Pass);
        assert!(world.states.is_empty());
        assert!(!data.has_spent_glowstone_dust());
    }

    #[test]
    fn test_wrong_item_passes_through() {
        let mut world = MockWorld::new();
        let mut data = TemplateData::new();
        let mut held = ItemStack::new(HeldItem::Other, 1);

        let result = on_use(
            &template_state(),
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Pass);
    }

    #[test]
    fn test_theme_assignment() {
        let mut world = MockWorld::new().with_placement("minecraft:stone", stone_placement());
        let mut data = TemplateData::new();
        let mut held = ItemStack::new(HeldItem::Block("minecraft:stone".to_string()), 5);

        let result = on_use(
            &template_state(),
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Success);
        assert_eq!(data.theme(), Some(&BlockState::new("minecraft:stone")));
        // Server side caches the rendered state for the client side channel
        assert_eq!(data.rendered_state(), Some(&BlockState::new("minecraft:stone")));
        assert_eq!(held.count, 4);
        assert_eq!(world.sounds, vec![Sound::BlockPlace("stone".to_string())]);

        let updated = world.states[&pos()].clone();
        assert!(!updated.bool_property(LIGHT, false));
        assert!(!updated.bool_property(REDSTONE, false));
    }

    #[test]
    fn test_theme_assignment_only_once() {
        let mut world = MockWorld::new().with_placement("minecraft:stone", stone_placement());
        let mut data = TemplateData::new();
        data.set_theme(BlockState::new("minecraft:dirt"));
        let mut held = ItemStack::new(HeldItem::Block("minecraft:stone".to_string()), 1);

        let result = on_use(
            &template_state(),
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Pass);
        assert_eq!(data.theme(), Some(&BlockState::new("minecraft:dirt")));
        assert_eq!(held.count, 1);
    }

    #[test]
    fn test_non_full_cube_theme_rejected() {
        let slab = Placement {
            state: BlockState::new("minecraft:stone_slab").with_property("type", "bottom"),
            collision: VoxelShape::from_boxes(vec![crate::types::Aabb::new(
                glam::Vec3::ZERO,
                glam::Vec3::new(16.0, 8.0, 16.0),
            )]),
            ..stone_placement()
        };
        let mut world = MockWorld::new().with_placement("minecraft:stone_slab", slab);
        let mut data = TemplateData::new();
        let mut held = ItemStack::new(HeldItem::Block("minecraft:stone_slab".to_string()), 1);

        let result = on_use(
            &template_state(),
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Pass);
        assert!(data.theme().is_none());
        assert_eq!(held.count, 1);
        assert!(world.states.is_empty());
    }

    #[test]
    fn test_block_entity_theme_rejected() {
        let chest = Placement {
            state: BlockState::new("minecraft:chest"),
            provides_block_entity: true,
            ..stone_placement()
        };
        let mut world = MockWorld::new().with_placement("minecraft:chest", chest);
        let mut data = TemplateData::new();
        let mut held = ItemStack::new(HeldItem::Block("minecraft:chest".to_string()), 1);

        let result = on_use(
            &template_state(),
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );
        assert_eq!(result, ActionResult::Pass);
        assert!(data.theme().is_none());
        assert_eq!(held.count, 1);
    }

    #[test]
    fn test_luminous_theme_derives_light_flag() {
        let glowstone = Placement {
            state: BlockState::new("minecraft:glowstone"),
            luminance: 15,
            ..stone_placement()
        };
        let mut world = MockWorld::new().with_placement("minecraft:glowstone", glowstone);
        let mut data = TemplateData::new();
        let mut held = ItemStack::new(HeldItem::Block("minecraft:glowstone".to_string()), 1);

        on_use(
            &template_state(),
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );

        let updated = world.states[&pos()].clone();
        assert!(updated.bool_property(LIGHT, false));
        // The theme's luminance didn't consume the glowstone dust slot
        assert!(!data.has_spent_glowstone_dust());
    }

    #[test]
    fn test_powered_theme_derives_redstone_flag() {
        let block = Placement {
            state: BlockState::new("minecraft:redstone_block"),
            weak_power_north: 15,
            ..stone_placement()
        };
        let mut world = MockWorld::new().with_placement("minecraft:redstone_block", block);
        let mut data = TemplateData::new();
        let mut held = ItemStack::new(HeldItem::Block("minecraft:redstone_block".to_string()), 1);

        on_use(
            &template_state(),
            &mut world,
            pos(),
            &mut data,
            &Actor::survival(),
            &mut held,
            &hit(),
        );

        let updated = world.states[&pos()].clone();
        assert!(updated.bool_property(REDSTONE, false));
        assert!(!data.has_spent_redstone_torch());
    }

    #[test]
    fn test_drops_order_and_contents() {
        let mut data = TemplateData::new();
        data.set_theme(BlockState::new("minecraft:stone"));
        data.spend_glowstone_dust();
        data.spend_popped_chorus();

        assert_eq!(
            drops(&data),
            vec![
                HeldItem::Block("minecraft:stone".to_string()),
                HeldItem::GlowstoneDust,
                HeldItem::PoppedChorusFruit,
            ]
        );
    }

    #[test]
    fn test_state_replaced_scatters_only_on_block_change() {
        let mut world = MockWorld::new();
        let mut data = TemplateData::new();
        data.set_theme(BlockState::new("minecraft:stone"));
        data.spend_redstone_torch();

        on_state_replaced(&mut world, pos(), &data, true);
        assert!(world.scattered.is_empty());

        on_state_replaced(&mut world, pos(), &data, false);
        assert_eq!(
            world.scattered,
            vec![
                HeldItem::Block("minecraft:stone".to_string()),
                HeldItem::RedstoneTorch,
            ]
        );
    }

    #[test]
    fn test_on_placed_loads_stack_nbt_on_client() {
        let mut source = TemplateData::new();
        source.set_theme(BlockState::new("minecraft:stone"));
        source.spend_glowstone_dust();
        let tag = source.write_nbt();

        let mut server_world = MockWorld::new();
        let mut data = TemplateData::new();
        on_placed(&server_world, &mut data, Some(&tag));
        assert!(data.theme().is_none());

        server_world.client = true;
        on_placed(&server_world, &mut data, Some(&tag));
        assert_eq!(data.theme(), Some(&BlockState::new("minecraft:stone")));
        assert!(data.has_spent_glowstone_dust());
    }

    #[test]
    fn test_default_settings() {
        let settings = TemplateBlockSettings::default();
        assert_eq!(settings.hardness, 0.2);
        assert!(!settings.opaque);
        assert_eq!(settings.sound_group, "wood");
    }

    #[test]
    fn test_default_state_properties() {
        let state = template_state();
        assert_eq!(state.get_property(LIGHT), Some("false"));
        assert_eq!(state.get_property(REDSTONE), Some("false"));
        assert_eq!(state.get_property(SOLID), Some("true"));
    }
}
