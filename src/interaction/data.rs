//! Per-block persisted template data.

use crate::error::{Result, TemplateError};
use crate::types::BlockState;
use quartz_nbt::{NbtCompound, NbtTag};

const THEME_KEY: &str = "BlockState";
const GLOWSTONE_KEY: &str = "SpentGlowstoneDust";
const REDSTONE_KEY: &str = "SpentRedstoneTorch";
const CHORUS_KEY: &str = "SpentPoppedChorus";

/// The state attached to one template block instance.
///
/// Created with defaults on placement, mutated only by the interaction
/// state machine, and converted into item drops when the block is removed.
/// Each `spent_*` flag is set true at most once over the block's lifetime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateData {
    theme: Option<BlockState>,
    spent_glowstone_dust: bool,
    spent_redstone_torch: bool,
    spent_popped_chorus: bool,
    /// Client-side cache of the resolved theme, used to avoid one frame of
    /// default appearance between placement and first render. Not persisted
    /// and not authoritative.
    rendered_state: Option<BlockState>,
}

impl TemplateData {
    pub fn new() -> Self {
        Self::default()
    }

    /// The assigned theme, `None` until a player assigns one.
    pub fn theme(&self) -> Option<&BlockState> {
        self.theme.as_ref()
    }

    pub fn set_theme(&mut self, theme: BlockState) {
        self.theme = Some(theme);
    }

    pub fn has_spent_glowstone_dust(&self) -> bool {
        self.spent_glowstone_dust
    }

    pub fn spend_glowstone_dust(&mut self) {
        self.spent_glowstone_dust = true;
    }

    pub fn has_spent_redstone_torch(&self) -> bool {
        self.spent_redstone_torch
    }

    pub fn spend_redstone_torch(&mut self) {
        self.spent_redstone_torch = true;
    }

    pub fn has_spent_popped_chorus(&self) -> bool {
        self.spent_popped_chorus
    }

    pub fn spend_popped_chorus(&mut self) {
        self.spent_popped_chorus = true;
    }

    pub fn rendered_state(&self) -> Option<&BlockState> {
        self.rendered_state.as_ref()
    }

    pub fn set_rendered_state(&mut self, state: BlockState) {
        self.rendered_state = Some(state);
    }

    /// Write to the block entity's compound tag.
    pub fn write_nbt(&self) -> NbtCompound {
        let mut tag = NbtCompound::new();
        if let Some(theme) = &self.theme {
            tag.insert(THEME_KEY, theme.to_nbt());
        }
        tag.insert(GLOWSTONE_KEY, nbt_bool(self.spent_glowstone_dust));
        tag.insert(REDSTONE_KEY, nbt_bool(self.spent_redstone_torch));
        tag.insert(CHORUS_KEY, nbt_bool(self.spent_popped_chorus));
        tag
    }

    /// Load from a compound tag written by [`TemplateData::write_nbt`].
    /// Missing fields keep their defaults; an unreadable theme is an error.
    pub fn read_nbt(&mut self, tag: &NbtCompound) -> Result<()> {
        if let Ok(theme_tag) = tag.get::<_, &NbtCompound>(THEME_KEY) {
            let theme = BlockState::from_nbt(theme_tag)
                .map_err(|e| TemplateError::Nbt(format!("theme state: {e}")))?;
            if !theme.is_air() {
                self.theme = Some(theme);
            }
        }
        if let Ok(v) = tag.get::<_, i8>(GLOWSTONE_KEY) {
            self.spent_glowstone_dust = v != 0;
        }
        if let Ok(v) = tag.get::<_, i8>(REDSTONE_KEY) {
            self.spent_redstone_torch = v != 0;
        }
        if let Ok(v) = tag.get::<_, i8>(CHORUS_KEY) {
            self.spent_popped_chorus = v != 0;
        }
        Ok(())
    }
}

fn nbt_bool(value: bool) -> NbtTag {
    NbtTag::Byte(if value { 1 } else { 0 })
}
