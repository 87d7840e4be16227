//! Block states: a namespaced block name plus its property map.

use crate::error::{Result, TemplateError};
use quartz_nbt::{NbtCompound, NbtTag};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A block state, e.g. `minecraft:oak_stairs[facing=north,half=bottom]`.
///
/// Properties are kept sorted by key so that equality and hashing are
/// structural: two states built in different property orders compare equal
/// and land on the same retexture cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockState {
    name: String,
    properties: Vec<(String, String)>,
}

impl BlockState {
    pub const AIR: &'static str = "minecraft:air";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// The air state, used as the "no theme" sentinel.
    pub fn air() -> Self {
        Self::new(Self::AIR)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the block ID without namespace (e.g., "stone").
    pub fn block_id(&self) -> &str {
        self.name.split(':').nth(1).unwrap_or(&self.name)
    }

    /// Check if this is an air block.
    pub fn is_air(&self) -> bool {
        matches!(
            self.name.as_str(),
            "minecraft:air" | "minecraft:cave_air" | "minecraft:void_air" | "air"
        )
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.properties.binary_search_by(|(k, _)| k.as_str().cmp(&key)) {
            Ok(i) => self.properties[i].1 = value,
            Err(i) => self.properties.insert(i, (key, value)),
        }
    }

    pub fn get_property(&self, key: &str) -> Option<&str> {
        self.properties
            .binary_search_by(|(k, _)| k.as_str().cmp(key))
            .ok()
            .map(|i| self.properties[i].1.as_str())
    }

    /// Read a boolean property, `default` when absent or unparseable.
    pub fn bool_property(&self, key: &str, default: bool) -> bool {
        match self.get_property(key) {
            Some("true") => true,
            Some("false") => false,
            _ => default,
        }
    }

    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    /// Serialize to an NBT compound (`Name` string + `Properties` compound).
    pub fn to_nbt(&self) -> NbtCompound {
        let mut compound = NbtCompound::new();
        compound.insert("Name", self.name.clone());

        if !self.properties.is_empty() {
            let mut properties = NbtCompound::new();
            for (key, value) in &self.properties {
                properties.insert(key.clone(), value.clone());
            }
            compound.insert("Properties", properties);
        }

        compound
    }

    /// Deserialize from an NBT compound written by [`BlockState::to_nbt`].
    pub fn from_nbt(compound: &NbtCompound) -> Result<Self> {
        let name = compound
            .get::<_, &String>("Name")
            .map_err(|e| TemplateError::InvalidBlockState(format!("missing Name: {e}")))?
            .clone();

        let mut state = BlockState::new(name);
        if let Ok(props) = compound.get::<_, &NbtCompound>("Properties") {
            for (key, value) in props.inner() {
                if let NbtTag::String(value) = value {
                    state.set_property(key.clone(), value.clone());
                }
            }
        }

        Ok(state)
    }
}

impl Hash for BlockState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        for (k, v) in &self.properties {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.properties.is_empty() {
            write!(f, "[")?;
            for (i, (key, value)) in self.properties.iter().enumerate() {
                if i > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
