//! Item definitions.

use serde::{Deserialize, Serialize};

use super::UseEffects;
use crate::mechanics::UseEffect;

/// An item lying in a room or carried by the player.
///
/// The name is the lookup key inside whichever collection holds the item,
/// but names are not unique across the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub description: String,
    /// `None` when the item has no use-effects mapping at all, which is
    /// reported differently from an empty mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_effects: Option<UseEffects>,
}

impl Item {
    /// Create an item without use-effects.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            use_effects: None,
        }
    }

    /// Builder method to attach a use-effect under `key`.
    pub fn with_effect(mut self, key: impl Into<String>, effect: UseEffect) -> Self {
        self.use_effects
            .get_or_insert_with(UseEffects::new)
            .insert(key, effect);
        self
    }
}
