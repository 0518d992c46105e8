//! Game mechanics: what using an item can do to the room it is used in.

use serde::{Deserialize, Serialize};

use crate::world_state::RoomId;

/// The action a use-effect performs when it fires.
///
/// Serialized as the plain action tag so that world files can name actions
/// the engine does not know about; those fall through to [`EffectAction::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EffectAction {
    /// Remove the item named by the effect's target from the room.
    Open,
    /// Clear the locked flag on the path keyed by the effect's target.
    Unlock,
    /// Any other tag. Firing it does nothing.
    Other(String),
}

impl EffectAction {
    /// The action tag as written in the world description.
    pub fn as_str(&self) -> &str {
        match self {
            EffectAction::Open => "open",
            EffectAction::Unlock => "unlock",
            EffectAction::Other(tag) => tag,
        }
    }
}

impl From<String> for EffectAction {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "open" => EffectAction::Open,
            "unlock" => EffectAction::Unlock,
            _ => EffectAction::Other(tag),
        }
    }
}

impl From<&str> for EffectAction {
    fn from(tag: &str) -> Self {
        EffectAction::from(tag.to_string())
    }
}

impl From<EffectAction> for String {
    fn from(action: EffectAction) -> Self {
        match action {
            EffectAction::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for EffectAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A conditional effect attached to an item.
///
/// The effect only fires when the item is used in its originating room. The
/// meaning of `target` depends on the action: an item name for
/// [`EffectAction::Open`], a direction for [`EffectAction::Unlock`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseEffect {
    /// Room in which the effect may fire. `None` never matches any room.
    #[serde(
        rename = "originatingRoomID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub originating_room: Option<RoomId>,
    pub target: String,
    pub action: EffectAction,
    pub message: String,
}

impl UseEffect {
    /// Create an effect that fires in `room`.
    pub fn new(
        room: RoomId,
        action: impl Into<EffectAction>,
        target: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            originating_room: Some(room),
            target: target.into(),
            action: action.into(),
            message: message.into(),
        }
    }

    /// Whether the effect may fire while the player stands in `room`.
    pub fn fires_in(&self, room: RoomId) -> bool {
        self.originating_room == Some(room)
    }
}
