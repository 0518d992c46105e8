//! Character definitions.

use serde::{Deserialize, Serialize};

/// A character standing in a room. Characters are fixed scenery with a
/// single line of dialogue; nothing the player does changes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub dialogue: String,
}

impl Character {
    /// Create a new character with the given name and dialogue line.
    pub fn new(name: impl Into<String>, dialogue: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dialogue: dialogue.into(),
        }
    }
}
