//! World state management - the room graph and everything placed in it.

mod document;
mod player;

pub use document::*;
pub use player::*;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::entities::{Character, Item, ItemList};

/// Unique identifier for rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub i64);

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A one-way connection from a room to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    #[serde(rename = "roomID")]
    pub target: RoomId,
    #[serde(rename = "isLocked", default)]
    pub locked: bool,
}

impl Path {
    /// An unlocked path to `target`.
    pub fn open(target: RoomId) -> Self {
        Self {
            target,
            locked: false,
        }
    }

    /// A locked path to `target`.
    pub fn locked(target: RoomId) -> Self {
        Self {
            target,
            locked: true,
        }
    }
}

/// A room in the game world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub description: String,
    /// Direction name -> path. Sorted so directions are always listed in
    /// the same order.
    #[serde(default)]
    pub paths: BTreeMap<String, Path>,
    #[serde(default)]
    pub items: ItemList,
    /// Absent in the description means nobody is here.
    #[serde(default)]
    pub characters: Vec<Character>,
}

impl Room {
    /// Create an empty room.
    pub fn new(id: RoomId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            paths: BTreeMap::new(),
            items: ItemList::new(),
            characters: Vec::new(),
        }
    }

    /// Builder method to add a path.
    pub fn with_path(mut self, direction: impl Into<String>, path: Path) -> Self {
        self.paths.insert(direction.into(), path);
        self
    }

    /// Builder method to add an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Builder method to add a character.
    pub fn with_character(mut self, character: Character) -> Self {
        self.characters.push(character);
        self
    }

    pub fn path(&self, direction: &str) -> Option<&Path> {
        self.paths.get(direction)
    }

    pub fn path_mut(&mut self, direction: &str) -> Option<&mut Path> {
        self.paths.get_mut(direction)
    }

    /// First character called `name`.
    pub fn character(&self, name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.name == name)
    }

    /// Direction names in listing order.
    pub fn directions(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }
}

/// The loaded world: every room keyed by id plus the starting room.
///
/// Only constructed through validation (see [`World::from_document`]), so
/// every path target and the starting room are known to exist.
#[derive(Debug, Clone)]
pub struct World {
    rooms: HashMap<RoomId, Room>,
    starting_room: RoomId,
}

impl World {
    /// Room the player starts in.
    pub fn starting_room(&self) -> RoomId {
        self.starting_room
    }

    /// Get room by ID.
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    /// Get mutable room by ID.
    pub fn room_mut(&mut self, id: RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(&id)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
