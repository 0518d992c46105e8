//! World description documents and load-time validation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;

use super::{Room, RoomId, World};
use crate::error::WorldError;

/// The world description as written on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldDocument {
    pub starting_room: RoomId,
    pub rooms: Vec<Room>,
}

impl World {
    /// Read and validate a world description file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "read world description");
        Self::from_json_str(&text)
    }

    /// Parse and validate a world description.
    pub fn from_json_str(text: &str) -> Result<Self, WorldError> {
        let document: WorldDocument = serde_json::from_str(text)?;
        Self::from_document(document)
    }

    /// Validate a parsed document and build the world from it.
    ///
    /// Rejects duplicate room ids, paths or use-effects that point at rooms
    /// which do not exist, and a missing starting room. A use-effect only fires
    /// while the player stands in its `originatingRoomID`, so one naming an
    /// unknown room can never fire and usually means a mistyped id; it is
    /// reported here like a dangling path instead of silently doing nothing.
    pub fn from_document(document: WorldDocument) -> Result<Self, WorldError> {
        let mut rooms = HashMap::with_capacity(document.rooms.len());
        for room in document.rooms {
            let id = room.id;
            if rooms.insert(id, room).is_some() {
                return Err(WorldError::DuplicateRoom(id));
            }
        }

        for room in rooms.values() {
            for (direction, path) in &room.paths {
                if !rooms.contains_key(&path.target) {
                    return Err(WorldError::DanglingPath {
                        room: room.id,
                        direction: direction.clone(),
                        target: path.target,
                    });
                }
            }

            for item in &room.items {
                let Some(effects) = &item.use_effects else {
                    continue;
                };
                for (key, effect) in effects.iter() {
                    if let Some(target) = effect.originating_room {
                        if !rooms.contains_key(&target) {
                            return Err(WorldError::DanglingEffectRoom {
                                item: item.name.clone(),
                                effect: key.to_string(),
                                target,
                            });
                        }
                    }
                }
            }
        }

        if !rooms.contains_key(&document.starting_room) {
            return Err(WorldError::MissingStartingRoom(document.starting_room));
        }

        tracing::debug!(
            rooms = rooms.len(),
            starting_room = %document.starting_room,
            "world validated"
        );

        Ok(World {
            rooms,
            starting_room: document.starting_room,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Item;
    use crate::mechanics::UseEffect;
    use crate::world_state::Path;

    const TWO_ROOMS: &str = r#"{
        "startingRoom": 1,
        "rooms": [
            {
                "id": 1,
                "description": "A dusty hall.",
                "paths": {"north": {"roomID": 2, "isLocked": true}},
                "items": [{"name": "key", "description": "A brass key."}],
                "characters": [{"name": "guard", "dialogue": "Halt!"}]
            },
            {
                "id": 2,
                "description": "A quiet library.",
                "paths": {"south": {"roomID": 1, "isLocked": false}},
                "items": []
            }
        ]
    }"#;

    #[test]
    fn test_load_valid_world() {
        let world = World::from_json_str(TWO_ROOMS).unwrap();

        assert_eq!(world.starting_room(), RoomId(1));
        assert_eq!(world.room_count(), 2);

        let hall = world.room(RoomId(1)).unwrap();
        assert!(hall.path("north").unwrap().locked);
        assert!(hall.items.contains("key"));
        assert_eq!(hall.characters.len(), 1);
    }

    #[test]
    fn test_malformed_document() {
        let err = World::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, WorldError::Parse(_)));
    }

    #[test]
    fn test_duplicate_room() {
        let document = WorldDocument {
            starting_room: RoomId(1),
            rooms: vec![Room::new(RoomId(1), "A"), Room::new(RoomId(1), "B")],
        };

        let err = World::from_document(document).unwrap_err();
        assert!(matches!(err, WorldError::DuplicateRoom(RoomId(1))));
    }

    #[test]
    fn test_dangling_path() {
        let document = WorldDocument {
            starting_room: RoomId(1),
            rooms: vec![Room::new(RoomId(1), "A").with_path("up", Path::open(RoomId(9)))],
        };

        match World::from_document(document).unwrap_err() {
            WorldError::DanglingPath {
                room,
                direction,
                target,
            } => {
                assert_eq!(room, RoomId(1));
                assert_eq!(direction, "up");
                assert_eq!(target, RoomId(9));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dangling_effect_room() {
        let wand = Item::new("wand", "A wand.")
            .with_effect("zap", UseEffect::new(RoomId(5), "open", "box", "Zap."));
        let document = WorldDocument {
            starting_room: RoomId(1),
            rooms: vec![Room::new(RoomId(1), "A").with_item(wand)],
        };

        let err = World::from_document(document).unwrap_err();
        assert!(matches!(err, WorldError::DanglingEffectRoom { target: RoomId(5), .. }));
    }

    #[test]
    fn test_missing_starting_room() {
        let document = WorldDocument {
            starting_room: RoomId(3),
            rooms: vec![Room::new(RoomId(1), "A")],
        };

        let err = World::from_document(document).unwrap_err();
        assert!(matches!(err, WorldError::MissingStartingRoom(RoomId(3))));
    }

    #[test]
    fn test_missing_file() {
        let err = World::load("/definitely/not/here/map.json").unwrap_err();
        assert!(matches!(err, WorldError::Io { .. }));
    }
}
