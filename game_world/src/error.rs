//! Load-time errors for world descriptions.

use std::path::PathBuf;

use crate::world_state::RoomId;

/// Errors raised while loading or validating a world description.
///
/// All of these are detected before play starts; a world that fails to load
/// is never handed to the engine.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("failed to read world description {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed world description: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("room {0} is defined more than once")]
    DuplicateRoom(RoomId),

    #[error("path {direction} in room {room} leads to missing room {target}")]
    DanglingPath {
        room: RoomId,
        direction: String,
        target: RoomId,
    },

    #[error("use-effect {effect} of item {item} refers to missing room {target}")]
    DanglingEffectRoom {
        item: String,
        effect: String,
        target: RoomId,
    },

    #[error("starting room {0} does not exist")]
    MissingStartingRoom(RoomId),
}
