//! The player's position and belongings.

use serde::{Deserialize, Serialize};

use super::RoomId;
use crate::entities::ItemList;

/// The player's state for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub current_room: RoomId,
    /// Carried items, in pickup order.
    pub inventory: ItemList,
}

impl PlayerState {
    /// A player standing in `room` with empty hands.
    pub fn new(room: RoomId) -> Self {
        Self {
            current_room: room,
            inventory: ItemList::new(),
        }
    }
}
