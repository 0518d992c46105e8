//! Verb handlers. Each one is total: it always produces output and leaves the
//! world untouched when its precondition fails.

use super::{apply_use_effects, Session};
use game_world::{Room, RoomId};

/// Shown by every handler when the player's room is not in the world.
const NOWHERE: &str = "You are nowhere. Nothing here responds.";

impl Session {
    /// Describe the current room, who is in it, what lies in it and where to go.
    pub(crate) fn look(&self) -> Vec<String> {
        match self.current_room() {
            Some(room) => describe(room),
            None => vec![missing_room(self.player.current_room)],
        }
    }

    pub(crate) fn go(&mut self, direction: &str) -> Vec<String> {
        let Some(room) = self.current_room() else {
            return vec![missing_room(self.player.current_room)];
        };
        let Some(path) = room.path(direction).copied() else {
            return vec!["You can't go in that direction.".to_string()];
        };

        if path.locked {
            tracing::debug!(direction, "path is locked");
            return vec![format!("The path to the {direction} is locked.")];
        }

        let from = self.player.current_room;
        self.player.current_room = path.target;
        tracing::info!(%from, to = %path.target, direction, "player moved");

        let mut lines = vec![format!("You move {direction}.")];
        lines.extend(self.look());
        lines
    }

    pub(crate) fn get(&mut self, name: &str) -> String {
        let Some(room) = self.world.room_mut(self.player.current_room) else {
            return missing_room(self.player.current_room);
        };

        match room.items.take(name) {
            Some(item) => {
                self.player.inventory.push(item);
                format!("You picked up the {name}.")
            }
            None => format!("There's no {name} here to pick up."),
        }
    }

    pub(crate) fn drop_item(&mut self, name: &str) -> String {
        let Some(room) = self.world.room_mut(self.player.current_room) else {
            return missing_room(self.player.current_room);
        };

        match self.player.inventory.take(name) {
            Some(item) => {
                room.items.push(item);
                format!("You dropped the {name}.")
            }
            None => format!("You don't have a {name} in your inventory."),
        }
    }

    /// Use a carried item in the current room. The item stays in the inventory.
    pub(crate) fn use_item(&mut self, name: &str) -> Vec<String> {
        let Some(item) = self.player.inventory.find(name) else {
            return vec![format!("You don't have a {name} in your inventory.")];
        };

        let mut lines = vec![format!("You used the {name}.")];
        match self.world.room_mut(self.player.current_room) {
            Some(room) => lines.extend(apply_use_effects(item.use_effects.as_ref(), room)),
            None => lines.push(missing_room(self.player.current_room)),
        }
        lines
    }

    pub(crate) fn inventory(&self) -> Vec<String> {
        if self.player.inventory.is_empty() {
            return vec!["Your inventory is empty.".to_string()];
        }

        std::iter::once("You have:".to_string())
            .chain(
                self.player
                    .inventory
                    .iter()
                    .map(|item| format!("- {}: {}", item.name, item.description)),
            )
            .collect()
    }

    pub(crate) fn talk_to(&self, name: &str) -> String {
        match self.current_room().and_then(|room| room.character(name)) {
            Some(character) => format!("{name}: \"{}\"", character.dialogue),
            None => format!("{name} is not here."),
        }
    }
}

fn missing_room(id: RoomId) -> String {
    tracing::error!(room = %id, "player is in a missing room");
    NOWHERE.to_string()
}

fn describe(room: &Room) -> Vec<String> {
    let mut lines = vec![room.description.clone()];
    lines.extend(room.characters.iter().map(|c| format!("{} is here.", c.name)));
    lines.extend(room.items.iter().map(|i| format!("There's a {} here.", i.name)));
    lines.extend(room.directions().map(|dir| format!("You can go {dir}.")));
    lines
}
