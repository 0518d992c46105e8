//! Effect Engine - fires an item's use-effects against the room it is used in.

use game_world::{EffectAction, Room, UseEffect, UseEffects};

const NOTHING_HAPPENS: &str = "Nothing happens.";

/// Evaluate every use-effect of an item used in `room` and apply the ones
/// that belong there. Returns the lines to show the player.
///
/// Each effect is judged on its own:
/// - effects from another room (or from no room) print "Nothing happens."
/// - `open` removes the first item named by the target and prints the
///   message, or prints nothing if no such item is here
/// - `unlock` clears the lock on the target direction, if that path exists,
///   and always prints the message
/// - unknown actions print "Nothing happens."
///
/// An item with no effects mapping at all prints "Nothing happens." once.
pub fn apply_use_effects(effects: Option<&UseEffects>, room: &mut Room) -> Vec<String> {
    let Some(effects) = effects else {
        return vec![NOTHING_HAPPENS.to_string()];
    };

    effects
        .iter()
        .filter_map(|(key, effect)| apply_effect(key, effect, room))
        .collect()
}

fn apply_effect(key: &str, effect: &UseEffect, room: &mut Room) -> Option<String> {
    if !effect.fires_in(room.id) {
        tracing::debug!(effect = key, room = %room.id, "effect belongs to another room");
        return Some(NOTHING_HAPPENS.to_string());
    }

    match &effect.action {
        EffectAction::Open => {
            let removed = room.items.take(&effect.target)?;
            tracing::info!(effect = key, room = %room.id, item = %removed.name, "opened");
            Some(effect.message.clone())
        }
        EffectAction::Unlock => {
            if let Some(path) = room.path_mut(&effect.target) {
                path.locked = false;
                tracing::info!(effect = key, room = %room.id, direction = %effect.target, "unlocked");
            }
            Some(effect.message.clone())
        }
        EffectAction::Other(tag) => {
            tracing::warn!(effect = key, action = %tag, "unknown effect action");
            Some(NOTHING_HAPPENS.to_string())
        }
    }
}
