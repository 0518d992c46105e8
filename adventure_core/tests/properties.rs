//! Property tests for alias resolution and world state transitions.

use adventure_core::{AliasTable, Session};
use game_world::{Item, Path, Room, RoomId, UseEffect, World, WorldDocument};
use proptest::prelude::*;

const DIRECTIONS: &[&str] = &["north", "south", "east", "west", "up", "down"];

fn world(rooms: Vec<Room>) -> World {
    World::from_document(WorldDocument {
        starting_room: RoomId(1),
        rooms,
    })
    .unwrap()
}

fn sorted_items(room: &Room) -> Vec<(String, String)> {
    let mut items: Vec<(String, String)> = room
        .items
        .iter()
        .map(|item| (item.name.clone(), item.description.clone()))
        .collect();
    items.sort();
    items
}

proptest! {
    // No standard alias phrase starts with any of these letters.
    #[test]
    fn resolve_is_identity_without_alias_prefix(raw in "[abcfghjklogqrvxyz][a-z ]{0,16}") {
        let table = AliasTable::standard();
        let once = table.resolve(&raw);
        prop_assert_eq!(&once, &raw);
        prop_assert_eq!(table.resolve(&once), once);
    }

    #[test]
    fn get_then_drop_restores_room(
        names in prop::collection::vec("[a-z]{1,6}", 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let room = names
            .iter()
            .enumerate()
            .fold(Room::new(RoomId(1), "Storeroom"), |room, (i, name)| {
                room.with_item(Item::new(name.as_str(), format!("item {i}")))
            });
        let before = sorted_items(&room);
        let name = pick.get(&names).clone();

        let mut session = Session::new(world(vec![room]));
        session.handle(&format!("get {name}"));
        prop_assert!(session.player().inventory.contains(&name));
        session.handle(&format!("drop {name}"));

        prop_assert!(session.player().inventory.is_empty());
        let after = sorted_items(session.world().room(RoomId(1)).unwrap());
        prop_assert_eq!(before, after);
    }

    #[test]
    fn locked_paths_never_move_the_player(
        dir in prop::sample::select(DIRECTIONS),
        locked in any::<bool>(),
    ) {
        let path = Path { target: RoomId(2), locked };
        let mut session = Session::new(world(vec![
            Room::new(RoomId(1), "Start").with_path(dir, path),
            Room::new(RoomId(2), "Goal"),
        ]));

        session.handle(&format!("go {dir}"));

        let expected = if locked { RoomId(1) } else { RoomId(2) };
        prop_assert_eq!(session.player().current_room, expected);
    }

    #[test]
    fn effects_only_apply_in_their_room(origin in 1i64..=2, walk in any::<bool>()) {
        let charm = Item::new("charm", "A humming charm.").with_effect(
            "gate",
            UseEffect::new(RoomId(origin), "unlock", "up", "A gate opens."),
        );
        let mut session = Session::new(world(vec![
            Room::new(RoomId(1), "Start")
                .with_path("east", Path::open(RoomId(2)))
                .with_item(charm),
            Room::new(RoomId(2), "Gatehouse")
                .with_path("west", Path::open(RoomId(1)))
                .with_path("up", Path::locked(RoomId(1))),
        ]));
        session.handle("get charm");
        if walk {
            session.handle("go east");
        }
        let here = session.player().current_room;

        let lines = session.handle("use charm").lines;
        let unlocked = !session.world().room(RoomId(2)).unwrap().path("up").unwrap().locked;

        if here == RoomId(origin) {
            prop_assert_eq!(lines, vec!["You used the charm.", "A gate opens."]);
            prop_assert_eq!(unlocked, here == RoomId(2));
        } else {
            prop_assert_eq!(lines, vec!["You used the charm.", "Nothing happens."]);
            prop_assert!(!unlocked);
        }
    }
}
