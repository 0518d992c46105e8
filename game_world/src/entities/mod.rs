//! Entity definitions for the game world: items, characters and the
//! containers that hold them.

mod character;
mod components;
mod item;

pub use character::*;
pub use components::*;
pub use item::*;
