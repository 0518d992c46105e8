//! # Adventure Core
//!
//! The command engine of the text adventure. It turns a line of player input
//! into changes to a [`game_world::World`] and the text describing them.
//!
//! ## Core Components
//!
//! - **alias**: Rewrites shorthand input (`n`, `pick up`, `inv`) into canonical commands
//! - **command**: Splits a canonical command into a typed [`Command`]
//! - **engine**: The [`Session`] context and its verb handlers, including use-effects
//! - **repl**: The console loop around a session
//!
//! ## Design Philosophy
//!
//! - **Owned State**: The world and player live in a session value; there are no globals
//! - **Total Handlers**: Every command produces output; misses are text, never errors
//! - **No Exits**: `quit` is reported as [`Outcome::Quit`] and the caller decides what to do

pub mod alias;
pub mod command;
pub mod engine;
pub mod error;
pub mod repl;

pub use alias::*;
pub use command::*;
pub use engine::*;
pub use error::*;
pub use repl::*;

use game_world::{World, WorldError};

/// The bundled sample world, played when no world file is given.
pub const SAMPLE_WORLD: &str = include_str!("../assets/map.json");

/// Parse and validate the bundled sample world.
pub fn sample_world() -> Result<World, WorldError> {
    World::from_json_str(SAMPLE_WORLD)
}
