//! # Game World
//!
//! The world model for the adventure engine: rooms joined by lockable paths,
//! items with conditional use-effects, characters, and the player's state.
//! This crate owns loading and validating the world description; it contains
//! no command handling.

pub mod entities;
pub mod error;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use world_state::*;
