//! World Engine - the session context and the verb handlers that run against it.
//!
//! A [`Session`] owns the world, the player's state and the alias table.
//! Every turn goes through the same pipeline:
//!
//! ```text
//! raw input ──► AliasTable::resolve ──► Command::parse ──► verb handler ──► Response
//!                                                             │
//!                                                             └─► effects (for `use`)
//! ```

mod effects;
mod verbs;

pub use effects::apply_use_effects;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::alias::AliasTable;
use crate::command::Command;
use game_world::{PlayerState, Room, World};

/// Unique identifier for a play session, attached to every log line it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// The player asked to quit.
    Quit,
}

/// Everything a single turn produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub lines: Vec<String>,
    pub outcome: Outcome,
}

impl Response {
    fn lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            outcome: Outcome::Continue,
        }
    }

    fn line(line: impl Into<String>) -> Self {
        Self::lines(vec![line.into()])
    }

    /// The output joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_quit(&self) -> bool {
        self.outcome == Outcome::Quit
    }
}

/// One player's game: the mutable world, the player and the alias table.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    aliases: AliasTable,
    world: World,
    player: PlayerState,
}

impl Session {
    /// Start a session in the world's starting room with the standard aliases.
    pub fn new(world: World) -> Self {
        let player = PlayerState::new(world.starting_room());
        Self {
            id: SessionId::new(),
            aliases: AliasTable::standard(),
            world,
            player,
        }
    }

    /// Builder method to replace the alias table.
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// The line shown before the first command: the starting room's description.
    pub fn intro(&self) -> String {
        self.current_room()
            .map(|room| room.description.clone())
            .unwrap_or_default()
    }

    /// Resolve aliases in `raw`, then run the resulting command.
    pub fn handle(&mut self, raw: &str) -> Response {
        let span = tracing::debug_span!("turn", session = %self.id);
        let _guard = span.enter();

        let canonical = self.aliases.resolve(raw);
        let command = Command::parse(&canonical);
        tracing::debug!(raw, %canonical, ?command, "dispatching");
        self.execute(command)
    }

    /// Run an already parsed command.
    pub fn execute(&mut self, command: Command) -> Response {
        match command {
            Command::Empty => Response::line("Please enter a command."),
            Command::Look => Response::lines(self.look()),
            Command::Inventory => Response::lines(self.inventory()),
            Command::Go(direction) => Response::lines(self.go(&direction)),
            Command::Get(name) => Response::line(self.get(&name)),
            Command::Drop(name) => Response::line(self.drop_item(&name)),
            Command::Use(name) => Response::lines(self.use_item(&name)),
            Command::TalkTo(name) => Response::line(self.talk_to(&name)),
            Command::Incomplete(verb) => Response::line(verb.prompt()),
            Command::Unknown(_) => Response::line("I don't understand that command."),
            Command::Quit => {
                tracing::info!(session = %self.id, "player quit");
                Response {
                    lines: vec!["Goodbye!".to_string()],
                    outcome: Outcome::Quit,
                }
            }
        }
    }

    fn current_room(&self) -> Option<&Room> {
        self.world.room(self.player.current_room)
    }
}
