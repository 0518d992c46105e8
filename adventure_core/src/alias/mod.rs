//! Alias Resolver - rewrites raw player input into a canonical command.
//!
//! Resolution works as follows:
//! 1. **Exact**: the whole input is an alias phrase; return its command
//! 2. **Prefix**: the longest alias phrase that prefixes the input is
//!    replaced by its command and the rest of the input is appended
//! 3. **Pass-through**: no phrase matches; the input is returned unchanged
//!
//! Input that already starts with the matched alias's command is left alone,
//! so `talk to guard` is not rewritten into `talk to to guard`.

mod config;

use serde::{Deserialize, Serialize};

/// A single alias: a phrase the player may type and the command it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub phrase: String,
    pub command: String,
}

impl Alias {
    pub fn new(phrase: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            command: command.into(),
        }
    }
}

/// Phrase -> command pairs, in declaration order.
const STANDARD_ALIASES: &[(&str, &str)] = &[
    ("pick up", "get"),
    ("inv", "inventory"),
    ("i", "inventory"),
    ("move", "go"),
    ("north", "go north"),
    ("south", "go south"),
    ("east", "go east"),
    ("west", "go west"),
    ("up", "go up"),
    ("down", "go down"),
    ("n", "go north"),
    ("s", "go south"),
    ("e", "go east"),
    ("w", "go west"),
    ("talk", "talk to"),
];

/// The fixed alias table consulted before every command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AliasTable {
    aliases: Vec<Alias>,
}

impl AliasTable {
    /// Create a table from aliases in declaration order.
    pub fn new(aliases: Vec<Alias>) -> Self {
        Self { aliases }
    }

    /// The standard verb synonyms and direction shorthands.
    pub fn standard() -> Self {
        Self::new(
            STANDARD_ALIASES
                .iter()
                .map(|(phrase, command)| Alias::new(*phrase, *command))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Rewrite `raw` into a canonical command.
    pub fn resolve(&self, raw: &str) -> String {
        if let Some(alias) = self.aliases.iter().find(|a| a.phrase == raw) {
            return alias.command.clone();
        }

        let Some(alias) = self.longest_prefix(raw) else {
            return raw.to_string();
        };

        if is_expanded(raw, &alias.command) {
            return raw.to_string();
        }

        let remainder = raw[alias.phrase.len()..].trim_start();
        let resolved = if remainder.is_empty() {
            alias.command.clone()
        } else {
            format!("{} {}", alias.command, remainder)
        };
        tracing::trace!(raw, phrase = %alias.phrase, %resolved, "alias prefix matched");
        resolved
    }

    /// Longest phrase that prefixes `raw`; ties go to the earliest declared.
    fn longest_prefix(&self, raw: &str) -> Option<&Alias> {
        let mut best: Option<&Alias> = None;
        for alias in self
            .aliases
            .iter()
            .filter(|a| !a.phrase.is_empty() && raw.starts_with(a.phrase.as_str()))
        {
            if best.map_or(true, |b| alias.phrase.len() > b.phrase.len()) {
                best = Some(alias);
            }
        }
        best
    }
}

/// Whether `raw` is already `command`, optionally followed by arguments.
fn is_expanded(raw: &str, command: &str) -> bool {
    raw.strip_prefix(command)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}
