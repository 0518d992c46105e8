//! Command Dispatcher - turns a canonical command string into a [`Command`].
//!
//! Tokens are split on whitespace. Multi-word names are rebuilt by joining
//! the tokens after the verb with single spaces, so runs of spaces inside a
//! name collapse to one.

/// Verbs that need an argument before they can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Use,
    Go,
    Get,
    Drop,
    Talk,
}

impl Verb {
    /// The question asked when the argument is missing.
    pub fn prompt(&self) -> &'static str {
        match self {
            Verb::Use => "What would you like to use?",
            Verb::Go => "Where would you like to go?",
            Verb::Get => "What would you like to get?",
            Verb::Drop => "What would you like to drop?",
            Verb::Talk => "Who would you like to talk to?",
        }
    }
}

/// A parsed command, ready to run against a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No tokens at all.
    Empty,
    Look,
    Inventory,
    Quit,
    /// Direction to move in.
    Go(String),
    /// Item to pick up.
    Get(String),
    /// Item to put down.
    Drop(String),
    /// Item to use.
    Use(String),
    /// Character to talk to.
    TalkTo(String),
    /// A known verb without its argument.
    Incomplete(Verb),
    /// The first token is not a known verb.
    Unknown(String),
}

impl Command {
    /// Parse a canonical command.
    pub fn parse(canonical: &str) -> Self {
        let tokens: Vec<&str> = canonical.split_whitespace().collect();
        let Some((&verb, args)) = tokens.split_first() else {
            return Command::Empty;
        };

        match verb {
            "look" => Command::Look,
            "inventory" => Command::Inventory,
            "quit" => Command::Quit,
            // Only the first argument names the direction.
            "go" => args
                .first()
                .map(|dir| Command::Go(dir.to_string()))
                .unwrap_or(Command::Incomplete(Verb::Go)),
            "get" => with_name(args, Command::Get, Verb::Get),
            "drop" => with_name(args, Command::Drop, Verb::Drop),
            "use" => with_name(args, Command::Use, Verb::Use),
            "talk" => match args {
                ["to", name @ ..] if !name.is_empty() => Command::TalkTo(name.join(" ")),
                _ => Command::Incomplete(Verb::Talk),
            },
            other => Command::Unknown(other.to_string()),
        }
    }
}

fn with_name(args: &[&str], build: fn(String) -> Command, verb: Verb) -> Command {
    if args.is_empty() {
        Command::Incomplete(verb)
    } else {
        build(args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   \t "), Command::Empty);
    }

    #[test]
    fn test_bare_verbs() {
        assert_eq!(Command::parse("look"), Command::Look);
        assert_eq!(Command::parse("inventory"), Command::Inventory);
        assert_eq!(Command::parse("quit"), Command::Quit);
        // Extra tokens are ignored by verbs that take no argument.
        assert_eq!(Command::parse("look around"), Command::Look);
    }

    #[test]
    fn test_multi_word_names_are_normalized() {
        assert_eq!(
            Command::parse("get  rusty   key"),
            Command::Get("rusty key".to_string())
        );
        assert_eq!(
            Command::parse("use old lamp"),
            Command::Use("old lamp".to_string())
        );
    }

    #[test]
    fn test_go_takes_first_argument_only() {
        assert_eq!(
            Command::parse("go north quickly"),
            Command::Go("north".to_string())
        );
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(Command::parse("go"), Command::Incomplete(Verb::Go));
        assert_eq!(Command::parse("get"), Command::Incomplete(Verb::Get));
        assert_eq!(Command::parse("drop"), Command::Incomplete(Verb::Drop));
        assert_eq!(Command::parse("use"), Command::Incomplete(Verb::Use));
        assert_eq!(Verb::Use.prompt(), "What would you like to use?");
    }

    #[test]
    fn test_talk_requires_to_and_name() {
        assert_eq!(
            Command::parse("talk to old man"),
            Command::TalkTo("old man".to_string())
        );
        assert_eq!(Command::parse("talk to"), Command::Incomplete(Verb::Talk));
        assert_eq!(
            Command::parse("talk with guard"),
            Command::Incomplete(Verb::Talk)
        );
        assert_eq!(Command::parse("talk"), Command::Incomplete(Verb::Talk));
    }

    #[test]
    fn test_unknown_verb() {
        assert_eq!(
            Command::parse("dance wildly"),
            Command::Unknown("dance".to_string())
        );
    }
}
