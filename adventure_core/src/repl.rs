//! The console loop: read a line, run it through the session, print the output.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};

use crate::engine::Session;
use crate::error::ReplError;

/// Result of reading a line from the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadResult {
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D or input ran out.
    Eof,
}

/// Abstraction over the line editing library so the loop can be driven
/// from a script in tests.
pub trait LineEditor {
    /// Read one line, showing `prompt`.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult, ReplError>;

    /// Add a line to history.
    fn add_history(&mut self, line: &str);
}

/// Line editor backed by rustyline.
pub struct RustylineEditor {
    editor: DefaultEditor,
}

impl RustylineEditor {
    pub fn new() -> Result<Self, ReplError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult, ReplError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// A fixed list of input lines, followed by end-of-input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEditor {
    lines: std::collections::VecDeque<String>,
}

impl ScriptedEditor {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult, ReplError> {
        Ok(self
            .lines
            .pop_front()
            .map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}
}

/// Question shown before every command.
const TURN_PROMPT: &str = "What would you like to do?";

/// The interactive game loop.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = io::Stdout> {
    editor: E,
    session: Session,
    out: W,
    prompt: String,
}

impl Repl<RustylineEditor, io::Stdout> {
    /// Creates a console loop on the terminal.
    pub fn new(session: Session) -> Result<Self, ReplError> {
        Ok(Self::with_editor(RustylineEditor::new()?, session, io::stdout()))
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    pub fn with_editor(editor: E, session: Session, out: W) -> Self {
        Self {
            editor,
            session,
            out,
            prompt: "> ".to_string(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the loop and hand back its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Print the starting room, then play until the player quits, input ends
    /// or the player interrupts.
    pub fn run(&mut self) -> Result<(), ReplError> {
        let _span = tracing::info_span!("session", id = %self.session.id()).entered();
        tracing::info!(rooms = self.session.world().room_count(), "session started");

        writeln!(self.out, "{}", self.session.intro())?;

        loop {
            writeln!(self.out, "{TURN_PROMPT}")?;
            self.out.flush()?;

            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    tracing::info!("input interrupted");
                    return Ok(());
                }
                ReadResult::Eof => {
                    tracing::info!("input closed");
                    return Ok(());
                }
            };
            self.editor.add_history(&line);

            let response = self.session.handle(&line);
            for output in &response.lines {
                writeln!(self.out, "{output}")?;
            }

            if response.is_quit() {
                self.out.flush()?;
                return Ok(());
            }
        }
    }
}
