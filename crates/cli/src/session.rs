//! Interactive editing session.
//!
//! A [`Session`] owns the current [`Storyboard`] snapshot plus the view-only
//! state (tag input draft, decorative play flag). Each command replaces the
//! snapshot and re-renders, mirroring one user gesture per render.

use std::io::{BufRead, Write};

use scriptboard_core::store::TagInput;
use scriptboard_core::Storyboard;

use crate::command::{self, Command, HELP};
use crate::config::CliConfig;
use crate::error::{CliResult, CommandError};
use crate::render;

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Storyboard,
    badge_tags: usize,
    tag_draft: String,
    playing: bool,
}

impl Session {
    pub fn new(config: &CliConfig) -> Self {
        Self::with_board(config.initial_board(), config.badge_tags)
    }

    pub fn with_board(board: Storyboard, badge_tags: usize) -> Self {
        Self {
            board,
            badge_tags,
            tag_draft: String::new(),
            playing: false,
        }
    }

    pub fn board(&self) -> &Storyboard {
        &self.board
    }

    /// Text left in the tag input after the last `tag` command.
    pub fn tag_draft(&self) -> &str {
        &self.tag_draft
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn render(&self) -> String {
        render::render_board(&self.board, self.badge_tags, &self.tag_draft, self.playing)
    }

    /// Apply one parsed command, writing any view output to `out`.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> CliResult<Outcome> {
        tracing::debug!(?command, "executing command");
        let redraw = match command {
            Command::Show => {
                writeln!(out, "{}", self.render())?;
                false
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                false
            }
            Command::Export => {
                writeln!(out, "{}", serde_json::to_string_pretty(&self.board)?)?;
                false
            }
            Command::Options(target) => {
                writeln!(out, "{}", render::render_options(target))?;
                false
            }
            Command::Quit => return Ok(Outcome::Quit),
            Command::New => {
                let (board, id) = self.board.create();
                self.board = board;
                tracing::info!(id, "scene added");
                true
            }
            Command::Select(id) => {
                if let Err(e) = self.board.segment(id) {
                    tracing::warn!(error = %e, "select ignored");
                }
                self.board = self.board.select(id);
                true
            }
            Command::Delete(id) => {
                let id = id.unwrap_or_else(|| self.board.active_id());
                if let Err(e) = self.board.segment(id) {
                    tracing::warn!(error = %e, "delete ignored");
                }
                let before = self.board.len();
                self.board = self.board.delete(id);
                if self.board.len() < before {
                    tracing::info!(id, "scene deleted");
                }
                true
            }
            Command::Move(direction) => {
                self.board = self.board.move_active(direction);
                true
            }
            Command::Set(path, value) => {
                self.board = self.board.update(path, value);
                true
            }
            Command::Tag(raw) => {
                let (board, input) = self.board.add_tag(&raw);
                self.board = board;
                self.tag_draft = match input {
                    TagInput::Cleared => String::new(),
                    TagInput::Kept => raw,
                };
                true
            }
            Command::Untag(tag) => {
                self.board = self.board.remove_tag(&tag);
                true
            }
            Command::Project(title) => {
                self.board = self.board.set_project_title(title);
                true
            }
            Command::Play => {
                self.playing = !self.playing;
                true
            }
        };

        if redraw {
            writeln!(out, "{}", self.render())?;
        }
        Ok(Outcome::Continue)
    }

    /// Parse and apply one line. Malformed commands are reported on `err`
    /// and leave the snapshot unchanged.
    pub fn run_line(
        &mut self,
        line: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> CliResult<Outcome> {
        match command::parse(line) {
            Ok(Some(command)) => self.execute(command, out),
            Ok(None) => Ok(Outcome::Continue),
            Err(e) => {
                report(&e, err)?;
                Ok(Outcome::Continue)
            }
        }
    }

    /// Run a `;`-separated batch of commands, stopping early on `quit`.
    pub fn run_batch(
        &mut self,
        batch: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> CliResult<Outcome> {
        for line in command::split_batch(batch) {
            if self.run_line(line, out, err)? == Outcome::Quit {
                return Ok(Outcome::Quit);
            }
        }
        Ok(Outcome::Continue)
    }

    /// Read commands from `input` until end of input or `quit`.
    pub fn run_interactive(
        &mut self,
        input: impl BufRead,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> CliResult<()> {
        writeln!(out, "{}", self.render())?;
        write!(out, "> ")?;
        out.flush()?;
        for line in input.lines() {
            if self.run_line(&line?, out, err)? == Outcome::Quit {
                break;
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        Ok(())
    }
}

fn report(e: &CommandError, err: &mut impl Write) -> CliResult<()> {
    tracing::warn!(error = %e, "command rejected");
    writeln!(err, "error: {e}")?;
    Ok(())
}
