//! Parsing of editor command lines.
//!
//! One command per line; the first word selects the command and the rest of
//! the line is its argument text.

use scriptboard_core::store::Direction;
use scriptboard_core::{CinematographyField, FieldPath, FieldValue, SegmentId};

use crate::error::CommandError;

/// Which vocabulary `options` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsTarget {
    All,
    Cinematography(CinematographyField),
    Theme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    New,
    Select(SegmentId),
    /// `None` deletes the active segment.
    Delete(Option<SegmentId>),
    Move(Direction),
    Set(FieldPath, FieldValue),
    /// Raw tag input, untrimmed.
    Tag(String),
    Untag(String),
    Project(String),
    Play,
    Options(OptionsTarget),
    Export,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  show                    render timeline, editor and preview
  new                     append a new scene and select it
  select <id>             edit scene <id>
  delete [<id>]           delete scene <id> (default: the active scene)
  up | down               move the active scene
  set <path> <value>      edit a field, e.g. `set cinematography.lighting Silhouette`
                          (`set tags a, b` replaces the tag list)
  tag <text>              add a tag to the active scene
  untag <text>            remove a tag from the active scene
  project <title>         rename the project
  play                    toggle the preview play button
  options [<field>]       list choices (shotType, framing, lighting, movement, theme)
  export                  print the storyboard as JSON
  help                    this text
  quit                    leave the editor";

fn parse_id(command: &'static str, raw: &str) -> Result<SegmentId, CommandError> {
    raw.trim()
        .parse::<SegmentId>()
        .map_err(|_| CommandError::InvalidArgument {
            command,
            message: format!("'{}' is not a segment id", raw.trim()),
        })
}

fn parse_options_target(raw: &str) -> Result<OptionsTarget, CommandError> {
    let key: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '_')
        .collect::<String>()
        .to_ascii_lowercase();
    let key = key.strip_prefix("cinematography.").unwrap_or(&key);
    match key {
        "" => Ok(OptionsTarget::All),
        "theme" => Ok(OptionsTarget::Theme),
        "shottype" => Ok(OptionsTarget::Cinematography(CinematographyField::ShotType)),
        "framing" => Ok(OptionsTarget::Cinematography(CinematographyField::Framing)),
        "lighting" => Ok(OptionsTarget::Cinematography(CinematographyField::Lighting)),
        "movement" => Ok(OptionsTarget::Cinematography(CinematographyField::Movement)),
        _ => Err(CommandError::InvalidArgument {
            command: "options",
            message: format!(
                "unknown vocabulary '{}' (shotType, framing, lighting, movement, theme)",
                raw.trim()
            ),
        }),
    }
}

/// Split a comma-separated tag list, dropping blank entries.
fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse one command line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "show" | "list" => Command::Show,
        "new" | "add" => Command::New,
        "select" => {
            if rest.trim().is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "select",
                    what: "a segment id",
                });
            }
            Command::Select(parse_id("select", rest)?)
        }
        "delete" => {
            if rest.trim().is_empty() {
                Command::Delete(None)
            } else {
                Command::Delete(Some(parse_id("delete", rest)?))
            }
        }
        "up" => Command::Move(Direction::Up),
        "down" => Command::Move(Direction::Down),
        "move" => Command::Move(Direction::from_str(rest)?),
        "set" => {
            let rest = rest.trim_start();
            let (raw_path, value) = match rest.split_once(char::is_whitespace) {
                Some((p, v)) => (p, v.trim_start()),
                None => (rest, ""),
            };
            if raw_path.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "set",
                    what: "a field path and a value",
                });
            }
            let path = FieldPath::from_str(raw_path)?;
            let value = if path.is_tags() {
                FieldValue::Tags(parse_tag_list(value))
            } else {
                FieldValue::Text(value.to_string())
            };
            Command::Set(path, value)
        }
        "tag" => Command::Tag(rest.to_string()),
        "untag" => {
            if rest.trim().is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "untag",
                    what: "the tag to remove",
                });
            }
            Command::Untag(rest.trim().to_string())
        }
        "project" => Command::Project(rest.trim().to_string()),
        "play" | "pause" => Command::Play,
        "options" => Command::Options(parse_options_target(rest)?),
        "export" => Command::Export,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

/// Split a `;`-separated batch into individual command lines.
pub fn split_batch(batch: &str) -> impl Iterator<Item = &str> {
    batch.split(';').filter(|s| !s.trim().is_empty())
}
