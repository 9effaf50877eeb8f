//! Typed addressing of a single editable field on a [`Segment`].
//!
//! A path is either a root selector (`title`, `tags`, ...) or a
//! `(sub-record, field)` pair such as `cinematography.shotType`.

use crate::error::CoreError;
use crate::segment::Segment;
use crate::vocabulary::{Framing, Lighting, Movement, ShotType};

// ---------------------------------------------------------------------------
// Sub-record fields
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CinematographyField {
    ShotType,
    Framing,
    Lighting,
    Movement,
}

impl CinematographyField {
    pub const ALL: &'static [Self] = &[Self::ShotType, Self::Framing, Self::Lighting, Self::Movement];

    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ShotType => "Shot Type",
            Self::Framing => "Framing",
            Self::Lighting => "Lighting",
            Self::Movement => "Movement",
        }
    }

    /// The selection list a form offers for this field.
    pub fn options(&self) -> Vec<&'static str> {
        match self {
            Self::ShotType => ShotType::labels(),
            Self::Framing => Framing::labels(),
            Self::Lighting => Lighting::labels(),
            Self::Movement => Movement::labels(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioField {
    Speaker,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualField {
    Action,
    Mood,
    Elements,
    Description,
}

// ---------------------------------------------------------------------------
// FieldPath
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Title,
    Time,
    Reference,
    Tags,
    Cinematography(CinematographyField),
    Audio(AudioField),
    Visual(VisualField),
}

/// Every path accepted by [`FieldPath::from_str`], in canonical spelling.
pub const VALID_PATHS: &[&str] = &[
    "title",
    "time",
    "reference",
    "tags",
    "cinematography.shotType",
    "cinematography.framing",
    "cinematography.lighting",
    "cinematography.movement",
    "audio.speaker",
    "audio.text",
    "visual.action",
    "visual.mood",
    "visual.elements",
    "visual.description",
];

impl FieldPath {
    /// Parse a dotted path. Segment names are matched case-insensitively
    /// and `_` is ignored, so `cinematography.shot_type` also works.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        let path = match normalized.split_once('.') {
            None => match normalized.as_str() {
                "title" => Some(Self::Title),
                "time" => Some(Self::Time),
                "reference" => Some(Self::Reference),
                "tags" => Some(Self::Tags),
                _ => None,
            },
            Some(("cinematography", field)) => match field {
                "shottype" => Some(Self::Cinematography(CinematographyField::ShotType)),
                "framing" => Some(Self::Cinematography(CinematographyField::Framing)),
                "lighting" => Some(Self::Cinematography(CinematographyField::Lighting)),
                "movement" => Some(Self::Cinematography(CinematographyField::Movement)),
                _ => None,
            },
            Some(("audio", field)) => match field {
                "speaker" => Some(Self::Audio(AudioField::Speaker)),
                "text" => Some(Self::Audio(AudioField::Text)),
                _ => None,
            },
            Some(("visual", field)) => match field {
                "action" => Some(Self::Visual(VisualField::Action)),
                "mood" => Some(Self::Visual(VisualField::Mood)),
                "elements" => Some(Self::Visual(VisualField::Elements)),
                "description" => Some(Self::Visual(VisualField::Description)),
                _ => None,
            },
            Some(_) => None,
        };

        path.ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid field path '{s}'. Must be one of: {}",
                VALID_PATHS.join(", ")
            ))
        })
    }

    /// Canonical dotted spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Time => "time",
            Self::Reference => "reference",
            Self::Tags => "tags",
            Self::Cinematography(f) => match f {
                CinematographyField::ShotType => "cinematography.shotType",
                CinematographyField::Framing => "cinematography.framing",
                CinematographyField::Lighting => "cinematography.lighting",
                CinematographyField::Movement => "cinematography.movement",
            },
            Self::Audio(f) => match f {
                AudioField::Speaker => "audio.speaker",
                AudioField::Text => "audio.text",
            },
            Self::Visual(f) => match f {
                VisualField::Action => "visual.action",
                VisualField::Mood => "visual.mood",
                VisualField::Elements => "visual.elements",
                VisualField::Description => "visual.description",
            },
        }
    }

    /// Whether this path holds a tag list rather than text.
    pub fn is_tags(&self) -> bool {
        matches!(self, Self::Tags)
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FieldValue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Tags(Vec<String>),
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(tags: Vec<String>) -> Self {
        Self::Tags(tags)
    }
}

// ---------------------------------------------------------------------------
// Segment accessors
// ---------------------------------------------------------------------------

impl Segment {
    fn text_slot(&mut self, path: FieldPath) -> Option<&mut String> {
        let slot = match path {
            FieldPath::Title => &mut self.title,
            FieldPath::Time => &mut self.time,
            FieldPath::Reference => &mut self.reference,
            FieldPath::Tags => return None,
            FieldPath::Cinematography(f) => match f {
                CinematographyField::ShotType => &mut self.cinematography.shot_type,
                CinematographyField::Framing => &mut self.cinematography.framing,
                CinematographyField::Lighting => &mut self.cinematography.lighting,
                CinematographyField::Movement => &mut self.cinematography.movement,
            },
            FieldPath::Audio(f) => match f {
                AudioField::Speaker => &mut self.audio.speaker,
                AudioField::Text => &mut self.audio.text,
            },
            FieldPath::Visual(f) => match f {
                VisualField::Action => &mut self.visual.action,
                VisualField::Mood => &mut self.visual.mood,
                VisualField::Elements => &mut self.visual.elements,
                VisualField::Description => &mut self.visual.description,
            },
        };
        Some(slot)
    }

    /// Read the current value at `path`.
    pub fn field(&self, path: FieldPath) -> FieldValue {
        let text = match path {
            FieldPath::Tags => return FieldValue::Tags(self.tags.clone()),
            FieldPath::Title => &self.title,
            FieldPath::Time => &self.time,
            FieldPath::Reference => &self.reference,
            FieldPath::Cinematography(f) => match f {
                CinematographyField::ShotType => &self.cinematography.shot_type,
                CinematographyField::Framing => &self.cinematography.framing,
                CinematographyField::Lighting => &self.cinematography.lighting,
                CinematographyField::Movement => &self.cinematography.movement,
            },
            FieldPath::Audio(f) => match f {
                AudioField::Speaker => &self.audio.speaker,
                AudioField::Text => &self.audio.text,
            },
            FieldPath::Visual(f) => match f {
                VisualField::Action => &self.visual.action,
                VisualField::Mood => &self.visual.mood,
                VisualField::Elements => &self.visual.elements,
                VisualField::Description => &self.visual.description,
            },
        };
        FieldValue::Text(text.clone())
    }

    /// Replace the value at `path`.
    ///
    /// Returns `false` and leaves the segment untouched when the value kind
    /// does not fit the path.
    pub fn set_field(&mut self, path: FieldPath, value: FieldValue) -> bool {
        match value {
            FieldValue::Tags(tags) if path.is_tags() => {
                self.tags = tags;
                true
            }
            FieldValue::Text(text) => match self.text_slot(path) {
                Some(slot) => {
                    *slot = text;
                    true
                }
                None => false,
            },
            FieldValue::Tags(_) => false,
        }
    }
}
