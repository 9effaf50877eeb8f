//! Segment records: one timeline entry of the script.

use serde::{Deserialize, Serialize};

use crate::types::SegmentId;
use crate::vocabulary::{Framing, Lighting, Movement, ShotType};

// ---------------------------------------------------------------------------
// Placeholder defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_TITLE: &str = "New Scene";
pub const DEFAULT_TIME: &str = "0:00 - 0:00";
pub const DEFAULT_REFERENCE: &str = "Reference Style";
pub const DEFAULT_SPEAKER: &str = "Speaker";
pub const DEFAULT_NARRATION: &str = "Enter script here...";
pub const DEFAULT_ACTION: &str = "Visual Action";
pub const DEFAULT_MOOD: &str = "Mood";
pub const DEFAULT_ELEMENTS: &str = "Key Elements";
pub const DEFAULT_DESCRIPTION: &str = "Describe the shot...";

// ---------------------------------------------------------------------------
// Sub-records
// ---------------------------------------------------------------------------

/// Camera language for a segment.
///
/// Values are free strings; the editor offers the labels from
/// [`crate::vocabulary`] but anything is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cinematography {
    pub shot_type: String,
    pub framing: String,
    pub lighting: String,
    pub movement: String,
}

impl Default for Cinematography {
    fn default() -> Self {
        Self {
            shot_type: ShotType::Medium.label().to_string(),
            framing: Framing::Single.label().to_string(),
            lighting: Lighting::Natural.label().to_string(),
            movement: Movement::Static.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioBlock {
    pub speaker: String,
    /// Narration.
    pub text: String,
}

impl Default for AudioBlock {
    fn default() -> Self {
        Self {
            speaker: DEFAULT_SPEAKER.to_string(),
            text: DEFAULT_NARRATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualBlock {
    /// Headline shown on the preview overlay.
    pub action: String,
    pub mood: String,
    pub elements: String,
    pub description: String,
}

impl Default for VisualBlock {
    fn default() -> Self {
        Self {
            action: DEFAULT_ACTION.to_string(),
            mood: DEFAULT_MOOD.to_string(),
            elements: DEFAULT_ELEMENTS.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub title: String,
    /// Free-form timing label such as `"0:00 - 0:10"`. Never parsed.
    pub time: String,
    pub reference: String,
    /// Display order matters; duplicates are allowed.
    #[serde(default)]
    pub tags: Vec<String>,
    pub cinematography: Cinematography,
    pub audio: AudioBlock,
    pub visual: VisualBlock,
}

impl Segment {
    /// A fresh segment carrying the placeholder value of every field.
    pub fn placeholder(id: SegmentId) -> Self {
        Self {
            id,
            title: DEFAULT_TITLE.to_string(),
            time: DEFAULT_TIME.to_string(),
            reference: DEFAULT_REFERENCE.to_string(),
            tags: Vec::new(),
            cinematography: Cinematography::default(),
            audio: AudioBlock::default(),
            visual: VisualBlock::default(),
        }
    }
}
