//! Segment-store operations.
//!
//! Pure functions over an ordered slice of segments. Each returns a new
//! sequence and never fails: boundary input (deleting the last segment,
//! moving past an end, an empty tag, an unknown id) yields an unchanged copy.

use crate::error::CoreError;
use crate::field_path::{FieldPath, FieldValue};
use crate::segment::Segment;
use crate::types::SegmentId;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Reorder direction along the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(CoreError::Validation(format!(
                "Invalid direction '{s}'. Must be one of: up, down"
            ))),
        }
    }
}

/// What the tag input field should do after a commit gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagInput {
    /// Nothing was added; leave the typed text in place.
    Kept,
    /// A tag was appended; clear the field.
    Cleared,
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub fn position(segments: &[Segment], id: SegmentId) -> Option<usize> {
    segments.iter().position(|s| s.id == id)
}

/// `max(ids, 0) + 1`.
///
/// Callers keep ids below [`SegmentId::MAX`]; `Storyboard::new` enforces it.
pub fn next_id(segments: &[Segment]) -> SegmentId {
    segments.iter().map(|s| s.id).max().unwrap_or(0).max(0) + 1
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Append a placeholder segment. Returns the new segment, the new sequence
/// and the new id (which the caller selects).
pub fn create(segments: &[Segment]) -> (Segment, Vec<Segment>, SegmentId) {
    let id = next_id(segments);
    let segment = Segment::placeholder(id);
    let mut next = segments.to_vec();
    next.push(segment.clone());
    (segment, next, id)
}

/// Replace one field of the segment with id `active_id`.
pub fn update(
    segments: &[Segment],
    active_id: SegmentId,
    path: FieldPath,
    value: FieldValue,
) -> Vec<Segment> {
    let mut next = segments.to_vec();
    let Some(idx) = position(&next, active_id) else {
        tracing::debug!(active_id, path = %path, "update skipped: no such segment");
        return next;
    };
    if !next[idx].set_field(path, value) {
        tracing::debug!(active_id, path = %path, "update skipped: value kind does not fit path");
    }
    next
}

/// Remove the segment with `id`. Refuses when it is the only one left.
pub fn delete(segments: &[Segment], id: SegmentId) -> Vec<Segment> {
    if segments.len() <= 1 {
        tracing::debug!(id, "delete skipped: last remaining segment");
        return segments.to_vec();
    }
    segments.iter().filter(|s| s.id != id).cloned().collect()
}

/// Swap the active segment with its neighbour in `direction`.
pub fn move_segment(segments: &[Segment], active_id: SegmentId, direction: Direction) -> Vec<Segment> {
    let mut next = segments.to_vec();
    let Some(idx) = position(&next, active_id) else {
        tracing::debug!(active_id, "move skipped: no such segment");
        return next;
    };
    match direction {
        Direction::Up if idx > 0 => next.swap(idx, idx - 1),
        Direction::Down if idx + 1 < next.len() => next.swap(idx, idx + 1),
        _ => tracing::debug!(active_id, direction = direction.as_str(), "move skipped: at boundary"),
    }
    next
}

/// Append the trimmed `raw_input` to the active segment's tags.
pub fn add_tag(segments: &[Segment], active_id: SegmentId, raw_input: &str) -> (Vec<Segment>, TagInput) {
    let tag = raw_input.trim();
    if tag.is_empty() {
        return (segments.to_vec(), TagInput::Kept);
    }
    let Some(idx) = position(segments, active_id) else {
        tracing::debug!(active_id, "add_tag skipped: no such segment");
        return (segments.to_vec(), TagInput::Kept);
    };
    let mut tags = segments[idx].tags.clone();
    tags.push(tag.to_string());
    (update(segments, active_id, FieldPath::Tags, FieldValue::Tags(tags)), TagInput::Cleared)
}

/// Remove the first tag equal to `tag` from the active segment.
pub fn remove_tag(segments: &[Segment], active_id: SegmentId, tag: &str) -> Vec<Segment> {
    let Some(idx) = position(segments, active_id) else {
        return segments.to_vec();
    };
    let mut tags = segments[idx].tags.clone();
    match tags.iter().position(|t| t == tag) {
        Some(at) => {
            tags.remove(at);
            update(segments, active_id, FieldPath::Tags, FieldValue::Tags(tags))
        }
        None => segments.to_vec(),
    }
}
