//! Which segment the detail editor is showing.

use serde::{Deserialize, Serialize};

use crate::segment::Segment;
use crate::store::position;
use crate::types::SegmentId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub active_id: SegmentId,
}

impl Selection {
    /// Select the first segment, or id 0 for an empty sequence.
    pub fn first_of(segments: &[Segment]) -> Self {
        Self {
            active_id: segments.first().map(|s| s.id).unwrap_or(0),
        }
    }

    /// Index of the active segment, falling back to the first.
    pub fn resolve_index(&self, segments: &[Segment]) -> Option<usize> {
        if segments.is_empty() {
            return None;
        }
        Some(position(segments, self.active_id).unwrap_or(0))
    }

    /// Selection after `removed_id` was deleted and `remaining` is what is
    /// left. Moves to the first remaining segment only if the removed id was
    /// active.
    pub fn after_delete(&self, removed_id: SegmentId, remaining: &[Segment]) -> Self {
        if self.active_id == removed_id && position(remaining, removed_id).is_none() {
            Self::first_of(remaining)
        } else {
            *self
        }
    }
}
