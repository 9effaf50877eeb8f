//! [`Storyboard`]: an immutable snapshot of the whole editor state.
//!
//! Every operation borrows the current snapshot and returns the next one,
//! keeping the selection consistent with the segment sequence:
//!
//! - `create` selects the new segment;
//! - `delete` of the active segment selects the first remaining one;
//! - reordering never touches the selection (it tracks identity).

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CoreError;
use crate::field_path::{FieldPath, FieldValue};
use crate::seed;
use crate::segment::Segment;
use crate::selection::Selection;
use crate::store::{self, Direction, TagInput};
use crate::types::SegmentId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Storyboard {
    project_title: String,
    segments: Vec<Segment>,
    selection: Selection,
}

impl Storyboard {
    /// Build a snapshot selecting the first segment.
    ///
    /// Rejects an empty sequence, duplicate ids, and an id at
    /// [`SegmentId::MAX`] (no fresh id could follow it).
    pub fn new(project_title: impl Into<String>, segments: Vec<Segment>) -> Result<Self, CoreError> {
        if segments.is_empty() {
            return Err(CoreError::Validation(
                "A storyboard needs at least one segment".to_string(),
            ));
        }
        let mut seen = HashSet::with_capacity(segments.len());
        for seg in &segments {
            if seg.id == SegmentId::MAX {
                return Err(CoreError::Validation(format!(
                    "Segment id {} leaves no room for new segments",
                    seg.id
                )));
            }
            if !seen.insert(seg.id) {
                return Err(CoreError::Validation(format!(
                    "Duplicate segment id {}",
                    seg.id
                )));
            }
        }
        let selection = Selection::first_of(&segments);
        Ok(Self {
            project_title: project_title.into(),
            segments,
            selection,
        })
    }

    /// The example script.
    pub fn demo() -> Self {
        Self {
            project_title: seed::DEMO_PROJECT_TITLE.to_string(),
            selection: Selection { active_id: 0 },
            segments: seed::demo_segments(),
        }
    }

    /// One placeholder segment.
    pub fn blank(project_title: impl Into<String>) -> Self {
        Self {
            project_title: project_title.into(),
            selection: Selection { active_id: 0 },
            segments: seed::blank_segments(),
        }
    }

    // -- accessors ------------------------------------------------------------

    pub fn project_title(&self) -> &str {
        &self.project_title
    }

    /// Segments in timeline order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false` for a snapshot built through this API.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index of the active segment in the timeline.
    pub fn active_index(&self) -> usize {
        self.selection.resolve_index(&self.segments).unwrap_or(0)
    }

    /// The segment shown in the detail editor.
    pub fn active_segment(&self) -> &Segment {
        &self.segments[self.active_index()]
    }

    pub fn active_id(&self) -> SegmentId {
        self.active_segment().id
    }

    pub fn segment(&self, id: SegmentId) -> Result<&Segment, CoreError> {
        self.segments
            .iter()
            .find(|s| s.id == id)
            .ok_or(CoreError::NotFound { entity: "segment", id })
    }

    /// Whether a delete control should be offered at all.
    pub fn can_delete(&self) -> bool {
        self.segments.len() > 1
    }

    /// Whether the active segment can move in `direction`.
    pub fn can_move(&self, direction: Direction) -> bool {
        let idx = self.active_index();
        match direction {
            Direction::Up => idx > 0,
            Direction::Down => idx + 1 < self.segments.len(),
        }
    }

    // -- operations -----------------------------------------------------------

    fn with_segments(&self, segments: Vec<Segment>) -> Self {
        Self {
            project_title: self.project_title.clone(),
            segments,
            selection: self.selection,
        }
    }

    /// Append a placeholder segment and select it.
    pub fn create(&self) -> (Self, SegmentId) {
        let (_, segments, id) = store::create(&self.segments);
        tracing::debug!(id, "segment created");
        let next = Self {
            project_title: self.project_title.clone(),
            segments,
            selection: Selection { active_id: id },
        };
        (next, id)
    }

    /// Make `id` the active segment. Unknown ids leave the selection as is.
    pub fn select(&self, id: SegmentId) -> Self {
        let mut next = self.clone();
        if store::position(&self.segments, id).is_some() {
            next.selection = Selection { active_id: id };
        } else {
            tracing::debug!(id, "select skipped: no such segment");
        }
        next
    }

    /// Replace one field of the active segment.
    pub fn update(&self, path: FieldPath, value: FieldValue) -> Self {
        self.with_segments(store::update(&self.segments, self.active_id(), path, value))
    }

    /// Delete `id`; refused when it is the only segment.
    pub fn delete(&self, id: SegmentId) -> Self {
        let segments = store::delete(&self.segments, id);
        let selection = self.selection.after_delete(id, &segments);
        if segments.len() < self.segments.len() {
            tracing::debug!(id, active_id = selection.active_id, "segment deleted");
        }
        Self {
            project_title: self.project_title.clone(),
            segments,
            selection,
        }
    }

    /// Move the active segment one slot in `direction`.
    pub fn move_active(&self, direction: Direction) -> Self {
        self.with_segments(store::move_segment(&self.segments, self.active_id(), direction))
    }

    /// Add a tag from raw input to the active segment.
    pub fn add_tag(&self, raw_input: &str) -> (Self, TagInput) {
        let (segments, input) = store::add_tag(&self.segments, self.active_id(), raw_input);
        (self.with_segments(segments), input)
    }

    pub fn remove_tag(&self, tag: &str) -> Self {
        self.with_segments(store::remove_tag(&self.segments, self.active_id(), tag))
    }

    pub fn set_project_title(&self, title: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.project_title = title.into();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_path::{AudioField, CinematographyField};
    use assert_matches::assert_matches;

    fn ids(board: &Storyboard) -> Vec<SegmentId> {
        board.segments().iter().map(|s| s.id).collect()
    }

    // -- construction ---------------------------------------------------------

    #[test]
    fn new_rejects_empty() {
        assert_matches!(Storyboard::new("p", vec![]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let segs = vec![Segment::placeholder(1), Segment::placeholder(1)];
        let err = Storyboard::new("p", segs).unwrap_err();
        assert!(err.to_string().contains("Duplicate segment id 1"));
    }

    #[test]
    fn new_rejects_max_id() {
        let segs = vec![Segment::placeholder(0), Segment::placeholder(SegmentId::MAX)];
        assert_matches!(Storyboard::new("p", segs), Err(CoreError::Validation(_)));
    }

    #[test]
    fn new_accepts_id_below_max_and_creates_max() {
        let segs = vec![Segment::placeholder(SegmentId::MAX - 1)];
        let board = Storyboard::new("p", segs).unwrap();
        let (next, id) = board.create();
        assert_eq!(id, SegmentId::MAX);
        assert_eq!(next.active_id(), SegmentId::MAX);
    }

    #[test]
    fn new_selects_first() {
        let segs = vec![Segment::placeholder(4), Segment::placeholder(2)];
        let board = Storyboard::new("p", segs).unwrap();
        assert_eq!(board.active_id(), 4);
    }

    #[test]
    fn demo_starts_on_first_segment() {
        let board = Storyboard::demo();
        assert_eq!(board.project_title(), "PROJECT: THE EQUILIBRIUM");
        assert_eq!(board.active_id(), 0);
        assert_eq!(board.len(), 3);
    }

    // -- create / select ------------------------------------------------------

    #[test]
    fn create_selects_new_segment() {
        let board = Storyboard::demo();
        let (next, id) = board.create();
        assert_eq!(id, 3);
        assert_eq!(next.len(), 4);
        assert_eq!(next.active_id(), 3);
        // Original snapshot is untouched.
        assert_eq!(board.len(), 3);
    }

    #[test]
    fn select_unknown_is_noop() {
        let board = Storyboard::demo().select(2);
        assert_eq!(board.select(77).active_id(), 2);
    }

    #[test]
    fn segment_lookup_reports_not_found() {
        let board = Storyboard::demo();
        assert_eq!(board.segment(1).unwrap().title, "The Scientific Thesis");
        assert_matches!(
            board.segment(12),
            Err(CoreError::NotFound { entity: "segment", id: 12 })
        );
    }

    // -- update ---------------------------------------------------------------

    #[test]
    fn update_targets_active_segment() {
        let board = Storyboard::demo().select(2);
        let next = board.update(FieldPath::Audio(AudioField::Speaker), "Host".into());
        assert_eq!(next.segment(2).unwrap().audio.speaker, "Host");
        assert_eq!(next.segment(0).unwrap(), board.segment(0).unwrap());
        assert_eq!(next.segment(1).unwrap(), board.segment(1).unwrap());
    }

    #[test]
    fn update_lighting_deep_equality() {
        let board = Storyboard::demo();
        let before = serde_json::to_value(&board).unwrap();
        let next = board.update(
            FieldPath::Cinematography(CinematographyField::Lighting),
            "Silhouette".into(),
        );
        let mut expected = before.clone();
        expected["segments"][0]["cinematography"]["lighting"] = serde_json::json!("Silhouette");
        assert_eq!(serde_json::to_value(&next).unwrap(), expected);
    }

    // -- delete ---------------------------------------------------------------

    #[test]
    fn delete_active_moves_selection_to_first() {
        let board = Storyboard::demo().select(1);
        let next = board.delete(1);
        assert_eq!(ids(&next), vec![0, 2]);
        assert_eq!(next.active_id(), 0);
    }

    #[test]
    fn delete_other_keeps_selection() {
        let board = Storyboard::demo().select(2);
        let next = board.delete(0);
        assert_eq!(next.active_id(), 2);
    }

    #[test]
    fn delete_sole_segment_is_noop() {
        let board = Storyboard::blank("p");
        assert!(!board.can_delete());
        let next = board.delete(0);
        assert_eq!(next, board);
        assert_eq!(next.len(), 1);
    }

    // -- move -----------------------------------------------------------------

    #[test]
    fn move_keeps_active_id() {
        let board = Storyboard::demo().select(1);
        let next = board.move_active(Direction::Up);
        assert_eq!(ids(&next), vec![1, 0, 2]);
        assert_eq!(next.active_id(), 1);
        assert_eq!(next.active_index(), 0);
    }

    #[test]
    fn can_move_reflects_boundaries() {
        let board = Storyboard::demo();
        assert!(!board.can_move(Direction::Up));
        assert!(board.can_move(Direction::Down));
        let last = board.select(2);
        assert!(last.can_move(Direction::Up));
        assert!(!last.can_move(Direction::Down));
    }

    // -- tags / title ---------------------------------------------------------

    #[test]
    fn tag_round_trip_on_active() {
        let board = Storyboard::demo().select(1);
        let (tagged, input) = board.add_tag(" Epic ");
        assert_eq!(input, TagInput::Cleared);
        assert_eq!(tagged.active_segment().tags.last().map(String::as_str), Some("Epic"));
        let untagged = tagged.remove_tag("Epic");
        assert_eq!(untagged, board);
    }

    #[test]
    fn set_project_title_only_changes_title() {
        let board = Storyboard::demo();
        let next = board.set_project_title("PROJECT: X");
        assert_eq!(next.project_title(), "PROJECT: X");
        assert_eq!(next.segments(), board.segments());
    }

    // -- end to end -----------------------------------------------------------

    #[test]
    fn create_delete_move_scenario() {
        let board = Storyboard::demo();

        let (board, id) = board.create();
        assert_eq!(id, 3);
        assert_eq!(board.len(), 4);
        assert_eq!(board.active_id(), 3);

        let board = board.delete(3);
        assert_eq!(board.len(), 3);
        assert_eq!(board.active_id(), 0);

        let board = board.move_active(Direction::Down);
        assert_eq!(ids(&board), vec![1, 0, 2]);
        assert_eq!(board.active_id(), 0);
    }
}
