/// Segment identifiers. Assigned once at creation, never reused.
pub type SegmentId = i64;
