//! Storyboard data model and segment-store operations.
//!
//! Everything here is pure and synchronous: operations take a snapshot and
//! return the next one. Rendering lives in `scriptboard-cli`.

pub mod board;
pub mod error;
pub mod field_path;
pub mod seed;
pub mod segment;
pub mod selection;
pub mod store;
pub mod types;
pub mod vocabulary;

pub use board::Storyboard;
pub use error::CoreError;
pub use field_path::{AudioField, CinematographyField, FieldPath, FieldValue, VisualField};
pub use segment::{AudioBlock, Cinematography, Segment, VisualBlock};
pub use selection::Selection;
pub use store::{Direction, TagInput};
pub use types::SegmentId;
