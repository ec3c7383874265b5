#![warn(missing_docs)]
//! linesort - sort selected lines by length
//!
//! # Overview
//!
//! `linesort` reorders a block of source lines by the length of each line, shortest first.
//! Annotation lines (by default, lines whose first non-whitespace character is `@`) stay glued
//! to the field line beneath them and move as one block. Running the sort on text that is
//! already ascending produces the descending order instead, so invoking it twice toggles.
//!
//! It is headless: the host editor provides the selection and applies the replacement through
//! the [`SelectionSource`] and [`EditSink`] traits.
//!
//! # Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Toggle Controller (LineSorter)             │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Reconstructor (render)                     │  ← Groups → text
//! ├─────────────────────────────────────────────┤
//! │  Sorter (stable, by field length)           │  ← Ordering
//! ├─────────────────────────────────────────────┤
//! │  Grouper (annotations + field | blank)      │  ← Sortable units
//! ├─────────────────────────────────────────────┤
//! │  Classifier (blank / annotation / field)    │  ← Per-line kinds
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Sorting text
//!
//! ```rust
//! let input = "@Deprecated\nprivate String test;\n@Override\nprivate String t;";
//!
//! assert_eq!(
//!     linesort::transform(input),
//!     "@Override\nprivate String t;\n@Deprecated\nprivate String test;"
//! );
//! ```
//!
//! ## Sorting a document selection
//!
//! ```rust
//! use linesort::{SortDirection, SortOutcome, TextBuffer};
//!
//! let mut buffer = TextBuffer::new("class A {\nbb;\na;\n}");
//! buffer.set_selection(10, 16).unwrap();
//!
//! let outcome = linesort::sort_selection(&mut buffer).unwrap();
//! assert_eq!(buffer.text(), "class A {\na;\nbb;\n}");
//! assert_eq!(
//!     outcome,
//!     SortOutcome::Sorted { direction: SortDirection::Ascending, range: 10..16 }
//! );
//! ```
//!
//! # Module Description
//!
//! - [`classify`] - line kinds and the annotation pattern
//! - [`group`] - grouping lines into sortable units
//! - [`sort`] - stable ordering by field length
//! - [`render`] - reconstructing text from groups
//! - [`transform`] - options and the ascending/descending toggle
//! - [`host`] - selection and edit traits for the host editor
//! - [`buffer`] - an in-memory host document

pub mod buffer;
pub mod classify;
pub mod group;
pub mod host;
pub mod line_ending;
pub mod render;
pub mod sort;
mod text;
pub mod transform;

pub use buffer::{BufferError, TextBuffer};
pub use classify::{Classifier, ClassifierError, LineKind};
pub use group::{FieldTrim, Group, group_lines};
pub use host::{EditSink, SelectedText, SelectionSource, SortOutcome, sort_selection};
pub use line_ending::LineEnding;
pub use linesort_lang::AnnotationConfig;
pub use render::render;
pub use sort::{LengthMetric, SortDirection, sort_groups};
pub use transform::{
    BlankLinePolicy, DirectionRequest, LineSorter, SortOptions, Transformed, normalize_for_comparison,
    transform,
};
