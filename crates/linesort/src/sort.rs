//! Ordering groups by the length of their field line.

use std::cmp::Reverse;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::group::Group;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Shortest field first.
    #[default]
    Ascending,
    /// Longest field first.
    Descending,
}

/// How the length of a field line is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthMetric {
    /// Unicode scalar values.
    #[default]
    Chars,
    /// Extended grapheme clusters.
    Graphemes,
    /// Terminal cell width (CJK and emoji count as 2).
    DisplayWidth,
}

impl LengthMetric {
    /// Measure `line`.
    pub fn measure(self, line: &str) -> usize {
        match self {
            Self::Chars => line.chars().count(),
            Self::Graphemes => line.graphemes(true).count(),
            Self::DisplayWidth => line
                .chars()
                .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(1))
                .sum(),
        }
    }
}

/// The sort key of a group. Blank and annotation-only groups measure 0.
pub fn sort_key(group: &Group, metric: LengthMetric) -> usize {
    metric.measure(group.field_line())
}

/// Stable sort of `groups` by field length.
///
/// Groups of equal length keep their relative input order in both directions.
pub fn sort_groups(groups: &mut [Group], direction: SortDirection, metric: LengthMetric) {
    match direction {
        SortDirection::Ascending => groups.sort_by_cached_key(|g| sort_key(g, metric)),
        SortDirection::Descending => groups.sort_by_cached_key(|g| Reverse(sort_key(g, metric))),
    }
}
