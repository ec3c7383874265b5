//! The ascending/descending toggle.
//!
//! [`LineSorter::transform`] sorts a selection ascending by field length. When that changes
//! nothing (after [`normalize_for_comparison`]), the selection is taken to be already sorted
//! and the descending order is produced instead, so repeated invocations flip between the two.

use linesort_lang::AnnotationConfig;
use tracing::{debug, trace};

use crate::classify::Classifier;
use crate::group::{FieldTrim, Group, group_lines};
use crate::line_ending::LineEnding;
use crate::render::render;
use crate::sort::{LengthMetric, SortDirection, sort_groups};
use crate::text::split_lines;

/// What happens to blank lines inside a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLinePolicy {
    /// Blank lines are dropped; the output has none.
    #[default]
    Absorb,
    /// Blank lines are zero-length units and move with the other zero-length groups.
    ///
    /// A blank line that sorts last renders as an empty final line, so the output then ends
    /// with a terminator.
    Float,
}

impl BlankLinePolicy {
    fn apply(self, groups: &mut Vec<Group>) {
        if self == Self::Absorb {
            groups.retain(|g| !g.is_blank());
        }
    }
}

/// Which direction to sort in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionRequest {
    /// Ascending, unless the selection is already ascending; then descending.
    #[default]
    Toggle,
    /// Always sort in the given direction, for hosts that track invocation history.
    Fixed(SortDirection),
}

/// Options that control how a selection is sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortOptions {
    /// Direction selection.
    pub direction: DirectionRequest,
    /// Blank line handling.
    pub blank_lines: BlankLinePolicy,
    /// Field line whitespace handling.
    pub field_trim: FieldTrim,
    /// How field length is measured.
    pub metric: LengthMetric,
    /// Which lines are annotations.
    pub annotations: AnnotationConfig,
    /// If `true`, a selection ending in a line terminator keeps it. Off by default: the
    /// output never ends with a terminator.
    pub keep_trailing_newline: bool,
}

/// The result of [`LineSorter::transform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// Replacement text for the selection.
    pub text: String,
    /// The direction that produced `text`.
    pub direction: SortDirection,
}

/// Sorts selections by field length.
///
/// Holds only immutable configuration and may be shared freely.
#[derive(Debug, Clone)]
pub struct LineSorter {
    options: SortOptions,
    classifier: Classifier,
}

impl LineSorter {
    /// Create a sorter with the given options.
    pub fn new(options: SortOptions) -> Self {
        let classifier = Classifier::new(&options.annotations);
        Self {
            options,
            classifier,
        }
    }

    /// Group `text` into sortable units, applying the blank line policy.
    pub fn group(&self, text: &str) -> Vec<Group> {
        self.prepare(text).groups
    }

    /// Sort `text` in a fixed direction, ignoring [`SortOptions::direction`].
    pub fn sort(&self, text: &str, direction: SortDirection) -> String {
        let prepared = self.prepare(text);
        prepared.finish(self.render_sorted(&prepared.groups, direction))
    }

    /// Sort `text`, toggling to descending when it is already ascending.
    ///
    /// Total: every input string produces a result.
    pub fn transform(&self, text: &str) -> Transformed {
        let prepared = self.prepare(text);

        let direction = match self.options.direction {
            DirectionRequest::Fixed(direction) => direction,
            DirectionRequest::Toggle => {
                let ascending = prepared.with_terminator(
                    self.render_sorted(&prepared.groups, SortDirection::Ascending),
                );
                if ascending == normalize_for_comparison(&prepared.normalized) {
                    trace!("selection already ascending");
                    SortDirection::Descending
                } else {
                    return Transformed {
                        text: prepared.line_ending.apply_to_text(&ascending),
                        direction: SortDirection::Ascending,
                    };
                }
            }
        };

        let text = prepared.finish(self.render_sorted(&prepared.groups, direction));
        Transformed { text, direction }
    }

    fn prepare(&self, text: &str) -> Prepared {
        let line_ending = LineEnding::detect_in_text(text);
        let normalized = line_ending.normalize(text);
        let split = split_lines(&normalized);
        let trailing_newline = self.options.keep_trailing_newline && split.trailing_newline;
        let mut groups = group_lines(split.lines, &self.classifier, self.options.field_trim);
        self.options.blank_lines.apply(&mut groups);

        debug!(
            groups = groups.len(),
            ?line_ending,
            trailing_newline,
            "grouped selection"
        );

        Prepared {
            groups,
            line_ending,
            trailing_newline,
            normalized,
        }
    }

    fn render_sorted(&self, groups: &[Group], direction: SortDirection) -> String {
        let mut sorted = groups.to_vec();
        sort_groups(&mut sorted, direction, self.options.metric);
        render(&sorted)
    }
}

impl Default for LineSorter {
    fn default() -> Self {
        Self::new(SortOptions::default())
    }
}

struct Prepared {
    groups: Vec<Group>,
    line_ending: LineEnding,
    trailing_newline: bool,
    normalized: String,
}

impl Prepared {
    fn with_terminator(&self, mut rendered: String) -> String {
        if self.trailing_newline {
            rendered.push('\n');
        }
        rendered
    }

    fn finish(&self, rendered: String) -> String {
        self.line_ending.apply_to_text(&self.with_terminator(rendered))
    }
}

/// Collapse each `"\n\n"` into `"\n"` in one left-to-right pass.
///
/// Used only to decide whether the ascending result equals the selection, so that a selection
/// whose blank lines would be absorbed still counts as already sorted. Non-overlapping: three
/// newlines in a row become two.
pub fn normalize_for_comparison(text: &str) -> String {
    text.replace("\n\n", "\n")
}

/// Sort `selected_text` with the default options.
///
/// ```
/// let once = linesort::transform("private String te;\nprivate String t;");
/// assert_eq!(once, "private String t;\nprivate String te;");
///
/// let twice = linesort::transform(&once);
/// assert_eq!(twice, "private String te;\nprivate String t;");
/// ```
pub fn transform(selected_text: &str) -> String {
    LineSorter::default().transform(selected_text).text
}
