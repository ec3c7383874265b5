//! Grouping lines into sortable units.

use crate::classify::{Classifier, LineKind};

/// How field lines are stored when grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldTrim {
    /// Keep leading and trailing whitespace; indentation counts towards the length.
    #[default]
    Preserve,
    /// Strip leading and trailing whitespace from field lines. Annotation lines are untouched.
    Trim,
}

/// The atomic reorderable unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group {
    /// A single blank line.
    Blank,
    /// A field line with the annotation lines directly above it.
    Field {
        /// Annotation lines, in input order.
        annotations: Vec<String>,
        /// The field line.
        line: String,
    },
    /// Annotation lines with no field beneath them: at the end of the input, or cut off from
    /// the next field by a blank line.
    Annotations {
        /// Annotation lines, in input order.
        lines: Vec<String>,
    },
}

impl Group {
    /// The line whose length is the sort key. Empty for blank and annotation-only groups.
    pub fn field_line(&self) -> &str {
        match self {
            Group::Field { line, .. } => line,
            Group::Blank | Group::Annotations { .. } => "",
        }
    }

    /// The annotation lines carried by this group.
    pub fn annotations(&self) -> &[String] {
        match self {
            Group::Field { annotations, .. } => annotations,
            Group::Annotations { lines } => lines,
            Group::Blank => &[],
        }
    }

    /// Returns `true` for [`Group::Blank`].
    pub fn is_blank(&self) -> bool {
        matches!(self, Group::Blank)
    }

    /// Number of output lines this group renders to.
    pub fn line_count(&self) -> usize {
        match self {
            Group::Blank => 1,
            Group::Field { annotations, line } => {
                annotations.len() + usize::from(!line.is_empty())
            }
            Group::Annotations { lines } => lines.len(),
        }
    }
}

/// Partition `lines` into groups, in input order.
///
/// Annotation lines accumulate until a field line claims them. A blank line flushes pending
/// annotations as a [`Group::Annotations`] before emitting its own [`Group::Blank`], so an
/// annotation never jumps across a blank line onto an unrelated field.
pub fn group_lines<'a, I>(lines: I, classifier: &Classifier, trim: FieldTrim) -> Vec<Group>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    for line in lines {
        match classifier.classify(line) {
            LineKind::Annotation => pending.push(line.to_string()),
            LineKind::Blank => {
                if !pending.is_empty() {
                    groups.push(Group::Annotations {
                        lines: std::mem::take(&mut pending),
                    });
                }
                groups.push(Group::Blank);
            }
            LineKind::Field => {
                let line = match trim {
                    FieldTrim::Preserve => line,
                    FieldTrim::Trim => line.trim(),
                };
                groups.push(Group::Field {
                    annotations: std::mem::take(&mut pending),
                    line: line.to_string(),
                });
            }
        }
    }

    if !pending.is_empty() {
        groups.push(Group::Annotations { lines: pending });
    }

    groups
}
