//! The boundary to the editing host.
//!
//! A host exposes the current selection through [`SelectionSource`] and applies replacements
//! through [`EditSink`]. Serializing the edit with other document mutations, and recording it
//! as one undoable step, is the host's responsibility.

use std::ops::Range;

use tracing::debug;

use crate::sort::SortDirection;
use crate::transform::LineSorter;

/// A snapshot of the selected text and where it lives in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedText {
    /// The selected text.
    pub text: String,
    /// Half-open character range of the selection.
    pub range: Range<usize>,
}

/// Provides the current selection.
pub trait SelectionSource {
    /// The selected text, or `None` if nothing is selected.
    fn selection(&self) -> Option<SelectedText>;
}

/// Applies a replacement to the document.
pub trait EditSink {
    /// The error type returned by [`EditSink::replace_range`].
    type Error;

    /// Replace the characters in `range` with `text`.
    fn replace_range(&mut self, range: Range<usize>, text: &str) -> Result<(), Self::Error>;
}

/// What [`LineSorter::sort_selection`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    /// Nothing was selected; the document is untouched.
    NoSelection,
    /// Sorting produced the selected text verbatim; no edit was issued.
    Unchanged {
        /// The direction that was applied.
        direction: SortDirection,
    },
    /// The selection was replaced.
    Sorted {
        /// The direction that was applied.
        direction: SortDirection,
        /// Character range now covered by the replacement.
        range: Range<usize>,
    },
}

impl LineSorter {
    /// Sort the host's current selection in place.
    pub fn sort_selection<H>(&self, host: &mut H) -> Result<SortOutcome, H::Error>
    where
        H: SelectionSource + EditSink,
    {
        let Some(selected) = host.selection() else {
            debug!("no selection; nothing to sort");
            return Ok(SortOutcome::NoSelection);
        };

        let result = self.transform(&selected.text);
        if result.text == selected.text {
            debug!(direction = ?result.direction, "selection unchanged");
            return Ok(SortOutcome::Unchanged {
                direction: result.direction,
            });
        }

        let start = selected.range.start;
        let end = start + result.text.chars().count();
        host.replace_range(selected.range, &result.text)?;
        debug!(direction = ?result.direction, start, end, "selection sorted");

        Ok(SortOutcome::Sorted {
            direction: result.direction,
            range: start..end,
        })
    }
}

/// Sort the host's current selection with the default options.
pub fn sort_selection<H>(host: &mut H) -> Result<SortOutcome, H::Error>
where
    H: SelectionSource + EditSink,
{
    LineSorter::default().sort_selection(host)
}
