//! An in-memory host document.
//!
//! [`TextBuffer`] is a Rope-backed text with an optional selection, implementing both
//! [`SelectionSource`] and [`EditSink`]. All offsets are character offsets.

use std::ops::Range;

use ropey::Rope;
use thiserror::Error;

use crate::host::{EditSink, SelectedText, SelectionSource};

/// Errors raised by [`TextBuffer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// `start` is after `end`.
    #[error("Invalid range: {start}..{end}")]
    InvalidRange {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
    },
    /// An offset lies past the end of the document.
    #[error("Offset {offset} out of bounds (document has {len} characters)")]
    OffsetOutOfBounds {
        /// The offending character offset.
        offset: usize,
        /// Document length in characters.
        len: usize,
    },
}

/// A document with an optional selection.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    rope: Rope,
    selection: Option<Range<usize>>,
}

impl TextBuffer {
    /// Create a buffer holding `text`, with nothing selected.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: None,
        }
    }

    /// The full document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Document length in characters.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Returns `true` if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The selected range, if any.
    pub fn selection_range(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    /// Select the characters in `start..end`.
    pub fn set_selection(&mut self, start: usize, end: usize) -> Result<(), BufferError> {
        let range = self.check_range(start..end)?;
        self.selection = Some(range);
        Ok(())
    }

    /// Select the whole document.
    pub fn select_all(&mut self) {
        self.selection = Some(0..self.rope.len_chars());
    }

    /// Drop the selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn check_range(&self, range: Range<usize>) -> Result<Range<usize>, BufferError> {
        let len = self.rope.len_chars();
        if range.start > range.end {
            return Err(BufferError::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        if range.end > len {
            return Err(BufferError::OffsetOutOfBounds {
                offset: range.end,
                len,
            });
        }
        Ok(range)
    }
}

impl SelectionSource for TextBuffer {
    fn selection(&self) -> Option<SelectedText> {
        let range = self.selection.clone()?;
        let text = self.rope.slice(range.clone()).to_string();
        Some(SelectedText { text, range })
    }
}

impl EditSink for TextBuffer {
    type Error = BufferError;

    /// Replaces the range and selects the inserted text.
    fn replace_range(&mut self, range: Range<usize>, text: &str) -> Result<(), BufferError> {
        let range = self.check_range(range)?;
        let start = range.start;
        self.rope.remove(range);
        self.rope.insert(start, text);
        self.selection = Some(start..start + text.chars().count());
        Ok(())
    }
}
