//! Line ending helpers.
//!
//! `linesort` groups and renders text using LF (`'\n'`) newlines.
//! When every terminator in a selection is CRLF (`"\r\n"`), it is normalized before sorting
//! and the output is converted back. Any other selection is split on `'\n'` only, and each
//! `'\r'` stays part of the line it belongs to.

/// The newline sequence a selection uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    #[default]
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Detect the dominant line ending from a source text.
    ///
    /// Policy: returns [`LineEnding::Crlf`] only if the input has at least one newline and
    /// every `'\n'` is preceded by `'\r'`; mixed or LF-only input is [`LineEnding::Lf`].
    pub fn detect_in_text(text: &str) -> Self {
        let lf = text.matches('\n').count();
        if lf > 0 && lf == text.matches("\r\n").count() {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// Convert `text` to LF newlines. Only a CRLF selection is rewritten; a `'\r'` that is not
    /// part of the terminator stays in place.
    pub fn normalize(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace("\r\n", "\n"),
        }
    }

    /// Convert an LF-normalized text to this line ending.
    pub fn apply_to_text(self, text: &str) -> String {
        match self {
            Self::Lf => text.to_string(),
            Self::Crlf => text.replace('\n', "\r\n"),
        }
    }
}
