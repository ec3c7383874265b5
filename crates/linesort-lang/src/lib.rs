#![warn(missing_docs)]
//! `linesort-lang` - data-driven language configuration helpers for `linesort`.
//!
//! This crate intentionally stays lightweight and does **not** depend on any parser or regex
//! engine. It describes which line prefixes a language uses for annotations, decorators or
//! attributes, so the sorter can keep those lines glued to the field beneath them.

/// The marker used when no language-specific configuration is supplied.
pub const DEFAULT_ANNOTATION_MARKER: &str = "@";

/// Annotation markers for a given language.
///
/// A line is an annotation when its first non-whitespace characters are one of the
/// configured markers. Matching is literal; markers are never interpreted as patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationConfig {
    /// Literal line prefixes (after leading whitespace) that mark an annotation line.
    pub markers: Vec<String>,
}

impl AnnotationConfig {
    /// Create a config with a single marker token (e.g. `@`, `#[`).
    pub fn marker(token: impl Into<String>) -> Self {
        Self {
            markers: vec![token.into()],
        }
    }

    /// Create a config from several marker tokens.
    pub fn markers<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// A config that treats no line as an annotation, so every non-blank line is a field.
    pub fn none() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Java/Kotlin annotations and Python/TypeScript decorators (`@`).
    pub fn java() -> Self {
        Self::marker(DEFAULT_ANNOTATION_MARKER)
    }

    /// Rust outer attributes (`#[`).
    pub fn rust() -> Self {
        Self::marker("#[")
    }

    /// Returns the configured markers, skipping empty tokens.
    pub fn active_markers(&self) -> impl Iterator<Item = &str> {
        self.markers
            .iter()
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    /// Returns `true` if at least one non-empty marker is configured.
    pub fn has_markers(&self) -> bool {
        self.active_markers().next().is_some()
    }
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self::java()
    }
}
