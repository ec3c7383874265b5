//! Line classification.
//!
//! Every line of a selection is exactly one of [`LineKind::Blank`], [`LineKind::Annotation`] or
//! [`LineKind::Field`]. Annotation detection is a single anchored regex built from the
//! configured markers; with the default configuration it is `^\s*@`.

use linesort_lang::AnnotationConfig;
use regex::{Regex, RegexBuilder};
use thiserror::Error;
use tracing::warn;

/// The kind of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Empty or whitespace-only.
    Blank,
    /// First non-whitespace characters are an annotation marker.
    Annotation,
    /// Anything else; carries the sort key of its group.
    Field,
}

/// Errors raised while building a [`Classifier`].
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The annotation pattern failed to compile (e.g. it exceeds the regex size limit).
    #[error("Invalid annotation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Classifies lines according to an [`AnnotationConfig`].
#[derive(Debug, Clone)]
pub struct Classifier {
    annotation: Option<Regex>,
}

impl Classifier {
    /// Build a classifier for the given markers.
    ///
    /// A config with no usable markers classifies every non-blank line as a field. If the
    /// pattern cannot be compiled, a warning is logged and annotation detection is disabled;
    /// use [`Classifier::try_new`] to handle that case instead.
    pub fn new(config: &AnnotationConfig) -> Self {
        Self::try_new(config).unwrap_or_else(|err| {
            warn!(%err, "annotation detection disabled");
            Self { annotation: None }
        })
    }

    /// Build a classifier, failing if the annotation pattern cannot be compiled.
    ///
    /// Markers are escaped, so the only possible failure is a compiled pattern that exceeds
    /// the regex size limit.
    pub fn try_new(config: &AnnotationConfig) -> Result<Self, ClassifierError> {
        Self::build(config, None)
    }

    fn build(
        config: &AnnotationConfig,
        size_limit: Option<usize>,
    ) -> Result<Self, ClassifierError> {
        let alternatives: Vec<String> = config.active_markers().map(regex::escape).collect();
        let pattern = match alternatives.as_slice() {
            [] => return Ok(Self { annotation: None }),
            [single] => format!(r"^\s*{single}"),
            many => format!(r"^\s*(?:{})", many.join("|")),
        };

        let mut builder = RegexBuilder::new(&pattern);
        if let Some(limit) = size_limit {
            builder.size_limit(limit);
        }
        Ok(Self {
            annotation: Some(builder.build()?),
        })
    }

    /// The annotation pattern, if any markers are configured.
    pub fn annotation_pattern(&self) -> Option<&str> {
        self.annotation.as_ref().map(Regex::as_str)
    }

    /// Returns `true` if `line` is an annotation line.
    pub fn is_annotation(&self, line: &str) -> bool {
        self.annotation.as_ref().is_some_and(|re| re.is_match(line))
    }

    /// Classify a single line (without its terminator).
    pub fn classify(&self, line: &str) -> LineKind {
        if self.is_annotation(line) {
            LineKind::Annotation
        } else if is_blank(line) {
            LineKind::Blank
        } else {
            LineKind::Field
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&AnnotationConfig::default())
    }
}

/// Returns `true` for empty and whitespace-only lines.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
