/// A selection cut into lines, with the final terminator tracked separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitLines<'a> {
    pub(crate) lines: Vec<&'a str>,
    /// Whether the text ended with a line terminator.
    pub(crate) trailing_newline: bool,
}

pub(crate) fn split_lines(text: &str) -> SplitLines<'_> {
    if text.is_empty() {
        return SplitLines {
            lines: Vec::new(),
            trailing_newline: false,
        };
    }

    // `str::split('\n')` keeps the empty segment after a final newline; that segment is a
    // terminator artifact, not a line of the selection.
    let mut lines: Vec<&str> = text.split('\n').collect();
    let trailing_newline = text.ends_with('\n');
    if trailing_newline {
        lines.pop();
    }

    SplitLines {
        lines,
        trailing_newline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_lines() {
        let split = split_lines("");
        assert!(split.lines.is_empty());
        assert!(!split.trailing_newline);
    }

    #[test]
    fn final_newline_is_not_a_line() {
        let split = split_lines("a\nb\n");
        assert_eq!(split.lines, vec!["a", "b"]);
        assert!(split.trailing_newline);

        let split = split_lines("\n");
        assert_eq!(split.lines, vec![""]);
        assert!(split.trailing_newline);
    }

    #[test]
    fn interior_blank_lines_are_kept() {
        let split = split_lines("a\n\n\nb");
        assert_eq!(split.lines, vec!["a", "", "", "b"]);
        assert!(!split.trailing_newline);
    }

    #[test]
    fn carriage_returns_belong_to_the_line() {
        let split = split_lines("a\r\nb\r\n");
        assert_eq!(split.lines, vec!["a\r", "b\r"]);
        assert!(split.trailing_newline);
    }
}
