//! Turning groups back into text.

use crate::group::Group;

/// Render `groups` as LF-separated text with no terminator after the last line.
///
/// Each group emits its annotation lines and then its field line, which is omitted when empty.
/// A [`Group::Blank`] emits one empty line. No groups render to the empty string.
pub fn render(groups: &[Group]) -> String {
    let mut lines: Vec<&str> = Vec::with_capacity(groups.iter().map(Group::line_count).sum());
    for group in groups {
        match group {
            Group::Blank => lines.push(""),
            Group::Field { annotations, line } => {
                lines.extend(annotations.iter().map(String::as_str));
                if !line.is_empty() {
                    lines.push(line);
                }
            }
            Group::Annotations { lines: annotations } => {
                lines.extend(annotations.iter().map(String::as_str));
            }
        }
    }
    lines.join("\n")
}
