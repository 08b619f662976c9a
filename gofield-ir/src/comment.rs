//! Comment groups attached to declarations and fields.

use serde::{Deserialize, Serialize};

/// An ordered run of comment lines, kept exactly as written.
///
/// Each line includes its comment markers (`// note` or `/* note */`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentGroup {
    lines: Vec<String>,
}

impl CommentGroup {
    /// Create an empty comment group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a comment group from its lines.
    pub fn from_lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Add a line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Add a line in place.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The lines in source order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl<S: Into<String>> FromIterator<S> for CommentGroup {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::from_lines(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_order() {
        let group = CommentGroup::new().line("// first").line("// second");
        assert_eq!(group.lines(), ["// first", "// second"]);
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let group: CommentGroup = ["// a"].into_iter().collect();
        let json = serde_json::to_string(&group).unwrap();
        assert_eq!(json, r#"["// a"]"#);
    }
}
