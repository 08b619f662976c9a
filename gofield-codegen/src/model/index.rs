//! Path to node lookup.

use indexmap::IndexMap;

use super::NodeId;

/// Insertion-ordered map from node path to node.
///
/// Paths are not deduplicated: registering a path twice points it at the
/// later node, leaving the earlier node reachable only through the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathIndex {
    entries: IndexMap<String, NodeId>,
}

impl PathIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path`, returning the node it pointed at before.
    pub(crate) fn insert(&mut self, path: impl Into<String>, id: NodeId) -> Option<NodeId> {
        self.entries.insert(path.into(), id)
    }

    pub fn get(&self, path: &str) -> Option<NodeId> {
        self.entries.get(path).copied()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Registered paths in first-registration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.entries.iter().map(|(path, id)| (path.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_and_keeps_position() {
        let mut index = PathIndex::new();
        assert_eq!(index.insert("A", NodeId(0)), None);
        assert_eq!(index.insert("A/X", NodeId(1)), None);
        assert_eq!(index.insert("A", NodeId(2)), Some(NodeId(0)));

        assert_eq!(index.get("A"), Some(NodeId(2)));
        assert_eq!(index.paths().collect::<Vec<_>>(), ["A", "A/X"]);
        assert_eq!(index.len(), 2);
    }
}
