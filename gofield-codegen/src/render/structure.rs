//! Go implementation of [`StructureRenderer`].
//!
//! Output is not formatted. Fields are emitted one per line with no
//! indentation, and every field line ends with a line break, including the
//! last one in a block.

use gofield_core::{ModelConfig, TypeClassifier};

use crate::model::{FieldNode, NodeKind};

/// Serializes field nodes into declaration text.
pub trait StructureRenderer {
    /// Render a node's type: the original spelling for leaves, an expanded
    /// struct body otherwise.
    fn render_structure(&self, node: &FieldNode) -> String;

    /// Render one member line of a struct body.
    fn render_field(&self, field: &FieldNode) -> String;
}

/// Renders Go struct declarations.
///
/// A node is expanded only if it is structure-eligible and the classifier
/// does not report its spelling as opaque.
#[derive(Debug, Clone, Copy)]
pub struct GoStructureRenderer<'a, C: ?Sized> {
    classifier: &'a C,
    anonymous_marker: char,
}

impl<'a, C: TypeClassifier + ?Sized> GoStructureRenderer<'a, C> {
    /// Create a renderer using the default anonymous marker.
    pub fn new(classifier: &'a C) -> Self {
        Self {
            classifier,
            anonymous_marker: ModelConfig::default().anonymous_marker,
        }
    }

    /// Create a renderer using the marker from `config`.
    pub fn from_config(classifier: &'a C, config: &ModelConfig) -> Self {
        Self::new(classifier).anonymous_marker(config.anonymous_marker)
    }

    /// Set the leading character that marks a field rendered without a name.
    pub fn anonymous_marker(mut self, marker: char) -> Self {
        self.anonymous_marker = marker;
        self
    }

    /// Whether `node` is rendered as a struct body.
    pub fn expands(&self, node: &FieldNode) -> bool {
        node.is_structure() && !self.classifier.is_opaque(node.type_text())
    }

    fn display_name<'n>(&self, field: &'n FieldNode) -> &'n str {
        if field.name().starts_with(self.anonymous_marker) {
            ""
        } else {
            field.name()
        }
    }
}

impl<C: TypeClassifier + ?Sized> StructureRenderer for GoStructureRenderer<'_, C> {
    fn render_structure(&self, node: &FieldNode) -> String {
        if !self.expands(node) {
            return node.type_text().to_string();
        }

        let mut result = String::new();

        // The caller owns the `type` keyword: the node may sit in a `type ( ... )` block.
        match node.kind() {
            NodeKind::Declaration(_) => {
                result.push_str(node.name());
                result.push_str(" struct{");
            }
            NodeKind::Field(_) => result.push_str("struct {"),
        }
        if !node.nested_fields().is_empty() {
            result.push('\n');
        }

        for field in node.nested_fields() {
            result.push_str(&self.render_field(field));
        }

        result.push('}');
        for line in node.trailing_comment().lines() {
            result.push_str(line);
        }

        result
    }

    fn render_field(&self, field: &FieldNode) -> String {
        let mut result = String::new();

        let meta = field.field_meta();
        if let Some(meta) = meta {
            for line in meta.doc.lines() {
                result.push_str(line);
                result.push('\n');
            }
        }

        result.push_str(self.display_name(field));
        result.push(' ');
        result.push_str(&self.render_structure(field));

        if let Some(meta) = meta {
            if let Some(tag) = meta.tag.as_deref().filter(|tag| !tag.is_empty()) {
                result.push(' ');
                result.push_str(tag);
            }
            for line in meta.comment.lines() {
                result.push(' ');
                result.push_str(line);
            }
        }

        result.push('\n');

        tracing::trace!(path = %field.path(), "rendered field");
        result
    }
}
