//! Field nodes.

use gofield_ir::CommentGroup;

/// Identity of a node within one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

/// Metadata carried by a top-level declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationMeta {
    /// Trailing comment of the declaration.
    pub comment: CommentGroup,
}

/// Metadata carried by a member field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
    /// Documentation lines above the field.
    pub doc: CommentGroup,
    /// Raw tag literal.
    pub tag: Option<String>,
    /// Trailing comment of the field.
    pub comment: CommentGroup,
}

/// What a node was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Declaration(DeclarationMeta),
    Field(FieldMeta),
}

/// A top-level declaration or a member field.
///
/// Nodes are built once by [`ModelBuilder`](super::ModelBuilder) and are
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) path: String,
    pub(crate) type_text: String,
    pub(crate) is_structure: bool,
    pub(crate) nested_fields: Vec<FieldNode>,
    pub(crate) depth: usize,
    pub(crate) kind: NodeKind,
}

impl FieldNode {
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Stored name, including a leading anonymous marker if present.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ancestor names joined with the configured separator.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The type as originally spelled.
    pub fn type_text(&self) -> &str {
        &self.type_text
    }

    /// Whether the type may be expanded into nested fields.
    ///
    /// Always true for declarations; the renderer's classifier makes the
    /// final call.
    pub fn is_structure(&self) -> bool {
        self.is_structure
    }

    /// Member fields in declaration order.
    pub fn nested_fields(&self) -> &[FieldNode] {
        &self.nested_fields
    }

    /// Nesting depth; declarations are at depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self.kind, NodeKind::Declaration(_))
    }

    /// Trailing comment of the node itself.
    pub fn trailing_comment(&self) -> &CommentGroup {
        match &self.kind {
            NodeKind::Declaration(meta) => &meta.comment,
            NodeKind::Field(meta) => &meta.comment,
        }
    }

    /// Field metadata, `None` for declarations.
    pub fn field_meta(&self) -> Option<&FieldMeta> {
        match &self.kind {
            NodeKind::Field(meta) => Some(meta),
            NodeKind::Declaration(_) => None,
        }
    }

    /// Find a direct child by stored name.
    pub fn child(&self, name: &str) -> Option<&FieldNode> {
        self.nested_fields.iter().find(|field| field.name == name)
    }
}
