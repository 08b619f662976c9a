//! Type and field declarations.
//!
//! Both kinds are built with a small fluent API so a parser adapter (or a
//! test) can describe a declaration in one expression:
//!
//! ```
//! use gofield_ir::{FieldDecl, TypeDecl, TypeExpr};
//!
//! let decl = TypeDecl::structure(
//!     "User",
//!     [
//!         FieldDecl::new("ID", TypeExpr::ident("int64")).tag("`json:\"id\"`"),
//!         FieldDecl::new("Name", TypeExpr::ident("string")).doc("// Display name."),
//!     ],
//! );
//! assert_eq!(decl.ty.struct_fields().map(|f| f.len()), Some(2));
//! ```

use serde::{Deserialize, Serialize};

use crate::{comment::CommentGroup, types::TypeExpr};

/// A top-level type declaration (`type Name <type>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Declared identifier.
    pub name: String,
    /// The declared type.
    pub ty: TypeExpr,
    /// Documentation above the declaration.
    #[serde(default)]
    pub doc: CommentGroup,
    /// Trailing comment on the declaration line.
    #[serde(default)]
    pub comment: CommentGroup,
}

impl TypeDecl {
    /// Create a declaration of any type.
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: CommentGroup::new(),
            comment: CommentGroup::new(),
        }
    }

    /// Create a struct declaration from its fields.
    pub fn structure(name: impl Into<String>, fields: impl IntoIterator<Item = FieldDecl>) -> Self {
        Self::new(name, TypeExpr::structure(fields))
    }

    /// Add a documentation line.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line);
        self
    }

    /// Add a trailing comment line.
    pub fn comment(mut self, line: impl Into<String>) -> Self {
        self.comment.push(line);
        self
    }
}

/// A field inside a struct literal.
///
/// `names` is empty for embedded fields (`sync.Mutex`) and holds several
/// identifiers for grouped fields (`X, Y int`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Field identifiers as written.
    #[serde(default)]
    pub names: Vec<String>,
    /// Field type.
    pub ty: TypeExpr,
    /// Documentation lines above the field.
    #[serde(default)]
    pub doc: CommentGroup,
    /// Raw tag literal, backquotes included.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Trailing comment on the field line.
    #[serde(default)]
    pub comment: CommentGroup,
}

impl FieldDecl {
    /// Create a named field.
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            names: vec![name.into()],
            ty,
            doc: CommentGroup::new(),
            tag: None,
            comment: CommentGroup::new(),
        }
    }

    /// Create an embedded field with no identifier.
    pub fn embedded(ty: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            ty,
            doc: CommentGroup::new(),
            tag: None,
            comment: CommentGroup::new(),
        }
    }

    /// Add another identifier sharing this field's type.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add a documentation line.
    pub fn doc(mut self, line: impl Into<String>) -> Self {
        self.doc.push(line);
        self
    }

    /// Set the tag literal.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Add a trailing comment line.
    pub fn comment(mut self, line: impl Into<String>) -> Self {
        self.comment.push(line);
        self
    }

    /// The identifier the rewriter keys this field by: the first one.
    pub fn primary_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}

/// One parsed node handed to the model builder.
#[derive(Debug, Clone, Copy)]
pub enum SourceNode<'a> {
    /// A top-level type declaration.
    Type(&'a TypeDecl),
    /// A member field of a struct literal.
    Field(&'a FieldDecl),
}

impl<'a> From<&'a TypeDecl> for SourceNode<'a> {
    fn from(decl: &'a TypeDecl) -> Self {
        SourceNode::Type(decl)
    }
}

impl<'a> From<&'a FieldDecl> for SourceNode<'a> {
    fn from(field: &'a FieldDecl) -> Self {
        SourceNode::Field(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_builder() {
        let field = FieldDecl::new("X", TypeExpr::ident("int"))
            .name("Y")
            .doc("// coordinates")
            .tag("`json:\"x\"`")
            .comment("// in pixels");

        assert_eq!(field.primary_name(), Some("X"));
        assert_eq!(field.names, ["X", "Y"]);
        assert_eq!(field.doc.lines(), ["// coordinates"]);
        assert_eq!(field.tag.as_deref(), Some("`json:\"x\"`"));
        assert_eq!(field.comment.len(), 1);
    }

    #[test]
    fn test_embedded_field_has_no_name() {
        let field = FieldDecl::embedded(TypeExpr::other("sync.Mutex"));
        assert_eq!(field.primary_name(), None);
    }

    #[test]
    fn test_decl_from_json() {
        let decl: TypeDecl = serde_json::from_str(
            r#"{
                "name": "A",
                "ty": {"kind": "struct", "fields": [
                    {"names": ["X"], "ty": {"kind": "ident", "name": "int"}, "tag": "`json:\"x\"`"}
                ]},
                "comment": ["// trailing"]
            }"#,
        )
        .unwrap();

        assert_eq!(decl.name, "A");
        assert_eq!(decl.comment.lines(), ["// trailing"]);
        let fields = decl.ty.struct_fields().unwrap();
        assert_eq!(fields[0].tag.as_deref(), Some("`json:\"x\"`"));
        assert!(fields[0].doc.is_empty());
    }

    #[test]
    fn test_source_node_from() {
        let decl = TypeDecl::new("Alias", TypeExpr::ident("int"));
        assert!(matches!(SourceNode::from(&decl), SourceNode::Type(_)));
    }
}
