//! Type expressions as seen by the parser.
//!
//! The rewriter never interprets a type beyond three questions: is it an
//! inline struct literal, is it a name bound to a declaration in the same
//! file, and how was it spelled. [`TypeExpr`] answers exactly those.

use serde::{Deserialize, Serialize};

use crate::decl::FieldDecl;

/// A parsed type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeExpr {
    /// A bare identifier (`int`, `Config`).
    Ident {
        /// The identifier as written.
        name: String,
        /// Whether the parser resolved the name to a declaration in the
        /// same scope. Builtins and unresolved names are not local.
        #[serde(default)]
        local: bool,
    },
    /// An inline struct literal (`struct { ... }`).
    Struct {
        /// Member fields in declaration order.
        fields: Vec<FieldDecl>,
        /// Spelling supplied by the parser, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        spelling: Option<String>,
    },
    /// Any other expression (`*T`, `[]T`, `map[K]V`, `pkg.T`, ...),
    /// known only by its spelling.
    Other {
        /// The expression as written.
        spelling: String,
    },
}

impl TypeExpr {
    /// An identifier with no local binding.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident {
            name: name.into(),
            local: false,
        }
    }

    /// An identifier bound to a declaration in the same scope.
    pub fn local(name: impl Into<String>) -> Self {
        Self::Ident {
            name: name.into(),
            local: true,
        }
    }

    /// An inline struct literal.
    pub fn structure(fields: impl IntoIterator<Item = FieldDecl>) -> Self {
        Self::Struct {
            fields: fields.into_iter().collect(),
            spelling: None,
        }
    }

    /// An opaque expression known only by its spelling.
    pub fn other(spelling: impl Into<String>) -> Self {
        Self::Other {
            spelling: spelling.into(),
        }
    }

    /// Override the spelling of a struct literal.
    ///
    /// Has no effect on identifiers, whose spelling is their name.
    pub fn with_spelling(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            Self::Struct { spelling, .. } => *spelling = Some(text.into()),
            Self::Other { spelling } => *spelling = text.into(),
            Self::Ident { .. } => {}
        }
        self
    }

    /// The literal spelling of this type.
    ///
    /// Struct literals without a parser-supplied spelling are spelled the
    /// way `go/types.ExprString` prints them: `struct{A int; B string}`.
    pub fn spelling(&self) -> String {
        match self {
            Self::Ident { name, .. } => name.clone(),
            Self::Other { spelling } => spelling.clone(),
            Self::Struct {
                spelling: Some(spelling),
                ..
            } => spelling.clone(),
            Self::Struct {
                fields,
                spelling: None,
            } => {
                let members: Vec<String> = fields
                    .iter()
                    .map(|field| {
                        let ty = field.ty.spelling();
                        if field.names.is_empty() {
                            ty
                        } else {
                            format!("{} {}", field.names.join(", "), ty)
                        }
                    })
                    .collect();
                format!("struct{{{}}}", members.join("; "))
            }
        }
    }

    /// Member fields if this is an inline struct literal.
    pub fn struct_fields(&self) -> Option<&[FieldDecl]> {
        match self {
            Self::Struct { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Returns true for inline struct literals.
    pub fn is_struct_literal(&self) -> bool {
        matches!(self, Self::Struct { .. })
    }

    /// Returns true for identifiers resolved to a local declaration.
    pub fn is_local_ident(&self) -> bool {
        matches!(self, Self::Ident { local: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_spelling() {
        assert_eq!(TypeExpr::ident("int").spelling(), "int");
        assert_eq!(TypeExpr::local("Config").spelling(), "Config");
    }

    #[test]
    fn test_struct_spelling() {
        let ty = TypeExpr::structure([
            FieldDecl::new("A", TypeExpr::ident("int")),
            FieldDecl::new("B", TypeExpr::ident("string")).name("C"),
            FieldDecl::embedded(TypeExpr::local("Base")),
        ]);
        assert_eq!(ty.spelling(), "struct{A int; B, C string; Base}");
        assert_eq!(TypeExpr::structure([]).spelling(), "struct{}");
    }

    #[test]
    fn test_spelling_override() {
        let ty = TypeExpr::structure([]).with_spelling("struct {}");
        assert_eq!(ty.spelling(), "struct {}");

        let ident = TypeExpr::ident("int").with_spelling("ignored");
        assert_eq!(ident.spelling(), "int");
    }

    #[test]
    fn test_classification_helpers() {
        assert!(TypeExpr::structure([]).is_struct_literal());
        assert!(TypeExpr::local("T").is_local_ident());
        assert!(!TypeExpr::ident("int").is_local_ident());
        assert!(TypeExpr::other("*T").struct_fields().is_none());
    }

    #[test]
    fn test_deserialize_tagged() {
        let ty: TypeExpr = serde_json::from_str(r#"{"kind":"ident","name":"int"}"#).unwrap();
        assert_eq!(ty, TypeExpr::ident("int"));
    }
}
