//! Rendering a batch of declarations.

use super::StructureRenderer;
use crate::model::FieldNode;

/// Rendered replacement text for one top-level declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDeclaration {
    /// Declaration name.
    pub name: String,
    /// Declaration path in the model.
    pub path: String,
    /// Unformatted replacement for the declaration's type.
    pub text: String,
}

impl RenderedDeclaration {
    /// The text as the byte buffer handed to the patcher.
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.text.into_bytes()
    }
}

/// Applies a [`StructureRenderer`] to every top-level node of a batch.
#[derive(Debug, Clone)]
pub struct BatchRenderer<R> {
    renderer: R,
}

impl<R: StructureRenderer> BatchRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Render each root, in input order.
    pub fn render_all(&self, roots: &[FieldNode]) -> Vec<RenderedDeclaration> {
        roots
            .iter()
            .map(|root| {
                let text = self.renderer.render_structure(root);
                tracing::debug!(
                    declaration = %root.name(),
                    bytes = text.len(),
                    "rendered declaration"
                );
                RenderedDeclaration {
                    name: root.name().to_string(),
                    path: root.path().to_string(),
                    text,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use gofield_core::{GoTypeClassifier, ModelConfig};
    use gofield_ir::{FieldDecl, TypeDecl, TypeExpr};

    use super::*;
    use crate::{model::build_model, render::GoStructureRenderer};

    #[test]
    fn test_render_all_keeps_order() {
        let model = build_model(
            &[
                TypeDecl::structure("B", [FieldDecl::new("X", TypeExpr::ident("int"))]),
                TypeDecl::new("ID", TypeExpr::ident("string")),
                TypeDecl::structure("A", []),
            ],
            &ModelConfig::default(),
        )
        .unwrap();

        let classifier = GoTypeClassifier::new();
        let batch = BatchRenderer::new(GoStructureRenderer::new(&classifier));
        let rendered = batch.render_all(model.roots());

        let names: Vec<_> = rendered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B", "ID", "A"]);
        assert_eq!(rendered[0].as_bytes(), b"B struct{\nX int\n}");
        assert_eq!(rendered[1].text, "string");
        assert_eq!(rendered[2].clone().into_bytes(), b"A struct{}".to_vec());
    }

    #[test]
    fn test_render_all_is_deterministic() {
        let model = build_model(
            &[TypeDecl::structure(
                "A",
                [
                    FieldDecl::new("X", TypeExpr::ident("int")).tag("`x`"),
                    FieldDecl::new("Y", TypeExpr::structure([])).comment("// y"),
                ],
            )],
            &ModelConfig::default(),
        )
        .unwrap();

        let classifier = GoTypeClassifier::new();
        let batch = BatchRenderer::new(GoStructureRenderer::new(&classifier));
        assert_eq!(batch.render_all(model.roots()), batch.render_all(model.roots()));
    }
}
