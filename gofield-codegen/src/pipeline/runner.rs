//! Pipeline orchestrator.

use eyre::{Result, WrapErr};
use gofield_core::{Config, GoTypeClassifier, TypeClassifier};
use gofield_ir::TypeDecl;

use super::Diagnostic;
use crate::{
    model::{Model, build_model},
    render::{BatchRenderer, GoStructureRenderer, RenderedDeclaration},
};

/// Runs model building and rendering over a batch of declarations.
///
/// Uses [`GoTypeClassifier`] unless another classifier is supplied with
/// [`Pipeline::classifier`].
#[derive(Debug, Clone)]
pub struct Pipeline<C = GoTypeClassifier> {
    config: Config,
    classifier: C,
}

impl Pipeline<GoTypeClassifier> {
    /// Create a pipeline with the Go classifier configured from `config`.
    pub fn new(config: Config) -> Self {
        let classifier = GoTypeClassifier::from_config(&config.classifier);
        Self { config, classifier }
    }
}

impl Default for Pipeline<GoTypeClassifier> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<C: TypeClassifier> Pipeline<C> {
    /// Replace the classifier.
    pub fn classifier<D: TypeClassifier>(self, classifier: D) -> Pipeline<D> {
        Pipeline {
            config: self.config,
            classifier,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build and render `decls`.
    ///
    /// # Errors
    ///
    /// Fails if the model cannot be built (depth limit, or a path collision
    /// under the `reject` policy).
    pub fn run(&self, decls: &[TypeDecl]) -> Result<Output> {
        let model = build_model(decls, &self.config.model)
            .wrap_err("failed to build the field model")?;

        let renderer = GoStructureRenderer::from_config(&self.classifier, &self.config.model);
        let rendered = BatchRenderer::new(renderer).render_all(model.roots());

        for diagnostic in model.diagnostics() {
            tracing::debug!(%diagnostic, "build diagnostic");
        }

        Ok(Output { model, rendered })
    }

    /// Decode declarations from JSON and run them.
    pub fn run_json(&self, json: &str) -> Result<Output> {
        let decls = decode_declarations(json)?;
        self.run(&decls)
    }
}

/// Decode a JSON array of declarations produced by an external parser.
pub fn decode_declarations(json: &str) -> Result<Vec<TypeDecl>> {
    serde_json::from_str(json).wrap_err("failed to decode declarations")
}

/// Result of a pipeline run.
#[derive(Debug, Clone)]
pub struct Output {
    /// The built model.
    pub model: Model,
    /// Rendered text per declaration, in input order.
    pub rendered: Vec<RenderedDeclaration>,
}

impl Output {
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.model.diagnostics()
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics().iter().any(|d| d.severity.is_warning())
    }

    /// Rendered text for the declaration named `name`.
    ///
    /// With duplicate names, the first one wins.
    pub fn text_for(&self, name: &str) -> Option<&str> {
        self.rendered
            .iter()
            .find(|rendered| rendered.name == name)
            .map(|rendered| rendered.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use gofield_core::CollisionPolicy;
    use gofield_ir::{FieldDecl, TypeExpr};

    use super::*;

    #[test]
    fn test_run_reports_collision_warning() {
        let decls = [
            TypeDecl::structure("A", [FieldDecl::new("X", TypeExpr::ident("int"))]),
            TypeDecl::structure("A", []),
        ];
        let output = Pipeline::new(Config::default()).run(&decls).unwrap();

        assert!(output.has_warnings());
        assert_eq!(output.rendered.len(), 2);
        assert_eq!(output.text_for("A"), Some("A struct{\nX int\n}"));
    }

    #[test]
    fn test_run_wraps_model_errors() {
        let mut config = Config::default();
        config.model.on_path_collision = CollisionPolicy::Reject;
        let decls = [TypeDecl::structure("A", []), TypeDecl::structure("A", [])];

        let err = Pipeline::new(config).run(&decls).unwrap_err();
        assert_eq!(err.to_string(), "failed to build the field model");
        assert_eq!(
            err.root_cause().to_string(),
            "path 'A' is already taken by another node"
        );
    }

    #[test]
    fn test_configured_opaque_types() {
        let config: Config = "[classifier]\nopaque_types = [\"struct{}\"]\n"
            .parse()
            .unwrap();
        let decls = [TypeDecl::structure(
            "A",
            [FieldDecl::new("Done", TypeExpr::structure([]))],
        )];

        let output = Pipeline::new(config).run(&decls).unwrap();
        assert_eq!(output.rendered[0].text, "A struct{\nDone struct{}\n}");
    }

    #[test]
    fn test_custom_classifier() {
        let decls = [TypeDecl::new("ID", TypeExpr::ident("int64"))];
        let output = Pipeline::new(Config::default())
            .classifier(|_: &str| false)
            .run(&decls)
            .unwrap();
        assert_eq!(output.rendered[0].text, "ID struct{}");
    }

    #[test]
    fn test_bad_json() {
        let err = Pipeline::new(Config::default()).run_json("{").unwrap_err();
        assert_eq!(err.to_string(), "failed to decode declarations");
    }
}
