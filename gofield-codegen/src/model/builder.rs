//! Model construction.
//!
//! Construction is a top-down recursive descent from each declaration.
//! Every named node registers its path as soon as it is created, before its
//! own fields are built, so paths appear in the index in source order.

use std::collections::HashMap;

use gofield_core::{CollisionPolicy, ModelConfig};
use gofield_ir::{FieldDecl, SourceNode, TypeDecl, TypeExpr};

use super::{
    DeclarationMeta, FieldMeta, FieldNode, ModelError, NodeId, NodeKind, PathIndex, Result,
};
use crate::pipeline::{BUILD_PHASE, Diagnostic};

/// Builds [`FieldNode`] trees from parsed declarations.
///
/// # Example
///
/// ```
/// use gofield_codegen::model::ModelBuilder;
/// use gofield_core::ModelConfig;
/// use gofield_ir::{FieldDecl, TypeDecl, TypeExpr};
///
/// let decl = TypeDecl::structure("A", [FieldDecl::new("X", TypeExpr::ident("int"))]);
///
/// let mut builder = ModelBuilder::new(ModelConfig::default());
/// let root = builder.declare(&decl).unwrap().unwrap();
/// let model = builder.finish(vec![root]);
///
/// assert_eq!(model.lookup("A/X").map(|node| node.type_text()), Some("int"));
/// ```
#[derive(Debug)]
pub struct ModelBuilder {
    config: ModelConfig,
    index: PathIndex,
    diagnostics: Vec<Diagnostic>,
    next_id: u32,
}

impl ModelBuilder {
    /// A `max_depth` of zero would reject every field, so it is raised to 1.
    /// Configs loaded from TOML never reach this: zero is rejected there.
    pub fn new(mut config: ModelConfig) -> Self {
        if config.max_depth == 0 {
            tracing::warn!("max_depth of 0 raised to 1");
            config.max_depth = 1;
        }
        Self {
            config,
            index: PathIndex::new(),
            diagnostics: Vec::new(),
            next_id: 0,
        }
    }

    /// Build one node from a parsed declaration or field.
    ///
    /// Fields are built below `parent` and fail with
    /// [`ModelError::MissingParent`] without one. Declarations ignore
    /// `parent`. Returns `Ok(None)` for inputs without a usable name.
    pub fn build(
        &mut self,
        node: SourceNode<'_>,
        parent: Option<&FieldNode>,
    ) -> Result<Option<FieldNode>> {
        match node {
            SourceNode::Type(decl) => self.declare(decl),
            SourceNode::Field(field) => {
                let parent = parent.ok_or_else(|| ModelError::MissingParent {
                    field: field.primary_name().unwrap_or_default().to_string(),
                })?;
                self.build_field(field, parent.path(), parent.depth() + 1)
            }
        }
    }

    /// Build the tree for a top-level declaration.
    pub fn declare(&mut self, decl: &TypeDecl) -> Result<Option<FieldNode>> {
        if decl.name.is_empty() {
            return Ok(None);
        }

        let path = decl.name.clone();
        let id = self.register(&path)?;
        let nested_fields = self.build_members(&decl.ty, &path, 1)?;

        tracing::debug!(
            declaration = %decl.name,
            fields = nested_fields.len(),
            "built declaration"
        );

        Ok(Some(FieldNode {
            id,
            name: decl.name.clone(),
            path,
            type_text: decl.ty.spelling(),
            // Whether a declaration really expands is decided at render time.
            is_structure: true,
            nested_fields,
            depth: 0,
            kind: NodeKind::Declaration(DeclarationMeta {
                comment: decl.comment.clone(),
            }),
        }))
    }

    /// Consume the builder, pairing its index with the built roots.
    pub fn finish(self, roots: Vec<FieldNode>) -> Model {
        let mut locations = HashMap::new();
        for (position, root) in roots.iter().enumerate() {
            record_locations(root, vec![position], &mut locations);
        }

        Model {
            roots,
            index: self.index,
            locations,
            diagnostics: self.diagnostics,
        }
    }

    /// Diagnostics recorded so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    fn build_field(
        &mut self,
        field: &FieldDecl,
        parent_path: &str,
        depth: usize,
    ) -> Result<Option<FieldNode>> {
        let name = match field.primary_name() {
            Some(name) if !name.is_empty() => name,
            _ => {
                let ty = field.ty.spelling();
                tracing::trace!(parent = %parent_path, ty = %ty, "dropping unnamed field");
                self.diagnostics.push(
                    Diagnostic::info(BUILD_PHASE, format!("unnamed field of type '{ty}' dropped"))
                        .at(parent_path),
                );
                return Ok(None);
            }
        };

        let path = self.join_path(parent_path, name);
        if depth > self.config.max_depth {
            return Err(ModelError::DepthExceeded {
                path,
                limit: self.config.max_depth,
            });
        }

        let id = self.register(&path)?;
        let is_structure = field.ty.is_struct_literal() || field.ty.is_local_ident();
        let nested_fields = self.build_members(&field.ty, &path, depth + 1)?;

        tracing::trace!(path = %path, is_structure, "built field");

        Ok(Some(FieldNode {
            id,
            name: name.to_string(),
            path,
            type_text: field.ty.spelling(),
            is_structure,
            nested_fields,
            depth,
            kind: NodeKind::Field(FieldMeta {
                doc: field.doc.clone(),
                tag: field.tag.clone(),
                comment: field.comment.clone(),
            }),
        }))
    }

    /// Build the members of an inline struct literal, skipping unnamed ones.
    fn build_members(
        &mut self,
        ty: &TypeExpr,
        parent_path: &str,
        depth: usize,
    ) -> Result<Vec<FieldNode>> {
        let Some(fields) = ty.struct_fields() else {
            return Ok(Vec::new());
        };

        let mut nested = Vec::with_capacity(fields.len());
        for field in fields {
            if let Some(node) = self.build_field(field, parent_path, depth)? {
                nested.push(node);
            }
        }
        Ok(nested)
    }

    fn join_path(&self, parent_path: &str, name: &str) -> String {
        if parent_path.is_empty() {
            name.to_string()
        } else {
            format!("{}{}{}", parent_path, self.config.path_separator, name)
        }
    }

    fn register(&mut self, path: &str) -> Result<NodeId> {
        if self.index.contains(path) && self.config.on_path_collision == CollisionPolicy::Reject {
            return Err(ModelError::PathCollision {
                path: path.to_string(),
            });
        }

        let id = NodeId(self.next_id);
        self.next_id += 1;

        if self.index.insert(path, id).is_some() {
            tracing::warn!(path = %path, "path registered twice; earlier node is no longer indexed");
            self.diagnostics.push(
                Diagnostic::warning(
                    BUILD_PHASE,
                    format!("path '{path}' overwritten; the earlier node is unreachable by path"),
                )
                .at(path),
            );
        }
        Ok(id)
    }
}

fn record_locations(
    node: &FieldNode,
    location: Vec<usize>,
    out: &mut HashMap<NodeId, Vec<usize>>,
) {
    for (position, child) in node.nested_fields.iter().enumerate() {
        let mut child_location = location.clone();
        child_location.push(position);
        record_locations(child, child_location, out);
    }
    out.insert(node.id, location);
}

/// Build a model from a batch of declarations.
///
/// Declarations without a name produce no root.
pub fn build_model(decls: &[TypeDecl], config: &ModelConfig) -> Result<Model> {
    let mut builder = ModelBuilder::new(config.clone());
    let mut roots = Vec::with_capacity(decls.len());
    for decl in decls {
        if let Some(root) = builder.declare(decl)? {
            roots.push(root);
        }
    }
    Ok(builder.finish(roots))
}

/// Built field trees with their path index.
///
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct Model {
    roots: Vec<FieldNode>,
    index: PathIndex,
    /// Child positions from the root list down to each node.
    locations: HashMap<NodeId, Vec<usize>>,
    diagnostics: Vec<Diagnostic>,
}

impl Model {
    /// Top-level nodes in input order.
    pub fn roots(&self) -> &[FieldNode] {
        &self.roots
    }

    pub fn index(&self) -> &PathIndex {
        &self.index
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Resolve a path to the node currently registered under it.
    ///
    /// Returns `None` for unknown paths and for nodes that were built but
    /// not handed to [`ModelBuilder::finish`].
    pub fn lookup(&self, path: &str) -> Option<&FieldNode> {
        let id = self.index.get(path)?;
        let (first, rest) = self.locations.get(&id)?.split_first()?;
        rest.iter()
            .try_fold(self.roots.get(*first)?, |node, &position| {
                node.nested_fields.get(position)
            })
    }

    pub fn into_roots(self) -> Vec<FieldNode> {
        self.roots
    }
}
