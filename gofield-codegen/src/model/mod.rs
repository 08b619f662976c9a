//! The field tree and its path index.
//!
//! - [`ModelBuilder`] - Turns parsed declarations into [`FieldNode`]s
//! - [`Model`] - Owns the built roots together with the [`PathIndex`]
//! - [`ModelError`] - Categorized build failures

mod builder;
mod error;
mod index;
mod node;

pub use builder::{Model, ModelBuilder, build_model};
pub use error::{ModelError, Result};
pub use index::PathIndex;
pub use node::{DeclarationMeta, FieldMeta, FieldNode, NodeId, NodeKind};
