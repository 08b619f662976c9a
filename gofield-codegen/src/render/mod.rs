//! Rendering field trees back into Go declaration text.
//!
//! - [`StructureRenderer`] - Trait for serializing one node
//! - [`GoStructureRenderer`] - Go implementation driven by a [`TypeClassifier`](gofield_core::TypeClassifier)
//! - [`BatchRenderer`] - Renders every declaration of a batch

mod batch;
mod structure;

pub use batch::{BatchRenderer, RenderedDeclaration};
pub use structure::{GoStructureRenderer, StructureRenderer};
