//! Field tree construction and struct text rendering for gofield.
//!
//! # Module Organization
//!
//! - [`model`] - Builds the [`FieldNode`](model::FieldNode) tree and its path index from parsed declarations
//! - [`render`] - Serializes field trees back into Go declaration text
//! - [`pipeline`] - Runs build and render over a batch, collecting diagnostics
//!
//! The rendered text is a replacement for a span of the original file, not
//! a formatted Go file: the caller runs it through a formatter after
//! patching.

pub mod model;
pub mod pipeline;
pub mod render;
