//! Declaration types handed to gofield by an external Go parser.
//!
//! This crate is the boundary between the parser and the model builder.
//! It carries only what the rewriter needs from a parsed file: type
//! declarations, their fields, the textual spelling of every type
//! expression, and the documentation, tag and comment text attached to
//! each field.
//!
//! # Architecture
//!
//! ```text
//! Go source → parser (external) → gofield-ir → gofield-codegen (model, render) → patcher
//! ```
//!
//! The types are serializable so a parser running out of process can hand
//! declarations over as JSON.

mod comment;
mod decl;
mod types;

pub use comment::CommentGroup;
pub use decl::{FieldDecl, SourceNode, TypeDecl};
pub use types::TypeExpr;
