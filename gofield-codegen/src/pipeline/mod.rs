//! Build-then-render pipeline.
//!
//! [`Pipeline`] builds the field model for a batch of declarations,
//! renders every declaration, and returns the rendered text together with
//! the model and the diagnostics collected on the way.
//!
//! # Example
//!
//! ```
//! use gofield_codegen::pipeline::Pipeline;
//! use gofield_core::Config;
//! use gofield_ir::{FieldDecl, TypeDecl, TypeExpr};
//!
//! let decls = [TypeDecl::structure("A", [FieldDecl::new("X", TypeExpr::ident("int"))])];
//! let output = Pipeline::new(Config::default()).run(&decls).unwrap();
//!
//! assert_eq!(output.rendered[0].text, "A struct{\nX int\n}");
//! assert!(!output.has_warnings());
//! ```

mod diagnostic;
mod runner;

pub use diagnostic::{BUILD_PHASE, Diagnostic, Severity};
pub use runner::{Output, Pipeline, decode_declarations};
