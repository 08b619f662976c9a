//! Core types for the gofield struct rewriter.
//!
//! - [`TypeClassifier`] decides which type spellings are rendered verbatim
//!   instead of being expanded into nested fields.
//! - [`Config`] holds the tunables read from `gofield.toml`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod classifier;
mod config;
mod error;

pub use classifier::{GoTypeClassifier, TypeClassifier};
pub use config::{ClassifierConfig, CollisionPolicy, Config, ModelConfig};
pub use error::{Error, Result, SourceContext};
