//! Configuration loaded from `gofield.toml`.
//!
//! Every key is optional; an empty document yields [`Config::default`],
//! which reproduces the rewriter's historical behavior.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Result, error::SourceContext};

/// Root of `gofield.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Model building options.
    pub model: ModelConfig,
    /// Type classifier options.
    pub classifier: ClassifierConfig,
}

/// Options for building the field tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Joins ancestor names into a lookup path.
    pub path_separator: String,
    /// Leading character marking a field that renders without a name.
    pub anonymous_marker: char,
    /// Deepest nesting accepted before building fails.
    pub max_depth: usize,
    /// What to do when two nodes compute the same path.
    pub on_path_collision: CollisionPolicy,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path_separator: "/".to_string(),
            anonymous_marker: '!',
            max_depth: 64,
            on_path_collision: CollisionPolicy::Overwrite,
        }
    }
}

/// Handling of duplicate paths in the lookup table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The later node replaces the earlier one; a warning is recorded.
    #[default]
    Overwrite,
    /// Building fails on the first duplicate.
    Reject,
}

/// Options for the type classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Extra spellings that are always rendered verbatim.
    pub opaque_types: Vec<String>,
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, "gofield.toml")
    }
}

impl Config {
    /// Load a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }
}

/// Parse and validate a configuration document.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    config.model.validate(&ctx)?;
    Ok(config)
}

impl ModelConfig {
    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if self.path_separator.is_empty() {
            return Err(ctx.invalid_key("path_separator", "must not be empty"));
        }
        if self.max_depth == 0 {
            return Err(ctx.invalid_key("max_depth", "must be at least 1"));
        }
        if self.anonymous_marker.is_alphanumeric() || self.anonymous_marker == '_' {
            return Err(ctx.invalid_key(
                "anonymous_marker",
                "must not be a character that can start an identifier",
            ));
        }
        Ok(())
    }
}
