//! Classification of type spellings.
//!
//! The renderer expands a structure-eligible node into its fields unless
//! the classifier reports the node's spelling as opaque, in which case the
//! spelling is emitted verbatim.

use std::collections::HashSet;

use crate::ClassifierConfig;

/// Decides whether a type spelling must be rendered as written.
///
/// Implemented for any `Fn(&str) -> bool`, so a closure can stand in for a
/// full rule table:
///
/// ```
/// use gofield_core::TypeClassifier;
///
/// let only_ints = |spelling: &str| spelling == "int";
/// assert!(only_ints.is_opaque("int"));
/// assert!(!only_ints.is_opaque("struct{}"));
/// ```
pub trait TypeClassifier {
    /// Returns true if `spelling` names a type that is never expanded.
    fn is_opaque(&self, spelling: &str) -> bool;
}

impl<F> TypeClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_opaque(&self, spelling: &str) -> bool {
        self(spelling)
    }
}

/// Go rule table.
///
/// Only inline struct literals are expanded. Every other spelling, whether
/// an identifier, a qualified name, a composite such as `*T` or `map[K]V`,
/// or anything this table has no rule for, is kept as written so the
/// declared type is never lost.
#[derive(Debug, Clone, Default)]
pub struct GoTypeClassifier {
    extra: HashSet<String>,
}

impl GoTypeClassifier {
    /// Create a classifier with the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier from configuration.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new().with_opaque(config.opaque_types.iter().cloned())
    }

    /// Treat additional spellings as opaque, struct literals included.
    pub fn with_opaque(mut self, spellings: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra.extend(spellings.into_iter().map(Into::into));
        self
    }
}

impl TypeClassifier for GoTypeClassifier {
    fn is_opaque(&self, spelling: &str) -> bool {
        let spelling = spelling.trim();
        self.extra.contains(spelling) || !is_struct_literal(spelling)
    }
}

/// `struct{...}` or `struct {...}`.
fn is_struct_literal(spelling: &str) -> bool {
    spelling
        .strip_prefix("struct")
        .is_some_and(|rest| rest.trim_start().starts_with('{'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_opaque() {
        let classifier = GoTypeClassifier::new();
        for spelling in ["int", "string", "error", "any", "Config", "_private", "Größe"] {
            assert!(classifier.is_opaque(spelling), "{spelling}");
        }
    }

    #[test]
    fn test_qualified_names_are_opaque() {
        let classifier = GoTypeClassifier::new();
        assert!(classifier.is_opaque("time.Time"));
        assert!(classifier.is_opaque("sync.Mutex"));
    }

    #[test]
    fn test_composites_are_opaque() {
        let classifier = GoTypeClassifier::new();
        for spelling in [
            "*Node",
            "[]byte",
            "[4]int",
            "map[string]int",
            "chan int",
            "<-chan int",
            "chan<- int",
            "func(int) error",
            "interface{}",
            "*struct{X int}",
        ] {
            assert!(classifier.is_opaque(spelling), "{spelling}");
        }
    }

    #[test]
    fn test_unrecognised_spellings_are_opaque() {
        let classifier = GoTypeClassifier::new();
        for spelling in ["(*T)", "list.List[int]", "", "   ", "structure"] {
            assert!(classifier.is_opaque(spelling), "{spelling:?}");
        }
    }

    #[test]
    fn test_struct_literals_are_expandable() {
        let classifier = GoTypeClassifier::new();
        assert!(!classifier.is_opaque("struct{X int}"));
        assert!(!classifier.is_opaque("struct {}"));
        assert!(!classifier.is_opaque("  struct{}  "));
    }

    #[test]
    fn test_configured_spellings() {
        let config = ClassifierConfig {
            opaque_types: vec!["struct{}".to_string()],
        };
        let classifier = GoTypeClassifier::from_config(&config);
        assert!(classifier.is_opaque("struct{}"));
        assert!(!classifier.is_opaque("struct{X int}"));
    }

    #[test]
    fn test_closure_classifier() {
        let never = |_: &str| false;
        assert!(!never.is_opaque("int"));
    }
}
