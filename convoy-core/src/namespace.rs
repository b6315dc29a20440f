//! Namespace resolution
//!
//! A repository is addressed by (name, namespace). The effective namespace
//! is the explicit override when one is given, otherwise the ambient
//! context namespace.

/// Resolve the effective namespace for addressing a repository.
///
/// A non-empty `override_namespace` wins unconditionally; otherwise the
/// context namespace is used. Existence is not checked here; the fetch
/// call fails with `NotFound` if the namespace or resource does not exist.
pub fn resolve_namespace(context_namespace: &str, override_namespace: &str) -> String {
    if override_namespace.is_empty() {
        context_namespace.to_string()
    } else {
        override_namespace.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins_over_context() {
        assert_eq!(resolve_namespace("namespace", "optnamespace"), "optnamespace");
    }

    #[test]
    fn test_empty_override_falls_back_to_context() {
        assert_eq!(resolve_namespace("namespace", ""), "namespace");
    }

    #[test]
    fn test_override_wins_even_when_context_is_empty() {
        assert_eq!(resolve_namespace("", "optnamespace"), "optnamespace");
    }
}
