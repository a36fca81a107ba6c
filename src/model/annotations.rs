//! Annotation Scoping
//!
//! Annotations set on the workload are fanned out to generated objects.
//! To keep each consumer's keys apart, a scope suffix is appended per key
//! on the way out and trimmed on the way back. The root scope has no
//! suffix: parsing it keeps every key that bears no known scope suffix,
//! verbatim.
//!
//! Every non-root scope ends with [`SCOPE_SUFFIX`], which is how the root
//! parse recognizes (and drops) scoped keys without enumerating scopes.

use std::collections::BTreeMap;

/// Terminal marker shared by every non-root scope.
pub const SCOPE_SUFFIX: &str = ".memberset.io";

/// An annotation scope: a per-key suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotationScope(&'static str);

/// The distinguished unsuffixed scope.
pub const ROOT_SCOPE: AnnotationScope = AnnotationScope("");

/// Scope for annotations destined for the underlying workload objects.
pub const WORKLOAD_SCOPE: AnnotationScope = AnnotationScope(".workload.memberset.io");

impl AnnotationScope {
    /// The suffix this scope appends to keys; empty for the root scope.
    pub fn suffix(&self) -> &'static str {
        self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

/// Append `scope`'s suffix to every key of `annotations`.
pub fn add_annotation_scope(
    scope: AnnotationScope,
    annotations: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    annotations
        .iter()
        .map(|(k, v)| (format!("{}{}", k, scope.suffix()), v.clone()))
        .collect()
}

/// Extract the keys belonging to `scope`, suffix trimmed.
///
/// For the root scope: keep every key bearing no known scope suffix,
/// untrimmed. For any other scope: keep exactly the keys bearing that
/// scope's suffix, trimmed. `parse_annotations_of_scope(s,
/// add_annotation_scope(s, m))` is the identity on `m` for non-root `s`.
pub fn parse_annotations_of_scope(
    scope: AnnotationScope,
    scoped_annotations: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut annotations = BTreeMap::new();

    if scope.is_root() {
        for (k, v) in scoped_annotations {
            if k.ends_with(SCOPE_SUFFIX) {
                continue;
            }
            annotations.insert(k.clone(), v.clone());
        }
        return annotations;
    }

    for (k, v) in scoped_annotations {
        if let Some(trimmed) = k.strip_suffix(scope.suffix()) {
            annotations.insert(trimmed.to_string(), v.clone());
        }
    }
    annotations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BTreeMap<String, String> {
        let mut m = BTreeMap::new();
        m.insert("region".to_string(), "eu-1".to_string());
        m.insert("tier".to_string(), "gold".to_string());
        m
    }

    #[test]
    fn test_add_scope_suffixes_every_key() {
        let scoped = add_annotation_scope(WORKLOAD_SCOPE, &sample());
        assert_eq!(scoped.len(), 2);
        assert_eq!(scoped["region.workload.memberset.io"], "eu-1");
        assert_eq!(scoped["tier.workload.memberset.io"], "gold");
    }

    #[test]
    fn test_scope_round_trip_identity() {
        let original = sample();
        let scoped = add_annotation_scope(WORKLOAD_SCOPE, &original);
        let parsed = parse_annotations_of_scope(WORKLOAD_SCOPE, &scoped);
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_root_parse_drops_scoped_keeps_rest_verbatim() {
        let mut mixed = add_annotation_scope(WORKLOAD_SCOPE, &sample());
        mixed.insert("plain".to_string(), "kept".to_string());

        let parsed = parse_annotations_of_scope(ROOT_SCOPE, &mixed);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["plain"], "kept");
    }

    #[test]
    fn test_non_root_parse_ignores_other_keys() {
        let mut scoped = add_annotation_scope(WORKLOAD_SCOPE, &sample());
        scoped.insert("plain".to_string(), "ignored".to_string());

        let parsed = parse_annotations_of_scope(WORKLOAD_SCOPE, &scoped);
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_root_add_is_noop_on_keys() {
        let original = sample();
        let scoped = add_annotation_scope(ROOT_SCOPE, &original);
        assert_eq!(scoped, original);
    }
}
