//! Stable, hierarchical permalinks.
//!
//! `permalink(e) = permalink(parent(e)) + "/" + sanitize(own_name(e))`, or
//! just the sanitized own name at the top of a tree. Classes form a DAG, so
//! their permalink is the qualified name with `::` turned into path
//! separators and no parent is consulted.

use indexmap::IndexMap;
use tracing::warn;

use super::hierarchy::Hierarchy;
use crate::base::CompoundId;
use crate::base::constants::{ANONYMOUS_MARKER, PATH_SEPARATOR, SCOPE_SEPARATOR};
use crate::schema::{CompoundDef, CompoundKind};

/// Characters removed from permalinks.
const DROPPED: &[char] = &['&', '(', ')', '*', '\'', '"', '@', '~', '[', ']'];

/// Characters turned into dashes.
const DASHED: &[char] = &[' ', '.', '<', '>', ','];

/// Lower-case, URL-safe form of a name. `/` is kept as a path separator.
pub fn sanitize(name: &str) -> String {
    let mut mapped = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if DROPPED.contains(&c) {
            continue;
        }
        if DASHED.contains(&c) {
            if !mapped.ends_with('-') {
                mapped.push('-');
            }
            continue;
        }
        if c == '-' && mapped.ends_with('-') {
            continue;
        }
        mapped.push(c);
    }

    mapped
        .split(PATH_SEPARATOR)
        .map(|segment| segment.trim_matches('-'))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Returns true for names Doxygen gives to unnamed entities.
pub fn is_anonymous(name: &str) -> bool {
    name.contains(ANONYMOUS_MARKER) || name.contains("anonymous_namespace{")
}

/// Returns true for compounds that are unnamed or nested in an unnamed one.
pub fn is_hidden(
    id: &CompoundId,
    defs: &IndexMap<CompoundId, CompoundDef>,
    hierarchy: &Hierarchy,
) -> bool {
    let mut current = Some(id);
    // Bounded walk; the tree may contain cycles.
    for _ in 0..=defs.len() {
        let Some(id) = current else {
            return false;
        };
        if defs.get(id).is_some_and(|def| is_anonymous(&def.compound_name)) {
            return true;
        }
        current = hierarchy.parent_of(id.as_str());
    }
    false
}

/// The part of a compound's name that contributes to its permalink.
pub fn own_name(def: &CompoundDef) -> String {
    let name = def.compound_name.as_str();
    match def.kind {
        CompoundKind::Namespace => name
            .rsplit(SCOPE_SEPARATOR)
            .next()
            .unwrap_or(name)
            .to_string(),
        CompoundKind::Dir | CompoundKind::File => name
            .trim_end_matches(PATH_SEPARATOR)
            .rsplit(PATH_SEPARATOR)
            .next()
            .unwrap_or(name)
            .to_string(),
        kind if kind.is_class_like() => name.replace(SCOPE_SEPARATOR, "/"),
        _ => name.to_string(),
    }
}

/// Compute the permalink of every compound, `None` where there is none.
pub fn compute(
    defs: &IndexMap<CompoundId, CompoundDef>,
    hierarchy: &Hierarchy,
) -> IndexMap<CompoundId, Option<String>> {
    let mut memo = IndexMap::with_capacity(defs.len());
    for id in defs.keys() {
        let mut visiting = Vec::new();
        resolve(id, defs, hierarchy, &mut memo, &mut visiting);
    }
    memo
}

fn resolve(
    id: &CompoundId,
    defs: &IndexMap<CompoundId, CompoundDef>,
    hierarchy: &Hierarchy,
    memo: &mut IndexMap<CompoundId, Option<String>>,
    visiting: &mut Vec<CompoundId>,
) -> Option<String> {
    if let Some(known) = memo.get(id) {
        return known.clone();
    }
    let def = defs.get(id)?;
    if visiting.contains(id) {
        warn!("Cycle in compound tree at {}", id);
        return None;
    }

    let permalink = if is_anonymous(&def.compound_name) {
        None
    } else {
        let own = sanitize(&own_name(def));
        let parent = if def.kind.is_class_like() {
            None
        } else {
            hierarchy.parent_of(id.as_str()).cloned()
        };
        match (own.is_empty(), parent) {
            (true, _) => {
                warn!("Compound {} has no usable name for a permalink", id);
                None
            }
            (false, None) => Some(own),
            (false, Some(parent)) => {
                visiting.push(id.clone());
                let base = resolve(&parent, defs, hierarchy, memo, visiting);
                visiting.pop();
                base.map(|base| format!("{base}/{own}"))
            }
        }
    };

    memo.insert(id.clone(), permalink.clone());
    permalink
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Widget", "widget")]
    #[case("ns/Widget<int, 3>", "ns/widget-int-3")]
    #[case("operator()", "operator")]
    #[case("Getting Started.md", "getting-started-md")]
    #[case("a -- b", "a-b")]
    #[case("std::vector<T*>&", "std::vector-t")]
    #[case("-lead/-trail-/", "lead/trail")]
    fn test_sanitize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize(input), expected);
    }

    #[test]
    fn test_anonymous_names() {
        assert!(is_anonymous("ns::@0"));
        assert!(is_anonymous("anonymous_namespace{foo.cpp}"));
        assert!(!is_anonymous("ns::Widget"));
    }
}
