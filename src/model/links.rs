//! Cross-reference resolver.
//!
//! Maps compound ids to page URLs once the permalinks are known, and turns
//! `(refid, kindref)` pairs into hrefs relative to the page being rendered.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::collections::{CollectionKind, page_url};
use crate::base::{CompoundId, split_member_id};
use crate::error::{DoxyError, Result};
use crate::schema::RefKind;

/// Where a compound's page lives, if it has one.
#[derive(Clone, Debug, PartialEq, Eq)]
struct LinkTarget {
    collection: CollectionKind,
    url: Option<String>,
    /// Unnamed, or nested in an unnamed compound; never gets a page.
    hidden: bool,
}

/// Page URLs of every registered compound.
#[derive(Clone, Debug, Default)]
pub struct LinkIndex {
    targets: FxHashMap<CompoundId, LinkTarget>,
}

impl LinkIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a compound. `permalink` is `None` for compounds without a
    /// page.
    pub fn insert(
        &mut self,
        id: CompoundId,
        collection: CollectionKind,
        base_route: &str,
        permalink: Option<&str>,
    ) {
        let url = permalink.map(|p| page_url(base_route, collection, p));
        self.targets.insert(id, LinkTarget { collection, url, hidden: false });
    }

    /// Register a compound that is known but never gets a page, such as an
    /// anonymous namespace. References to it render as plain text.
    pub fn insert_hidden(&mut self, id: CompoundId, collection: CollectionKind) {
        self.targets.insert(
            id,
            LinkTarget {
                collection,
                url: None,
                hidden: true,
            },
        );
    }

    pub fn contains(&self, id: &str) -> bool {
        self.targets.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn collection_of(&self, id: &str) -> Option<CollectionKind> {
        self.targets.get(id).map(|t| t.collection)
    }

    /// Page URL of a compound; `None` if unknown or without a page.
    pub fn page_url(&self, id: &str) -> Option<&str> {
        self.targets.get(id).and_then(|t| t.url.as_deref())
    }

    /// Resolve a reference made from the page of `current`.
    ///
    /// - unknown target: `Ok(None)`, logged as dangling;
    /// - hidden target: `Ok(None)`, logged;
    /// - any other target without a page: `Err(MissingPermalink)`;
    /// - member on the current page: `#anchor`;
    /// - member elsewhere: `{page}/#anchor`.
    pub fn resolve(&self, refid: &str, kind: RefKind, current: Option<&str>) -> Result<Option<String>> {
        match kind {
            RefKind::Compound => self.compound_url(refid, refid),
            RefKind::Member => {
                let Some((page, anchor)) = split_member_id(refid) else {
                    warn!("Dangling member reference {}", refid);
                    return Ok(None);
                };
                if current == Some(page) {
                    return Ok(Some(format!("#{anchor}")));
                }
                Ok(self
                    .compound_url(page, refid)?
                    .map(|url| format!("{url}/#{anchor}")))
            }
        }
    }

    fn compound_url(&self, id: &str, refid: &str) -> Result<Option<String>> {
        match self.targets.get(id) {
            None => {
                warn!("Dangling reference {}", refid);
                Ok(None)
            }
            Some(LinkTarget { hidden: true, .. }) => {
                warn!("Reference {} points into unnamed compound {}", refid, id);
                Ok(None)
            }
            Some(LinkTarget { url: None, .. }) => Err(DoxyError::MissingPermalink(id.to_string())),
            Some(LinkTarget { url: Some(url), .. }) => Ok(Some(url.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> LinkIndex {
        let mut links = LinkIndex::new();
        links.insert("classA".into(), CollectionKind::Classes, "api", Some("a"));
        links.insert("namespacens".into(), CollectionKind::Namespaces, "api", Some("ns"));
        links.insert("namespacens_1_1@0".into(), CollectionKind::Namespaces, "api", None);
        links.insert_hidden("namespaceanonymous_0d1".into(), CollectionKind::Namespaces);
        links
    }

    #[test]
    fn test_same_page_member_reference() {
        let links = index();
        assert_eq!(
            links
                .resolve("classA_1_1methodB", RefKind::Member, Some("classA"))
                .unwrap(),
            Some("#methodB".to_string())
        );
    }

    #[test]
    fn test_other_page_member_reference() {
        let links = index();
        assert_eq!(
            links
                .resolve("classA_1a12ef", RefKind::Member, Some("namespacens"))
                .unwrap(),
            Some("/api/classes/a/#a12ef".to_string())
        );
    }

    #[test]
    fn test_compound_reference() {
        let links = index();
        assert_eq!(
            links.resolve("namespacens", RefKind::Compound, None).unwrap(),
            Some("/api/namespaces/ns".to_string())
        );
    }

    #[test]
    fn test_dangling_reference_is_not_an_error() {
        let links = index();
        assert_eq!(links.resolve("classZ", RefKind::Compound, None).unwrap(), None);
        assert_eq!(
            links.resolve("classZ_1a1", RefKind::Member, Some("classA")).unwrap(),
            None
        );
    }

    #[test]
    fn test_missing_permalink_is_an_error() {
        let links = index();
        assert!(matches!(
            links.resolve("namespacens_1_1@0", RefKind::Compound, None),
            Err(DoxyError::MissingPermalink(_))
        ));
    }

    #[test]
    fn test_hidden_target_is_plain_text() {
        let links = index();
        assert_eq!(
            links
                .resolve("namespaceanonymous_0d1", RefKind::Compound, None)
                .unwrap(),
            None
        );
        assert_eq!(
            links
                .resolve("namespaceanonymous_0d1_1a9f", RefKind::Member, Some("classA"))
                .unwrap(),
            None
        );
        assert!(links.contains("namespaceanonymous_0d1"));
        assert_eq!(links.page_url("namespaceanonymous_0d1"), None);
    }
}
