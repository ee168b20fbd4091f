//! The five navigable collections.

use crate::schema::CompoundKind;

/// Which collection a compound is listed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CollectionKind {
    Classes,
    Namespaces,
    Groups,
    Files,
    Pages,
}

impl CollectionKind {
    pub const ALL: [Self; 5] = [
        Self::Classes,
        Self::Namespaces,
        Self::Groups,
        Self::Files,
        Self::Pages,
    ];

    /// The collection a compound kind belongs to, if it is tracked at all.
    ///
    /// Folders live in the file collection; concepts, modules, examples and
    /// Fortran types are not tracked.
    pub fn for_kind(kind: CompoundKind) -> Option<Self> {
        match kind {
            k if k.is_class_like() => Some(Self::Classes),
            CompoundKind::Namespace => Some(Self::Namespaces),
            CompoundKind::Group => Some(Self::Groups),
            CompoundKind::File | CompoundKind::Dir => Some(Self::Files),
            CompoundKind::Page => Some(Self::Pages),
            _ => None,
        }
    }

    /// URL segment under the base route.
    pub fn route(self) -> &'static str {
        match self {
            Self::Classes => "classes",
            Self::Namespaces => "namespaces",
            Self::Groups => "groups",
            Self::Files => "files",
            Self::Pages => "pages",
        }
    }

    /// Heading of the collection index page.
    pub fn title(self) -> &'static str {
        match self {
            Self::Classes => "Classes",
            Self::Namespaces => "Namespaces",
            Self::Groups => "Topics",
            Self::Files => "Files",
            Self::Pages => "Pages",
        }
    }

    /// Returns true if entities may have several parents.
    pub fn is_multi_parent(self) -> bool {
        self == Self::Classes
    }
}

/// `/{base}/{collection}/{permalink}`
pub fn page_url(base_route: &str, collection: CollectionKind, permalink: &str) -> String {
    format!(
        "/{}/{}/{}",
        base_route.trim_matches('/'),
        collection.route(),
        permalink
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_to_collection() {
        assert_eq!(
            CollectionKind::for_kind(CompoundKind::Struct),
            Some(CollectionKind::Classes)
        );
        assert_eq!(
            CollectionKind::for_kind(CompoundKind::Dir),
            Some(CollectionKind::Files)
        );
        assert_eq!(CollectionKind::for_kind(CompoundKind::Concept), None);
        assert_eq!(CollectionKind::for_kind(CompoundKind::Example), None);
    }

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url("/api/", CollectionKind::Namespaces, "ns/inner"),
            "/api/namespaces/ns/inner"
        );
    }
}
