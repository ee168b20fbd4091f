#![allow(clippy::unwrap_used)]

mod tests_page;

use crate::model::{CollectionKind, LinkIndex};
use crate::schema::{Description, read_document};

pub(super) fn links() -> LinkIndex {
    let mut links = LinkIndex::new();
    links.insert("classA".into(), CollectionKind::Classes, "api", Some("a"));
    links.insert("namespacens".into(), CollectionKind::Namespaces, "api", Some("ns"));
    links.insert("namespacens_1_1_0d0".into(), CollectionKind::Namespaces, "api", None);
    links.insert("todo".into(), CollectionKind::Pages, "api", Some("todo"));
    links.insert_hidden("namespace_0d1".into(), CollectionKind::Namespaces);
    links
}

pub(super) fn detailed(body: &str) -> Description {
    let xml = format!("<detaileddescription>{body}</detaileddescription>");
    read_document(xml.as_bytes()).unwrap()
}
