//! Pages rendered from the fixture output directory.

use doxyforge::{CollectionKind, SiteOptions, load_site};
use rstest::rstest;

use crate::helpers::fixtures::OUTPUT;
use crate::helpers::site_helpers::{assert_in_order, fixture_site, write_output};

#[test]
fn test_abstract_class_page() {
    let page = fixture_site().render_page("classgeo_1_1Shape").unwrap();
    assert_in_order(
        &page,
        &[
            "Anything with an area. [More...](#details)",
            "class geo::Shape",
            "<code>#include &lt;geo.h&gt;</code>",
            "**Inherited by** [geo::Circle](/api/classes/geo/circle).",
            "## Public Member Functions",
            "| double | [area](#a1) () const =0<br/>Enclosed area. |",
            "## Description {#details}",
            "Subclasses such as [Circle](/api/classes/geo/circle) override [area()](#a1).",
            ":::note",
            "Shapes are immutable.",
            ":::",
            "### area {#a1}",
            "virtual double geo::Shape::area() const =0",
            "<code>const</code> <code>pure virtual</code>",
            "**Returns**",
            "Area in square units.",
            "Reimplemented in [area](/api/classes/geo/circle/#a2).",
            "Declared at line 9 of file <code>geo.h</code>.",
        ],
    );
}

#[test]
fn test_derived_class_page_links_back() {
    let page = fixture_site().render_page("classgeo_1_1Circle").unwrap();
    assert_in_order(
        &page,
        &[
            "A round shape.",
            "class geo::Circle final",
            "**Inherits** [geo::Shape](/api/classes/geo/shape).",
            "### area {#a2}",
            "Reimplements [area](/api/classes/geo/shape/#a1).",
            "Definition at line 17 of file <code>geo.h</code>.",
        ],
    );
}

#[rstest]
#[case("namespacegeo", "| [geo::Circle](/api/classes/geo/circle) | A round shape. |")]
#[case("namespacegeo", "| [geo::Shape](/api/classes/geo/shape) | Anything with an area. |")]
#[case("geo_8h", "| [geo](/api/namespaces/geo) | Plane geometry. |")]
#[case("geo_8h", "| [geo::Shape](/api/classes/geo/shape) | Anything with an area. |")]
#[case("indexpage", "Start with [geo::Shape](/api/classes/geo/shape).")]
fn test_page_contains(#[case] id: &str, #[case] expected: &str) {
    let page = fixture_site().render_page(id).unwrap();
    assert!(page.contains(expected), "{expected:?} not in:\n{page}");
}

#[test]
fn test_file_source_listing_is_opt_in() {
    let site = fixture_site();
    assert!(!site.render_page("geo_8h").unwrap().contains("## Source"));

    let dir = write_output(OUTPUT);
    let options = SiteOptions::default().with_program_listing(true);
    let page = load_site(dir.path(), options)
        .unwrap()
        .render_page("geo_8h")
        .unwrap();
    assert_in_order(&page, &["## Source", "```cpp", "#pragma once", "namespace geo {}", "```"]);
}

#[test]
fn test_page_titles() {
    let site = fixture_site();
    let title = |id: &str| site.compound(id).unwrap().page_title();
    assert_eq!(title("classgeo_1_1Shape"), "geo::Shape Class Reference");
    assert_eq!(title("namespacegeo"), "geo Namespace Reference");
    assert_eq!(title("geo_8h"), "geo.h File Reference");
    assert_eq!(title("indexpage"), "Geometry");
}

#[test]
fn test_class_index() {
    let index = fixture_site().render_index(CollectionKind::Classes).unwrap();
    assert_eq!(
        index,
        "- [geo::Shape](/api/classes/geo/shape): Anything with an area.\n  \
         - [geo::Circle](/api/classes/geo/circle): A round shape.\n"
    );
}

#[test]
fn test_empty_collection_index() {
    let index = fixture_site().render_index(CollectionKind::Groups).unwrap();
    assert!(index.is_empty());
}

#[test]
fn test_every_walked_page_renders() {
    let site = fixture_site();
    for compound in site.walk() {
        let page = site.render_page(compound.id.as_str()).unwrap();
        assert!(page.ends_with('\n'), "{} has no trailing newline", compound.id);
    }
}
