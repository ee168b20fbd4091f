//! End-to-end loading of a Doxygen output directory.

use doxyforge::{CollectionKind, DoxyError, SiteOptions, load_site};

use crate::helpers::fixtures::{CIRCLE, OUTPUT};
use crate::helpers::site_helpers::{fixture_site, output_with, write_output};

#[test]
fn test_loads_tracked_compounds_only() {
    let site = fixture_site();
    assert_eq!(site.len(), 5);
    assert!(site.get("_2demo_8cpp-example").is_none());
}

#[test]
fn test_project_settings_come_from_doxyfile() {
    let site = fixture_site();
    assert_eq!(site.project_name(), Some("Geometry"));
    assert_eq!(site.project_brief(), Some("Shapes in the plane"));
    assert_eq!(site.config().get_bool("GENERATE_XML"), Some(true));
}

#[test]
fn test_brief_option_overrides_doxyfile() {
    let dir = write_output(OUTPUT);
    let options = SiteOptions {
        project_brief: Some("Circles and friends".to_string()),
        ..SiteOptions::default()
    };
    let site = load_site(dir.path(), options).unwrap();
    assert_eq!(site.project_brief(), Some("Circles and friends"));
}

#[test]
fn test_doxyfile_is_optional() {
    let files: Vec<(&str, &str)> = OUTPUT
        .iter()
        .copied()
        .filter(|(name, _)| *name != "Doxyfile.xml")
        .collect();
    let dir = write_output(&files);
    let site = load_site(dir.path(), SiteOptions::default()).unwrap();
    assert_eq!(site.project_name(), None);
    assert_eq!(site.len(), 5);
}

#[test]
fn test_permalinks_of_loaded_site() {
    let site = fixture_site();
    assert_eq!(
        site.page_permalink("classgeo_1_1Circle"),
        Some("/api/classes/geo/circle")
    );
    assert_eq!(site.page_permalink("namespacegeo"), Some("/api/namespaces/geo"));
    assert_eq!(site.page_permalink("geo_8h"), Some("/api/files/geo-h"));
}

#[test]
fn test_class_tree_follows_inheritance() {
    let site = fixture_site();
    let top: Vec<&str> = site
        .top_level(CollectionKind::Classes)
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(top, vec!["classgeo_1_1Shape"]);

    let shape = site.compound("classgeo_1_1Shape").unwrap();
    let children: Vec<&str> = site.children_of(shape).map(|c| c.id.as_str()).collect();
    assert_eq!(children, vec!["classgeo_1_1Circle"]);
}

#[test]
fn test_walk_visits_parents_first() {
    let site = fixture_site();
    let order: Vec<&str> = site.walk().iter().map(|c| c.id.as_str()).collect();
    let shape = order.iter().position(|id| *id == "classgeo_1_1Shape").unwrap();
    let circle = order.iter().position(|id| *id == "classgeo_1_1Circle").unwrap();
    assert!(shape < circle);
    assert_eq!(order.len(), 5);
}

#[test]
fn test_base_route_from_json_options() {
    let dir = write_output(OUTPUT);
    let options = SiteOptions::from_json_str(r#"{ "baseRoute": "docs" }"#).unwrap();
    let site = load_site(dir.path(), options).unwrap();
    assert_eq!(
        site.page_permalink("classgeo_1_1Shape"),
        Some("/docs/classes/geo/shape")
    );
}

#[test]
fn test_unknown_attribute_aborts_loading() {
    let broken = CIRCLE.replace(r#"final="yes""#, r#"final="yes" bogus="1""#);
    let dir = output_with(&[("classgeo_1_1Circle.xml", broken.as_str())]);
    match load_site(dir.path(), SiteOptions::default()) {
        Err(DoxyError::SchemaViolation { shape, item }) => {
            assert_eq!(shape, "compounddefType");
            assert_eq!(item, "@bogus");
        }
        other => panic!("expected a schema violation, got {other:?}"),
    }
}

#[test]
fn test_missing_compound_document_is_io_error() {
    let files: Vec<(&str, &str)> = OUTPUT
        .iter()
        .copied()
        .filter(|(name, _)| *name != "geo_8h.xml")
        .collect();
    let dir = write_output(&files);
    assert!(matches!(
        load_site(dir.path(), SiteOptions::default()),
        Err(DoxyError::Io(_))
    ));
}

#[test]
fn test_missing_directory_is_config_error() {
    let dir = write_output(&[]);
    let missing = dir.path().join("xml");
    assert!(matches!(
        load_site(&missing, SiteOptions::default()),
        Err(DoxyError::Config(_))
    ));
}
