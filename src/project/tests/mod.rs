#![allow(clippy::unwrap_used)]

use std::fs;

use crate::error::DoxyError;
use crate::project::{load_config, load_index, tracked_refids};
use crate::schema::DoxygenIndex;

const INDEX: &str = r#"<doxygenindex version="1.9.8" xml:lang="en-US">
  <compound refid="classFoo" kind="class"><name>Foo</name></compound>
  <compound refid="concept_c" kind="concept"><name>C</name></compound>
  <compound refid="example_8cpp-example" kind="example"><name>example.cpp</name></compound>
  <compound refid="dir_1" kind="dir"><name>src</name></compound>
  <compound refid="classFoo" kind="class"><name>Foo</name></compound>
</doxygenindex>"#;

#[test]
fn test_tracked_refids_skip_untracked_kinds_and_repeats() {
    let index: DoxygenIndex = crate::schema::read_document(INDEX.as_bytes()).unwrap();
    assert_eq!(tracked_refids(&index), vec!["classFoo", "dir_1"]);
}

#[test]
fn test_load_index_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("index.xml"), INDEX).unwrap();
    let index = load_index(dir.path()).unwrap();
    assert_eq!(index.compounds.len(), 5);
}

#[test]
fn test_missing_index_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(load_index(dir.path()), Err(DoxyError::Io(_))));
}

#[test]
fn test_config_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config(dir.path()).unwrap().is_none());

    fs::write(
        dir.path().join("Doxyfile.xml"),
        r#"<doxyfile version="1.9.8">
  <option id="PROJECT_NAME" default="no" type="string"><value>Demo</value></option>
  <option id="GENERATE_XML" default="no" type="bool"><value>YES</value></option>
</doxyfile>"#,
    )
    .unwrap();
    let config = load_config(dir.path()).unwrap().unwrap();
    assert_eq!(config.project_name(), Some("Demo"));
    assert_eq!(config.get_bool("GENERATE_XML"), Some(true));
}
