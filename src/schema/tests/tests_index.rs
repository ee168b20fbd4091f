#![allow(clippy::unwrap_used)]

use crate::schema::{
    CompoundKind, Doxyfile, DoxygenIndex, IndexMemberKind, MemberKind, OptionType, read_document,
};

#[test]
fn test_index_lists_compounds_and_members() {
    let xml = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygenindex xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="index.xsd" version="1.9.8" xml:lang="en-US">
  <compound refid="classFoo" kind="class"><name>Foo</name>
    <member refid="classFoo_1a1" kind="function"><name>run</name></member>
    <member refid="classFoo_1a2" kind="enumvalue"><name>Red</name></member>
  </compound>
  <compound refid="dir_1" kind="dir"><name>src</name></compound>
</doxygenindex>"#;
    let index: DoxygenIndex = read_document(xml.as_bytes()).unwrap();
    assert_eq!(index.compounds.len(), 2);
    let foo = &index.compounds[0];
    assert_eq!(foo.kind, CompoundKind::Class);
    assert_eq!(foo.members[0].kind, IndexMemberKind::Member(MemberKind::Function));
    assert_eq!(foo.members[1].kind, IndexMemberKind::EnumValue);
    assert_eq!(index.compounds[1].kind, CompoundKind::Dir);
}

#[test]
fn test_index_rejects_wrong_root() {
    assert!(read_document::<DoxygenIndex>(b"<doxygen version=\"1\"/>").is_err());
}

#[test]
fn test_doxyfile_options() {
    let xml = r#"<doxyfile version="1.9.8" xml:lang="en-US">
  <option id="PROJECT_NAME" default="no" type="string"><value><![CDATA[Demo]]></value></option>
  <option id="INPUT" default="no" type="stringlist"><value>src</value><value>include</value></option>
  <option id="EXTRACT_ALL" default="yes" type="bool"><value>NO</value></option>
</doxyfile>"#;
    let doxyfile: Doxyfile = read_document(xml.as_bytes()).unwrap();
    assert_eq!(doxyfile.options.len(), 3);
    assert_eq!(doxyfile.options[0].values, vec!["Demo"]);
    assert_eq!(doxyfile.options[1].ty, OptionType::StringList);
    assert!(doxyfile.options[2].is_default);
}
