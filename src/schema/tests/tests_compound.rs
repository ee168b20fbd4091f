#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use crate::error::DoxyError;
use crate::schema::{
    CompoundKind, DoxygenDocument, InnerKind, Protection, SectionDefKind, Virtualness,
    read_document,
};

const CLASS_DOC: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="compound.xsd" version="1.9.8" xml:lang="en-US">
  <compounddef id="classns_1_1Widget" kind="class" language="C++" prot="public">
    <compoundname>ns::Widget</compoundname>
    <basecompoundref refid="classns_1_1Base" prot="public" virt="non-virtual">ns::Base</basecompoundref>
    <basecompoundref prot="private" virt="virtual">std::exception</basecompoundref>
    <includes refid="widget_8h" local="no">widget.h</includes>
    <innerclass refid="classns_1_1Widget_1_1Part" prot="private">ns::Widget::Part</innerclass>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="classns_1_1Widget_1a1" prot="public" static="no" const="no" explicit="no" inline="no" virt="non-virtual">
        <type/>
        <definition>ns::Widget::Widget</definition>
        <argsstring>()</argsstring>
        <name>Widget</name>
        <qualifiedname>ns::Widget::Widget</qualifiedname>
        <briefdescription><para>Creates a widget.</para></briefdescription>
        <detaileddescription/>
        <inbodydescription/>
        <location file="widget.h" line="10" column="3"/>
      </memberdef>
    </sectiondef>
    <briefdescription><para>A <bold>widget</bold>.</para></briefdescription>
    <detaileddescription/>
    <location file="widget.h" line="5" column="1" bodyfile="widget.h" bodystart="5" bodyend="20"/>
    <listofallmembers>
      <member refid="classns_1_1Widget_1a1" prot="public" virt="non-virtual"><scope>ns::Widget</scope><name>Widget</name></member>
    </listofallmembers>
  </compounddef>
</doxygen>
"#;

#[test]
fn test_class_document() {
    let doc: DoxygenDocument = read_document(CLASS_DOC.as_bytes()).unwrap();
    assert_eq!(doc.version, "1.9.8");
    assert_eq!(doc.lang.as_deref(), Some("en-US"));
    let def = &doc.compounds[0];
    assert_eq!(def.kind, CompoundKind::Class);
    assert_eq!(def.compound_name, "ns::Widget");
    assert_eq!(def.prot, Some(Protection::Public));

    assert_eq!(def.base_refs.len(), 2);
    assert_eq!(def.base_refs[0].refid.as_deref(), Some("classns_1_1Base"));
    assert_eq!(def.base_refs[1].refid, None);
    assert_eq!(def.base_refs[1].virt, Virtualness::Virtual);

    assert_eq!(def.includes[0].directive(), "#include <widget.h>");
    assert_eq!(def.inner_of(InnerKind::Class).count(), 1);
    assert_eq!(def.sections[0].kind, SectionDefKind::PublicFunc);
    assert_eq!(def.members().count(), 1);
    assert_eq!(def.all_members[0].scope, "ns::Widget");
    assert_eq!(def.location.as_ref().and_then(|l| l.body_end), Some(20));
}

#[test]
fn test_bogus_attribute_names_shape_and_attribute() {
    let xml = CLASS_DOC.replace(r#"kind="class" language"#, r#"kind="class" bogus="1" language"#);
    let err = read_document::<DoxygenDocument>(xml.as_bytes()).unwrap_err();
    match err {
        DoxyError::SchemaViolation { shape, item } => {
            assert_eq!(shape, "compounddefType");
            assert_eq!(item, "@bogus");
        }
        other => panic!("expected schema violation, got {other:?}"),
    }
}

#[test]
fn test_unknown_child_element() {
    let xml = CLASS_DOC.replace("<detaileddescription/>\n    <location", "<sparkle/>\n    <location");
    let err = read_document::<DoxygenDocument>(xml.as_bytes()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Schema violation in compounddefType: unrecognized <sparkle>"
    );
}

#[test]
fn test_stray_text_in_structural_shape() {
    let xml = CLASS_DOC.replace("<compoundname>", "oops<compoundname>");
    let err = read_document::<DoxygenDocument>(xml.as_bytes()).unwrap_err();
    assert!(matches!(err, DoxyError::SchemaViolation { ref item, .. } if item == "#text"));
}

#[test]
fn test_missing_compound_name() {
    let xml = r#"<doxygen version="1.9.8"><compounddef id="x" kind="page"><title>T</title></compounddef></doxygen>"#;
    let err = read_document::<DoxygenDocument>(xml.as_bytes()).unwrap_err();
    assert!(matches!(err, DoxyError::MissingChild { ref child, .. } if child == "compoundname"));
}

#[test]
fn test_unknown_compound_kind() {
    let xml = r#"<doxygen version="1.9.8"><compounddef id="x" kind="gizmo"><compoundname>x</compoundname></compounddef></doxygen>"#;
    let err = read_document::<DoxygenDocument>(xml.as_bytes()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Schema violation in compounddefType: unrecognized @kind=\"gizmo\""
    );
}

#[test]
fn test_page_with_table_of_contents() {
    let xml = r#"<doxygen version="1.9.8">
  <compounddef id="intro" kind="page">
    <compoundname>intro</compoundname>
    <title>Introduction</title>
    <tableofcontents>
      <tocsect><name>Setup</name><reference>intro_1setup</reference></tocsect>
      <tableofcontents>
        <tocsect><name>Linux</name><reference>intro_1linux</reference></tocsect>
      </tableofcontents>
    </tableofcontents>
    <innerpage refid="details">Details</innerpage>
    <briefdescription/>
    <detaileddescription><para>Hello.</para></detaileddescription>
  </compounddef>
</doxygen>"#;
    let doc: DoxygenDocument = read_document(xml.as_bytes()).unwrap();
    let page = &doc.compounds[0];
    assert_eq!(page.title.as_deref(), Some("Introduction"));
    assert_eq!(page.toc.len(), 1);
    assert_eq!(page.toc[0].children[0].name, "Linux");
    assert_eq!(page.inner_of(InnerKind::Page).next().map(|r| r.refid.as_str()), Some("details"));
}
