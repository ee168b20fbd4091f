#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use crate::config::SiteOptions;
use crate::model::{CollectionKind, Site, SiteBuilder};
use crate::schema::{DoxygenDocument, read_document};

const COMPOUNDS: &str = r#"<doxygen version="1.9.8">
<compounddef id="namespacens" kind="namespace" language="C++">
  <compoundname>ns</compoundname>
  <innerclass refid="classns_1_1Widget" prot="public">ns::Widget</innerclass>
  <innerclass refid="classns_1_1Base" prot="public">ns::Base</innerclass>
  <briefdescription><para>Everything.</para></briefdescription>
</compounddef>
<compounddef id="classns_1_1Base" kind="class" language="C++" prot="public">
  <compoundname>ns::Base</compoundname>
  <derivedcompoundref refid="classns_1_1Widget" prot="public" virt="non-virtual">ns::Widget</derivedcompoundref>
</compounddef>
<compounddef id="classns_1_1Widget" kind="class" language="C++" prot="public" final="yes">
  <compoundname>ns::Widget</compoundname>
  <basecompoundref refid="classns_1_1Base" prot="public" virt="non-virtual">ns::Base</basecompoundref>
  <includes local="no">widget.h</includes>
  <templateparamlist><param><type>typename T</type></param></templateparamlist>
  <sectiondef kind="public-func">
    <memberdef kind="function" id="classns_1_1Widget_1a1" prot="public" static="no" const="yes" virt="virtual">
      <type>int</type>
      <definition>virtual int ns::Widget::size</definition>
      <argsstring>() const</argsstring>
      <name>size</name>
      <briefdescription><para>Number of parts.</para></briefdescription>
      <detaileddescription><para>See <ref refid="classns_1_1Widget_1a2" kindref="member">reset</ref>.</para></detaileddescription>
      <location file="widget.h" line="12" column="7" bodyfile="widget.cpp" bodystart="40" bodyend="44"/>
    </memberdef>
    <memberdef kind="function" id="classns_1_1Widget_1a2" prot="public" static="no">
      <type>void</type>
      <definition>void ns::Widget::reset</definition>
      <argsstring>()</argsstring>
      <name>reset</name>
    </memberdef>
  </sectiondef>
  <briefdescription><para>A widget.</para></briefdescription>
  <detaileddescription><para>Holds <bold>parts</bold>.</para></detaileddescription>
</compounddef>
</doxygen>"#;

fn site() -> Site {
    let document: DoxygenDocument = read_document(COMPOUNDS.as_bytes()).unwrap();
    let mut builder = SiteBuilder::new(SiteOptions::default());
    builder.add_document(document);
    builder.build().unwrap()
}

#[test]
fn test_class_page_layout() {
    let page = site().render_page("classns_1_1Widget").unwrap();
    let expected_in_order = [
        "A widget. [More...](#details)",
        "```cpp\ntemplate <typename T>\nclass ns::Widget final\n```",
        "<code>#include &lt;widget.h&gt;</code>",
        "**Inherits** [ns::Base](/api/classes/ns/base).",
        "## Public Member Functions",
        "| int | [size](#a1) () const<br/>Number of parts. |",
        "## Description {#details}",
        "Holds <b>parts</b>.",
        "## Public Member Functions Documentation",
        "### size {#a1}",
        "<code>const</code> <code>virtual</code>",
        "See [reset](#a2).",
        "Definition at line 40 of file <code>widget.cpp</code>.",
        "### reset {#a2}",
    ];
    let mut from = 0;
    for expected in expected_in_order {
        let found = page[from..]
            .find(expected)
            .unwrap_or_else(|| panic!("missing {expected:?} in\n{page}"));
        from += found + expected.len();
    }
    assert!(page.ends_with('\n'));
    assert!(!page.contains("\n\n\n"));
}

#[test]
fn test_namespace_page_lists_classes() {
    let page = site().render_page("namespacens").unwrap();
    assert!(page.starts_with("Everything.\n"));
    assert!(page.contains("## Classes"));
    assert!(page.contains("| [ns::Widget](/api/classes/ns/widget) | A widget. |"));
    assert!(page.contains("| [ns::Base](/api/classes/ns/base) |  |"));
}

#[test]
fn test_page_lines_join_to_page() {
    let site = site();
    let lines = site.render_page_lines("namespacens").unwrap();
    assert_eq!(lines[0], "Everything.");
    assert!(!lines.first().unwrap().is_empty());
    assert!(!lines.last().unwrap().is_empty());
    assert!(lines.windows(2).all(|w| !(w[0].is_empty() && w[1].is_empty())));

    let mut joined = lines.join("\n");
    joined.push('\n');
    assert_eq!(site.render_page("namespacens").unwrap(), joined);
}

#[test]
fn test_source_locations_can_be_hidden() {
    let document: DoxygenDocument = read_document(COMPOUNDS.as_bytes()).unwrap();
    let options = SiteOptions {
        show_source_locations: false,
        ..SiteOptions::default()
    };
    let mut builder = SiteBuilder::new(options);
    builder.add_document(document);
    let page = builder.build().unwrap().render_page("classns_1_1Widget").unwrap();
    assert!(!page.contains("Definition at line"));
}

#[test]
fn test_class_index_nests_derived_classes() {
    let index = site().render_index(CollectionKind::Classes).unwrap();
    assert_eq!(
        index,
        "- [ns::Base](/api/classes/ns/base)\n  - [ns::Widget](/api/classes/ns/widget): A widget.\n"
    );
}
