#![allow(clippy::unwrap_used)]

mod tests_site;

use crate::config::SiteOptions;
use crate::model::{Site, SiteBuilder};
use crate::schema::{DoxygenDocument, read_document};

/// Wrap compounddef elements in a document root and parse it.
pub(super) fn document(compounds: &str) -> DoxygenDocument {
    let xml = format!(r#"<doxygen version="1.9.8" xml:lang="en-US">{compounds}</doxygen>"#);
    read_document(xml.as_bytes()).unwrap()
}

pub(super) fn builder(compounds: &str) -> SiteBuilder {
    let mut builder = SiteBuilder::new(SiteOptions::default());
    builder.add_document(document(compounds));
    builder
}

pub(super) fn site(compounds: &str) -> Site {
    builder(compounds).build().unwrap()
}

pub(super) const CLASSES: &str = r#"
<compounddef id="classBase" kind="class" language="C++" prot="public">
  <compoundname>Base</compoundname>
  <derivedcompoundref refid="classDerived" prot="public" virt="non-virtual">Derived</derivedcompoundref>
  <briefdescription><para>The base.</para></briefdescription>
</compounddef>
<compounddef id="classDerived" kind="class" language="C++" prot="public">
  <compoundname>Derived</compoundname>
  <basecompoundref refid="classBase" prot="public" virt="non-virtual">Base</basecompoundref>
</compounddef>
"#;

pub(super) const NAMESPACES: &str = r#"
<compounddef id="namespaceouter" kind="namespace" language="C++">
  <compoundname>outer</compoundname>
  <innerclass refid="classouter_1_1Widget" prot="public">outer::Widget</innerclass>
  <innernamespace refid="namespaceouter_1_1inner">outer::inner</innernamespace>
  <innernamespace refid="namespaceouter_1_1_0d0">outer::@0</innernamespace>
</compounddef>
<compounddef id="namespaceouter_1_1inner" kind="namespace" language="C++">
  <compoundname>outer::inner</compoundname>
</compounddef>
<compounddef id="namespaceouter_1_1_0d0" kind="namespace" language="C++">
  <compoundname>outer::@0</compoundname>
  <innernamespace refid="namespaceouter_1_1_0d0_1_1hidden">outer::@0::hidden</innernamespace>
</compounddef>
<compounddef id="namespaceouter_1_1_0d0_1_1hidden" kind="namespace" language="C++">
  <compoundname>outer::@0::hidden</compoundname>
</compounddef>
<compounddef id="classouter_1_1Widget" kind="class" language="C++" prot="public">
  <compoundname>outer::Widget</compoundname>
  <sectiondef kind="public-func">
    <memberdef kind="function" id="classouter_1_1Widget_1a1" prot="public" static="no">
      <type>void</type><definition>void outer::Widget::run</definition><argsstring>()</argsstring>
      <name>run</name>
    </memberdef>
    <memberdef kind="function" id="classouter_1_1Widget_1a2" prot="public" static="no">
      <type>bool</type><definition>bool outer::Widget::operator==</definition>
      <argsstring>(const Widget &amp;other) const</argsstring>
      <name>operator==</name>
    </memberdef>
    <memberdef kind="function" id="classouter_1_1Widget_1a3" prot="public" static="no">
      <type/><definition>outer::Widget::Widget</definition><argsstring>()</argsstring>
      <name>Widget</name>
    </memberdef>
  </sectiondef>
</compounddef>
"#;

pub(super) const FILES: &str = r#"
<compounddef id="dir_src" kind="dir">
  <compoundname>src</compoundname>
  <innerdir refid="dir_util">src/util</innerdir>
  <innerfile refid="main_8cpp">main.cpp</innerfile>
</compounddef>
<compounddef id="dir_util" kind="dir">
  <compoundname>src/util</compoundname>
  <innerfile refid="strings_8h">strings.h</innerfile>
</compounddef>
<compounddef id="main_8cpp" kind="file" language="C++">
  <compoundname>main.cpp</compoundname>
</compounddef>
<compounddef id="strings_8h" kind="file" language="C++">
  <compoundname>strings.h</compoundname>
</compounddef>
<compounddef id="readme_8md" kind="file" language="Markdown">
  <compoundname>README.md</compoundname>
</compounddef>
"#;

pub(super) const PAGES: &str = r#"
<compounddef id="indexpage" kind="page">
  <compoundname>index</compoundname>
  <title>My Project</title>
  <innerpage refid="intro">intro</innerpage>
</compounddef>
<compounddef id="intro" kind="page">
  <compoundname>intro</compoundname>
  <title>Introduction</title>
  <innerpage refid="setup">setup</innerpage>
</compounddef>
<compounddef id="setup" kind="page">
  <compoundname>setup</compoundname>
  <title>Setting Up</title>
</compounddef>
"#;
