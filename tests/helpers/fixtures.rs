//! A small Doxygen XML output directory: one namespace with two classes,
//! a header file, a main page and a Doxyfile.

pub const INDEX: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygenindex xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="index.xsd" version="1.9.8" xml:lang="en-US">
  <compound refid="classgeo_1_1Shape" kind="class"><name>geo::Shape</name>
    <member refid="classgeo_1_1Shape_1a1" kind="function"><name>area</name></member>
  </compound>
  <compound refid="classgeo_1_1Circle" kind="class"><name>geo::Circle</name>
    <member refid="classgeo_1_1Circle_1a2" kind="function"><name>area</name></member>
  </compound>
  <compound refid="namespacegeo" kind="namespace"><name>geo</name></compound>
  <compound refid="geo_8h" kind="file"><name>geo.h</name></compound>
  <compound refid="indexpage" kind="page"><name>index</name></compound>
  <compound refid="_2demo_8cpp-example" kind="example"><name>demo.cpp</name></compound>
</doxygenindex>
"#;

pub const DOXYFILE: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxyfile xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:noNamespaceSchemaLocation="doxyfile.xsd" version="1.9.8" xml:lang="en-US">
  <option id="PROJECT_NAME" default="no" type="string"><value><![CDATA[Geometry]]></value></option>
  <option id="PROJECT_BRIEF" default="no" type="string"><value><![CDATA[Shapes in the plane]]></value></option>
  <option id="GENERATE_XML" default="no" type="bool"><value><![CDATA[YES]]></value></option>
</doxyfile>
"#;

pub const SHAPE: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8" xml:lang="en-US">
  <compounddef id="classgeo_1_1Shape" kind="class" language="C++" prot="public" abstract="yes">
    <compoundname>geo::Shape</compoundname>
    <derivedcompoundref refid="classgeo_1_1Circle" prot="public" virt="non-virtual">geo::Circle</derivedcompoundref>
    <includes refid="geo_8h" local="no">geo.h</includes>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="classgeo_1_1Shape_1a1" prot="public" static="no" const="yes" virt="pure-virtual">
        <type>double</type>
        <definition>virtual double geo::Shape::area</definition>
        <argsstring>() const =0</argsstring>
        <name>area</name>
        <reimplementedby refid="classgeo_1_1Circle_1a2">area</reimplementedby>
        <briefdescription><para>Enclosed area.</para></briefdescription>
        <detaileddescription>
          <para><simplesect kind="return"><para>Area in square units.</para></simplesect></para>
        </detaileddescription>
        <location file="geo.h" line="9" column="20"/>
      </memberdef>
    </sectiondef>
    <briefdescription><para>Anything with an area.</para></briefdescription>
    <detaileddescription>
      <para>Subclasses such as <ref refid="classgeo_1_1Circle" kindref="compound">Circle</ref> override <ref refid="classgeo_1_1Shape_1a1" kindref="member">area()</ref>.</para>
      <para><simplesect kind="note"><para>Shapes are immutable.</para></simplesect></para>
    </detaileddescription>
    <location file="geo.h" line="6" column="1" bodyfile="geo.h" bodystart="6" bodyend="12"/>
  </compounddef>
</doxygen>
"#;

pub const CIRCLE: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8" xml:lang="en-US">
  <compounddef id="classgeo_1_1Circle" kind="class" language="C++" prot="public" final="yes">
    <compoundname>geo::Circle</compoundname>
    <basecompoundref refid="classgeo_1_1Shape" prot="public" virt="non-virtual">geo::Shape</basecompoundref>
    <includes refid="geo_8h" local="no">geo.h</includes>
    <sectiondef kind="public-func">
      <memberdef kind="function" id="classgeo_1_1Circle_1a2" prot="public" static="no" const="yes" virt="virtual">
        <type>double</type>
        <definition>double geo::Circle::area</definition>
        <argsstring>() const override</argsstring>
        <name>area</name>
        <reimplements refid="classgeo_1_1Shape_1a1">area</reimplements>
        <location file="geo.h" line="17" column="12" bodyfile="geo.h" bodystart="17" bodyend="17"/>
      </memberdef>
    </sectiondef>
    <briefdescription><para>A round shape.</para></briefdescription>
    <location file="geo.h" line="15" column="1" bodyfile="geo.h" bodystart="15" bodyend="21"/>
  </compounddef>
</doxygen>
"#;

pub const NAMESPACE: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8" xml:lang="en-US">
  <compounddef id="namespacegeo" kind="namespace" language="C++">
    <compoundname>geo</compoundname>
    <innerclass refid="classgeo_1_1Circle" prot="public">geo::Circle</innerclass>
    <innerclass refid="classgeo_1_1Shape" prot="public">geo::Shape</innerclass>
    <briefdescription><para>Plane geometry.</para></briefdescription>
    <location file="geo.h" line="4" column="1"/>
  </compounddef>
</doxygen>
"#;

pub const HEADER: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8" xml:lang="en-US">
  <compounddef id="geo_8h" kind="file" language="C++">
    <compoundname>geo.h</compoundname>
    <innerclass refid="classgeo_1_1Shape" prot="public">geo::Shape</innerclass>
    <innerclass refid="classgeo_1_1Circle" prot="public">geo::Circle</innerclass>
    <innernamespace refid="namespacegeo">geo</innernamespace>
    <briefdescription><para>Shape declarations.</para></briefdescription>
    <programlisting>
      <codeline lineno="1"><highlight class="preprocessor">#pragma<sp/>once</highlight></codeline>
      <codeline lineno="2"><highlight class="keyword">namespace</highlight><highlight class="normal"><sp/>geo<sp/>{}</highlight></codeline>
    </programlisting>
    <location file="geo.h"/>
  </compounddef>
</doxygen>
"#;

pub const MAIN_PAGE: &str = r#"<?xml version='1.0' encoding='UTF-8' standalone='no'?>
<doxygen version="1.9.8" xml:lang="en-US">
  <compounddef id="indexpage" kind="page">
    <compoundname>index</compoundname>
    <title>Geometry</title>
    <briefdescription></briefdescription>
    <detaileddescription>
      <para>Start with <ref refid="classgeo_1_1Shape" kindref="compound">geo::Shape</ref>.</para>
    </detaileddescription>
    <location file="README.md"/>
  </compounddef>
</doxygen>
"#;

/// Every file of the fixture, by file name.
pub const OUTPUT: &[(&str, &str)] = &[
    ("index.xml", INDEX),
    ("Doxyfile.xml", DOXYFILE),
    ("classgeo_1_1Shape.xml", SHAPE),
    ("classgeo_1_1Circle.xml", CIRCLE),
    ("namespacegeo.xml", NAMESPACE),
    ("geo_8h.xml", HEADER),
    ("indexpage.xml", MAIN_PAGE),
];
