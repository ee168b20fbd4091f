#![allow(clippy::unwrap_used)]

use super::{CLASSES, FILES, NAMESPACES, PAGES, builder, document, site};
use crate::base::CompoundId;
use crate::config::SiteOptions;
use crate::error::DoxyError;
use crate::model::{CollectionKind, MemberCategory, SectionKind, SectionScope, SiteBuilder};
use crate::schema::RefKind;

#[test]
fn test_base_and_derived_scenario() {
    let site = site(CLASSES);

    let base = site.compound("classBase").unwrap();
    let derived = site.compound("classDerived").unwrap();
    assert_eq!(base.children, vec![CompoundId::from("classDerived")]);
    assert_eq!(derived.parents, vec![CompoundId::from("classBase")]);

    let top: Vec<&str> = site
        .top_level(CollectionKind::Classes)
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(top, vec!["classBase"]);

    assert_eq!(site.page_permalink("classDerived"), Some("/api/classes/derived"));
    assert_eq!(base.brief, "The base.");
}

#[test]
fn test_untracked_and_duplicate_compounds_are_skipped() {
    let mut builder = builder(CLASSES);
    let concept = document(
        r#"<compounddef id="conceptC" kind="concept"><compoundname>C</compoundname></compounddef>"#,
    );
    let duplicate = document(
        r#"<compounddef id="classBase" kind="struct"><compoundname>Other</compoundname></compounddef>"#,
    );
    assert_eq!(builder.add_compound(concept.compounds[0].clone()), None);
    assert_eq!(builder.add_compound(duplicate.compounds[0].clone()), None);
    assert_eq!(builder.len(), 2);

    let site = builder.build().unwrap();
    assert_eq!(site.compound("classBase").unwrap().name, "Base");
    assert!(matches!(
        site.compound("conceptC"),
        Err(DoxyError::UnknownCompound(_))
    ));
}

#[test]
fn test_same_page_member_reference() {
    let site = site(NAMESPACES);
    let current = Some("classouter_1_1Widget");
    assert_eq!(
        site.resolve_reference("classouter_1_1Widget_1a1", RefKind::Member, current)
            .unwrap(),
        Some("#a1".to_string())
    );
    assert_eq!(
        site.resolve_reference("classouter_1_1Widget_1a1", RefKind::Member, Some("namespaceouter"))
            .unwrap(),
        Some("/api/classes/outer/widget/#a1".to_string())
    );
}

#[test]
fn test_reference_to_anonymous_namespace_is_plain_text() {
    let site = site(NAMESPACES);
    assert_eq!(site.page_permalink("namespaceouter_1_1_0d0"), None);
    assert_eq!(
        site.resolve_reference("namespaceouter_1_1_0d0", RefKind::Compound, None)
            .unwrap(),
        None
    );
    assert_eq!(
        site.resolve_reference("namespaceouter_1_1_0d0_1_1hidden", RefKind::Compound, None)
            .unwrap(),
        None
    );
    assert!(matches!(
        site.render_page("namespaceouter_1_1_0d0"),
        Err(DoxyError::MissingPermalink(_))
    ));
}

#[test]
fn test_brief_referencing_anonymous_namespace_member_builds() {
    let site = site(
        r#"
<compounddef id="a_8cpp" kind="file" language="C++">
  <compoundname>a.cpp</compoundname>
  <innernamespace refid="namespace_0d0">anonymous_namespace{a.cpp}</innernamespace>
  <briefdescription>
    <para>Uses <ref refid="namespace_0d0_1a1f" kindref="member">helper</ref>.</para>
  </briefdescription>
</compounddef>
<compounddef id="namespace_0d0" kind="namespace" language="C++">
  <compoundname>anonymous_namespace{a.cpp}</compoundname>
  <sectiondef kind="func">
    <memberdef kind="function" id="namespace_0d0_1a1f" prot="public" static="yes">
      <type>void</type><definition>void helper</definition><argsstring>()</argsstring>
      <name>helper</name>
    </memberdef>
  </sectiondef>
</compounddef>
"#,
    );
    assert_eq!(site.compound("a_8cpp").unwrap().brief, "Uses helper.");
    assert_eq!(site.page_permalink("namespace_0d0"), None);
    assert!(site.render_page("a_8cpp").is_ok());
}

#[test]
fn test_namespace_functions_and_operators_have_separate_headings() {
    let site = site(
        r#"
<compounddef id="namespacemath" kind="namespace" language="C++">
  <compoundname>math</compoundname>
  <sectiondef kind="func">
    <memberdef kind="function" id="namespacemath_1a1" prot="public" static="no">
      <type>void</type><definition>void math::run</definition><argsstring>()</argsstring>
      <name>run</name>
    </memberdef>
    <memberdef kind="function" id="namespacemath_1a2" prot="public" static="no">
      <type>bool</type><definition>bool math::operator==</definition>
      <argsstring>(const Vec &amp;a, const Vec &amp;b)</argsstring>
      <name>operator==</name>
    </memberdef>
  </sectiondef>
</compounddef>
"#,
    );
    let math = site.compound("namespacemath").unwrap();
    let headings: Vec<&str> = math.sections.iter().map(|s| s.heading.as_str()).collect();
    assert_eq!(headings, vec!["Operators", "Functions"]);
    assert_eq!(math.sections[0].members[0].def.name, "operator==");

    let page = site.render_page("namespacemath").unwrap();
    assert!(page.contains("## Operators"));
    assert!(page.contains("## Functions"));
}

#[test]
fn test_operators_get_their_own_section() {
    let site = site(NAMESPACES);
    let widget = site.compound("classouter_1_1Widget").unwrap();
    let kinds: Vec<(SectionKind, &str)> = widget
        .sections
        .iter()
        .map(|s| (s.kind, s.heading.as_str()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (
                SectionKind::Organized {
                    scope: SectionScope::Public,
                    category: MemberCategory::Constructor
                },
                "Public Constructors"
            ),
            (
                SectionKind::Organized {
                    scope: SectionScope::Public,
                    category: MemberCategory::Operator
                },
                "Public Operators"
            ),
            (
                SectionKind::Organized {
                    scope: SectionScope::Public,
                    category: MemberCategory::Function
                },
                "Public Member Functions"
            ),
        ]
    );
    assert_eq!(widget.sections[1].members[0].def.name, "operator==");
}

#[test]
fn test_walk_yields_parents_first_and_skips_anonymous() {
    let all = format!("{CLASSES}{NAMESPACES}{FILES}{PAGES}");
    let site = site(&all);
    let order: Vec<&str> = site.walk().iter().map(|c| c.id.as_str()).collect();

    let position = |id: &str| order.iter().position(|o| *o == id).unwrap();
    assert!(position("classBase") < position("classDerived"));
    assert!(position("namespaceouter") < position("namespaceouter_1_1inner"));
    assert!(position("dir_src") < position("dir_util"));
    assert!(position("dir_util") < position("strings_8h"));
    assert!(position("intro") < position("setup"));
    assert!(!order.contains(&"namespaceouter_1_1_0d0"));
    assert!(!order.contains(&"namespaceouter_1_1_0d0_1_1hidden"));
    assert_eq!(order.len(), site.compounds().filter(|c| c.is_navigable()).count());
}

#[test]
fn test_page_titles() {
    let all = format!("{CLASSES}{FILES}{PAGES}");
    let site = site(&all);
    assert_eq!(site.compound("classBase").unwrap().page_title(), "Base Class Reference");
    assert_eq!(site.compound("strings_8h").unwrap().page_title(), "strings.h File Reference");
    assert_eq!(site.compound("dir_util").unwrap().page_title(), "src/util Folder Reference");
    assert_eq!(site.compound("setup").unwrap().page_title(), "Setting Up");
}

#[test]
fn test_empty_base_route_is_rejected() {
    let builder = SiteBuilder::new(SiteOptions::default().with_base_route("/"));
    assert!(matches!(builder.build(), Err(DoxyError::Config(_))));
}
