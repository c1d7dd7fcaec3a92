#[cfg(test)]
mod rendering_tests {
    use crate::parser::{MethodDescriptor, ParameterDescriptor, TypeDescriptor, TypeRef, Visibility};
    use crate::renderer::{OutputFormat, TableLayout};
    use crate::{render_config, Config};

    fn class(name: &str, superclass: Option<&str>, comment: &str) -> TypeDescriptor {
        let mut descriptor = TypeDescriptor::new(name);
        descriptor.superclass = superclass.map(str::to_string);
        descriptor.comment = comment.to_string();
        descriptor
    }

    fn setter(name: &str, ty: TypeRef, comment: &str) -> MethodDescriptor {
        MethodDescriptor {
            name: name.to_string(),
            visibility: Visibility::Public,
            comment: comment.to_string(),
            parameters: vec![ParameterDescriptor {
                name: "value".to_string(),
                ty,
            }],
            internal: false,
            deprecated: false,
        }
    }

    // org.acme.A
    // └── org.acme.B  setName(java.lang.String)
    fn two_level() -> Vec<TypeDescriptor> {
        let mut b = class("org.acme.B", Some("org.acme.A"), "");
        b.methods
            .push(setter("setName", TypeRef::new("java.lang.String"), "The name."));
        vec![class("org.acme.A", None, "Root type."), b]
    }

    fn render(types: &[TypeDescriptor], config: &Config, format: OutputFormat) -> Vec<String> {
        let mut lines: Vec<String> = Vec::new();
        render_config(types, config, format, &mut lines).unwrap();
        lines
    }

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_markdown_two_level_document() {
        let config = Config::new("main", "org.acme.A");
        let lines = render(&two_level(), &config, OutputFormat::Markdown);

        let expected = strings(&[
            "## A",
            "",
            "#### <a name=\"org.acme.A\"></a>A",
            "",
            "+ **Full name** : `org.acme.A`",
            "+ **Sub-types** : [`B`](#org.acme.B)",
            "",
            "",
            "",
            "Root type.",
            "",
            "",
            "",
            "<table>",
            "<caption>A properties</caption>",
            "<colgroup>",
            "<col width=\"33%\" />",
            "<col width=\"66%\" />",
            "</colgroup>",
            "<thead>",
            "<tr class=\"header\">",
            "<th align=\"left\">Property</th>",
            "<th align=\"left\">Description</th>",
            "</tr>",
            "</thead>",
            "<tbody>",
            "<tr>",
            "<td align=\"left\">This class does not have any specific property.</td>",
            "<td align=\"left\"></td>",
            "</tr>",
            "</tbody>",
            "</table>",
            "",
            "---",
            "",
            "",
            "#### <a name=\"org.acme.B\"></a>B",
            "",
            "+ **Full name** : `org.acme.B`",
            "+ **Super-type** : [`A`](#org.acme.A)",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "<table>",
            "<caption>B properties</caption>",
            "<colgroup>",
            "<col width=\"33%\" />",
            "<col width=\"66%\" />",
            "</colgroup>",
            "<thead>",
            "<tr class=\"header\">",
            "<th align=\"left\">Property</th>",
            "<th align=\"left\">Description</th>",
            "</tr>",
            "</thead>",
            "<tbody>",
            "<tr class=\"odd\">",
            "<td align=\"left\"><p><strong>name</strong></p><p><code>String</code></p></td>",
            "<td><p>The name.</p></td>",
            "</tr>",
            "</tbody>",
            "</table>",
            "",
            "---",
            "",
            "",
        ]);
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_docbook_sections_nest_under_supertype() {
        let config = Config::new("main", "org.acme.A");
        let lines = render(&two_level(), &config, OutputFormat::Docbook);

        assert_eq!(lines[0], "<?xml version='1.0' encoding='UTF-8'?>");
        assert_eq!(lines[3], "<section>");
        assert_eq!(lines[4], "<title>Reference for A hierarchy</title>");
        assert_eq!(lines[5], "  <para></para>");
        assert_eq!(lines[6], "  <section id='org.acme.A'>");
        assert_eq!(lines[7], "    <title>A</title>");

        let b_open = lines
            .iter()
            .position(|line| line == "    <section id='org.acme.B'>")
            .unwrap();
        let a_close = lines.iter().rposition(|line| line == "  </section>").unwrap();
        let b_close = lines.iter().rposition(|line| line == "    </section>").unwrap();
        assert!(b_open < b_close && b_close < a_close);
        assert_eq!(lines.last().map(String::as_str), Some("</section>"));

        let opened = lines.iter().filter(|line| line.trim_start().starts_with("<section")).count();
        let closed = lines.iter().filter(|line| line.trim() == "</section>").count();
        assert_eq!(opened, 3);
        assert_eq!(opened, closed);
    }

    #[test]
    fn test_docbook_identity_and_property_rows() {
        let config = Config::new("main", "org.acme.A");
        let lines = render(&two_level(), &config, OutputFormat::Docbook);

        assert!(lines.contains(
            &"        <para><emphasis role='bold'>Full name</emphasis> : <code>org&#x200B;.acme&#x200B;.A</code></para>"
                .to_string()
        ));
        assert!(lines.contains(
            &"        <para><emphasis role='bold'>Subtypes</emphasis> : <code><link linkend='org.acme.B'>B</link></code></para>"
                .to_string()
        ));
        assert!(lines.contains(
            &"          <para><emphasis role='bold'>Supertype</emphasis> : <code><link linkend='org.acme.A'>A</link></code></para>"
                .to_string()
        ));

        // Three-column cells sit five levels below the enclosing section.
        assert!(lines.contains(&"              <entry>name</entry>".to_string()));
        assert!(lines.contains(&"              <entry><code>String</code></entry>".to_string()));
        assert!(lines.contains(&"              <entry><para>The name.</para></entry>".to_string()));
        assert!(lines.contains(
            &"            <entry namest='name' nameend='description'>This class does not have any specific property.</entry>"
                .to_string()
        ));
    }

    #[test]
    fn test_excluded_subtree_is_not_listed() {
        let config = Config::new("main", "org.acme.A").with_excluded_subtrees(["org.acme.B"]);
        let lines = render(&two_level(), &config, OutputFormat::Markdown);

        assert!(!lines.iter().any(|line| line.contains("org.acme.B")));
        assert!(!lines.iter().any(|line| line.starts_with("+ **Sub-types**")));
    }

    #[test]
    fn test_internal_intermediate_is_skipped_but_descendants_render() {
        // org.acme.A
        // └── org.acme.Hidden (internal)
        //     └── org.acme.C
        let mut hidden = class("org.acme.Hidden", Some("org.acme.A"), "");
        hidden.internal = true;
        let types = vec![
            class("org.acme.A", None, ""),
            hidden,
            class("org.acme.C", Some("org.acme.Hidden"), ""),
        ];
        let config = Config::new("main", "org.acme.A");

        let markdown = render(&types, &config, OutputFormat::Markdown);
        let headings: Vec<&String> = markdown.iter().filter(|l| l.starts_with("####")).collect();
        assert_eq!(
            headings,
            vec![
                "#### <a name=\"org.acme.A\"></a>A",
                "#### <a name=\"org.acme.C\"></a>C",
            ]
        );
        // Suppressed supertype is named without a cross-reference.
        assert!(markdown.contains(&"+ **Super-type** : `Hidden`".to_string()));

        // C nests directly inside A, one level deeper.
        let docbook = render(&types, &config, OutputFormat::Docbook);
        assert!(docbook.contains(&"    <section id='org.acme.C'>".to_string()));
        assert!(!docbook.iter().any(|l| l.contains("id='org.acme.Hidden'")));
    }

    #[test]
    fn test_depth_zero_renders_root_only() {
        let config = Config::new("main", "org.acme.A").with_max_depth(0);
        let lines = render(&two_level(), &config, OutputFormat::Markdown);

        assert!(lines.contains(&"#### <a name=\"org.acme.A\"></a>A".to_string()));
        assert!(!lines.iter().any(|line| line.contains("org.acme.B")));
    }

    #[test]
    fn test_three_column_markdown_layout() {
        let config = Config::new("main", "org.acme.A").with_table_layout(TableLayout::ThreeColumn);
        let lines = render(&two_level(), &config, OutputFormat::Markdown);

        assert!(lines.contains(&"<col width=\"25%\" />".to_string()));
        assert!(lines.contains(&"<th align=\"left\">Type</th>".to_string()));
        assert!(lines.contains(&"<td align=\"left\"><strong>name</strong></td>".to_string()));
        assert!(lines.contains(&"<td align=\"left\"><code>String</code></td>".to_string()));
        assert!(lines.contains(
            &"<td align=\"left\" colspan=\"3\">This class does not have any specific property.</td>"
                .to_string()
        ));
    }

    #[test]
    fn test_two_column_docbook_layout() {
        let config = Config::new("main", "org.acme.A").with_table_layout(TableLayout::TwoColumn);
        let lines = render(&two_level(), &config, OutputFormat::Docbook);

        assert!(lines.iter().any(|l| l.trim() == "<tgroup cols='2'>"));
        assert!(lines.iter().any(|l| l.trim()
            == "<entry><para><emphasis role='bold'>name</emphasis></para><para><code>String</code></para></entry>"));
    }

    #[test]
    fn test_apidoc_links_for_domain_types() {
        let mut types = two_level();
        types[1].methods.push(setter(
            "setItems",
            TypeRef::new("java.util.List").with_arguments(vec![TypeRef::new("org.acme.A")]),
            "",
        ));
        let config = Config::new("main", "org.acme.A")
            .with_apidoc_url("https://api.acme.org/")
            .with_domain_prefix("org.acme");
        let lines = render(&types, &config, OutputFormat::Markdown);

        assert!(lines.contains(
            &"+ **Full name** : [`org.acme.B`](https://api.acme.org/org/acme/B.html)".to_string()
        ));
        assert!(lines.contains(
            &"<td align=\"left\"><p><strong>items</strong></p><p><code>List&#x200B;&lt;&#x200B;<a href=\"https://api.acme.org/org/acme/A.html\">A</a>&#x200B;&gt;&#x200B;</code></p></td>"
                .to_string()
        ));
    }

    #[test]
    fn test_inline_markup_is_translated_per_format() {
        let types = vec![class("org.acme.A", None, "Use {@code <b>} with <p>care")];
        let config = Config::new("main", "org.acme.A");

        let docbook = render(&types, &config, OutputFormat::Docbook);
        assert!(docbook.contains(
            &"    <para>Use <code>&lt;b&gt;</code> with </para><para>care</para>".to_string()
        ));

        let markdown = render(&types, &config, OutputFormat::Markdown);
        assert!(markdown.contains(&"Use <code>&lt;b&gt;</code> with <p>care".to_string()));
    }

    #[test]
    fn test_missing_root_keeps_preamble_only() {
        let config = Config::new("main", "org.acme.Absent");
        assert_eq!(render(&two_level(), &config, OutputFormat::Docbook).len(), 3);
        assert!(render(&two_level(), &config, OutputFormat::Markdown).is_empty());
    }

    #[test]
    fn test_root_supertype_is_not_cross_referenced() {
        // org.acme.Base
        // └── org.acme.A (root)
        //     └── org.acme.B
        let types = vec![
            class("org.acme.Base", None, ""),
            class("org.acme.A", Some("org.acme.Base"), ""),
            class("org.acme.B", Some("org.acme.A"), ""),
        ];
        let config = Config::new("main", "org.acme.A");

        let docbook = render(&types, &config, OutputFormat::Docbook);
        assert!(docbook.contains(
            &"        <para><emphasis role='bold'>Supertype</emphasis> : <code>Base</code></para>"
                .to_string()
        ));
        for line in &docbook {
            if let Some(start) = line.find("linkend='") {
                let target = &line[start + "linkend='".len()..];
                let target = &target[..target.find('\'').unwrap()];
                let id = format!("<section id='{}'>", target);
                assert!(docbook.iter().any(|l| l.trim() == id), "dangling link to {}", target);
            }
        }

        let markdown = render(&types, &config, OutputFormat::Markdown);
        assert!(markdown.contains(&"+ **Super-type** : `Base`".to_string()));
        assert!(markdown.contains(&"+ **Super-type** : [`A`](#org.acme.A)".to_string()));
        assert!(!markdown.iter().any(|line| line.contains("(#org.acme.Base)")));
    }

    #[test]
    fn test_property_rows_are_sorted_and_alternate() {
        let mut a = class("org.acme.A", None, "");
        a.methods.push(setter("setWidth", TypeRef::new("int"), "Width."));
        a.methods.push(setter("setHeight", TypeRef::new("int"), "Height."));
        a.methods.push(setter("setAlpha", TypeRef::new("float"), "Alpha."));
        let types = vec![a];
        let config = Config::new("main", "org.acme.A");

        let markdown = render(&types, &config, OutputFormat::Markdown);
        let classes: Vec<&String> = markdown
            .iter()
            .filter(|line| line.starts_with("<tr class=\"") && !line.contains("header"))
            .collect();
        assert_eq!(
            classes,
            vec!["<tr class=\"odd\">", "<tr class=\"even\">", "<tr class=\"odd\">"]
        );

        let docbook = render(&types, &config, OutputFormat::Docbook);
        let names: Vec<&str> = docbook
            .iter()
            .map(|line| line.trim())
            .filter(|line| {
                line.starts_with("<entry>") && !line.starts_with("<entry><")
            })
            .collect();
        assert_eq!(
            names,
            vec!["<entry>alpha</entry>", "<entry>height</entry>", "<entry>width</entry>"]
        );
        assert!(!docbook.iter().any(|line| line.contains("namest='name'")));
    }

    #[test]
    fn test_excluded_root_keeps_preamble_only() {
        let config = Config::new("main", "org.acme.A").with_excluded_subtrees(["org.acme.A"]);
        assert_eq!(render(&two_level(), &config, OutputFormat::Docbook).len(), 3);
        assert!(render(&two_level(), &config, OutputFormat::Markdown).is_empty());

        let config = Config::new("main", "org.acme.A").with_included_packages(["org.other"]);
        assert!(render(&two_level(), &config, OutputFormat::Markdown).is_empty());
    }
}
