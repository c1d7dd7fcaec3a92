//! Markdown rendering. Sections are flat `####` headings carrying an HTML
//! anchor; property tables are raw HTML so cells can hold rich descriptions.

use crate::markup::{InlineMarkupTranslator, MarkupDialect};
use crate::output::LineSink;
use crate::properties::PropertyRow;
use crate::renderer::components::*;
use crate::renderer::traits::*;
use std::io;

pub struct MarkdownRenderer {
    translator: InlineMarkupTranslator,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            translator: InlineMarkupTranslator::new(MarkupDialect::Markdown),
        }
    }

    fn link(text: &str, target: &str) -> String {
        format!("[`{}`]({})", text, target)
    }

    fn html_link(text: &str, target: &str) -> String {
        format!("<a href=\"{}\">{}</a>", target, text)
    }

    fn reference(reference: &TypeReference) -> String {
        if reference.cross_reference {
            Self::link(
                &reference.simple_name,
                &format!("#{}", reference.qualified_name),
            )
        } else {
            format!("`{}`", reference.simple_name)
        }
    }

    fn signature(row: &PropertyRow) -> String {
        TypeRenderer.render_signature(&row.signature, &Self::html_link)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRenderer for MarkdownRenderer {
    fn extension(&self) -> &'static str {
        ".md"
    }

    fn default_table_layout(&self) -> TableLayout {
        TableLayout::TwoColumn
    }

    fn boundary(&self) -> SectionBoundary {
        SectionBoundary::Flat
    }

    fn open_document(
        &self,
        root_name: &str,
        _context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        sink.write_line(&format!("## {}", root_name))?;
        sink.write_line("")
    }

    fn close_document(&self, _context: &RenderContext, _sink: &mut dyn LineSink) -> io::Result<()> {
        Ok(())
    }

    fn open_section(
        &self,
        section: &TypeSection,
        _context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        sink.write_line(&format!(
            "#### <a name=\"{}\"></a>{}",
            section.qualified_name, section.simple_name
        ))?;
        sink.write_line("")
    }

    fn render_identity(
        &self,
        section: &TypeSection,
        _context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        let full_name = match &section.apidoc_link {
            Some(url) => Self::link(&section.qualified_name, url),
            None => format!("`{}`", section.qualified_name),
        };
        sink.write_line(&format!("+ **Full name** : {}", full_name))?;

        if let Some(supertype) = &section.supertype {
            sink.write_line(&format!("+ **Super-type** : {}", Self::reference(supertype)))?;
        }

        if !section.subtypes.is_empty() {
            let subtypes: Vec<String> = section.subtypes.iter().map(Self::reference).collect();
            sink.write_line(&format!("+ **Sub-types** : {}", subtypes.join(", ")))?;
        }
        Ok(())
    }

    fn render_description(
        &self,
        section: &TypeSection,
        _context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        sink.write_line("")?;
        sink.write_line("")?;
        sink.write_line("")?;
        for line in self.translator.translate(&section.description).split('\n') {
            sink.write_line(line)?;
        }
        sink.write_line("")?;
        sink.write_line("")?;
        sink.write_line("")
    }

    fn render_property_table(
        &self,
        section: &TypeSection,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        let layout = context.table_layout;
        let columns: &[(&str, &str)] = match layout {
            TableLayout::TwoColumn => &[("33%", "Property"), ("66%", "Description")],
            TableLayout::ThreeColumn => {
                &[("25%", "Name"), ("25%", "Type"), ("50%", "Description")]
            }
        };

        sink.write_line("<table>")?;
        sink.write_line(&format!("<caption>{} properties</caption>", section.simple_name))?;
        sink.write_line("<colgroup>")?;
        for (width, _) in columns {
            sink.write_line(&format!("<col width=\"{}\" />", width))?;
        }
        sink.write_line("</colgroup>")?;
        sink.write_line("<thead>")?;
        sink.write_line("<tr class=\"header\">")?;
        for (_, header) in columns {
            sink.write_line(&format!("<th align=\"left\">{}</th>", header))?;
        }
        sink.write_line("</tr>")?;
        sink.write_line("</thead>")?;
        sink.write_line("<tbody>")?;

        for (i, row) in section.properties.iter().enumerate() {
            let class = if (i + 1) % 2 == 0 { "even" } else { "odd" };
            sink.write_line(&format!("<tr class=\"{}\">", class))?;
            match layout {
                TableLayout::TwoColumn => {
                    sink.write_line(&format!(
                        "<td align=\"left\"><p><strong>{}</strong></p><p><code>{}</code></p></td>",
                        row.name,
                        Self::signature(row)
                    ))?;
                }
                TableLayout::ThreeColumn => {
                    sink.write_line(&format!("<td align=\"left\"><strong>{}</strong></td>", row.name))?;
                    sink.write_line(&format!(
                        "<td align=\"left\"><code>{}</code></td>",
                        Self::signature(row)
                    ))?;
                }
            }
            sink.write_line(&format!(
                "<td><p>{}</p></td>",
                self.translator.translate(&row.description)
            ))?;
            sink.write_line("</tr>")?;
        }

        if section.properties.is_empty() {
            sink.write_line("<tr>")?;
            match layout {
                TableLayout::TwoColumn => {
                    sink.write_line(&format!("<td align=\"left\">{}</td>", NO_PROPERTY_TEXT))?;
                    sink.write_line("<td align=\"left\"></td>")?;
                }
                TableLayout::ThreeColumn => {
                    sink.write_line(&format!(
                        "<td align=\"left\" colspan=\"3\">{}</td>",
                        NO_PROPERTY_TEXT
                    ))?;
                }
            }
            sink.write_line("</tr>")?;
        }

        sink.write_line("</tbody>")?;
        sink.write_line("</table>")?;
        sink.write_line("")?;
        sink.write_line("---")
    }

    fn close_section(
        &self,
        _section: &TypeSection,
        _context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        sink.write_line("")?;
        sink.write_line("")
    }
}
