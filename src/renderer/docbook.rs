//! DocBook 4.4 rendering. Every type becomes a `<section>` whose id is the
//! qualified type name, nested inside the section of its rendered supertype.

use crate::markup::{InlineMarkupTranslator, MarkupDialect};
use crate::output::LineSink;
use crate::renderer::components::*;
use crate::renderer::traits::*;
use std::io;

pub struct DocbookRenderer {
    translator: InlineMarkupTranslator,
}

impl DocbookRenderer {
    pub fn new() -> Self {
        Self {
            translator: InlineMarkupTranslator::new(MarkupDialect::Docbook),
        }
    }

    fn reference(&self, reference: &TypeReference) -> String {
        if reference.cross_reference {
            format!(
                "<code><link linkend='{}'>{}</link></code>",
                reference.qualified_name, reference.simple_name
            )
        } else {
            format!("<code>{}</code>", reference.simple_name)
        }
    }

    fn write_list_item(
        &self,
        context: &RenderContext,
        sink: &mut dyn LineSink,
        label: &str,
        value: &str,
    ) -> io::Result<()> {
        IndentationHelper::write_nested(context, 2, sink, "<listitem>")?;
        IndentationHelper::write_nested(
            context,
            3,
            sink,
            &format!(
                "<para><emphasis role='bold'>{}</emphasis> : {}</para>",
                label, value
            ),
        )?;
        IndentationHelper::write_nested(context, 2, sink, "</listitem>")
    }

    fn signature(&self, row: &crate::properties::PropertyRow) -> String {
        TypeRenderer.render_signature(&row.signature, &|text, url| {
            format!("<ulink url='{}'>{}</ulink>", url, text)
        })
    }
}

impl Default for DocbookRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRenderer for DocbookRenderer {
    fn extension(&self) -> &'static str {
        ".xml"
    }

    fn default_table_layout(&self) -> TableLayout {
        TableLayout::ThreeColumn
    }

    fn boundary(&self) -> SectionBoundary {
        SectionBoundary::Nested
    }

    fn write_preamble(&self, sink: &mut dyn LineSink) -> io::Result<()> {
        sink.write_line("<?xml version='1.0' encoding='UTF-8'?>")?;
        sink.write_line("<!DOCTYPE chapter PUBLIC '-//OASIS//DTD DocBook XML V4.4//EN'")?;
        sink.write_line("  'http://www.oasis-open.org/docbook/xml/4.4/docbookx.dtd'>")
    }

    fn open_document(
        &self,
        root_name: &str,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        IndentationHelper::write(context, sink, "<section>")?;
        IndentationHelper::write(
            context,
            sink,
            &format!("<title>Reference for {} hierarchy</title>", root_name),
        )?;
        IndentationHelper::write_nested(context, 1, sink, "<para></para>")
    }

    fn close_document(&self, context: &RenderContext, sink: &mut dyn LineSink) -> io::Result<()> {
        IndentationHelper::write(context, sink, "</section>")
    }

    fn open_section(
        &self,
        section: &TypeSection,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        IndentationHelper::write(
            context,
            sink,
            &format!("<section id='{}'>", section.qualified_name),
        )?;
        IndentationHelper::write_nested(
            context,
            1,
            sink,
            &format!("<title>{}</title>", section.simple_name),
        )
    }

    fn render_identity(
        &self,
        section: &TypeSection,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        IndentationHelper::write_nested(context, 1, sink, "<itemizedlist>")?;

        let full_name = TypeRenderer.hyphenate_dotted(&section.qualified_name);
        let full_name = match &section.apidoc_link {
            Some(url) => format!("<code><ulink url='{}'>{}</ulink></code>", url, full_name),
            None => format!("<code>{}</code>", full_name),
        };
        self.write_list_item(context, sink, "Full name", &full_name)?;

        if let Some(supertype) = &section.supertype {
            self.write_list_item(context, sink, "Supertype", &self.reference(supertype))?;
        }

        if !section.subtypes.is_empty() {
            let subtypes: Vec<String> = section
                .subtypes
                .iter()
                .map(|subtype| self.reference(subtype))
                .collect();
            self.write_list_item(context, sink, "Subtypes", &subtypes.join(", "))?;
        }

        IndentationHelper::write_nested(context, 1, sink, "</itemizedlist>")
    }

    fn render_description(
        &self,
        section: &TypeSection,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        IndentationHelper::write_nested(
            context,
            1,
            sink,
            &format!(
                "<para>{}</para>",
                self.translator.translate(&section.description)
            ),
        )?;
        IndentationHelper::write_nested(context, 1, sink, "<para></para>")
    }

    fn render_property_table(
        &self,
        section: &TypeSection,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        let layout = context.table_layout;
        let columns: &[(&str, &str, &str)] = match layout {
            TableLayout::ThreeColumn => &[
                ("name", "1*", "Name"),
                ("type", "1*", "Type"),
                ("description", "2*", "Description"),
            ],
            TableLayout::TwoColumn => &[
                ("name", "1*", "Property"),
                ("description", "2*", "Description"),
            ],
        };

        IndentationHelper::write_nested(
            context,
            1,
            sink,
            "<table colsep='0' rowsep='1' tabstyle='splitable' frame='topbot'>",
        )?;
        IndentationHelper::write_nested(context, 1, sink, "<?dbfo keep-together='auto'?>")?;
        IndentationHelper::write_nested(
            context,
            2,
            sink,
            &format!("<title>{} properties</title>", section.simple_name),
        )?;
        IndentationHelper::write_nested(
            context,
            2,
            sink,
            &format!("<tgroup cols='{}'>", columns.len()),
        )?;
        for (name, width, _) in columns {
            IndentationHelper::write_nested(
                context,
                3,
                sink,
                &format!("<colspec colname='{}' colwidth='{}' />", name, width),
            )?;
        }

        IndentationHelper::write_nested(context, 3, sink, "<thead>")?;
        IndentationHelper::write_nested(context, 4, sink, "<row>")?;
        for (_, _, header) in columns {
            IndentationHelper::write_nested(
                context,
                5,
                sink,
                &format!("<entry align='left'>{}</entry>", header),
            )?;
        }
        IndentationHelper::write_nested(context, 4, sink, "</row>")?;
        IndentationHelper::write_nested(context, 3, sink, "</thead>")?;

        IndentationHelper::write_nested(context, 3, sink, "<tbody>")?;
        for row in &section.properties {
            let description = format!(
                "<entry><para>{}</para></entry>",
                self.translator.translate(&row.description)
            );
            IndentationHelper::write_nested(context, 4, sink, "<row>")?;
            match layout {
                TableLayout::ThreeColumn => {
                    IndentationHelper::write_nested(
                        context,
                        5,
                        sink,
                        &format!("<entry>{}</entry>", row.name),
                    )?;
                    IndentationHelper::write_nested(
                        context,
                        5,
                        sink,
                        &format!("<entry><code>{}</code></entry>", self.signature(row)),
                    )?;
                }
                TableLayout::TwoColumn => {
                    IndentationHelper::write_nested(
                        context,
                        5,
                        sink,
                        &format!(
                            "<entry><para><emphasis role='bold'>{}</emphasis></para><para><code>{}</code></para></entry>",
                            row.name,
                            self.signature(row)
                        ),
                    )?;
                }
            }
            IndentationHelper::write_nested(context, 5, sink, &description)?;
            IndentationHelper::write_nested(context, 4, sink, "</row>")?;
        }
        if section.properties.is_empty() {
            IndentationHelper::write_nested(context, 4, sink, "<row>")?;
            IndentationHelper::write_nested(
                context,
                5,
                sink,
                &format!(
                    "<entry namest='name' nameend='description'>{}</entry>",
                    NO_PROPERTY_TEXT
                ),
            )?;
            IndentationHelper::write_nested(context, 4, sink, "</row>")?;
        }
        IndentationHelper::write_nested(context, 3, sink, "</tbody>")?;
        IndentationHelper::write_nested(context, 2, sink, "</tgroup>")?;
        IndentationHelper::write_nested(context, 1, sink, "</table>")
    }

    fn close_section(
        &self,
        _section: &TypeSection,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()> {
        IndentationHelper::write_nested(context, 1, sink, "<para></para>")?;
        IndentationHelper::write_nested(context, 1, sink, "<para></para>")?;
        IndentationHelper::write(context, sink, "</section>")
    }
}
