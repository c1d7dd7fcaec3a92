use crate::config::Config;
use crate::hierarchy::ClassHierarchy;
use crate::links::LinkResolver;
use crate::output::LineSink;
use crate::renderer::docbook::DocbookRenderer;
use crate::renderer::markdown::MarkdownRenderer;
use crate::renderer::traits::*;
use crate::walker::{TreeWalker, WalkSummary};
use std::io;

impl OutputFormat {
    pub fn section_renderer(self) -> Box<dyn SectionRenderer> {
        match self {
            OutputFormat::Docbook => Box::new(DocbookRenderer::new()),
            OutputFormat::Markdown => Box::new(MarkdownRenderer::new()),
        }
    }
}

/// Renders a whole document: format preamble followed by the walked hierarchy
pub struct DocumentRenderer {
    sections: Box<dyn SectionRenderer>,
}

impl DocumentRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            sections: format.section_renderer(),
        }
    }

    pub fn extension(&self) -> &'static str {
        self.sections.extension()
    }

    pub fn render(
        &self,
        hierarchy: &ClassHierarchy<'_>,
        config: &Config,
        links: &LinkResolver<'_>,
        sink: &mut dyn LineSink,
    ) -> io::Result<WalkSummary> {
        self.sections.write_preamble(sink)?;

        let layout = config
            .table_layout
            .unwrap_or_else(|| self.sections.default_table_layout());
        let context = RenderContext::new(layout);

        TreeWalker::new(hierarchy, config, links).walk(self.sections.as_ref(), &context, sink)
    }
}
