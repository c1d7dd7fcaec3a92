use crate::error::BeanDocError;
use crate::output::LineSink;
use crate::properties::PropertyRow;
use serde::Deserialize;
use std::io;
use std::str::FromStr;

/// Configuration context for rendering operations
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Number of enclosing rendered sections
    pub depth: usize,
    pub table_layout: TableLayout,
}

impl RenderContext {
    pub fn new(table_layout: TableLayout) -> Self {
        Self {
            depth: 0,
            table_layout,
        }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            depth,
            table_layout: self.table_layout,
        }
    }

    pub fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

/// Output markup of a generated document
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Docbook,
    Markdown,
}

/// Column arrangement of a property table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TableLayout {
    /// Property name with its signature, then description
    TwoColumn,
    /// Name, type and description in separate columns
    ThreeColumn,
}

impl FromStr for TableLayout {
    type Err = BeanDocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "two-column" | "2" => Ok(TableLayout::TwoColumn),
            "three-column" | "3" => Ok(TableLayout::ThreeColumn),
            other => Err(BeanDocError::invalid_option("tableLayout", other)),
        }
    }
}

/// How a section ends relative to the sections of its subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBoundary {
    /// Subtype sections are emitted inside the section before it closes
    Nested,
    /// The section closes before any subtype section starts
    Flat,
}

/// Reference from one section to a related type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeReference {
    pub qualified_name: String,
    pub simple_name: String,
    /// Whether the reference may point at the type's own section
    pub cross_reference: bool,
}

/// Everything a renderer needs to know about one documented type
#[derive(Debug, Clone)]
pub struct TypeSection {
    pub qualified_name: String,
    pub simple_name: String,
    /// External API documentation page of the type
    pub apidoc_link: Option<String>,
    pub supertype: Option<TypeReference>,
    pub subtypes: Vec<TypeReference>,
    pub description: String,
    pub properties: Vec<PropertyRow>,
}

/// Markup vocabulary for one output format.
///
/// The tree walker drives every implementation identically; implementations
/// only decide how boundaries, identity lines, descriptions and tables look.
pub trait SectionRenderer {
    fn extension(&self) -> &'static str;

    fn default_table_layout(&self) -> TableLayout;

    fn boundary(&self) -> SectionBoundary;

    fn write_preamble(&self, _sink: &mut dyn LineSink) -> io::Result<()> {
        Ok(())
    }

    fn open_document(
        &self,
        root_name: &str,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()>;

    fn close_document(&self, context: &RenderContext, sink: &mut dyn LineSink) -> io::Result<()>;

    fn open_section(
        &self,
        section: &TypeSection,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()>;

    fn render_identity(
        &self,
        section: &TypeSection,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()>;

    fn render_description(
        &self,
        section: &TypeSection,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()>;

    fn render_property_table(
        &self,
        section: &TypeSection,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()>;

    fn close_section(
        &self,
        section: &TypeSection,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<()>;
}
