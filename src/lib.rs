//! # beandoc
//!
//! Reference documentation for class hierarchies. A flat collection of
//! reflected type descriptors is rebuilt into a class tree, walked from a
//! configured root type, and rendered section by section as DocBook or
//! Markdown. Each section lists the type's identity, its supertype and
//! subtypes, its description and a table of its setter-backed properties.

pub mod config;
pub mod error;
pub mod generator;
pub mod hierarchy;
pub mod links;
pub mod markup;
pub mod output;
pub mod parser;
pub mod properties;
pub mod renderer;
pub mod walker;

pub use config::{BatchConfig, Config};
pub use error::{BeanDocError, BeanDocResult};
pub use generator::{generate, generate_batch, render_config, BatchReport, ConfigOutcome};
pub use hierarchy::{ClassHierarchy, NodeId, TypeNode};
pub use links::LinkResolver;
pub use markup::{InlineMarkupTranslator, MarkupDialect};
pub use output::{FileSinkProvider, LineSink, MemorySinkProvider, SinkProvider, WriterSink};
pub use parser::{DescriptorParser, MethodDescriptor, ParameterDescriptor, TypeDescriptor, TypeRef};
pub use properties::{PropertyExtractor, PropertyRow, TypeSignature};
pub use renderer::{OutputFormat, SectionRenderer, TableLayout};
pub use walker::{TraversalState, TreeFilter, TreeWalker, WalkSummary};

#[cfg(test)]
mod tests;
