//! Depth-bounded, filtered traversal of a [`ClassHierarchy`].

use crate::config::Config;
use crate::hierarchy::{ClassHierarchy, NodeId, TypeNode};
use crate::links::LinkResolver;
use crate::output::LineSink;
use crate::parser::simple_name_of;
use crate::properties::PropertyExtractor;
use crate::renderer::{RenderContext, SectionBoundary, SectionRenderer, TypeReference, TypeSection};
use std::io;
use tracing::{debug, warn};

/// Per-node visiting policy derived from a [`Config`]
#[derive(Debug, Clone, Copy)]
pub struct TreeFilter<'c> {
    config: &'c Config,
}

impl<'c> TreeFilter<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Whether the subtree rooted at `node` is visited at all.
    pub fn should_descend(&self, node: &TypeNode<'_>) -> bool {
        if self.config.excluded_subtrees.contains(node.qualified_name()) {
            return false;
        }
        match &self.config.included_packages {
            None => true,
            Some(packages) => packages
                .iter()
                .any(|package| node.descriptor.package.contains(package.as_str())),
        }
    }

    /// Whether `node` gets its own section. Descendants are unaffected.
    pub fn should_render(&self, node: &TypeNode<'_>) -> bool {
        !node.descriptor.is_internal_or_deprecated()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraversalState {
    /// Edges between the visited node and the root
    pub depth: usize,
    /// Sections currently open around the visited node
    pub open_sections: usize,
}

impl TraversalState {
    fn child(self, rendered: bool) -> Self {
        Self {
            depth: self.depth + 1,
            open_sections: self.open_sections + usize::from(rendered),
        }
    }
}

/// Outcome of one walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub root_found: bool,
    pub visited: usize,
    /// Qualified names of rendered types in document order
    pub rendered: Vec<String>,
}

pub struct TreeWalker<'h, 'a> {
    hierarchy: &'h ClassHierarchy<'a>,
    filter: TreeFilter<'h>,
    max_depth: Option<usize>,
    links: &'h LinkResolver<'a>,
}

impl<'h, 'a> TreeWalker<'h, 'a> {
    pub fn new(
        hierarchy: &'h ClassHierarchy<'a>,
        config: &'h Config,
        links: &'h LinkResolver<'a>,
    ) -> Self {
        Self {
            hierarchy,
            filter: TreeFilter::new(config),
            max_depth: config.max_depth,
            links,
        }
    }

    fn can_recurse(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth < max)
    }

    /// Walks from the root, emitting nothing when the root is absent or
    /// filtered out by the config.
    pub fn walk(
        &self,
        renderer: &dyn SectionRenderer,
        context: &RenderContext,
        sink: &mut dyn LineSink,
    ) -> io::Result<WalkSummary> {
        let mut summary = WalkSummary::default();
        let Some(root) = self.hierarchy.root() else {
            debug!("root type not found, document left empty");
            return Ok(summary);
        };
        summary.root_found = true;

        let root_node = self.hierarchy.node(root);
        if !self.filter.should_descend(root_node) {
            warn!(
                root = root_node.qualified_name(),
                "root type is excluded by the config, document left empty"
            );
            return Ok(summary);
        }
        renderer.open_document(root_node.simple_name(), context, sink)?;
        let state = TraversalState {
            depth: 0,
            open_sections: context.depth + 1,
        };
        self.visit(root, state, renderer, context, sink, &mut summary)?;
        renderer.close_document(context, sink)?;

        debug!(
            visited = summary.visited,
            rendered = summary.rendered.len(),
            "walked hierarchy"
        );
        Ok(summary)
    }

    fn visit(
        &self,
        id: NodeId,
        state: TraversalState,
        renderer: &dyn SectionRenderer,
        context: &RenderContext,
        sink: &mut dyn LineSink,
        summary: &mut WalkSummary,
    ) -> io::Result<()> {
        summary.visited += 1;
        let node = self.hierarchy.node(id);
        let section_context = context.with_depth(state.open_sections);

        let section = if self.filter.should_render(node) {
            let section = self.section(id, state.depth);
            renderer.open_section(&section, &section_context, sink)?;
            renderer.render_identity(&section, &section_context, sink)?;
            renderer.render_description(&section, &section_context, sink)?;
            renderer.render_property_table(&section, &section_context, sink)?;
            if renderer.boundary() == SectionBoundary::Flat {
                renderer.close_section(&section, &section_context, sink)?;
            }
            summary.rendered.push(section.qualified_name.clone());
            Some(section)
        } else {
            debug!(type_name = node.qualified_name(), "suppressed from rendering");
            None
        };

        if self.can_recurse(state.depth) {
            let child_state = state.child(section.is_some());
            for child in self.hierarchy.sorted_children(id) {
                if self.filter.should_descend(self.hierarchy.node(child)) {
                    self.visit(child, child_state, renderer, context, sink, summary)?;
                }
            }
        }

        if let Some(section) = section {
            if renderer.boundary() == SectionBoundary::Nested {
                renderer.close_section(&section, &section_context, sink)?;
            }
        }
        Ok(())
    }

    /// Direct children that will get a section of their own in this walk.
    pub fn listed_subtypes(&self, id: NodeId, depth: usize) -> Vec<NodeId> {
        if !self.can_recurse(depth) {
            return Vec::new();
        }
        self.hierarchy
            .sorted_children(id)
            .into_iter()
            .filter(|&child| {
                let node = self.hierarchy.node(child);
                self.filter.should_descend(node) && self.filter.should_render(node)
            })
            .collect()
    }

    /// Supertype reference of a visited node. The root's supertype has no
    /// section in this walk and is never cross-referenced.
    fn supertype(&self, id: NodeId) -> Option<TypeReference> {
        let node = self.hierarchy.node(id);
        let qualified_name = node.descriptor.superclass_name()?;
        if !self.links.is_domain_owned(qualified_name) {
            return None;
        }

        let known = self.hierarchy.get(qualified_name).map(|id| self.hierarchy.node(id));
        Some(TypeReference {
            qualified_name: qualified_name.to_string(),
            simple_name: known
                .map(|n| n.simple_name())
                .unwrap_or_else(|| simple_name_of(qualified_name))
                .to_string(),
            cross_reference: self.hierarchy.root() != Some(id)
                && known.map_or(false, |n| self.filter.should_render(n)),
        })
    }

    fn section(&self, id: NodeId, depth: usize) -> TypeSection {
        let node = self.hierarchy.node(id);
        let subtypes = self
            .listed_subtypes(id, depth)
            .into_iter()
            .map(|child| {
                let child = self.hierarchy.node(child);
                TypeReference {
                    qualified_name: child.qualified_name().to_string(),
                    simple_name: child.simple_name().to_string(),
                    cross_reference: true,
                }
            })
            .collect();

        TypeSection {
            qualified_name: node.qualified_name().to_string(),
            simple_name: node.simple_name().to_string(),
            apidoc_link: self.links.apidoc_url(node.qualified_name()),
            supertype: self.supertype(id),
            subtypes,
            description: node.descriptor.comment.clone(),
            properties: PropertyExtractor::new(self.links).extract(node.descriptor),
        }
    }
}
