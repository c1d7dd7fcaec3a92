//! Class hierarchy reconstruction.
//!
//! Turns the flat descriptor collection into a forest of [`TypeNode`]s linked
//! by their supertype names. Nodes live in an arena and refer to each other by
//! [`NodeId`]; the structure is never mutated once [`ClassHierarchy::build`]
//! returns.

use crate::error::{BeanDocError, BeanDocResult};
use crate::parser::TypeDescriptor;
use indexmap::IndexMap;
use tracing::{debug, warn};

pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct TypeNode<'a> {
    pub descriptor: &'a TypeDescriptor,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl<'a> TypeNode<'a> {
    fn new(descriptor: &'a TypeDescriptor) -> Self {
        Self {
            descriptor,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn qualified_name(&self) -> &'a str {
        &self.descriptor.qualified_name
    }

    pub fn simple_name(&self) -> &'a str {
        self.descriptor.simple_name()
    }

    /// Direct subclasses in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug)]
pub struct ClassHierarchy<'a> {
    nodes: Vec<TypeNode<'a>>,
    index: IndexMap<&'a str, NodeId>,
    root: Option<NodeId>,
}

impl<'a> ClassHierarchy<'a> {
    /// Builds the forest of public classes and resolves `root_class_name`.
    ///
    /// Interfaces and non-public types never enter the hierarchy. A supertype
    /// cycle (including a type naming itself as its supertype) is rejected
    /// before any link is made.
    pub fn build(types: &'a [TypeDescriptor], root_class_name: &str) -> BeanDocResult<Self> {
        let mut nodes = Vec::new();
        let mut index = IndexMap::new();

        for descriptor in types.iter().filter(|d| d.is_public_class()) {
            let id = nodes.len();
            nodes.push(TypeNode::new(descriptor));
            if index.insert(descriptor.qualified_name.as_str(), id).is_some() {
                warn!(
                    type_name = %descriptor.qualified_name,
                    "duplicate type descriptor, keeping the last one"
                );
            }
        }

        let mut hierarchy = Self {
            root: index.get(root_class_name).copied(),
            nodes,
            index,
        };

        hierarchy.check_acyclic()?;
        hierarchy.link();

        debug!(
            types = hierarchy.index.len(),
            root = root_class_name,
            found = hierarchy.root.is_some(),
            "built class hierarchy"
        );
        Ok(hierarchy)
    }

    fn supertype_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id]
            .descriptor
            .superclass_name()
            .and_then(|name| self.index.get(name))
            .copied()
    }

    fn check_acyclic(&self) -> BeanDocResult<()> {
        let mut settled = vec![false; self.nodes.len()];

        for &start in self.index.values() {
            let mut chain: Vec<NodeId> = Vec::new();
            let mut current = Some(start);

            while let Some(id) = current {
                if settled[id] {
                    break;
                }
                if let Some(pos) = chain.iter().position(|&seen| seen == id) {
                    let mut names: Vec<String> = chain[pos..]
                        .iter()
                        .map(|&n| self.nodes[n].qualified_name().to_string())
                        .collect();
                    names.push(self.nodes[id].qualified_name().to_string());
                    return Err(BeanDocError::CyclicHierarchy { chain: names });
                }
                chain.push(id);
                current = self.supertype_of(id);
            }

            for id in chain {
                settled[id] = true;
            }
        }

        Ok(())
    }

    fn link(&mut self) {
        let links: Vec<(NodeId, NodeId)> = self
            .index
            .values()
            .filter_map(|&id| self.supertype_of(id).map(|parent| (parent, id)))
            .collect();

        for (parent, child) in links {
            self.nodes[parent].children.push(child);
            self.nodes[child].parent = Some(parent);
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &TypeNode<'a> {
        &self.nodes[id]
    }

    pub fn get(&self, qualified_name: &str) -> Option<NodeId> {
        self.index.get(qualified_name).copied()
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.index.contains_key(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Children ordered by simple name, case-insensitively, ties kept in insertion order.
    pub fn sorted_children(&self, id: NodeId) -> Vec<NodeId> {
        let mut children = self.nodes[id].children.clone();
        children.sort_by_cached_key(|&child| self.nodes[child].simple_name().to_lowercase());
        children
    }

    /// Ancestors from the direct supertype up to the top of the forest.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut ancestors = Vec::new();
        let mut current = self.nodes[id].parent;
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.nodes[parent].parent;
        }
        ancestors
    }
}
