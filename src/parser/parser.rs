use crate::error::BeanDocResult;
use crate::parser::types::*;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

// Accepted shapes of a descriptor document
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DescriptorDocument {
    Bare(Vec<TypeDescriptor>),
    Wrapped { types: Vec<TypeDescriptor> },
}

/// Loads the flat type descriptor collection produced by an external reflection tool.
pub struct DescriptorParser;

impl DescriptorParser {
    pub fn parse_str(json: &str) -> BeanDocResult<Vec<TypeDescriptor>> {
        let document: DescriptorDocument = serde_json::from_str(json)?;
        let mut types = match document {
            DescriptorDocument::Bare(types) => types,
            DescriptorDocument::Wrapped { types } => types,
        };

        for descriptor in &mut types {
            if descriptor.package.is_empty() {
                descriptor.package = package_of(&descriptor.qualified_name).to_string();
            }
            if descriptor.superclass.is_some() && descriptor.superclass_name().is_none() {
                warn!(
                    type_name = %descriptor.qualified_name,
                    "blank supertype reference, treating type as unrooted"
                );
            }
        }

        debug!(count = types.len(), "parsed type descriptors");
        Ok(types)
    }

    pub fn parse_file(path: &Path) -> BeanDocResult<Vec<TypeDescriptor>> {
        let json = std::fs::read_to_string(path)?;
        Self::parse_str(&json)
    }
}
