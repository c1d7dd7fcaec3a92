//! Setter-backed property extraction.
//!
//! A property is a public `setXxx` method taking exactly one parameter and
//! carrying no internal/deprecated marker. Each one becomes a format-neutral
//! [`PropertyRow`] whose type signature keeps generic arguments as a tree so
//! renderers can link every segment separately.

use crate::links::LinkResolver;
use crate::parser::{MethodDescriptor, TypeDescriptor, TypeRef, Visibility};
use std::collections::BTreeMap;
use tracing::{debug, warn};

const SETTER_PREFIX: &str = "set";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSignature {
    pub simple_name: String,
    pub qualified_name: String,
    pub link: Option<String>,
    pub arguments: Vec<TypeSignature>,
}

impl TypeSignature {
    pub fn resolve(ty: &TypeRef, links: &LinkResolver<'_>) -> Self {
        Self {
            simple_name: ty.simple_name().to_string(),
            qualified_name: ty.qualified_name.clone(),
            link: links.type_link(&ty.qualified_name),
            arguments: ty
                .type_arguments
                .iter()
                .map(|argument| Self::resolve(argument, links))
                .collect(),
        }
    }
}

impl std::fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.simple_name)?;
        if !self.arguments.is_empty() {
            let arguments: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
            write!(f, "<{}>", arguments.join(", "))?;
        }
        Ok(())
    }
}

/// One row of a property table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub name: String,
    pub signature: TypeSignature,
    pub description: String,
}

/// `setFirstName` becomes `firstName`; anything that is not a setter name yields `None`.
pub fn property_name(method_name: &str) -> Option<String> {
    let rest = method_name.strip_prefix(SETTER_PREFIX)?;
    let mut chars = rest.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

pub struct PropertyExtractor<'l, 'a> {
    links: &'l LinkResolver<'a>,
}

impl<'l, 'a> PropertyExtractor<'l, 'a> {
    pub fn new(links: &'l LinkResolver<'a>) -> Self {
        Self { links }
    }

    fn is_documented_setter(method: &MethodDescriptor) -> bool {
        method.visibility == Visibility::Public
            && !method.is_internal_or_deprecated()
            && property_name(&method.name).is_some()
    }

    /// Documented properties of a type, sorted by name. A later overload of
    /// the same property replaces the earlier one.
    pub fn extract(&self, descriptor: &TypeDescriptor) -> Vec<PropertyRow> {
        let mut rows: BTreeMap<String, PropertyRow> = BTreeMap::new();

        for method in descriptor.methods.iter().filter(|m| Self::is_documented_setter(m)) {
            let Some(name) = property_name(&method.name) else {
                continue;
            };

            let parameter = match method.parameters.as_slice() {
                [parameter] => parameter,
                [] => {
                    warn!(
                        type_name = %descriptor.qualified_name,
                        method = %method.name,
                        "setter without parameter, skipping property"
                    );
                    continue;
                }
                _ => {
                    debug!(
                        type_name = %descriptor.qualified_name,
                        method = %method.name,
                        "multi-parameter method is not a property setter"
                    );
                    continue;
                }
            };

            let row = PropertyRow {
                name: name.clone(),
                signature: TypeSignature::resolve(&parameter.ty, self.links),
                description: method.comment.clone(),
            };
            rows.insert(name, row);
        }

        rows.into_values().collect()
    }
}
