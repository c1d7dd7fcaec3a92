//! Decides which types are domain-owned and where their API documentation lives.

use crate::config::Config;
use crate::parser::TypeDescriptor;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct LinkResolver<'a> {
    apidoc_url: Option<&'a str>,
    domain_prefix: Option<&'a str>,
    known_types: HashSet<&'a str>,
}

impl<'a> LinkResolver<'a> {
    pub fn new(config: &'a Config, types: &'a [TypeDescriptor]) -> Self {
        Self {
            apidoc_url: config.apidoc_url.as_deref(),
            domain_prefix: config.domain_prefix.as_deref(),
            known_types: types.iter().map(|t| t.qualified_name.as_str()).collect(),
        }
    }

    /// With a domain prefix, ownership is a prefix match on the qualified
    /// name; without one, every type present in the descriptor collection is
    /// domain-owned.
    pub fn is_domain_owned(&self, qualified_name: &str) -> bool {
        match self.domain_prefix {
            Some(prefix) => qualified_name.starts_with(prefix),
            None => self.known_types.contains(qualified_name),
        }
    }

    /// API documentation page of a type, e.g. `{base}/org/acme/View.html`.
    pub fn apidoc_url(&self, qualified_name: &str) -> Option<String> {
        self.apidoc_url.map(|base| {
            format!(
                "{}/{}.html",
                base.trim_end_matches('/'),
                qualified_name.replace('.', "/")
            )
        })
    }

    /// API documentation link for domain-owned types only.
    pub fn type_link(&self, qualified_name: &str) -> Option<String> {
        if self.is_domain_owned(qualified_name) {
            self.apidoc_url(qualified_name)
        } else {
            None
        }
    }
}
