//! Runtime type resolution for the `ContentInterface` and `TaxonomyInterface` GraphQL interfaces.

use crate::{
    record::{ContentRecord, TermRecord},
    registry::TypeRegistry,
};

pub const NODE_INTERFACE: &str = "Node";
pub const CONTENT_INTERFACE: &str = "ContentInterface";
pub const TAXONOMY_INTERFACE: &str = "TaxonomyInterface";

/// Picks the concrete content type of a record from its `content_type` discriminator.
#[derive(Clone, Copy)]
pub struct ContentInterface<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> ContentInterface<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// The GraphQL type name of `record`, `None` if its content type isn't registered.
    pub fn resolve_type(&self, record: &ContentRecord) -> Option<&'a str> {
        let resolved = self
            .registry
            .content_type(&record.content_type)
            .map(|descriptor| descriptor.type_name.as_str());

        if resolved.is_none() {
            tracing::debug!(
                id = record.id,
                content_type = %record.content_type,
                "content record has an unregistered content type"
            );
        }

        resolved
    }
}

/// Picks the concrete taxonomy type of a term from its `taxonomy` discriminator.
#[derive(Clone, Copy)]
pub struct TaxonomyInterface<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> TaxonomyInterface<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// The GraphQL type name of `record`, `None` if its taxonomy isn't registered.
    pub fn resolve_type(&self, record: &TermRecord) -> Option<&'a str> {
        let resolved = self
            .registry
            .taxonomy_type(&record.taxonomy)
            .map(|descriptor| descriptor.type_name.as_str());

        if resolved.is_none() {
            tracing::debug!(
                id = record.id,
                taxonomy = %record.taxonomy,
                "term has an unregistered taxonomy"
            );
        }

        resolved
    }
}
