//! Fetching any record from its global id.

use crate::{
    context::SchemaContext,
    error::MalformedIdError,
    global_id::{parse_local_id, GlobalId},
    interfaces::{CONTENT_INTERFACE, TAXONOMY_INTERFACE},
    record::Record,
};

#[derive(Clone, Copy)]
pub struct NodeResolver<'a> {
    context: &'a SchemaContext,
}

impl<'a> NodeResolver<'a> {
    pub fn new(context: &'a SchemaContext) -> Self {
        Self { context }
    }

    pub fn decode(&self, token: &str) -> Result<GlobalId, MalformedIdError> {
        GlobalId::decode(token)
    }

    /// Looks up the record `type_name` points at.
    ///
    /// Concrete type names only return records of that exact type. The interface names
    /// `ContentInterface` and `TaxonomyInterface` are accepted as well and return whatever the
    /// store holds under that id. Local ids are numbers in canonical form (`1`, never `01` or
    /// `+1`), anything else finds nothing.
    pub fn fetch_by_id(&self, type_name: &str, local_id: &str) -> Option<Record> {
        let Some(id) = parse_local_id(local_id) else {
            tracing::debug!(type_name, local_id, "node id is not a canonical number");
            return None;
        };

        let registry = self.context.registry();
        let store = self.context.store();

        if type_name == CONTENT_INTERFACE {
            return store.content_by_id(id).map(Record::Content);
        }

        if type_name == TAXONOMY_INTERFACE {
            return store.term_by_id(id).map(Record::Term);
        }

        if let Some(descriptor) = registry.content_type_by_type_name(type_name) {
            return store
                .content_by_id(id)
                .filter(|record| record.content_type == descriptor.name)
                .map(Record::Content);
        }

        if let Some(descriptor) = registry.taxonomy_type_by_type_name(type_name) {
            return store
                .term_by_id(id)
                .filter(|record| record.taxonomy == descriptor.name)
                .map(Record::Term);
        }

        tracing::debug!(type_name, "node id refers to an unknown type");
        None
    }

    /// The concrete GraphQL type of an already fetched record.
    pub fn classify(&self, record: &Record) -> Option<&'a str> {
        match record {
            Record::Content(record) => self.context.content_interface().resolve_type(record),
            Record::Term(record) => self.context.taxonomy_interface().resolve_type(record),
        }
    }

    /// decode, fetch and classify, stopping at the first step that comes up empty.
    pub fn resolve(&self, token: &str) -> Result<Option<(Record, &'a str)>, MalformedIdError> {
        let id = self.decode(token)?;

        let resolved = self
            .fetch_by_id(id.type_name(), id.local_id())
            .and_then(|record| self.classify(&record).map(|type_name| (record, type_name)));

        Ok(resolved)
    }
}
