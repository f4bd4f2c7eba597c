//! Extension points run while a schema is being built.

use async_graphql::dynamic::SchemaBuilder;

use crate::{query::QueryFields, registry::TypeRegistry};

/// Adds to or overrides the types and root fields of a schema.
///
/// Each hook runs once per build, in the order plugins were added to the builder:
/// `register_types` once the registry holds the built-in and configured types, then
/// `extend_query` once the default root fields are in place, and finally
/// `register_schema_types` for any extra GraphQL types the new fields refer to.
pub trait SchemaPlugin: Send + Sync {
    fn register_types(&self, registry: &mut TypeRegistry) {
        let _ = registry;
    }

    fn extend_query(&self, fields: &mut QueryFields) {
        let _ = fields;
    }

    fn register_schema_types(&self, builder: SchemaBuilder) -> SchemaBuilder {
        builder
    }
}

pub(crate) struct TypesHook<F>(pub(crate) F);

impl<F> SchemaPlugin for TypesHook<F>
where
    F: Fn(&mut TypeRegistry) + Send + Sync,
{
    fn register_types(&self, registry: &mut TypeRegistry) {
        (self.0)(registry)
    }
}

pub(crate) struct QueryFieldsHook<F>(pub(crate) F);

impl<F> SchemaPlugin for QueryFieldsHook<F>
where
    F: Fn(&mut QueryFields) + Send + Sync,
{
    fn extend_query(&self, fields: &mut QueryFields) {
        (self.0)(fields)
    }
}
