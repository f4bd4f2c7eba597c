use std::sync::Arc;

use crate::{
    config::SchemaConfig,
    interfaces::{ContentInterface, TaxonomyInterface},
    node::NodeResolver,
    registry::TypeRegistry,
    store::ContentStore,
};

/// Everything resolvers need, frozen once the schema is built.
///
/// It is stored in the schema data, so custom resolvers can get it with
/// `ctx.data::<SchemaContext>()`.
#[derive(Clone)]
pub struct SchemaContext {
    inner: Arc<Inner>,
}

struct Inner {
    registry: TypeRegistry,
    store: Arc<dyn ContentStore>,
    config: SchemaConfig,
}

impl SchemaContext {
    pub(crate) fn new(registry: TypeRegistry, store: Arc<dyn ContentStore>, config: SchemaConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                registry,
                store,
                config,
            }),
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.inner.registry
    }

    pub fn store(&self) -> &dyn ContentStore {
        self.inner.store.as_ref()
    }

    pub fn config(&self) -> &SchemaConfig {
        &self.inner.config
    }

    pub fn content_interface(&self) -> ContentInterface<'_> {
        ContentInterface::new(self.registry())
    }

    pub fn taxonomy_interface(&self) -> TaxonomyInterface<'_> {
        TaxonomyInterface::new(self.registry())
    }

    pub fn node_resolver(&self) -> NodeResolver<'_> {
        NodeResolver::new(self)
    }
}
