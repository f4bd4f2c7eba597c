use std::sync::Arc;

use async_graphql::dynamic::Schema;

use crate::{
    config::SchemaConfig,
    context::SchemaContext,
    error::SchemaError,
    plugin::{QueryFieldsHook, SchemaPlugin, TypesHook},
    query::{QueryFields, QUERY_TYPE},
    registry::TypeRegistry,
    store::ContentStore,
    types,
};

/// An executable GraphQL schema over a [`ContentStore`].
///
/// Registering types after [`ContentSchemaBuilder::build`] has no effect on the schema: its
/// registry is frozen inside the [`SchemaContext`].
#[derive(Clone)]
pub struct ContentSchema {
    inner: Schema,
    context: SchemaContext,
}

impl ContentSchema {
    pub fn builder(store: impl ContentStore + 'static) -> ContentSchemaBuilder {
        ContentSchemaBuilder {
            store: Arc::new(store),
            config: SchemaConfig::default(),
            registry: TypeRegistry::builtin(),
            plugins: Vec::new(),
        }
    }

    pub fn context(&self) -> &SchemaContext {
        &self.context
    }

    pub fn registry(&self) -> &TypeRegistry {
        self.context.registry()
    }

    pub async fn execute(&self, request: impl Into<async_graphql::Request>) -> async_graphql::Response {
        self.inner.execute(request).await
    }

    pub fn sdl(&self) -> String {
        self.inner.sdl()
    }

    pub fn inner(&self) -> &Schema {
        &self.inner
    }
}

pub struct ContentSchemaBuilder {
    store: Arc<dyn ContentStore>,
    config: SchemaConfig,
    registry: TypeRegistry,
    plugins: Vec<Box<dyn SchemaPlugin>>,
}

impl ContentSchemaBuilder {
    pub fn config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the built-in types as the starting point of the registry.
    pub fn registry(mut self, registry: TypeRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn plugin(mut self, plugin: impl SchemaPlugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Shorthand for a plugin that only implements [`SchemaPlugin::register_types`].
    pub fn with_types(self, hook: impl Fn(&mut TypeRegistry) + Send + Sync + 'static) -> Self {
        self.plugin(TypesHook(hook))
    }

    /// Shorthand for a plugin that only implements [`SchemaPlugin::extend_query`].
    pub fn with_query_fields(self, hook: impl Fn(&mut QueryFields) + Send + Sync + 'static) -> Self {
        self.plugin(QueryFieldsHook(hook))
    }

    pub fn build(self) -> Result<ContentSchema, SchemaError> {
        let Self {
            store,
            config,
            mut registry,
            plugins,
        } = self;

        config.apply(&mut registry)?;

        for plugin in &plugins {
            plugin.register_types(&mut registry);
        }

        registry.validate()?;

        if registry.content_type(&config.default_content_type).is_none() {
            tracing::warn!(
                content_type = %config.default_content_type,
                "default content type is not registered"
            );
        }

        let mut fields = QueryFields::with_defaults(&config);
        let context = SchemaContext::new(registry, store, config);

        let builder = types::register(Schema::build(QUERY_TYPE, None, None), context.registry());

        for plugin in &plugins {
            plugin.extend_query(&mut fields);
        }

        let query_fields = fields.len();
        let builder = builder.register(fields.into_object());

        let mut builder = plugins
            .iter()
            .fold(builder, |builder, plugin| plugin.register_schema_types(builder));

        let config = context.config();

        if let Some(depth) = config.depth_limit {
            builder = builder.limit_depth(depth);
        }

        if let Some(complexity) = config.complexity_limit {
            builder = builder.limit_complexity(complexity);
        }

        if !config.introspection {
            builder = builder.disable_introspection();
        }

        let inner = builder.data(context.clone()).finish()?;

        tracing::info!(
            content_types = context.registry().content_types().len(),
            taxonomy_types = context.registry().taxonomy_types().len(),
            query_fields,
            plugins = plugins.len(),
            "content schema built"
        );

        Ok(ContentSchema { inner, context })
    }
}
