//! Exposes the content of a CMS-like store as a GraphQL schema.
//!
//! Content types and taxonomies live in a [`TypeRegistry`]. Each registered type becomes a
//! GraphQL object implementing `Node` and either `ContentInterface` or `TaxonomyInterface`,
//! and every object can be fetched back through `node(id:)` with its global id.
//!
//! ```ignore
//! let schema = ContentSchema::builder(MemoryStore::from_json(fixtures)?)
//!     .config(SchemaConfig::from_path(path)?)
//!     .with_types(|registry| {
//!         registry.register_content_type(ContentTypeDescriptor::new("product", "Things for sale"));
//!     })
//!     .build()?;
//!
//! let response = schema.execute("{ content(slug: \"mug\", contentType: \"product\") { title } }").await;
//! ```

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod config;
mod context;
mod error;
mod global_id;
mod interfaces;
mod node;
mod plugin;
mod query;
mod record;
mod registry;
mod schema;
mod store;
mod types;

pub use config::{ContentTypeConfig, SchemaConfig, TaxonomyTypeConfig};
pub use context::SchemaContext;
pub use error::{ConfigError, ErrorCode, MalformedIdError, MalformedIdReason, SchemaError};
pub use global_id::GlobalId;
pub use interfaces::{ContentInterface, TaxonomyInterface, CONTENT_INTERFACE, NODE_INTERFACE, TAXONOMY_INTERFACE};
pub use node::NodeResolver;
pub use plugin::SchemaPlugin;
pub use query::{QueryFields, QUERY_TYPE};
pub use record::{ContentRecord, ContentStatus, QueryContext, Record, SiteInfo, TermRecord};
pub use registry::{
    ContentTypeDescriptor, FieldShape, TaxonomyTypeDescriptor, TypeRegistry, DEFAULT_CONTENT_TYPE,
};
pub use schema::{ContentSchema, ContentSchemaBuilder};
pub use store::{ContentStore, MemoryStore, QueryFixture};
pub use types::{
    meta_field_resolver, resolve_content_meta, MetaFieldResolver, CONTENT_STATUS, QUERY_CONTEXT, SITE_INFO,
};

pub use async_graphql::dynamic;
