//! The `Query` root object.

use async_graphql::{
    dynamic::{Field, FieldFuture, FieldValue, InputValue, Object, TypeRef},
    ErrorExtensions, Value,
};
use indexmap::IndexMap;

use crate::{
    config::SchemaConfig,
    global_id::parse_local_id,
    interfaces::{CONTENT_INTERFACE, NODE_INTERFACE, TAXONOMY_INTERFACE},
    types::{
        content_value, node_value, optional_i64, optional_string, schema_context, term_value, QUERY_CONTEXT, SITE_INFO,
    },
};

pub const QUERY_TYPE: &str = "Query";

/// Root fields of the schema by name, in the order they appear in the SDL.
///
/// Plugins receive it after the default fields are in place and may add, replace or drop
/// entries.
#[derive(Default)]
pub struct QueryFields {
    fields: IndexMap<String, Field>,
}

impl QueryFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default root fields: `queryContext`, `content`, `term`, `site` and `node`.
    pub fn with_defaults(config: &SchemaConfig) -> Self {
        let mut fields = Self::new();

        fields.insert("queryContext", query_context_field());
        fields.insert("content", content_field(config));
        fields.insert("term", term_field());
        fields.insert("site", site_field());
        fields.insert("node", node_field());

        fields
    }

    /// Adds a field, returning the one it replaced. The field keeps the position of the
    /// replaced one.
    pub fn insert(&mut self, name: impl Into<String>, field: Field) -> Option<Field> {
        self.fields.insert(name.into(), field)
    }

    pub fn remove(&mut self, name: &str) -> Option<Field> {
        self.fields.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn into_object(self) -> Object {
        self.fields.into_values().fold(Object::new(QUERY_TYPE), Object::field)
    }
}

fn query_context_field() -> Field {
    Field::new("queryContext", TypeRef::named_nn(QUERY_CONTEXT), |ctx| {
        FieldFuture::new(async move {
            let context = schema_context(&ctx)?;
            Ok(Some(FieldValue::owned_any(context.store().query_context())))
        })
    })
    .description("The listing the site is currently serving.")
}

/// `id` takes precedence over `slug` when both are given.
fn content_field(config: &SchemaConfig) -> Field {
    Field::new("content", TypeRef::named(CONTENT_INTERFACE), |ctx| {
        FieldFuture::new(async move {
            let context = schema_context(&ctx)?;

            if let Some(id) = optional_i64(&ctx, "id")? {
                let record = u64::try_from(id).ok().and_then(|id| context.store().content_by_id(id));

                if record.is_none() {
                    tracing::debug!(id, "no content record with this id");
                }

                return Ok(record.and_then(|record| content_value(context, record)));
            }

            let Some(slug) = optional_string(&ctx, "slug")? else {
                return Ok(None);
            };

            let content_type =
                optional_string(&ctx, "contentType")?.unwrap_or_else(|| context.config().default_content_type.clone());

            let record = context.store().content_by_slug(&slug, &content_type);

            if record.is_none() {
                tracing::debug!(%slug, %content_type, "no content record with this slug");
            }

            Ok(record.and_then(|record| content_value(context, record)))
        })
    })
    .description("A single content record, looked up by `id` or else by `slug` and `contentType`.")
    .argument(InputValue::new("id", TypeRef::named(TypeRef::INT)))
    .argument(InputValue::new("slug", TypeRef::named(TypeRef::STRING)))
    .argument(
        InputValue::new("contentType", TypeRef::named(TypeRef::STRING))
            .default_value(Value::String(config.default_content_type.clone())),
    )
}

fn term_field() -> Field {
    Field::new("term", TypeRef::named(TAXONOMY_INTERFACE), |ctx| {
        FieldFuture::new(async move {
            let context = schema_context(&ctx)?;

            let Some(id) = optional_string(&ctx, "id")? else {
                return Ok(None);
            };

            let Some(id) = parse_local_id(&id) else {
                tracing::debug!(%id, "term id is not a canonical number");
                return Ok(None);
            };

            let term = context.store().term_by_id(id);

            Ok(term.and_then(|term| term_value(context, term)))
        })
    })
    .description("A single taxonomy term.")
    .argument(InputValue::new("id", TypeRef::named(TypeRef::STRING)))
}

fn site_field() -> Field {
    Field::new("site", TypeRef::named_nn(SITE_INFO), |ctx| {
        FieldFuture::new(async move {
            let context = schema_context(&ctx)?;
            Ok(Some(FieldValue::owned_any(context.store().site_info())))
        })
    })
}

fn node_field() -> Field {
    Field::new("node", TypeRef::named(NODE_INTERFACE), |ctx| {
        FieldFuture::new(async move {
            let context = schema_context(&ctx)?;
            let token = ctx.args.try_get("id")?;
            let token = token.string()?;

            let resolved = match context.node_resolver().resolve(token) {
                Ok(resolved) => resolved,
                Err(error) => {
                    tracing::debug!(%error, "malformed node id");

                    // Reported on this field only, so `node` is null and its siblings still resolve.
                    let error = error.extend().into_server_error(ctx.ctx.item.pos);
                    ctx.ctx.add_error(ctx.ctx.set_error_path(error));

                    return Ok(None);
                }
            };

            Ok(resolved.map(|(record, type_name)| node_value(record, type_name)))
        })
    })
    .description("Fetches any object by its global id.")
    .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::ID)))
}
