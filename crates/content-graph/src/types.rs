//! GraphQL types generated from the registry, built with the `async_graphql::dynamic` API.
//!
//! Every concrete object implements `Node` plus the interface of its kind. Resolvers read their
//! parent record out of the [`FieldValue`] it was wrapped in and reach the store through the
//! [`SchemaContext`] kept in the schema data.

use std::any::Any;

use async_graphql::{
    dynamic::{
        Enum, EnumItem, Field, FieldFuture, FieldValue, Interface, InterfaceField, ResolverContext, SchemaBuilder,
        TypeRef,
    },
    Value,
};
use strum::IntoEnumIterator;

use crate::{
    context::SchemaContext,
    error::ErrorCode,
    global_id::GlobalId,
    interfaces::{CONTENT_INTERFACE, NODE_INTERFACE, TAXONOMY_INTERFACE},
    query::QUERY_TYPE,
    record::{ContentRecord, ContentStatus, Record, TermRecord},
    registry::TypeRegistry,
};

mod content;
mod query_context;
mod site;
mod term;

pub use content::resolve_content_meta;
pub(crate) use content::FIELD_NAMES as CONTENT_FIELD_NAMES;
pub(crate) use term::FIELD_NAMES as TERM_FIELD_NAMES;

/// Resolver of a content meta field, see [`resolve_content_meta`].
pub type MetaFieldResolver = for<'a> fn(ResolverContext<'a>) -> FieldFuture<'a>;

pub fn meta_field_resolver() -> MetaFieldResolver {
    resolve_content_meta
}

pub const CONTENT_STATUS: &str = "ContentStatus";
pub const QUERY_CONTEXT: &str = "QueryContext";
pub const SITE_INFO: &str = "SiteInfo";

/// Names registry types may not take.
pub(crate) const RESERVED_TYPE_NAMES: &[&str] = &[
    QUERY_TYPE,
    NODE_INTERFACE,
    CONTENT_INTERFACE,
    TAXONOMY_INTERFACE,
    CONTENT_STATUS,
    QUERY_CONTEXT,
    SITE_INFO,
    "String",
    "Int",
    "Float",
    "Boolean",
    "ID",
];

/// Registers the interfaces, the shared types and one object per registered descriptor.
pub(crate) fn register(builder: SchemaBuilder, registry: &TypeRegistry) -> SchemaBuilder {
    let builder = builder
        .register(node_interface())
        .register(content::interface())
        .register(term::interface())
        .register(status_enum())
        .register(query_context::object())
        .register(site::object());

    let builder = registry
        .content_types()
        .fold(builder, |builder, descriptor| builder.register(content::object(descriptor)));

    registry
        .taxonomy_types()
        .fold(builder, |builder, descriptor| builder.register(term::object(descriptor)))
}

fn node_interface() -> Interface {
    Interface::new(NODE_INTERFACE)
        .description("An object with a globally unique id.")
        .field(InterfaceField::new("id", TypeRef::named_nn(TypeRef::ID)))
}

fn status_enum() -> Enum {
    ContentStatus::iter().fold(
        Enum::new(CONTENT_STATUS).description("Publication status of a content record."),
        |status_enum, status| status_enum.item(EnumItem::new(status.to_string())),
    )
}

/// A field read straight off the parent record, shared by an interface and its objects.
pub(crate) struct ScalarField<T: 'static> {
    pub(crate) name: &'static str,
    pub(crate) ty: &'static str,
    pub(crate) nullable: bool,
    pub(crate) read: fn(&T) -> async_graphql::Result<Option<Value>>,
}

impl<T: Any + Send + Sync> ScalarField<T> {
    fn type_ref(&self) -> TypeRef {
        if self.nullable {
            TypeRef::named(self.ty)
        } else {
            TypeRef::named_nn(self.ty)
        }
    }

    pub(crate) fn interface_field(&self) -> InterfaceField {
        InterfaceField::new(self.name, self.type_ref())
    }

    pub(crate) fn field(&self) -> Field {
        let read = self.read;

        Field::new(self.name, self.type_ref(), move |ctx| {
            FieldFuture::new(async move {
                let record = parent::<T>(&ctx)?;
                read(record)
            })
        })
    }
}

/// An `Int` field value. GraphQL integers are 32-bit, larger numbers fail the field instead
/// of being truncated.
pub(crate) fn int(value: u64) -> async_graphql::Result<Option<Value>> {
    let value = i32::try_from(value)
        .map_err(|_| ErrorCode::InternalError.error(format!("{value} does not fit in a GraphQL Int")))?;

    Ok(Some(Value::Number(value.into())))
}

/// The `id: ID!` field of a `Node` object of type `type_name`.
pub(crate) fn global_id_field<T: Any + Send + Sync>(type_name: &str, local_id: fn(&T) -> u64) -> Field {
    let type_name = type_name.to_owned();

    Field::new("id", TypeRef::named_nn(TypeRef::ID), move |ctx| {
        let type_name = type_name.clone();

        FieldFuture::new(async move {
            let record = parent::<T>(&ctx)?;
            Ok(Some(Value::String(GlobalId::new(type_name, local_id(record)).encode())))
        })
    })
}

pub(crate) fn schema_context<'a>(ctx: &ResolverContext<'a>) -> async_graphql::Result<&'a SchemaContext> {
    ctx.ctx.data::<SchemaContext>()
}

pub(crate) fn parent<'a, T: Any>(ctx: &ResolverContext<'a>) -> async_graphql::Result<&'a T> {
    ctx.parent_value.try_downcast_ref::<T>().map_err(|_| {
        ErrorCode::InternalError.error(format!(
            "field `{}` resolved on an unexpected parent value",
            ctx.ctx.field().name()
        ))
    })
}

/// A string argument, `None` when absent or explicitly null.
pub(crate) fn optional_string(ctx: &ResolverContext<'_>, name: &str) -> async_graphql::Result<Option<String>> {
    match ctx.args.get(name) {
        Some(value) if !value.is_null() => Ok(Some(value.string()?.to_owned())),
        _ => Ok(None),
    }
}

/// An integer argument, `None` when absent or explicitly null.
pub(crate) fn optional_i64(ctx: &ResolverContext<'_>, name: &str) -> async_graphql::Result<Option<i64>> {
    match ctx.args.get(name) {
        Some(value) if !value.is_null() => Ok(Some(value.i64()?)),
        _ => Ok(None),
    }
}

/// Wraps a content record as a `ContentInterface` value, `None` if its type doesn't resolve.
pub(crate) fn content_value<'a>(context: &SchemaContext, record: ContentRecord) -> Option<FieldValue<'a>> {
    let type_name = context.content_interface().resolve_type(&record)?.to_owned();
    Some(FieldValue::owned_any(record).with_type(type_name))
}

/// Wraps a term as a `TaxonomyInterface` value, `None` if its type doesn't resolve.
pub(crate) fn term_value<'a>(context: &SchemaContext, record: TermRecord) -> Option<FieldValue<'a>> {
    let type_name = context.taxonomy_interface().resolve_type(&record)?.to_owned();
    Some(FieldValue::owned_any(record).with_type(type_name))
}

/// Wraps an already classified record as a `Node` value.
pub(crate) fn node_value<'a>(record: Record, type_name: &str) -> FieldValue<'a> {
    let value = match record {
        Record::Content(record) => FieldValue::owned_any(record),
        Record::Term(record) => FieldValue::owned_any(record),
    };

    value.with_type(type_name.to_owned())
}
