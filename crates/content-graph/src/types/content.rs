use async_graphql::{
    dynamic::{
        Field, FieldFuture, FieldValue, InputValue, Interface, InterfaceField, Object, ResolverContext, TypeRef,
    },
    Name, Value,
};

use super::{
    content_value, global_id_field, int, optional_string, parent, schema_context, term_value, ScalarField,
    CONTENT_STATUS,
};
use crate::{
    interfaces::{CONTENT_INTERFACE, NODE_INTERFACE, TAXONOMY_INTERFACE},
    record::ContentRecord,
    registry::ContentTypeDescriptor,
};

pub(crate) const FIELD_NAMES: &[&str] = &[
    "id",
    "databaseId",
    "contentType",
    "slug",
    "title",
    "content",
    "excerpt",
    "status",
    "date",
    "modified",
    "author",
    "menuOrder",
    "terms",
];

const SCALARS: &[ScalarField<ContentRecord>] = &[
    ScalarField {
        name: "databaseId",
        ty: TypeRef::INT,
        nullable: false,
        read: |record| int(record.id),
    },
    ScalarField {
        name: "contentType",
        ty: TypeRef::STRING,
        nullable: false,
        read: |record| Ok(Some(Value::String(record.content_type.clone()))),
    },
    ScalarField {
        name: "slug",
        ty: TypeRef::STRING,
        nullable: false,
        read: |record| Ok(Some(Value::String(record.slug.clone()))),
    },
    ScalarField {
        name: "title",
        ty: TypeRef::STRING,
        nullable: false,
        read: |record| Ok(Some(Value::String(record.title.clone()))),
    },
    ScalarField {
        name: "content",
        ty: TypeRef::STRING,
        nullable: false,
        read: |record| Ok(Some(Value::String(record.content.clone()))),
    },
    ScalarField {
        name: "excerpt",
        ty: TypeRef::STRING,
        nullable: false,
        read: |record| Ok(Some(Value::String(record.excerpt.clone()))),
    },
    ScalarField {
        name: "status",
        ty: CONTENT_STATUS,
        nullable: false,
        read: |record| Ok(Some(Value::Enum(Name::new(record.status.as_ref())))),
    },
    ScalarField {
        name: "date",
        ty: TypeRef::STRING,
        nullable: false,
        read: |record| Ok(Some(Value::String(record.date.clone()))),
    },
    ScalarField {
        name: "modified",
        ty: TypeRef::STRING,
        nullable: false,
        read: |record| Ok(Some(Value::String(record.modified.clone()))),
    },
    ScalarField {
        name: "author",
        ty: TypeRef::STRING,
        nullable: true,
        read: |record| Ok(record.author.clone().map(Value::String)),
    },
    ScalarField {
        name: "menuOrder",
        ty: TypeRef::INT,
        nullable: false,
        read: |record| Ok(Some(Value::Number(record.menu_order.into()))),
    },
];

pub(super) fn interface() -> Interface {
    let interface = Interface::new(CONTENT_INTERFACE)
        .description("A primary content record. The concrete type follows the record's content type.")
        .implement(NODE_INTERFACE)
        .field(InterfaceField::new("id", TypeRef::named_nn(TypeRef::ID)));

    SCALARS
        .iter()
        .fold(interface, |interface, scalar| interface.field(scalar.interface_field()))
        .field(
            InterfaceField::new("terms", TypeRef::named_nn_list_nn(TAXONOMY_INTERFACE)).argument(taxonomy_argument()),
        )
}

pub(super) fn object(descriptor: &ContentTypeDescriptor) -> Object {
    let mut object = Object::new(&descriptor.type_name)
        .implement(NODE_INTERFACE)
        .implement(CONTENT_INTERFACE)
        .field(global_id_field::<ContentRecord>(&descriptor.type_name, |record| record.id));

    if !descriptor.description.is_empty() {
        object = object.description(&descriptor.description);
    }

    let mut object = SCALARS
        .iter()
        .fold(object, |object, scalar| object.field(scalar.field()))
        .field(terms_field());

    if descriptor.shape.hierarchical {
        object = object.field(parent_field());
    }

    descriptor.shape.meta_fields.iter().fold(object, |object, name| {
        object.field(Field::new(name, TypeRef::named(TypeRef::STRING), resolve_content_meta))
    })
}

/// Resolves a meta field to the stored metadata value keyed by the field's name.
///
/// Plugins can reuse it for meta fields they add to their own objects:
///
/// ```ignore
/// Field::new("price", TypeRef::named(TypeRef::STRING), resolve_content_meta)
/// ```
pub fn resolve_content_meta(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        let context = schema_context(&ctx)?;
        let record = parent::<ContentRecord>(&ctx)?;
        let key = ctx.ctx.field().name();

        Ok(context.store().content_meta(record.id, key).map(Value::String))
    })
}

fn taxonomy_argument() -> InputValue {
    InputValue::new("taxonomy", TypeRef::named(TypeRef::STRING)).description("Only return terms of this taxonomy.")
}

fn terms_field() -> Field {
    Field::new("terms", TypeRef::named_nn_list_nn(TAXONOMY_INTERFACE), |ctx| {
        FieldFuture::new(async move {
            let context = schema_context(&ctx)?;
            let record = parent::<ContentRecord>(&ctx)?;
            let taxonomy = optional_string(&ctx, "taxonomy")?;

            let terms = context
                .store()
                .terms_for_content(record.id, taxonomy.as_deref())
                .into_iter()
                .filter_map(|term| term_value(context, term));

            Ok(Some(FieldValue::list(terms)))
        })
    })
    .argument(taxonomy_argument())
}

fn parent_field() -> Field {
    Field::new("parent", TypeRef::named(CONTENT_INTERFACE), |ctx| {
        FieldFuture::new(async move {
            let context = schema_context(&ctx)?;
            let record = parent::<ContentRecord>(&ctx)?;

            let parent = record
                .parent
                .and_then(|id| context.store().content_by_id(id))
                .and_then(|parent| content_value(context, parent));

            Ok(parent)
        })
    })
}
