use async_graphql::{
    dynamic::{Field, FieldFuture, Interface, InterfaceField, Object, TypeRef},
    Value,
};

use super::{global_id_field, int, parent, schema_context, term_value, ScalarField};
use crate::{
    interfaces::{NODE_INTERFACE, TAXONOMY_INTERFACE},
    record::TermRecord,
    registry::TaxonomyTypeDescriptor,
};

pub(crate) const FIELD_NAMES: &[&str] = &["id", "databaseId", "taxonomy", "name", "slug", "description", "count"];

const SCALARS: &[ScalarField<TermRecord>] = &[
    ScalarField {
        name: "databaseId",
        ty: TypeRef::INT,
        nullable: false,
        read: |term| int(term.id),
    },
    ScalarField {
        name: "taxonomy",
        ty: TypeRef::STRING,
        nullable: false,
        read: |term| Ok(Some(Value::String(term.taxonomy.clone()))),
    },
    ScalarField {
        name: "name",
        ty: TypeRef::STRING,
        nullable: false,
        read: |term| Ok(Some(Value::String(term.name.clone()))),
    },
    ScalarField {
        name: "slug",
        ty: TypeRef::STRING,
        nullable: false,
        read: |term| Ok(Some(Value::String(term.slug.clone()))),
    },
    ScalarField {
        name: "description",
        ty: TypeRef::STRING,
        nullable: false,
        read: |term| Ok(Some(Value::String(term.description.clone()))),
    },
    ScalarField {
        name: "count",
        ty: TypeRef::INT,
        nullable: false,
        read: |term| int(term.count),
    },
];

pub(super) fn interface() -> Interface {
    let interface = Interface::new(TAXONOMY_INTERFACE)
        .description("A classification term. The concrete type follows the term's taxonomy.")
        .implement(NODE_INTERFACE)
        .field(InterfaceField::new("id", TypeRef::named_nn(TypeRef::ID)));

    SCALARS
        .iter()
        .fold(interface, |interface, scalar| interface.field(scalar.interface_field()))
}

pub(super) fn object(descriptor: &TaxonomyTypeDescriptor) -> Object {
    let mut object = Object::new(&descriptor.type_name)
        .implement(NODE_INTERFACE)
        .implement(TAXONOMY_INTERFACE)
        .field(global_id_field::<TermRecord>(&descriptor.type_name, |term| term.id));

    if !descriptor.description.is_empty() {
        object = object.description(&descriptor.description);
    }

    let object = SCALARS.iter().fold(object, |object, scalar| object.field(scalar.field()));

    if descriptor.shape.hierarchical {
        object.field(parent_field())
    } else {
        object
    }
}

fn parent_field() -> Field {
    Field::new("parent", TypeRef::named(TAXONOMY_INTERFACE), |ctx| {
        FieldFuture::new(async move {
            let context = schema_context(&ctx)?;
            let term = parent::<TermRecord>(&ctx)?;

            let parent = term
                .parent
                .and_then(|id| context.store().term_by_id(id))
                .and_then(|parent| term_value(context, parent));

            Ok(parent)
        })
    })
}
