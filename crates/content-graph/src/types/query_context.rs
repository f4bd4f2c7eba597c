use async_graphql::{
    dynamic::{Field, FieldFuture, FieldValue, Object, TypeRef},
    Value,
};

use super::{content_value, int, parent, schema_context, ScalarField, QUERY_CONTEXT};
use crate::{interfaces::CONTENT_INTERFACE, record::QueryContext};

const FIELDS: &[ScalarField<QueryContext>] = &[
    ScalarField {
        name: "foundItems",
        ty: TypeRef::INT,
        nullable: false,
        read: |query| int(query.found_items),
    },
    ScalarField {
        name: "maxPages",
        ty: TypeRef::INT,
        nullable: false,
        read: |query| int(query.max_pages),
    },
    ScalarField {
        name: "currentPage",
        ty: TypeRef::INT,
        nullable: false,
        read: |query| int(query.current_page),
    },
    ScalarField {
        name: "isSingle",
        ty: TypeRef::BOOLEAN,
        nullable: false,
        read: |query| Ok(Some(Value::Boolean(query.is_single))),
    },
    ScalarField {
        name: "isArchive",
        ty: TypeRef::BOOLEAN,
        nullable: false,
        read: |query| Ok(Some(Value::Boolean(query.is_archive))),
    },
    ScalarField {
        name: "isSearch",
        ty: TypeRef::BOOLEAN,
        nullable: false,
        read: |query| Ok(Some(Value::Boolean(query.is_search))),
    },
    ScalarField {
        name: "searchTerms",
        ty: TypeRef::STRING,
        nullable: true,
        read: |query| Ok(query.search_terms.clone().map(Value::String)),
    },
];

pub(super) fn object() -> Object {
    let object = Object::new(QUERY_CONTEXT)
        .description("The listing the site is currently serving.")
        .field(items_field());

    FIELDS.iter().fold(object, |object, field| object.field(field.field()))
}

/// Items whose content type isn't registered are left out.
fn items_field() -> Field {
    Field::new("items", TypeRef::named_nn_list_nn(CONTENT_INTERFACE), |ctx| {
        FieldFuture::new(async move {
            let context = schema_context(&ctx)?;
            let query = parent::<QueryContext>(&ctx)?;

            let items = query
                .items
                .iter()
                .cloned()
                .filter_map(|item| content_value(context, item));

            Ok(Some(FieldValue::list(items)))
        })
    })
}
