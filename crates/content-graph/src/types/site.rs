use async_graphql::{
    dynamic::{Object, TypeRef},
    Value,
};

use super::{ScalarField, SITE_INFO};
use crate::record::SiteInfo;

const FIELDS: &[ScalarField<SiteInfo>] = &[
    ScalarField {
        name: "name",
        ty: TypeRef::STRING,
        nullable: false,
        read: |site| Ok(Some(Value::String(site.name.clone()))),
    },
    ScalarField {
        name: "description",
        ty: TypeRef::STRING,
        nullable: false,
        read: |site| Ok(Some(Value::String(site.description.clone()))),
    },
    ScalarField {
        name: "url",
        ty: TypeRef::STRING,
        nullable: false,
        read: |site| Ok(Some(Value::String(site.url.clone()))),
    },
    ScalarField {
        name: "homeUrl",
        ty: TypeRef::STRING,
        nullable: false,
        read: |site| Ok(Some(Value::String(site.home_url.clone()))),
    },
    ScalarField {
        name: "adminEmail",
        ty: TypeRef::STRING,
        nullable: false,
        read: |site| Ok(Some(Value::String(site.admin_email.clone()))),
    },
    ScalarField {
        name: "charset",
        ty: TypeRef::STRING,
        nullable: false,
        read: |site| Ok(Some(Value::String(site.charset.clone()))),
    },
    ScalarField {
        name: "language",
        ty: TypeRef::STRING,
        nullable: false,
        read: |site| Ok(Some(Value::String(site.language.clone()))),
    },
    ScalarField {
        name: "version",
        ty: TypeRef::STRING,
        nullable: false,
        read: |site| Ok(Some(Value::String(site.version.clone()))),
    },
];

pub(super) fn object() -> Object {
    FIELDS.iter().fold(
        Object::new(SITE_INFO).description("Global settings of the site."),
        |object, field| object.field(field.field()),
    )
}
