use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_graphql::{
    dynamic::{Field, FieldFuture, FieldValue, Object, SchemaBuilder, TypeRef},
    Value,
};
use content_graph::{
    ContentSchema, ContentTypeDescriptor, FieldShape, GlobalId, QueryFields, SchemaError, SchemaPlugin,
    TaxonomyTypeDescriptor, TypeRegistry,
};
use rstest::rstest;
use serde_json::json;

use super::{execute, schema, store};

#[derive(Default)]
struct Calls {
    register_types: AtomicUsize,
    extend_query: AtomicUsize,
    register_schema_types: AtomicUsize,
}

struct Forecast(&'static str);

struct WeatherPlugin {
    calls: Arc<Calls>,
}

impl SchemaPlugin for WeatherPlugin {
    fn register_types(&self, registry: &mut TypeRegistry) {
        self.calls.register_types.fetch_add(1, Ordering::SeqCst);

        registry.register_content_type(
            ContentTypeDescriptor::new("product", "Things for sale").with_shape(FieldShape::flat().with_meta_field("price")),
        );
    }

    fn extend_query(&self, fields: &mut QueryFields) {
        self.calls.extend_query.fetch_add(1, Ordering::SeqCst);

        fields.insert(
            "weather",
            Field::new("weather", TypeRef::named_nn("Weather"), |_| {
                FieldFuture::new(async { Ok(Some(FieldValue::owned_any(Forecast("sunny")))) })
            }),
        );
    }

    fn register_schema_types(&self, builder: SchemaBuilder) -> SchemaBuilder {
        self.calls.register_schema_types.fetch_add(1, Ordering::SeqCst);

        builder.register(Object::new("Weather").field(Field::new(
            "summary",
            TypeRef::named_nn(TypeRef::STRING),
            |ctx| {
                FieldFuture::new(async move {
                    let forecast = ctx.parent_value.try_downcast_ref::<Forecast>()?;
                    Ok(Some(Value::from(forecast.0)))
                })
            },
        )))
    }
}

#[tokio::test]
async fn plugin_hooks_run_once_per_build() {
    let calls = Arc::new(Calls::default());

    let schema = ContentSchema::builder(store())
        .plugin(WeatherPlugin { calls: calls.clone() })
        .build()
        .unwrap();

    assert_eq!(calls.register_types.load(Ordering::SeqCst), 1);
    assert_eq!(calls.extend_query.load(Ordering::SeqCst), 1);
    assert_eq!(calls.register_schema_types.load(Ordering::SeqCst), 1);

    let query = format!(
        r#"{{
            weather {{ summary }}
            content(id: 4) {{ __typename ... on Product {{ price }} }}
            node(id: "{}") {{ id }}
        }}"#,
        GlobalId::new("Product", 4)
    );

    let response = execute(&schema, &query).await;

    assert_eq!(
        response,
        json!({
            "data": {
                "weather": { "summary": "sunny" },
                "content": { "__typename": "Product", "price": "12.50" },
                "node": { "id": GlobalId::new("Product", 4).encode() }
            }
        })
    );

    // executing never reruns the hooks
    assert_eq!(calls.register_types.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn closures_run_in_registration_order() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));

    let first = order.clone();
    let second = order.clone();

    let schema = ContentSchema::builder(store())
        .with_types(move |registry| {
            first.lock().unwrap().push("first");
            registry.register_content_type(ContentTypeDescriptor::new("product", "").with_type_name("Merchandise"));
        })
        .with_types(move |registry| {
            second.lock().unwrap().push("second");
            registry.register_content_type(ContentTypeDescriptor::new("product", "").with_type_name("Product"));
        })
        .build()
        .unwrap();

    assert_eq!(*order.lock().unwrap(), ["first", "second"]);

    let response = execute(&schema, "{ content(id: 4) { __typename } }").await;
    assert_eq!(response, json!({ "data": { "content": { "__typename": "Product" } } }));
}

#[tokio::test]
async fn query_fields_can_be_dropped_and_added() {
    let schema = ContentSchema::builder(store())
        .with_query_fields(|fields| {
            assert_eq!(
                fields.names().collect::<Vec<_>>(),
                ["queryContext", "content", "term", "site", "node"]
            );

            fields.remove("queryContext");
            fields.insert(
                "version",
                Field::new("version", TypeRef::named_nn(TypeRef::STRING), |_| {
                    FieldFuture::new(async { Ok(Some(Value::from("1.0"))) })
                }),
            );
        })
        .build()
        .unwrap();

    let response = execute(&schema, "{ version site { name } }").await;
    assert_eq!(response, json!({ "data": { "version": "1.0", "site": { "name": "Example" } } }));

    let response = schema.execute("{ queryContext { foundItems } }").await;
    assert!(response.is_err());
}

#[tokio::test]
async fn removed_types_no_longer_resolve() {
    let schema = ContentSchema::builder(store())
        .with_types(|registry| {
            registry.remove_content_type("page");
        })
        .build()
        .unwrap();

    let query = format!(
        r#"{{ content(id: 2) {{ id }} node(id: "{}") {{ id }} }}"#,
        GlobalId::new("Page", 2)
    );

    let response = execute(&schema, &query).await;
    assert_eq!(response, json!({ "data": { "content": null, "node": null } }));
}

#[tokio::test]
async fn built_schemas_ignore_later_registrations() {
    let schema = schema();

    let mut registry = schema.registry().clone();
    registry.register_content_type(ContentTypeDescriptor::new("product", "Things for sale"));

    assert!(schema.registry().content_type("product").is_none());

    let response = execute(&schema, "{ content(id: 4) { __typename } }").await;
    assert_eq!(response, json!({ "data": { "content": null } }));

    let rebuilt = ContentSchema::builder(store()).registry(registry).build().unwrap();

    let response = execute(&rebuilt, "{ content(id: 4) { __typename } }").await;
    assert_eq!(response, json!({ "data": { "content": { "__typename": "Product" } } }));
}

fn reserved_type_name(registry: &mut TypeRegistry) {
    registry.register_content_type(ContentTypeDescriptor::new("query", "").with_type_name("Query"));
}

fn duplicate_across_kinds(registry: &mut TypeRegistry) {
    registry.register_taxonomy_type(TaxonomyTypeDescriptor::new("post_tag", "").with_type_name("Post"));
}

fn invalid_type_name(registry: &mut TypeRegistry) {
    registry.register_content_type(ContentTypeDescriptor::new("product", "").with_type_name("Bad Name"));
}

fn meta_field_shadowing_a_builtin(registry: &mut TypeRegistry) {
    registry.register_content_type(
        ContentTypeDescriptor::new("product", "").with_shape(FieldShape::flat().with_meta_field("title")),
    );
}

fn meta_field_on_a_taxonomy(registry: &mut TypeRegistry) {
    registry.register_taxonomy_type(
        TaxonomyTypeDescriptor::new("genre", "").with_shape(FieldShape::flat().with_meta_field("color")),
    );
}

#[rstest]
#[case::reserved(reserved_type_name, "GraphQL type name `Query` is used more than once")]
#[case::duplicate(duplicate_across_kinds, "GraphQL type name `Post` is used more than once")]
#[case::invalid_name(invalid_type_name, "`Bad Name` is not a valid GraphQL type name (registered as `product`)")]
#[case::meta_field(meta_field_shadowing_a_builtin, "`title` is not a valid custom field name on `Product`")]
#[case::taxonomy_meta_field(meta_field_on_a_taxonomy, "taxonomy type `Genre` cannot declare meta field `color`")]
fn invalid_registrations(#[case] register: fn(&mut TypeRegistry), #[case] expected: &str) {
    let error = ContentSchema::builder(store()).with_types(register).build().err().unwrap();

    assert_eq!(error.to_string(), expected);
}

#[test]
fn unknown_types_fail_the_build() {
    let error = ContentSchema::builder(store())
        .with_query_fields(|fields| {
            fields.insert(
                "weather",
                Field::new("weather", TypeRef::named("Weather"), |_| FieldFuture::new(async { Ok(None::<Value>) })),
            );
        })
        .build()
        .err()
        .unwrap();

    assert!(matches!(error, SchemaError::Build(_)));
}
