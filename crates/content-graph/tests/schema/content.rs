use content_graph::{ContentRecord, ContentSchema, GlobalId, MemoryStore, TermRecord};
use rstest::rstest;
use serde_json::json;

use super::{execute, schema};

#[rstest]
#[case::id_wins_over_slug(r#"content(id: 42, slug: "about", contentType: "page")"#, json!({ "__typename": "Post", "databaseId": 42 }))]
#[case::id_only(r#"content(id: 2)"#, json!({ "__typename": "Page", "databaseId": 2 }))]
#[case::slug_and_type(r#"content(slug: "about", contentType: "page")"#, json!({ "__typename": "Page", "databaseId": 2 }))]
#[case::slug_uses_default_type(r#"content(slug: "about")"#, json!({ "__typename": "Post", "databaseId": 42 }))]
#[case::neither(r#"content"#, json!(null))]
#[case::unknown_id(r#"content(id: 404)"#, json!(null))]
#[case::negative_id(r#"content(id: -1)"#, json!(null))]
#[case::unknown_slug(r#"content(slug: "missing", contentType: "page")"#, json!(null))]
#[case::unregistered_type(r#"content(id: 4)"#, json!(null))]
#[tokio::test]
async fn single_content_lookup(#[case] field: &str, #[case] expected: serde_json::Value) {
    let query = format!("{{ {field} {{ __typename databaseId }} }}");
    let response = execute(&schema(), &query).await;

    assert_eq!(response, json!({ "data": { "content": expected } }));
}

#[tokio::test]
async fn shared_content_fields() {
    let response = execute(
        &schema(),
        r#"{
            content(id: 1) {
                id
                contentType
                slug
                title
                content
                excerpt
                status
                date
                author
                menuOrder
            }
        }"#,
    )
    .await;

    insta::assert_json_snapshot!(response, @r#"
    {
      "data": {
        "content": {
          "id": "UG9zdDox",
          "contentType": "post",
          "slug": "hello-world",
          "title": "Hello world",
          "content": "<p>Welcome.</p>",
          "excerpt": "",
          "status": "PUBLISH",
          "date": "2024-05-01T10:00:00",
          "author": "ada",
          "menuOrder": 0
        }
      }
    }
    "#);
}

#[tokio::test]
async fn status_is_an_enum_value() {
    let response = execute(&schema(), "{ content(id: 42) { status author } }").await;

    assert_eq!(
        response,
        json!({ "data": { "content": { "status": "DRAFT", "author": null } } })
    );
}

#[tokio::test]
async fn hierarchical_types_expose_their_parent() {
    let response = execute(
        &schema(),
        r#"{
            team: content(slug: "team", contentType: "page") {
                ... on Page {
                    menuOrder
                    parent { __typename title }
                }
            }
            about: content(id: 2) {
                ... on Page { parent { title } }
            }
        }"#,
    )
    .await;

    assert_eq!(
        response,
        json!({
            "data": {
                "team": { "menuOrder": 2, "parent": { "__typename": "Page", "title": "About us" } },
                "about": { "parent": null }
            }
        })
    );
}

#[tokio::test]
async fn terms_skip_unregistered_taxonomies() {
    let response = execute(
        &schema(),
        r#"{
            content(id: 1) {
                terms { __typename name slug }
                tags: terms(taxonomy: "tag") { name }
            }
        }"#,
    )
    .await;

    assert_eq!(
        response,
        json!({
            "data": {
                "content": {
                    "terms": [
                        { "__typename": "Category", "name": "News", "slug": "news" },
                        { "__typename": "Tag", "name": "Rust", "slug": "rust" }
                    ],
                    "tags": [{ "name": "Rust" }]
                }
            }
        })
    );
}

#[rstest]
#[case::category("10", json!({ "__typename": "Category", "name": "News", "count": 1 }))]
#[case::tag("11", json!({ "__typename": "Tag", "name": "Rust", "count": 1 }))]
#[case::unregistered_taxonomy("13", json!(null))]
#[case::missing("99", json!(null))]
#[case::non_numeric("news", json!(null))]
#[case::leading_zero("010", json!(null))]
#[case::explicit_sign("+10", json!(null))]
#[tokio::test]
async fn single_term_lookup(#[case] id: &str, #[case] expected: serde_json::Value) {
    let query = format!(r#"{{ term(id: "{id}") {{ __typename name count }} }}"#);
    let response = execute(&schema(), &query).await;

    assert_eq!(response, json!({ "data": { "term": expected } }));
}

#[tokio::test]
async fn term_without_id_is_null() {
    let response = execute(&schema(), "{ term { name } }").await;

    assert_eq!(response, json!({ "data": { "term": null } }));
}

#[tokio::test]
async fn database_ids_beyond_int_range_fail_the_field() {
    let store = MemoryStore::default()
        .with_content(ContentRecord::new(3_000_000_000, "post", "big"))
        .with_term(TermRecord::new(4_000_000_000, "tag", "Huge"));

    let schema = ContentSchema::builder(store).build().unwrap();

    let query = format!(
        r#"{{
            post: node(id: "{}") {{ ... on Post {{ databaseId }} }}
            tag: term(id: "4000000000") {{ name databaseId }}
        }}"#,
        GlobalId::new("Post", 3_000_000_000_u64)
    );

    let response = execute(&schema, &query).await;

    assert_eq!(response["data"], json!({ "post": null, "tag": null }));

    let mut errors = response["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|error| (error["path"].clone(), error["message"].clone(), error["extensions"]["code"].clone()))
        .collect::<Vec<_>>();

    errors.sort_by_key(|(path, _, _)| path.to_string());

    assert_eq!(
        errors,
        [
            (
                json!(["post", "databaseId"]),
                json!("3000000000 does not fit in a GraphQL Int"),
                json!("INTERNAL_ERROR")
            ),
            (
                json!(["tag", "databaseId"]),
                json!("4000000000 does not fit in a GraphQL Int"),
                json!("INTERNAL_ERROR")
            ),
        ]
    );
}
