use content_graph::GlobalId;
use rstest::rstest;
use serde_json::json;

use super::{execute, schema};

#[rstest]
#[case::post(GlobalId::new("Post", 1), json!({ "__typename": "Post", "title": "Hello world" }))]
#[case::page(GlobalId::new("Page", 3), json!({ "__typename": "Page", "title": "Team" }))]
#[case::category(GlobalId::new("Category", 10), json!({ "__typename": "Category", "name": "News" }))]
#[case::content_interface_token(GlobalId::new("ContentInterface", 2), json!({ "__typename": "Page", "title": "About us" }))]
#[case::type_mismatch(GlobalId::new("Page", 1), json!(null))]
#[case::unknown_type(GlobalId::new("Product", 4), json!(null))]
#[case::unregistered_discriminator(GlobalId::new("TaxonomyInterface", 13), json!(null))]
#[case::missing_record(GlobalId::new("Post", 404), json!(null))]
#[case::non_numeric_id(GlobalId::new("Post", "hello-world"), json!(null))]
#[case::leading_zero(GlobalId::new("Post", "01"), json!(null))]
#[case::explicit_sign(GlobalId::new("Post", "+1"), json!(null))]
#[tokio::test]
async fn node_lookup(#[case] id: GlobalId, #[case] expected: serde_json::Value) {
    let query = format!(
        r#"{{
            node(id: "{id}") {{
                __typename
                ... on ContentInterface {{ title }}
                ... on TaxonomyInterface {{ name }}
            }}
        }}"#
    );

    let response = execute(&schema(), &query).await;

    assert_eq!(response, json!({ "data": { "node": expected } }));
}

#[tokio::test]
async fn ids_round_trip_through_node() {
    let schema = schema();

    let response = execute(&schema, "{ content(id: 3) { id } term(id: \"11\") { id } }").await;
    let page_id = response["data"]["content"]["id"].as_str().unwrap().to_owned();
    let tag_id = response["data"]["term"]["id"].as_str().unwrap().to_owned();

    assert_eq!(page_id, GlobalId::new("Page", 3).encode());
    assert_eq!(tag_id, GlobalId::new("Tag", 11).encode());

    let query = format!(
        r#"{{
            page: node(id: "{page_id}") {{ id ... on Page {{ slug }} }}
            tag: node(id: "{tag_id}") {{ id ... on Tag {{ slug }} }}
        }}"#
    );

    let response = execute(&schema, &query).await;

    assert_eq!(
        response,
        json!({
            "data": {
                "page": { "id": page_id, "slug": "team" },
                "tag": { "id": tag_id, "slug": "rust" }
            }
        })
    );
}

#[tokio::test]
async fn malformed_id_fails_only_its_field() {
    let response = execute(&schema(), r#"{ node(id: "%%%") { id } site { name } }"#).await;

    assert_eq!(response["data"], json!({ "node": null, "site": { "name": "Example" } }));

    let errors = response["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["path"], json!(["node"]));
    assert_eq!(errors[0]["extensions"]["code"], "MALFORMED_ID");
    assert_eq!(errors[0]["message"], "invalid global id `%%%`: not valid base64");
}

#[rstest]
#[case::missing_separator("UG9zdDQy")]
#[case::empty_type_name("OjQy")]
#[tokio::test]
async fn tokens_without_a_type_name_are_malformed(#[case] token: &str) {
    let query = format!(r#"{{ node(id: "{token}") {{ id }} }}"#);
    let response = execute(&schema(), &query).await;

    assert_eq!(response["data"], json!({ "node": null }));
    assert_eq!(response["errors"][0]["path"], json!(["node"]));
    assert_eq!(response["errors"][0]["extensions"]["code"], "MALFORMED_ID");
}
