#![allow(unused_crate_dependencies)]

mod content;
mod node;
mod plugins;

use content_graph::{ContentSchema, MemoryStore};

const FIXTURES: &str = include_str!("fixtures.json");

fn store() -> MemoryStore {
    MemoryStore::from_json(FIXTURES).unwrap()
}

fn schema() -> ContentSchema {
    ContentSchema::builder(store()).build().unwrap()
}

async fn execute(schema: &ContentSchema, query: &str) -> serde_json::Value {
    let response = schema.execute(query).await;
    serde_json::to_value(&response).unwrap()
}
