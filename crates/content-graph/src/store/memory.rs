use std::{
    collections::{BTreeMap, BTreeSet},
    path::Path,
};

use serde::Deserialize;

use super::ContentStore;
use crate::record::{slugify, ContentRecord, QueryContext, SiteInfo, TermRecord};

/// A [`ContentStore`] holding everything in memory, loadable from JSON fixtures:
///
/// ```json
/// {
///   "site": { "name": "Example" },
///   "content": [{ "id": 1, "content_type": "post", "slug": "hello-world" }],
///   "terms": [{ "id": 10, "taxonomy": "category", "name": "News" }],
///   "relationships": [{ "content_id": 1, "term_id": 10 }],
///   "meta": [{ "content_id": 1, "key": "subtitle", "value": "Hi" }],
///   "query": { "items": [1], "found_items": 1, "max_pages": 1, "current_page": 1 }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Fixtures")]
pub struct MemoryStore {
    site: SiteInfo,
    content: BTreeMap<u64, ContentRecord>,
    terms: BTreeMap<u64, TermRecord>,
    relationships: BTreeMap<u64, BTreeSet<u64>>,
    meta: BTreeMap<(u64, String), String>,
    query: QueryFixture,
}

/// The current listing, with items referenced by content id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QueryFixture {
    pub items: Vec<u64>,
    pub found_items: u64,
    pub max_pages: u64,
    pub current_page: u64,
    pub is_single: bool,
    pub is_archive: bool,
    pub is_search: bool,
    pub search_terms: Option<String>,
}

impl MemoryStore {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&json)?)
    }

    pub fn with_site(mut self, site: SiteInfo) -> Self {
        self.site = site;
        self
    }

    pub fn with_content(mut self, record: ContentRecord) -> Self {
        self.content.insert(record.id, record);
        self
    }

    pub fn with_term(mut self, record: TermRecord) -> Self {
        self.terms.insert(record.id, record);
        self
    }

    pub fn with_relationship(mut self, content_id: u64, term_id: u64) -> Self {
        self.relationships.entry(content_id).or_default().insert(term_id);
        self
    }

    pub fn with_meta(mut self, content_id: u64, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert((content_id, key.into()), value.into());
        self
    }

    pub fn with_query(mut self, query: QueryFixture) -> Self {
        self.query = query;
        self
    }
}

impl ContentStore for MemoryStore {
    fn content_by_id(&self, id: u64) -> Option<ContentRecord> {
        self.content.get(&id).cloned()
    }

    fn content_by_slug(&self, slug: &str, content_type: &str) -> Option<ContentRecord> {
        self.content
            .values()
            .find(|record| record.slug == slug && record.content_type == content_type)
            .cloned()
    }

    fn term_by_id(&self, id: u64) -> Option<TermRecord> {
        self.terms.get(&id).cloned()
    }

    fn terms_for_content(&self, content_id: u64, taxonomy: Option<&str>) -> Vec<TermRecord> {
        let Some(term_ids) = self.relationships.get(&content_id) else {
            return Vec::new();
        };

        term_ids
            .iter()
            .filter_map(|id| self.terms.get(id))
            .filter(|term| taxonomy.map_or(true, |taxonomy| term.taxonomy == taxonomy))
            .cloned()
            .collect()
    }

    fn content_meta(&self, content_id: u64, key: &str) -> Option<String> {
        self.meta.get(&(content_id, key.to_owned())).cloned()
    }

    fn query_context(&self) -> QueryContext {
        let query = &self.query;

        QueryContext {
            items: query
                .items
                .iter()
                .filter_map(|id| self.content.get(id))
                .cloned()
                .collect(),
            found_items: query.found_items,
            max_pages: query.max_pages,
            current_page: query.current_page,
            is_single: query.is_single,
            is_archive: query.is_archive,
            is_search: query.is_search,
            search_terms: query.search_terms.clone(),
        }
    }

    fn site_info(&self) -> SiteInfo {
        self.site.clone()
    }
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Fixtures {
    site: SiteInfo,
    content: Vec<ContentRecord>,
    terms: Vec<TermRecord>,
    relationships: Vec<Relationship>,
    meta: Vec<MetaEntry>,
    query: QueryFixture,
}

#[derive(Deserialize)]
struct Relationship {
    content_id: u64,
    term_id: u64,
}

#[derive(Deserialize)]
struct MetaEntry {
    content_id: u64,
    key: String,
    value: String,
}

impl From<Fixtures> for MemoryStore {
    fn from(fixtures: Fixtures) -> Self {
        let store = MemoryStore::default().with_site(fixtures.site).with_query(fixtures.query);

        let store = fixtures.content.into_iter().fold(store, MemoryStore::with_content);
        // Fixture terms without a slug get the one `TermRecord::new` would give them.
        let terms = fixtures.terms.into_iter().map(|mut term| {
            if term.slug.is_empty() {
                term.slug = slugify(&term.name);
            }
            term
        });

        let store = terms.fold(store, MemoryStore::with_term);
        let store = fixtures
            .relationships
            .into_iter()
            .fold(store, |store, Relationship { content_id, term_id }| {
                store.with_relationship(content_id, term_id)
            });

        fixtures
            .meta
            .into_iter()
            .fold(store, |store, MetaEntry { content_id, key, value }| {
                store.with_meta(content_id, key, value)
            })
    }
}
