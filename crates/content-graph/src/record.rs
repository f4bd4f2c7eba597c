//! Records handed over by the content store.

use serde::{Deserialize, Serialize};

/// A primary content record, such as a post or a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: u64,
    /// Discriminator matched against the registered content types.
    pub content_type: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub modified: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub parent: Option<u64>,
    #[serde(default)]
    pub menu_order: i32,
}

impl ContentRecord {
    pub fn new(id: u64, content_type: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id,
            content_type: content_type.into(),
            slug: slug.into(),
            title: String::new(),
            content: String::new(),
            excerpt: String::new(),
            status: ContentStatus::default(),
            date: String::new(),
            modified: String::new(),
            author: None,
            parent: None,
            menu_order: 0,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_parent(mut self, parent: u64) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// A classification term, such as a category or a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    pub id: u64,
    /// Discriminator matched against the registered taxonomy types.
    pub taxonomy: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent: Option<u64>,
    #[serde(default)]
    pub count: u64,
}

impl TermRecord {
    pub fn new(id: u64, taxonomy: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();

        Self {
            id,
            taxonomy: taxonomy.into(),
            slug: slugify(&name),
            name,
            description: String::new(),
            parent: None,
            count: 0,
        }
    }
}

/// `Hello World` -> `hello-world`.
pub(crate) fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Anything addressable through a global id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Content(ContentRecord),
    Term(TermRecord),
}

impl From<ContentRecord> for Record {
    fn from(record: ContentRecord) -> Self {
        Record::Content(record)
    }
}

impl From<TermRecord> for Record {
    fn from(record: TermRecord) -> Self {
        Record::Term(record)
    }
}

/// Publication status. The serde form is the host's, `Display` gives the GraphQL enum value.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentStatus {
    #[default]
    Publish,
    Future,
    Draft,
    Pending,
    Private,
    Trash,
    AutoDraft,
    Inherit,
}

/// The listing the host is currently serving, e.g. an archive page or search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryContext {
    pub items: Vec<ContentRecord>,
    pub found_items: u64,
    pub max_pages: u64,
    pub current_page: u64,
    pub is_single: bool,
    pub is_archive: bool,
    pub is_search: bool,
    pub search_terms: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    pub description: String,
    pub url: String,
    pub home_url: String,
    pub admin_email: String,
    pub charset: String,
    pub language: String,
    pub version: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            url: String::new(),
            home_url: String::new(),
            admin_email: String::new(),
            charset: "UTF-8".to_owned(),
            language: "en-US".to_owned(),
            version: String::new(),
        }
    }
}
