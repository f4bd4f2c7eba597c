use std::sync::Arc;

use crate::record::{ContentRecord, QueryContext, SiteInfo, TermRecord};

mod memory;

pub use memory::{MemoryStore, QueryFixture};

/// Read access to the host's content.
///
/// Calls are synchronous and either return a value or nothing: a missing record is not an error.
///
/// Ids and counts are exposed as GraphQL `Int`, which is 32-bit. A record whose id or count is
/// above `i32::MAX` still resolves, but reading that field fails with `INTERNAL_ERROR`.
pub trait ContentStore: Send + Sync {
    fn content_by_id(&self, id: u64) -> Option<ContentRecord>;

    fn content_by_slug(&self, slug: &str, content_type: &str) -> Option<ContentRecord>;

    fn term_by_id(&self, id: u64) -> Option<TermRecord>;

    /// Terms attached to a content record, optionally restricted to one taxonomy.
    fn terms_for_content(&self, content_id: u64, taxonomy: Option<&str>) -> Vec<TermRecord>;

    /// A single custom metadata value of a content record.
    fn content_meta(&self, content_id: u64, key: &str) -> Option<String>;

    fn query_context(&self) -> QueryContext;

    fn site_info(&self) -> SiteInfo;
}

impl<T: ContentStore + ?Sized> ContentStore for Arc<T> {
    fn content_by_id(&self, id: u64) -> Option<ContentRecord> {
        (**self).content_by_id(id)
    }

    fn content_by_slug(&self, slug: &str, content_type: &str) -> Option<ContentRecord> {
        (**self).content_by_slug(slug, content_type)
    }

    fn term_by_id(&self, id: u64) -> Option<TermRecord> {
        (**self).term_by_id(id)
    }

    fn terms_for_content(&self, content_id: u64, taxonomy: Option<&str>) -> Vec<TermRecord> {
        (**self).terms_for_content(content_id, taxonomy)
    }

    fn content_meta(&self, content_id: u64, key: &str) -> Option<String> {
        (**self).content_meta(content_id, key)
    }

    fn query_context(&self) -> QueryContext {
        (**self).query_context()
    }

    fn site_info(&self) -> SiteInfo {
        (**self).site_info()
    }
}
