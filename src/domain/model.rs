use crate::core::topics::Topic;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};

/// Largest page size the Pexels API accepts.
pub const MAX_PER_PAGE: u32 = 80;

/// Resolved pagination sent to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub per_page: u32,
    pub page: u32,
}

impl Page {
    /// Applied to query options that leave a field unset.
    pub const DEFAULT: Page = Page {
        per_page: 15,
        page: 1,
    };

    /// Fixed page requested by every `get_*` shortcut.
    pub const FIRST: Page = Page {
        per_page: 20,
        page: 1,
    };

    pub fn new(per_page: u32, page: u32) -> Self {
        Self { per_page, page }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::DEFAULT
    }
}

impl Validate for Page {
    fn validate(&self) -> Result<()> {
        validate_range("per_page", self.per_page, 1, MAX_PER_PAGE)?;
        validate_positive_number("page", self.page as u64, 1)?;
        Ok(())
    }
}

/// Optional pagination as supplied by a caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl QueryOptions {
    pub fn new(per_page: Option<u32>, page: Option<u32>) -> Self {
        Self { per_page, page }
    }

    pub fn is_empty(&self) -> bool {
        self.per_page.is_none() && self.page.is_none()
    }

    /// Fills unset fields from `fallback`.
    pub fn or(self, fallback: QueryOptions) -> QueryOptions {
        QueryOptions {
            per_page: self.per_page.or(fallback.per_page),
            page: self.page.or(fallback.page),
        }
    }

    pub fn resolve(&self) -> Page {
        Page {
            per_page: self.per_page.unwrap_or(Page::DEFAULT.per_page),
            page: self.page.unwrap_or(Page::DEFAULT.page),
        }
    }
}

/// A search by free-form term with optional pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub term: Option<String>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: Some(term.into()),
            per_page: None,
            page: None,
        }
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn options(&self) -> QueryOptions {
        QueryOptions::new(self.per_page, self.page)
    }

    /// Term (if any) plus pagination with defaults applied.
    pub fn resolve(&self) -> (Option<&str>, Page) {
        (self.term.as_deref(), self.options().resolve())
    }
}

/// What a caller asks the engine to fetch.
///
/// `None` options mean the fixed first page (20 photos), matching the
/// `get_*` shortcuts; `Some` options get the query defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoRequest {
    Search {
        term: String,
        options: QueryOptions,
    },
    Curated {
        options: Option<QueryOptions>,
    },
    Topic {
        topic: Topic,
        options: Option<QueryOptions>,
    },
    Url(String),
}
