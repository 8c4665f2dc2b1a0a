//! List options and page cursors.
//!
//! A list option renders itself to query parameters. Options that also carry
//! a page counter implement [`Pageable`] and can drive
//! [`Client::iterate`](crate::client::Client::iterate), which walks pages
//! until the server stops sending a `Link` header.

use crate::body::Values;

/// Page size used when iterating with no explicit `per_page`.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Query parameters for a list endpoint.
pub trait ListOption {
    /// Renders the option to query parameters.
    fn values(&self) -> Values;

    /// Returns true if the option adds nothing to the query string.
    fn is_empty(&self) -> bool {
        self.values().is_empty()
    }
}

/// A list option with a 1-based page counter.
pub trait Pageable: ListOption + Default {
    /// Current page number.
    fn page(&self) -> u32;

    /// Moves to another page.
    fn set_page(&mut self, page: u32);

    /// Page size, for options that have one.
    fn per_page(&self) -> Option<u32> {
        None
    }

    /// Sets the page size; a no-op for options without one.
    fn set_per_page(&mut self, _per_page: u32) {}

    /// Clamps the page to at least 1 and fills in a missing page size.
    fn normalize(&mut self) {
        if self.page() < 1 {
            self.set_page(1);
        }
        if matches!(self.per_page(), Some(n) if n < 1) {
            self.set_per_page(DEFAULT_PER_PAGE);
        }
    }
}

/// One page of a list response.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// The decoded page.
    pub data: T,

    /// True if the response carried a `Link` header, i.e. more pages exist.
    pub has_next: bool,
}

impl<T> Page<T> {
    /// Transforms the page data, keeping the continuation flag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Page<U> {
        Page {
            data: f(self.data),
            has_next: self.has_next,
        }
    }
}

/// Plain page-number pagination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOption {
    /// 1-based page number; 0 leaves it to the server.
    pub page: u32,

    /// Items per page (vendor maximum 100); 0 leaves it to the server.
    pub per_page: u32,
}

impl PageOption {
    /// Creates an option for the given page and size.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }
}

impl ListOption for PageOption {
    fn values(&self) -> Values {
        let mut q = Values::new();
        q.set_int("page", self.page.into());
        q.set_int("per_page", self.per_page.into());
        q
    }
}

impl Pageable for PageOption {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn per_page(&self) -> Option<u32> {
        Some(self.per_page)
    }

    fn set_per_page(&mut self, per_page: u32) {
        self.per_page = per_page;
    }
}

/// Saved-search style filtering: a query expression plus page counter.
///
/// Freshdesk's filter endpoints take no page size; leave `per_page` as
/// `None` for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOption {
    /// Filter expression, e.g. `"priority:3 AND status:2"`.
    pub query: String,

    /// 1-based page number.
    pub page: u32,

    /// Items per page, where the endpoint accepts one.
    pub per_page: Option<u32>,
}

impl FilterOption {
    /// Creates a filter for the first page.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            per_page: None,
        }
    }
}

impl ListOption for FilterOption {
    fn values(&self) -> Values {
        let mut q = Values::new();
        q.set_string("query", &self.query);
        q.set_int("page", self.page.into());
        if let Some(per_page) = self.per_page {
            q.set_int("per_page", per_page.into());
        }
        q
    }
}

impl Pageable for FilterOption {
    fn page(&self) -> u32 {
        self.page
    }

    fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    fn per_page(&self) -> Option<u32> {
        self.per_page
    }

    fn set_per_page(&mut self, per_page: u32) {
        self.per_page = Some(per_page);
    }
}
