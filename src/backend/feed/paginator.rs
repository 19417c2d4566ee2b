//! Page-number arithmetic
//!
//! Boundary policy: a missing or non-integer page number means page 1; a
//! number below 1 or past the last page means the last page. An empty list
//! still has one, empty, page.

use serde::Serialize;

/// Resolved position of a page inside a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number
    pub number: usize,
    pub num_pages: usize,
    pub offset: usize,
    pub limit: usize,
}

/// Splits a listing of known length into fixed-size pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    per_page: usize,
}

impl Paginator {
    /// # Panics
    /// If `per_page` is zero; `AppConfig::validate` rejects that value.
    pub fn new(per_page: usize) -> Self {
        assert!(per_page > 0, "page size must be positive");
        Self { per_page }
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn num_pages(&self, total: usize) -> usize {
        total.div_ceil(self.per_page).max(1)
    }

    /// Resolve the raw `page` query value against a listing of `total` rows
    pub fn window(&self, total: usize, requested: Option<&str>) -> PageWindow {
        let num_pages = self.num_pages(total);

        let number = match requested.map(str::trim).map(str::parse::<i64>) {
            None | Some(Err(_)) => 1,
            Some(Ok(n)) if n < 1 || n as u64 > num_pages as u64 => num_pages,
            Some(Ok(n)) => n as usize,
        };

        PageWindow {
            number,
            num_pages,
            offset: (number - 1) * self.per_page,
            limit: self.per_page,
        }
    }
}

/// One page of items with the data pager links need
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub num_pages: usize,
    /// Rows in the whole listing
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_page_number: Option<usize>,
    pub next_page_number: Option<usize>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, window: PageWindow, total: usize) -> Self {
        let has_previous = window.number > 1;
        let has_next = window.number < window.num_pages;

        Self {
            items,
            number: window.number,
            num_pages: window.num_pages,
            total,
            has_previous,
            has_next,
            previous_page_number: has_previous.then(|| window.number - 1),
            next_page_number: has_next.then(|| window.number + 1),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
