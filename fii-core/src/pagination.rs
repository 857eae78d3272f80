//! Page bookkeeping over the filtered record list.

use std::ops::Range;

/// Items per page when the page first loads.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    items_per_page: usize,
    page_count: usize,
    total: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl Pagination {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            page_count: 0,
            total: 0,
        }
    }

    /// 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Number of items being paged.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Recompute the page count for `total` items and go back to page 1.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.page_count = total.div_ceil(self.items_per_page);
        self.current_page = 1;
    }

    /// Change the page size; at least one item per page.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.reset(self.total);
    }

    /// Returns false (and stays put) on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.page_count {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Returns false (and stays put) on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Index range of the current page within the paged list.
    pub fn range(&self) -> Range<usize> {
        let end = (self.current_page * self.items_per_page).min(self.total);
        let start = ((self.current_page - 1) * self.items_per_page).min(end);
        start..end
    }

    /// The current page's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }
}
