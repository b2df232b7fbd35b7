use serde::{Deserialize, Serialize};

///
/// PageRequest
///
/// One-based page window. The page clamps to at least 1 and the size
/// clamps to `1..=max_page_size`, so a request can always be turned into
/// a valid skip/take pair.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub const DEFAULT_PAGE_SIZE: usize = 50;
    pub const MAX_PAGE_SIZE: usize = 100;

    /// Page request clamped against the default size ceiling.
    #[must_use]
    pub fn new(page: usize, page_size: usize) -> Self {
        Self::with_max(page, page_size, Self::MAX_PAGE_SIZE)
    }

    /// Page request clamped against a caller-supplied size ceiling.
    #[must_use]
    pub fn with_max(page: usize, page_size: usize, max_page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, max_page_size.max(1)),
        }
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Rows to skip before this page.
    #[must_use]
    pub const fn skip(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    /// Rows this page holds at most.
    #[must_use]
    pub const fn take(&self) -> usize {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_PAGE_SIZE)
    }
}

///
/// PagedResult
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> PagedResult<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, total_count: usize, page: usize, page_size: usize) -> Self {
        Self {
            items,
            total_count,
            page,
            page_size,
        }
    }

    /// Ceiling of `total_count / page_size`.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.total_count.div_ceil(self.page_size)
        }
    }
}
