/// Offset-based page request
///
/// # Example
/// ```
/// use pricing_core_db::repository::pagination::PageRequest;
///
/// let first = PageRequest::new(20, 0);
/// let second = PageRequest::for_page(20, 2);
/// assert_eq!(second.offset, 20);
/// assert_eq!(first.page_number(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Page request for a 1-based page number (0 is treated as 1)
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1) * page_size,
        }
    }

    /// Get the page number (1-based) for this request
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// One page of results with the total count across all pages
///
/// # Example
/// ```
/// use pricing_core_db::repository::pagination::{Page, PageRequest};
///
/// let page = Page::slice((1..=45).collect::<Vec<_>>(), PageRequest::for_page(20, 3));
/// assert_eq!(page.items, vec![41, 42, 43, 44, 45]);
/// assert_eq!(page.total_pages(), 3);
/// assert!(page.is_last_page());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, limit: usize, offset: usize) -> Self {
        Self {
            items,
            total,
            limit,
            offset,
        }
    }

    /// Cut the requested window out of a full, already ordered result set
    pub fn slice(all: Vec<T>, request: PageRequest) -> Self {
        let total = all.len();
        let items = all
            .into_iter()
            .skip(request.offset)
            .take(request.limit)
            .collect();
        Self::new(items, total, request.limit, request.offset)
    }

    /// Check if there are more pages after this one
    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    /// Get the current page number (1-based)
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    /// Get the total number of pages
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    pub fn is_first_page(&self) -> bool {
        self.offset == 0
    }

    pub fn is_last_page(&self) -> bool {
        !self.has_more()
    }
}
