//! Pagination Value Objects
//!
//! Input and output of the list pipeline's final stage.

/// A shaped list request: filter, sort and page parameters
///
/// `page_number` and `page_size` are 1-based and must already be
/// clamped to >= 1 by the caller; the presentation layer applies the
/// configured defaults.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Free-text filter; empty means no filtering
    pub filter: String,
    /// `"<column>[:asc|:desc]"`; empty means no sorting
    pub order_by: String,
    pub page_number: usize,
    pub page_size: usize,
}

/// One page of records plus pagination metadata
///
/// `total_count` and `total_pages` describe the filtered-but-unpaged
/// collection.
#[derive(Debug, Clone)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_count: usize,
}

impl<T> PageResult<T> {
    /// Map the page items, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_count: self.total_count,
        }
    }
}
