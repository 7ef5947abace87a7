//! Application Configuration
//!
//! Named defaults for the list query parameters. The presentation
//! layer applies these when a query parameter is absent.

/// Default sort directive
pub const DEFAULT_ORDERING: &str = "id:asc";

/// Default page size
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default page number (1-based)
pub const DEFAULT_PAGE_NUMBER: usize = 1;
