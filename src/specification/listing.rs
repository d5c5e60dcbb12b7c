//! Paged listing returned by collection endpoints.

/// One page of records plus paging metadata.
///
/// Pages are numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListResponse<T> {
    /// Records on this page.
    pub content: Vec<T>,
    /// Page number, starting at 1.
    pub page: u32,
    /// Requested page size.
    pub size: u32,
    /// Number of records across all pages.
    pub total_elements: u64,
    /// Number of pages.
    pub total_pages: u32,
    /// Whether this is the final page.
    pub last: bool,
}
