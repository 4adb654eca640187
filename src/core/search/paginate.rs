//! Fixed-size pages over a ranked sequence.
//!
//! Page inputs are sanitized, never rejected: a missing or
//! non-positive page becomes 1 and a missing or non-positive page
//! size becomes the default. Pages past the end are simply empty.

/// Page size when the caller gives none
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// One page of a ranked sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Length of the whole sequence before slicing
    pub total: usize,

    pub page: u64,
    pub page_size: u64,
}

/// Sanitize a 1-based page number
pub fn sanitize_page(page: Option<i64>) -> u64 {
    match page {
        Some(p) if p > 0 => p as u64,
        _ => 1,
    }
}

/// Sanitize a page size against a default
pub fn sanitize_page_size(page_size: Option<i64>, default: u64) -> u64 {
    match page_size {
        Some(s) if s > 0 => s as u64,
        _ => default.max(1),
    }
}

/// Slice `[(page-1)*page_size, page*page_size)` out of `ranked`.
///
/// # Examples
///
/// ```
/// use plotmarket::core::search::paginate;
///
/// let page = paginate((1..=15).collect::<Vec<_>>(), Some(2), Some(10));
/// assert_eq!(page.items, vec![11, 12, 13, 14, 15]);
/// assert_eq!(page.total, 15);
///
/// let past_end = paginate(vec![1, 2, 3], Some(999), None);
/// assert!(past_end.items.is_empty());
/// assert_eq!(past_end.total, 3);
/// ```
pub fn paginate<T>(ranked: Vec<T>, page: Option<i64>, page_size: Option<i64>) -> Page<T> {
    let page = sanitize_page(page);
    let page_size = sanitize_page_size(page_size, DEFAULT_PAGE_SIZE);
    slice_page(ranked, page, page_size)
}

/// Slice with already sanitized inputs (both >= 1)
pub fn slice_page<T>(ranked: Vec<T>, page: u64, page_size: u64) -> Page<T> {
    let total = ranked.len();
    let start = (page.saturating_sub(1)).saturating_mul(page_size);
    let start = usize::try_from(start).unwrap_or(usize::MAX).min(total);
    let end = start
        .saturating_add(usize::try_from(page_size).unwrap_or(usize::MAX))
        .min(total);

    let items = ranked.into_iter().skip(start).take(end - start).collect();

    Page {
        items,
        total,
        page,
        page_size,
    }
}
