//! Page slicing

use crate::query::MAX_PAGE_SIZE;

/// Clamp a page size into `1..=MAX_PAGE_SIZE`
pub fn normalize_page_size(page_size: usize) -> usize {
    page_size.clamp(1, MAX_PAGE_SIZE)
}

/// Number of pages for `len` records, never less than 1
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(normalize_page_size(page_size)).max(1)
}

/// Slice out one 1-based page
///
/// Returns the page and the total page count. Pages below 1 or past the last
/// page are empty; the page count always describes the full input.
pub fn paginate<T>(records: &[T], page: i64, page_size: usize) -> (&[T], usize) {
    let page_size = normalize_page_size(page_size);
    let pages = total_pages(records.len(), page_size);

    let index = match usize::try_from(page) {
        Ok(page) if (1..=pages).contains(&page) => page - 1,
        _ => return (&[], pages),
    };

    let start = index * page_size;
    let end = (start + page_size).min(records.len());
    (&records[start..end], pages)
}
