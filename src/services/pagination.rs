/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Size of the full set before slicing.
    pub total: usize,
}

/// Slice `items` into the 1-based `page` of `per_page` entries.
/// Out-of-range pages yield an empty slice, never an error.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let total = items.len();
    let start = page.max(1).saturating_sub(1).saturating_mul(per_page);
    let items = items.into_iter().skip(start).take(per_page).collect();
    Page { items, total }
}

/// Parse a page query parameter. Absent, non-numeric, or zero falls back to the first page.
pub fn page_number(raw: Option<&str>) -> usize {
    raw.and_then(|p| p.trim().parse::<usize>().ok())
        .filter(|&p| p >= 1)
        .unwrap_or(crate::names::DEFAULT_PAGE)
}
