//! Pagination for explorer results (100 rows/page)

/// Rows per explorer page
pub const PAGE_SIZE: usize = 100;

/// Page window over a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: usize,
    /// Total number of pages (0 for an empty result set)
    pub total_pages: usize,
    /// Index of the first row on this page
    pub offset: usize,
}

impl Pagination {
    /// Rows of `items` that fall on this page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        let end = (self.offset + PAGE_SIZE).min(items.len());
        &items[start..end]
    }
}

/// Calculate pagination metadata from total results and requested page
///
/// The page is clamped into `[1, total_pages]`.
///
/// # Examples
/// ```
/// use tsd_dash::pagination::calculate_pagination;
///
/// // 250 results = 3 pages (100 + 100 + 50)
/// let p = calculate_pagination(250, 2);
/// assert_eq!(p.page, 2);
/// assert_eq!(p.total_pages, 3);
/// assert_eq!(p.offset, 100);
///
/// // Out-of-range pages are clamped
/// let p = calculate_pagination(250, 99);
/// assert_eq!(p.page, 3);
/// assert_eq!(p.offset, 200);
/// ```
pub fn calculate_pagination(total_results: usize, requested_page: usize) -> Pagination {
    let total_pages = total_results.div_ceil(PAGE_SIZE);
    let page = requested_page.max(1).min(total_pages.max(1));
    let offset = (page - 1) * PAGE_SIZE;

    Pagination {
        page,
        total_pages,
        offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_normal() {
        let p = calculate_pagination(250, 2);
        assert_eq!(p.page, 2);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.offset, 100);
    }

    #[test]
    fn test_pagination_out_of_bounds_low() {
        let p = calculate_pagination(150, 0);
        assert_eq!(p.page, 1);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn test_pagination_empty() {
        let p = calculate_pagination(0, 5);
        assert_eq!(p.page, 1);
        assert_eq!(p.total_pages, 0);
        assert_eq!(p.offset, 0);
    }

    #[test]
    fn test_pagination_exact_page_boundary() {
        let p = calculate_pagination(200, 3);
        assert_eq!(p.page, 2);
        assert_eq!(p.total_pages, 2);
    }

    #[test]
    fn test_slice() {
        let items: Vec<usize> = (0..250).collect();
        let last = calculate_pagination(items.len(), 3).slice(&items);
        assert_eq!(last.len(), 50);
        assert_eq!(last[0], 200);

        let empty: Vec<usize> = Vec::new();
        assert!(calculate_pagination(0, 1).slice(&empty).is_empty());
    }
}
