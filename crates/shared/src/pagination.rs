//! Offset pagination utilities.

use serde::Serialize;

/// Default number of items per page.
pub const DEFAULT_PER_PAGE: i64 = 20;

/// Maximum number of items per page.
pub const MAX_PER_PAGE: i64 = 100;

/// Normalized pagination window for list queries.
///
/// Raw query values are clamped on construction, so repositories can use
/// `limit()` and `offset()` without re-checking bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: i64,
    per_page: i64,
}

impl PageWindow {
    /// Builds a window from raw query values.
    ///
    /// Pages below 1 become 1; per_page is clamped to `1..=MAX_PER_PAGE`.
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Number of pages needed for `total` items.
    pub fn total_pages(&self, total: i64) -> i64 {
        if total <= 0 {
            0
        } else {
            (total + self.per_page - 1) / self.per_page
        }
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// Pagination block included in list responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    /// Builds the response block for a window and a total row count.
    pub fn for_window(window: PageWindow, total: i64) -> Self {
        Self {
            page: window.page(),
            per_page: window.per_page(),
            total,
            total_pages: window.total_pages(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_passthrough() {
        let window = PageWindow::new(3, 25);
        assert_eq!(window.page(), 3);
        assert_eq!(window.per_page(), 25);
        assert_eq!(window.limit(), 25);
        assert_eq!(window.offset(), 50);
    }

    #[test]
    fn test_window_clamps_page() {
        assert_eq!(PageWindow::new(0, 20).page(), 1);
        assert_eq!(PageWindow::new(-5, 20).page(), 1);
        assert_eq!(PageWindow::new(1, 20).offset(), 0);
    }

    #[test]
    fn test_window_clamps_per_page() {
        assert_eq!(PageWindow::new(1, 0).per_page(), 1);
        assert_eq!(PageWindow::new(1, -10).per_page(), 1);
        assert_eq!(PageWindow::new(1, 1000).per_page(), MAX_PER_PAGE);
        assert_eq!(PageWindow::new(1, 100).per_page(), 100);
    }

    #[test]
    fn test_default_window() {
        let window = PageWindow::default();
        assert_eq!(window.page(), 1);
        assert_eq!(window.per_page(), DEFAULT_PER_PAGE);
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn test_total_pages() {
        let window = PageWindow::new(1, 20);
        assert_eq!(window.total_pages(0), 0);
        assert_eq!(window.total_pages(1), 1);
        assert_eq!(window.total_pages(20), 1);
        assert_eq!(window.total_pages(21), 2);
        assert_eq!(window.total_pages(400), 20);
    }

    #[test]
    fn test_total_pages_negative_total() {
        let window = PageWindow::new(1, 20);
        assert_eq!(window.total_pages(-5), 0);
    }

    #[test]
    fn test_pagination_block_serialization() {
        let block = Pagination::for_window(PageWindow::new(2, 10), 35);
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(
            json,
            r#"{"page":2,"per_page":10,"total":35,"total_pages":4}"#
        );
    }
}
