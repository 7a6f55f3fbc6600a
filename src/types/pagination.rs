//! Pagination types for the paginated product listing.

use serde::Deserialize;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

/// Pagination query parameters (`?page&limit`)
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    DEFAULT_PAGE_NUMBER
}

fn default_limit() -> usize {
    DEFAULT_PAGE_SIZE
}

impl PageParams {
    /// Starting index of the requested page (0-based). Saturates so
    /// that absurdly large query values land on an empty page instead
    /// of overflowing.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Slice one page out of the full result set, in memory.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.limit)
            .collect()
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_page_of_ten_starts_at_index_ten() {
        let params = PageParams { page: 2, limit: 10 };
        let items: Vec<usize> = (0..25).collect();
        let page = params.slice(items);
        assert_eq!(page, (10..20).collect::<Vec<_>>());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let params = PageParams { page: 4, limit: 10 };
        let page = params.slice((0..25).collect::<Vec<usize>>());
        assert!(page.is_empty());
    }

    #[test]
    fn page_zero_is_clamped_to_the_start() {
        let params = PageParams { page: 0, limit: 10 };
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn huge_page_numbers_saturate_instead_of_overflowing() {
        let params = PageParams {
            page: usize::MAX,
            limit: 10,
        };
        assert_eq!(params.offset(), usize::MAX);
        assert!(params.slice((0..25).collect::<Vec<usize>>()).is_empty());
    }
}
