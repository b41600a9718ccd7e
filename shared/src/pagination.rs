//! Client-side pagination over an already fetched list.

use std::ops::Range;

/// 分页状态（页码从 1 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current_page: usize,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(crate::PAGE_SIZE)
    }
}

impl Paginator {
    /// `page_size` of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `ceil(total / page_size)`; an empty list has zero pages.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Index range of `page` within a list of `total` records.
    pub fn range_for(&self, page: usize, total: usize) -> Range<usize> {
        let page = page.max(1);
        let start = ((page - 1) * self.page_size).min(total);
        let end = (page * self.page_size).min(total);
        start..end
    }

    pub fn current_range(&self, total: usize) -> Range<usize> {
        self.range_for(self.current_page, total)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.current_range(items.len())]
    }

    /// Jump to `page`, bounded to `[1, page_count]`.
    pub fn go_to(&mut self, page: usize, total: usize) {
        let last = self.page_count(total).max(1);
        self.current_page = page.clamp(1, last);
    }

    /// Pull the current page back inside the list after it shrank.
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.current_page, total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_k_renders_expected_window() {
        let items: Vec<usize> = (0..12).collect();
        let mut pager = Paginator::new(5);

        assert_eq!(pager.page_count(items.len()), 3);
        assert_eq!(pager.slice(&items), &[0, 1, 2, 3, 4]);

        pager.go_to(2, items.len());
        assert_eq!(pager.slice(&items), &[5, 6, 7, 8, 9]);

        pager.go_to(3, items.len());
        assert_eq!(pager.slice(&items), &[10, 11]);
    }

    #[test]
    fn test_every_page_matches_formula() {
        let pager = Paginator::new(5);
        for total in [0usize, 1, 5, 6, 23] {
            for k in 1..=pager.page_count(total) {
                let range = pager.range_for(k, total);
                assert_eq!(range.start, 5 * (k - 1));
                assert_eq!(range.end, (5 * k).min(total));
            }
        }
    }

    #[test]
    fn test_empty_list() {
        let pager = Paginator::default();
        let items: Vec<u8> = Vec::new();
        assert_eq!(pager.page_count(0), 0);
        assert!(pager.slice(&items).is_empty());
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_go_to_is_bounded() {
        let mut pager = Paginator::new(5);
        pager.go_to(9, 12);
        assert_eq!(pager.current_page(), 3);
        pager.go_to(0, 12);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut pager = Paginator::new(5);
        pager.go_to(3, 11);
        assert_eq!(pager.current_page(), 3);

        // 第 3 页唯一的记录被删除
        pager.clamp(10);
        assert_eq!(pager.current_page(), 2);

        pager.clamp(0);
        assert_eq!(pager.current_page(), 1);
    }
}
