use std::ops::Range;

use consts::{
    DEFAULT_PAGE_SIZE, GAPPED_WINDOW_RADIUS, GAPPED_WINDOW_THRESHOLD, SLIDING_WINDOW_WIDTH,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowStyle {
    /// First two, last two and the pages around the current one, with gaps
    Gapped,
    /// A fixed-width run of consecutive pages following the current one
    Sliding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Gap,
}

/// Client-side pagination over an in-memory list. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    /// Swaps in a new row count, falling back to page 1 if the current page no longer exists
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        if self.page > self.total_pages() {
            self.page = 1;
        }
        self
    }

    /// Returns false and leaves the pager untouched for out-of-range targets
    pub fn goto(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.page = page;
        true
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let Range { start, end } = self.range();
        &rows[start.min(rows.len())..end.min(rows.len())]
    }

    pub fn showing_from(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    pub fn showing_to(&self) -> usize {
        (self.page * self.page_size).min(self.total)
    }

    pub fn window(&self, style: WindowStyle) -> Vec<PageItem> {
        match style {
            WindowStyle::Gapped => self.gapped_window(),
            WindowStyle::Sliding => self.sliding_window(),
        }
    }

    fn gapped_window(&self) -> Vec<PageItem> {
        let last = self.total_pages();
        if last <= GAPPED_WINDOW_THRESHOLD {
            return (1..=last).map(PageItem::Page).collect();
        }
        let near = self.page.saturating_sub(GAPPED_WINDOW_RADIUS)..=self.page + GAPPED_WINDOW_RADIUS;
        (1..=last)
            .filter_map(|p| {
                if p <= 2 || p >= last - 1 || near.contains(&p) {
                    Some(PageItem::Page(p))
                } else if (p == 3 && self.page > 5) || (p == last - 2 && self.page + 4 < last) {
                    Some(PageItem::Gap)
                } else {
                    None
                }
            })
            .collect()
    }

    fn sliding_window(&self) -> Vec<PageItem> {
        let last = self.total_pages();
        let width = last.min(SLIDING_WINDOW_WIDTH);
        let first = if last <= SLIDING_WINDOW_WIDTH || self.page <= 3 {
            1
        } else if self.page + 2 >= last {
            last + 1 - SLIDING_WINDOW_WIDTH
        } else {
            self.page - 2
        };
        (first..first + width).map(PageItem::Page).collect()
    }
}

/// Brings the table header back into view after a page change
pub fn scroll_to_table_top() {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{ScrollBehavior, ScrollToOptions};

        if let Some(window) = web_sys::window() {
            let opts = ScrollToOptions::new();
            opts.set_top(consts::PAGE_CHANGE_SCROLL_TOP);
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Gap, Page};

    fn at(total: usize, size: usize, page: usize) -> Pager {
        let mut pager = Pager::new(total, size);
        assert!(pager.goto(page));
        pager
    }

    #[test]
    fn empty_list_has_one_page() {
        let pager = Pager::new(0, 20);
        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.showing_from(), 0);
        assert_eq!(pager.showing_to(), 0);
        assert_eq!(pager.range(), 0..0);
        assert!(!pager.has_prev());
        assert!(!pager.has_next());
    }

    #[test]
    fn last_page_is_partial() {
        let pager = at(45, 20, 3);
        assert_eq!(pager.total_pages(), 3);
        assert_eq!(pager.range(), 40..45);
        assert_eq!(pager.showing_from(), 41);
        assert_eq!(pager.showing_to(), 45);
        let rows: Vec<usize> = (0..45).collect();
        assert_eq!(pager.slice(&rows), &[40, 41, 42, 43, 44]);
    }

    #[test]
    fn out_of_range_goto_is_ignored() {
        let mut pager = at(45, 20, 2);
        assert!(!pager.goto(0));
        assert!(!pager.goto(4));
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn shrinking_data_resets_page() {
        let pager = at(100, 10, 8).with_total(30);
        assert_eq!(pager.page(), 1);
        let pager = at(100, 10, 3).with_total(30);
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let mut pager = at(100, 10, 5);
        pager.set_page_size(50);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.total_pages(), 2);
    }

    #[test]
    fn gapped_window_lists_all_small_counts() {
        let pager = at(180, 20, 4);
        assert_eq!(pager.window(WindowStyle::Gapped), (1..=9).map(Page).collect::<Vec<_>>());
    }

    #[test]
    fn gapped_window_in_the_middle() {
        let pager = at(400, 20, 10);
        assert_eq!(
            pager.window(WindowStyle::Gapped),
            vec![Page(1), Page(2), Gap, Page(8), Page(9), Page(10), Page(11), Page(12), Gap, Page(19), Page(20)]
        );
    }

    #[test]
    fn gapped_window_near_edges() {
        let pager = at(400, 20, 1);
        assert_eq!(
            pager.window(WindowStyle::Gapped),
            vec![Page(1), Page(2), Page(3), Gap, Page(19), Page(20)]
        );
        let pager = at(400, 20, 20);
        assert_eq!(
            pager.window(WindowStyle::Gapped),
            vec![Page(1), Page(2), Gap, Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn sliding_window_tracks_current_page() {
        assert_eq!(at(30, 10, 2).window(WindowStyle::Sliding), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            at(100, 10, 2).window(WindowStyle::Sliding),
            (1..=5).map(Page).collect::<Vec<_>>()
        );
        assert_eq!(
            at(100, 10, 6).window(WindowStyle::Sliding),
            (4..=8).map(Page).collect::<Vec<_>>()
        );
        assert_eq!(
            at(100, 10, 9).window(WindowStyle::Sliding),
            (6..=10).map(Page).collect::<Vec<_>>()
        );
    }
}
