/// Cards shown per page.
pub const PAGE_SIZE: usize = 6;

/// Number of pages needed for `items` entries; zero when there is nothing to
/// show.
pub const fn total_pages_for(items: usize) -> usize {
    items.div_ceil(PAGE_SIZE)
}

/// One-based page cursor over a list of `items` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    current: usize,
    items: usize,
}

impl PageCursor {
    pub const fn new(items: usize) -> Self {
        Self { current: 1, items }
    }

    /// Rebuilds the cursor for a restored position, rejecting pages outside
    /// `1..=max(1, total_pages)`.
    pub const fn at(items: usize, current: usize) -> Option<Self> {
        let cursor = Self { current, items };
        let upper = if cursor.total_pages() == 0 {
            1
        } else {
            cursor.total_pages()
        };
        if current >= 1 && current <= upper {
            Some(cursor)
        } else {
            None
        }
    }

    pub const fn current(self) -> usize {
        self.current
    }

    pub const fn items(self) -> usize {
        self.items
    }

    pub const fn total_pages(self) -> usize {
        total_pages_for(self.items)
    }

    pub const fn page_size(self) -> usize {
        PAGE_SIZE
    }

    pub const fn is_first(self) -> bool {
        self.current == 1
    }

    pub const fn is_last(self) -> bool {
        self.current >= self.total_pages()
    }

    /// Half-open index range of the current page.
    pub const fn window(self) -> (usize, usize) {
        let start = (self.current - 1) * PAGE_SIZE;
        (start, start + PAGE_SIZE)
    }

    /// Moves to `page` when it lies in `1..=total_pages`; returns whether the
    /// cursor accepted the target.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() {
            return false;
        }
        self.current = page;
        true
    }

    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{PAGE_SIZE, PageCursor, total_pages_for};

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages_for(0), 0);
        assert_eq!(total_pages_for(1), 1);
        assert_eq!(total_pages_for(PAGE_SIZE), 1);
        assert_eq!(total_pages_for(PAGE_SIZE + 1), 2);
        assert_eq!(total_pages_for(14), 3);
    }

    #[test]
    fn go_to_rejects_out_of_range() {
        let mut cursor = PageCursor::new(14);
        assert!(!cursor.go_to(0));
        assert!(!cursor.go_to(4));
        assert_eq!(cursor.current(), 1);
        assert!(cursor.go_to(3));
        assert_eq!(cursor.window(), (12, 18));
    }

    #[test]
    fn next_and_prev_stop_at_boundaries() {
        let mut cursor = PageCursor::new(7);
        assert!(!cursor.prev());
        assert!(cursor.next());
        assert!(!cursor.next());
        assert_eq!(cursor.current(), 2);
        assert!(cursor.prev());
        assert!(cursor.is_first());
    }

    #[test]
    fn empty_cursor_never_moves() {
        let mut cursor = PageCursor::new(0);
        assert_eq!(cursor.total_pages(), 0);
        assert!(!cursor.next());
        assert!(!cursor.prev());
        assert!(!cursor.go_to(1));
        assert_eq!(cursor.current(), 1);
    }

    #[test]
    fn restore_validates_position() {
        assert!(PageCursor::at(0, 1).is_some());
        assert!(PageCursor::at(0, 2).is_none());
        assert!(PageCursor::at(13, 3).is_some());
        assert!(PageCursor::at(13, 0).is_none());
    }
}
