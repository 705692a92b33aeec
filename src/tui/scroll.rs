// Scroll state shared by the board and logs panels
//
// Each panel owns its ScrollState; App only routes input to it.
//
// Two modes:
// - follow: snap to the newest content at the bottom (logs). Scrolling up
//   detaches, reaching the bottom again re-attaches.
// - manual: stay where the user put us (leaderboard, best rows on top).

/// Scroll state for a single panel
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Index of the first visible item
    offset: usize,

    /// Total number of items in content
    total: usize,

    /// Number of items visible in the viewport
    viewport: usize,

    /// Currently pinned to the bottom
    pub auto_follow: bool,

    /// Whether reaching the bottom re-enables auto_follow
    follows: bool,
}

impl ScrollState {
    /// Bottom-pinned scroll state for streaming content
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
            follows: true,
        }
    }

    /// Top-anchored scroll state that never follows
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            follows: false,
            ..Self::new()
        }
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }
        self.refollow();
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
        self.auto_follow = false;
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
        self.refollow();
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_follow = self.follows;
    }

    fn refollow(&mut self) {
        if self.follows && self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Visible range as (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Content overflows viewport
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follow_on_new_content() {
        let mut scroll = ScrollState::new();
        assert!(scroll.auto_follow);

        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_scroll_up_disables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.scroll_up();
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 14);

        scroll.update_dimensions(25, 5);
        assert_eq!(scroll.offset(), 14);
    }

    #[test]
    fn test_reaching_bottom_refollows() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);
        scroll.scroll_up();
        scroll.scroll_down();
        assert!(scroll.auto_follow);
        assert_eq!(scroll.offset(), 15);
    }

    #[test]
    fn test_manual_mode_stays_anchored() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 0);

        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 5);
        assert!(!scroll.auto_follow);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 5);
    }

    #[test]
    fn test_offset_clamps_when_viewport_grows() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(30, 10);
        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset(), 20);

        scroll.update_dimensions(30, 25);
        assert_eq!(scroll.offset(), 5);
        assert_eq!(scroll.visible_range(), (5, 30));
    }

    #[test]
    fn test_page_up_stops_at_top() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(30, 10);
        scroll.scroll_down();
        scroll.page_up();
        assert_eq!(scroll.offset(), 0);
        assert!(!scroll.needs_scrollbar() || scroll.total() > scroll.viewport());
    }
}
