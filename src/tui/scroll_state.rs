/// Rows of scroll offset past which the navigation bar switches to its
/// "scrolled" style and the back-to-top affordance appears.
pub const SCROLL_THRESHOLD: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    pub offset: usize,
    pub content_height: usize,
    pub viewport_height: usize,
}

impl ScrollState {
    pub fn new(viewport_height: usize) -> Self {
        Self {
            offset: 0,
            content_height: 0,
            viewport_height,
        }
    }

    /// Strict inequality: an offset sitting exactly on the threshold does
    /// not count as scrolled.
    pub fn is_past_threshold(&self) -> bool {
        self.offset > SCROLL_THRESHOLD
    }

    fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = (self.offset + lines).min(self.max_offset());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.saturating_sub(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.saturating_sub(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn scroll_to(&mut self, row: usize) {
        self.offset = row.min(self.max_offset());
    }

    pub fn update_viewport_height(&mut self, new_height: usize) {
        self.viewport_height = new_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn update_content_height(&mut self, new_height: usize) {
        self.content_height = new_height;
        self.offset = self.offset.min(self.max_offset());
    }
}
