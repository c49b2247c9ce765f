/// Card width used until the renderer has measured a real card.
pub const DEFAULT_CARD_WIDTH: u32 = 350;
/// Gap between cards in the reference layout.
pub const DEFAULT_CARD_GAP: u32 = 32;

/// Injected layout geometry. The index derivation never measures anything
/// itself; the renderer feeds measured values in at the integration
/// boundary and the default acts as the fallback when no card is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselGeometry {
    pub card_width: u32,
    pub gap: u32,
}

impl Default for CarouselGeometry {
    fn default() -> Self {
        Self {
            card_width: DEFAULT_CARD_WIDTH,
            gap: DEFAULT_CARD_GAP,
        }
    }
}

impl CarouselGeometry {
    pub fn stride(&self) -> u32 {
        self.card_width + self.gap
    }
}

/// Horizontally scrolling project strip with a derived current index.
///
/// `current_index` is always computed from `offset`, never set directly:
/// programmatic navigation (`scroll_to`) only records a target, and the
/// animation ticks move the offset until the derivation catches up.
#[derive(Debug, Clone)]
pub struct CarouselState {
    pub offset: u32,
    pub current_index: usize,
    pub item_count: usize,
    geometry: CarouselGeometry,
    target: Option<usize>,
}

impl CarouselState {
    pub fn new(item_count: usize) -> Self {
        Self::with_geometry(item_count, CarouselGeometry::default())
    }

    pub fn with_geometry(item_count: usize, geometry: CarouselGeometry) -> Self {
        Self {
            offset: 0,
            current_index: 0,
            item_count,
            geometry,
            target: None,
        }
    }

    pub fn geometry(&self) -> CarouselGeometry {
        self.geometry
    }

    /// Re-measured geometry (terminal resize). The offset is re-anchored so
    /// the current card stays current instead of letting the index drift.
    pub fn set_geometry(&mut self, geometry: CarouselGeometry) {
        if geometry == self.geometry {
            return;
        }
        self.geometry = geometry;
        self.offset = (self.current_index as u32) * self.geometry.stride();
    }

    fn max_offset(&self) -> u32 {
        self.geometry.stride() * (self.item_count.saturating_sub(1) as u32)
    }

    /// Rounds to the nearest card; ties round up (away from zero). An
    /// offset exactly between two cards therefore marks the later card.
    fn index_for_offset(&self, offset: u32) -> usize {
        if self.item_count == 0 {
            return 0;
        }
        let stride = self.geometry.stride().max(1);
        (((offset + stride / 2) / stride) as usize).min(self.item_count - 1)
    }

    /// Manual-scroll notification: clamps the offset and re-derives the
    /// index, writing it only when the value actually changes.
    pub fn handle_scroll(&mut self, offset: u32) {
        self.offset = offset.min(self.max_offset());
        let index = self.index_for_offset(self.offset);
        if index != self.current_index {
            self.current_index = index;
        }
    }

    /// Relative manual scroll. Cancels any in-flight programmatic target.
    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        let next = if delta < 0 {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as u32)
        };
        self.handle_scroll(next);
    }

    /// Dot activation. Does not touch `current_index`; the index update
    /// arrives through `tick`/`handle_scroll` once the animation settles.
    pub fn scroll_to(&mut self, index: usize) {
        if index < self.item_count {
            self.target = Some(index);
        }
    }

    pub fn next_card(&mut self) {
        if self.item_count > 0 {
            self.scroll_to((self.current_index + 1).min(self.item_count - 1));
        }
    }

    pub fn prev_card(&mut self) {
        self.scroll_to(self.current_index.saturating_sub(1));
    }

    pub fn is_settled(&self) -> bool {
        self.target.is_none()
    }

    /// One smooth-scroll step toward the programmatic target.
    pub fn tick(&mut self) {
        let Some(index) = self.target else {
            return;
        };
        let goal = ((index as u32) * self.geometry.stride()).min(self.max_offset());
        if self.offset == goal {
            self.target = None;
            return;
        }
        let distance = goal.abs_diff(self.offset);
        let step = (distance / 4).max(1);
        let next = if goal > self.offset {
            self.offset + step
        } else {
            self.offset - step
        };
        self.handle_scroll(next);
        if self.offset == goal {
            self.target = None;
        }
    }
}
