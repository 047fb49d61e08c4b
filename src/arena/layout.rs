use std::ops::Range;

/// View state of the arena: which card is selected, how far the row of
/// cards is scrolled, and each card's post scroll.
///
/// Everything here is keyed by lane index. Deleting an earlier lane shifts
/// the per-card entries along with the lanes; anything the card renderer
/// derived from the old index may reset. The layout lives in `Arena`, so
/// switching between the welcome overlay and the arena never rebuilds it.
#[derive(Debug, Clone, Default)]
pub struct ArenaLayout {
    selected: usize,
    first_visible: usize,
    post_scroll: Vec<usize>,
}

impl ArenaLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn post_scroll(&self, index: usize) -> usize {
        self.post_scroll.get(index).copied().unwrap_or(0)
    }

    pub fn lane_added(&mut self) {
        self.post_scroll.push(0);
    }

    /// Keep bookkeeping aligned after the lane at `index` was removed.
    /// `remaining` is the lane count after removal.
    pub fn lane_removed(&mut self, index: usize, remaining: usize) {
        if index < self.post_scroll.len() {
            self.post_scroll.remove(index);
        }
        if index < self.selected {
            self.selected -= 1;
        }
        self.selected = self.selected.min(remaining.saturating_sub(1));
        self.first_visible = self.first_visible.min(remaining.saturating_sub(1));
    }

    pub fn lanes_cleared(&mut self) {
        self.selected = 0;
        self.first_visible = 0;
        self.post_scroll.clear();
    }

    pub fn select_next(&mut self, lane_count: usize) {
        if self.selected + 1 < lane_count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, lane_count: usize) {
        self.selected = lane_count.saturating_sub(1);
    }

    /// Scroll the selected card's posts down, stopping at the last post.
    pub fn scroll_posts_down(&mut self, post_count: usize) {
        if let Some(offset) = self.post_scroll.get_mut(self.selected) {
            *offset = (*offset + 1).min(post_count.saturating_sub(1));
        }
    }

    pub fn scroll_posts_up(&mut self) {
        if let Some(offset) = self.post_scroll.get_mut(self.selected) {
            *offset = offset.saturating_sub(1);
        }
    }

    /// Indices of the cards that fit in a row of `capacity` cards. The
    /// window only moves as far as needed to keep the selection on screen.
    pub fn visible_range(&mut self, lane_count: usize, capacity: usize) -> Range<usize> {
        if lane_count == 0 {
            self.first_visible = 0;
            return 0..0;
        }
        let capacity = capacity.max(1);
        let selected = self.selected.min(lane_count - 1);

        if selected < self.first_visible {
            self.first_visible = selected;
        } else if selected >= self.first_visible + capacity {
            self.first_visible = selected + 1 - capacity;
        }
        self.first_visible = self.first_visible.min(lane_count.saturating_sub(capacity));

        self.first_visible..(self.first_visible + capacity).min(lane_count)
    }
}
