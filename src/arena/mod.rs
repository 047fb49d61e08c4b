pub mod composer;
pub mod display;
pub mod lanes;
pub mod layout;
pub mod visibility;

use composer::Composer;
use display::DisplayMode;
use lanes::{LaneCollection, SourceName};
use layout::ArenaLayout;
use visibility::Visibility;

/// Result of trying to add a lane.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added { index: usize },
    /// The name was empty after trimming. Nothing changed.
    Rejected,
}

/// Top-level application state: the single owner of the lane list, the
/// add-lane modal, welcome visibility and the display mode.
///
/// Every operation is synchronous and finishes inside one key event.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    lanes: LaneCollection,
    composer: Composer,
    visibility: Visibility,
    display_mode: DisplayMode,
    layout: ArenaLayout,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lanes(&self) -> &LaneCollection {
        &self.lanes
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn modal_open(&self) -> bool {
        self.composer.is_open()
    }

    pub fn welcome_visible(&self) -> bool {
        self.visibility.welcome_visible()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn layout(&self) -> &ArenaLayout {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut ArenaLayout {
        &mut self.layout
    }

    /// Borrow the lanes read-only alongside the mutable layout, for drawing.
    pub fn render_parts(&mut self) -> (&LaneCollection, &mut ArenaLayout) {
        (&self.lanes, &mut self.layout)
    }

    /// Append a lane named `name` (trimmed). On success the modal closes,
    /// its buffer clears and the welcome overlay hides.
    pub fn add_lane(&mut self, name: &str) -> AddOutcome {
        let Some(source_name) = SourceName::parse(name) else {
            tracing::debug!("rejected blank lane name");
            return AddOutcome::Rejected;
        };
        tracing::info!(source = %source_name, "lane added");
        let index = self.lanes.push(source_name);
        self.layout.lane_added();
        self.composer.close();
        self.visibility.hide_welcome();
        AddOutcome::Added { index }
    }

    /// Remove the lane at `index`. A stale index is a no-op.
    pub fn remove_lane(&mut self, index: usize) {
        match self.lanes.remove_at(index) {
            Some(lane) => {
                tracing::info!(source = %lane.source_name, index, "lane removed");
                self.layout.lane_removed(index, self.lanes.len());
            }
            None => {
                tracing::debug!(index, len = self.lanes.len(), "ignored stale lane index");
            }
        }
    }

    /// Drop every lane. The welcome overlay stays hidden.
    pub fn clear_all(&mut self) {
        tracing::info!(count = self.lanes.len(), "cleared all lanes");
        self.lanes.clear();
        self.layout.lanes_cleared();
    }

    pub fn open_composer(&mut self) {
        self.composer.open();
    }

    pub fn cancel_composer(&mut self) {
        self.composer.close();
    }

    pub fn composer_push(&mut self, c: char) {
        self.composer.push(c);
    }

    pub fn composer_backspace(&mut self) {
        self.composer.backspace();
    }

    /// Try to add the buffered name. A rejected name leaves the modal open
    /// with the buffer untouched.
    pub fn commit_composer(&mut self) -> AddOutcome {
        if !self.composer.is_open() {
            return AddOutcome::Rejected;
        }
        let name = self.composer.buffer().to_string();
        self.add_lane(&name)
    }

    /// Logo action: bring the welcome overlay back regardless of lanes.
    pub fn show_welcome(&mut self) {
        self.visibility.show_welcome();
    }

    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
        tracing::debug!(mode = ?self.display_mode, "display mode toggled");
    }

    /// Delete the lane under the selection cursor.
    pub fn remove_selected(&mut self) {
        let index = self.layout.selected();
        self.remove_lane(index);
    }
}
