//! Clickable controls and the hit map used to resolve taps

use crate::links::LinkTarget;
use ratatui::layout::Rect;
use rustc_hash::FxHashMap;

/// Anything the user can press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Previous,
    Next,
    Link(LinkTarget),
}

/// Screen regions of the controls drawn on the last frame
#[derive(Debug, Default)]
pub struct HitMap {
    regions: FxHashMap<Control, Rect>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Record where `control` was drawn. Empty rects are ignored.
    pub fn register(&mut self, control: Control, area: Rect) {
        if area.width > 0 && area.height > 0 {
            self.regions.insert(control, area);
        }
    }

    pub fn region(&self, control: Control) -> Option<Rect> {
        self.regions.get(&control).copied()
    }

    /// Find the control under a terminal cell
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Control> {
        self.regions
            .iter()
            .find(|(_, r)| {
                column >= r.x
                    && column < r.x.saturating_add(r.width)
                    && row >= r.y
                    && row < r.y.saturating_add(r.height)
            })
            .map(|(control, _)| *control)
    }
}

/// Centered sub-rect `width` cells wide on a single row of `area`
pub fn centered_row(area: Rect, row: u16, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + row,
        width,
        height: 1,
    }
}
