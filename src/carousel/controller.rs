//! Navigation state for the card carousel

use super::gesture::{GestureBuffer, GestureResolution, Swipe};
use super::presentation::Presentation;
use crate::content;
use tracing::debug;

/// Result of finishing a pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Swiped forward (the index may already have been at the last page)
    Advanced,
    /// Swiped backward (the index may already have been at the first page)
    Retreated,
    /// Pointer moved, but not far enough
    BelowThreshold,
    /// No movement was recorded; the host may treat this as a tap
    Incomplete,
}

/// The carousel: current page plus the in-flight gesture
#[derive(Debug, Clone)]
pub struct Carousel {
    current_index: usize,
    len: usize,
    gesture: GestureBuffer,
}

impl Carousel {
    /// Create a carousel positioned on the first card
    pub fn new() -> Self {
        Carousel {
            current_index: 0,
            len: content::card_count(),
            gesture: GestureBuffer::new(),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.current_index + 1 == self.len
    }

    /// Move to the next card. No-op on the last card.
    pub fn advance(&mut self) -> bool {
        if self.current_index + 1 < self.len {
            self.current_index += 1;
            debug!(index = self.current_index, "advanced");
            true
        } else {
            false
        }
    }

    /// Move to the previous card. No-op on the first card.
    pub fn retreat(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            debug!(index = self.current_index, "retreated");
            true
        } else {
            false
        }
    }

    pub fn on_gesture_start(&mut self, x: f64) {
        self.gesture.start(x);
    }

    pub fn on_gesture_move(&mut self, x: f64) {
        self.gesture.update(x);
    }

    /// Resolve the current gesture, navigating if it was a swipe
    pub fn on_gesture_end(&mut self) -> GestureOutcome {
        let resolution = self.gesture.resolve();
        debug!(?resolution, index = self.current_index, "gesture resolved");
        match resolution {
            GestureResolution::Swipe(Swipe::Forward) => {
                self.advance();
                GestureOutcome::Advanced
            }
            GestureResolution::Swipe(Swipe::Backward) => {
                self.retreat();
                GestureOutcome::Retreated
            }
            GestureResolution::BelowThreshold => GestureOutcome::BelowThreshold,
            GestureResolution::Incomplete => GestureOutcome::Incomplete,
        }
    }

    pub fn gesture(&self) -> &GestureBuffer {
        &self.gesture
    }

    /// Presentation descriptor for the current card
    pub fn presentation(&self) -> Option<Presentation> {
        Presentation::for_index(self.current_index)
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}
