//! Carousel navigation and per-page presentation
//!
//! - [`controller`]: the [`Carousel`] state (current page, gesture buffer)
//! - [`gesture`]: swipe detection over horizontal pointer samples
//! - [`presentation`]: index-keyed layout tiers consolidated into one descriptor

pub mod controller;
pub mod gesture;
pub mod presentation;

pub use controller::{Carousel, GestureOutcome};
pub use gesture::{GestureBuffer, Swipe, SWIPE_THRESHOLD_PX};
pub use presentation::{ImageHeight, KeywordSlot, NavButtons, Presentation, SpacingTier};
