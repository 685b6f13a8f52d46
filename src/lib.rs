//! # Introduction
//!
//! cardnews presents a nonprofit's five-card "card news" story in the
//! terminal, one card at a time, and ends on a page asking for donations.
//! Cards are paged with the arrow keys or by swiping with the mouse, and the
//! final page opens the donation, homepage and tax-benefit links.
//!
//! ## Flow
//!
//! ```text
//! Input (key / mouse) → Carousel → Presentation → Panes
//!                                 ↘ LinkTarget → LinkOpener
//! ```
//!
//! 1. [`content`] — the compiled-in cards and campaign configuration.
//! 2. [`carousel`] — the clamped page index, swipe detection, and the
//!    per-page [`carousel::Presentation`] descriptor.
//! 3. [`links`] — maps final-page actions to URIs and opens them through a
//!    host [`links::LinkOpener`].
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 5. [`cli`], [`logging`], [`errors`] — the binary's options, tracing setup
//!    and error type.

pub mod carousel;
pub mod cli;
pub mod content;
pub mod errors;
pub mod links;
pub mod logging;
pub mod ui;
