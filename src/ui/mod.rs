//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, key and mouse event handling, link dispatch
//! - **[`controls`]** — clickable controls and the hit map used to resolve taps
//! - **[`panes`]** — stateless render functions for each region of the card frame
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`LinkOpener`] and call [`App::run`] to start the event loop.
//!
//! [`LinkOpener`]: crate::links::LinkOpener
//! [`App::run`]: app::App::run

pub mod app;
pub mod controls;
pub mod panes;
pub mod theme;

pub use app::App;
pub use controls::Control;
