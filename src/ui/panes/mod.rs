//! TUI pane rendering modules
//!
//! Each pane draws one region of the card frame from the current
//! [`Presentation`](crate::carousel::Presentation) and, where it draws
//! something clickable, registers the region in the
//! [`HitMap`](crate::ui::controls::HitMap).
//!
//! # Pane Modules
//!
//! - [`image`]: image panel with progress segments, page counter and caption
//! - [`content`]: keyword, title, subtitle, body, badge and the donation button
//! - [`navigation`]: prev/next controls, dots, secondary links and footer
//! - [`status`]: status bar with keybindings

pub mod content;
pub mod image;
pub mod navigation;
pub mod status;

pub use content::render_card_content;
pub use image::render_image_panel;
pub use navigation::render_navigation;
pub use status::render_status_bar;
