//! Main TUI application state and logic

use crate::carousel::{Carousel, GestureOutcome, Presentation};
use crate::content::{Config, CONFIG};
use crate::links::{LinkOpener, LinkTarget};
use crate::ui::controls::{Control, HitMap};
use crate::ui::panes;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use tracing::{info, warn};

/// Widest the card frame gets, in columns
pub const FRAME_MAX_WIDTH: u16 = 64;

/// The main application state
pub struct App {
    /// Navigation state
    pub carousel: Carousel,

    /// Host capability for opening external links
    opener: Box<dyn LinkOpener>,

    /// Campaign configuration (links and center info)
    config: &'static Config,

    /// Pixels per terminal column, used to scale mouse drags
    pub cell_width: f64,

    /// Controls drawn on the last frame
    hit_map: HitMap,

    /// Card frame drawn on the last frame; presses outside it are ignored
    card_area: Option<Rect>,

    /// Cell of the left-button press in progress
    press: Option<(u16, u16)>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,
}

impl App {
    /// Create a new app that opens links through `opener`
    pub fn new(opener: Box<dyn LinkOpener>, cell_width: f64) -> Self {
        App {
            carousel: Carousel::new(),
            opener,
            config: &CONFIG,
            cell_width,
            hit_map: HitMap::new(),
            card_area: None,
            press: None,
            should_quit: false,
            status_message: String::from("Swipe or use ←/→ to read"),
            status_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(cards = self.carousel.len(), "carousel started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // No timers drive state: block until the next input event
            let event = event::read()?;
            self.handle_event(event);
        }
        info!(index = self.carousel.current_index(), "carousel closed");

        Ok(())
    }

    /// Centered, width-capped region holding the card
    pub fn frame_area(area: Rect) -> Rect {
        let width = area.width.min(FRAME_MAX_WIDTH);
        Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        }
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.hit_map.clear();
        let Some(page) = self.carousel.presentation() else {
            return;
        };

        let size = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(DEFAULT_THEME.backdrop)),
            size,
        );

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let card_area = Self::frame_area(main_chunks[0]);
        let status_area = main_chunks[1];
        self.card_area = Some(card_area);

        frame.render_widget(
            Block::default().style(Style::default().bg(DEFAULT_THEME.frame_bg)),
            card_area,
        );

        // Image (tiered height) | text | navigation and footer
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(page.image_height.percent()),
                Constraint::Min(0),
                Constraint::Length(panes::navigation::section_height(&page)),
            ])
            .split(card_area);

        panes::render_image_panel(frame, sections[0], &page);
        panes::render_card_content(frame, sections[1], &page, &mut self.hit_map);
        panes::render_navigation(frame, sections[2], &page, self.config, &mut self.hit_map);

        panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            &page,
            self.status_is_error,
        );
    }

    /// Dispatch a terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
                self.activate(Control::Next);
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                self.activate(Control::Previous);
            }
            KeyCode::Char('d') | KeyCode::Enter => {
                self.activate(Control::Link(LinkTarget::Donation));
            }
            KeyCode::Char('w') => {
                self.activate(Control::Link(LinkTarget::Homepage));
            }
            KeyCode::Char('t') => {
                self.activate(Control::Link(LinkTarget::TaxBenefit));
            }
            KeyCode::Char('c') => {
                self.activate(Control::Link(LinkTarget::Call));
            }
            _ => {}
        }
    }

    /// Handle mouse events: press/drag/release inside the card frame form a
    /// gesture. A release that is not a swipe is a tap when it lands on the
    /// same control as the press.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let x = f64::from(mouse.column) * self.cell_width;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.in_card(mouse.column, mouse.row) {
                    self.press = None;
                    return;
                }
                self.press = Some((mouse.column, mouse.row));
                self.carousel.on_gesture_start(x);
            }
            MouseEventKind::Drag(MouseButton::Left) if self.press.is_some() => {
                self.carousel.on_gesture_move(x);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some((press_column, press_row)) = self.press.take() else {
                    return;
                };
                let before = self.carousel.current_index();
                match self.carousel.on_gesture_end() {
                    GestureOutcome::Advanced | GestureOutcome::Retreated => {
                        if self.carousel.current_index() != before {
                            self.set_status(format!("Swiped to page {}", self.page_number()));
                        }
                    }
                    GestureOutcome::Incomplete | GestureOutcome::BelowThreshold => {
                        let pressed = self.hit_map.hit_test(press_column, press_row);
                        let released = self.hit_map.hit_test(mouse.column, mouse.row);
                        if let Some(control) = pressed.filter(|_| pressed == released) {
                            self.activate(control);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// Whether a cell lies inside the card frame of the last render. Before
    /// the first render every cell counts.
    fn in_card(&self, column: u16, row: u16) -> bool {
        self.card_area.map_or(true, |r| {
            column >= r.x
                && column < r.x.saturating_add(r.width)
                && row >= r.y
                && row < r.y.saturating_add(r.height)
        })
    }

    /// Whether `control` is live on the current page
    pub fn is_enabled(&self, control: Control) -> bool {
        let Some(page) = self.carousel.presentation() else {
            return false;
        };
        Self::enabled_on(&page, control)
    }

    fn enabled_on(page: &Presentation, control: Control) -> bool {
        match control {
            Control::Previous => page.nav.previous_enabled,
            Control::Next => page.nav.next_enabled,
            Control::Link(LinkTarget::Call) => true,
            Control::Link(_) => page.is_last_page,
        }
    }

    /// Press a control. Disabled controls do nothing. Returns whether the
    /// control was live.
    pub fn activate(&mut self, control: Control) -> bool {
        if !self.is_enabled(control) {
            return false;
        }
        match control {
            Control::Previous => {
                self.carousel.retreat();
                self.set_status(format!("Page {}", self.page_number()));
            }
            Control::Next => {
                self.carousel.advance();
                self.set_status(format!("Page {}", self.page_number()));
            }
            Control::Link(target) => self.open_link(target),
        }
        true
    }

    fn open_link(&mut self, target: LinkTarget) {
        let uri = target.uri(self.config);
        match self.opener.open(&uri) {
            Ok(()) => {
                info!(link = target.label(), %uri, "link dispatched");
                self.set_status(format!("Opened {}", uri));
            }
            Err(err) => {
                warn!(link = target.label(), error = %err, "link failed");
                self.status_message = format!("Cannot open {}: {}", target.label(), err);
                self.status_is_error = true;
            }
        }
    }

    /// Screen region of a control on the last frame
    pub fn control_region(&self, control: Control) -> Option<Rect> {
        self.hit_map.region(control)
    }

    fn page_number(&self) -> usize {
        self.carousel.current_index() + 1
    }

    fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.status_is_error = false;
    }
}
