//! Bottom section: prev/next controls, dot indicator, secondary links, footer

use crate::carousel::Presentation;
use crate::content::Config;
use crate::links::LinkTarget;
use crate::ui::controls::{centered_row, Control, HitMap};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PREV_LABEL: &str = " ‹ 이전 ";
const NEXT_LABEL: &str = " 다음 › ";

/// Rows needed by the bottom section for a page (including the top border)
pub fn section_height(page: &Presentation) -> u16 {
    // border + nav row + (links row) + address + phone
    let links = if page.is_last_page { 1 } else { 0 };
    1 + 1 + links + 2
}

fn nav_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(DEFAULT_THEME.muted)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.disabled)
    }
}

/// Dot indicator with the current page drawn wide
pub fn dots_line(page: &Presentation) -> Line<'static> {
    let mut spans = Vec::with_capacity(page.total * 2);
    for idx in 0..page.total {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        if page.is_active_dot(idx) {
            spans.push(Span::styled("━━", Style::default().fg(DEFAULT_THEME.primary)));
        } else {
            spans.push(Span::styled("•", Style::default().fg(DEFAULT_THEME.disabled)));
        }
    }
    Line::from(spans)
}

/// Render the bottom section and register its controls
pub fn render_navigation(
    frame: &mut Frame,
    area: Rect,
    page: &Presentation,
    config: &Config,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(DEFAULT_THEME.disabled))
        .style(Style::default().bg(DEFAULT_THEME.footer_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let links_height = if page.is_last_page { 1 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(links_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_nav_row(frame, rows[0], page, hits);
    if page.is_last_page {
        render_link_row(frame, rows[1], hits);
    }
    render_footer(frame, rows[2], rows[3], config, hits);
}

fn render_nav_row(frame: &mut Frame, area: Rect, page: &Presentation, hits: &mut HitMap) {
    if area.height == 0 {
        return;
    }
    let prev_width = Line::from(PREV_LABEL).width() as u16;
    let next_width = Line::from(NEXT_LABEL).width() as u16;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(prev_width),
            Constraint::Min(0),
            Constraint::Length(next_width),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(PREV_LABEL, nav_style(page.nav.previous_enabled))),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new(dots_line(page)).alignment(Alignment::Center),
        cols[1],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(NEXT_LABEL, nav_style(page.nav.next_enabled))),
        cols[2],
    );

    hits.register(Control::Previous, cols[0]);
    hits.register(Control::Next, cols[2]);
}

fn render_link_row(frame: &mut Frame, area: Rect, hits: &mut HitMap) {
    if area.height == 0 {
        return;
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let button_style = Style::default()
        .bg(DEFAULT_THEME.frame_bg)
        .fg(DEFAULT_THEME.body)
        .add_modifier(Modifier::BOLD);

    for (col, (target, label)) in cols.iter().zip([
        (LinkTarget::Homepage, "↗ 홈페이지"),
        (LinkTarget::TaxBenefit, "↗ 세제 혜택"),
    ]) {
        let button = Rect {
            x: col.x + 1,
            width: col.width.saturating_sub(2),
            ..*col
        };
        frame.render_widget(
            Paragraph::new(label)
                .style(button_style)
                .alignment(Alignment::Center),
            button,
        );
        hits.register(Control::Link(target), button);
    }
}

fn render_footer(
    frame: &mut Frame,
    address_area: Rect,
    phone_area: Rect,
    config: &Config,
    hits: &mut HitMap,
) {
    let address = Line::from(vec![
        Span::styled("⌖ ", Style::default().fg(DEFAULT_THEME.primary)),
        Span::styled(config.center_info.address, Style::default().fg(DEFAULT_THEME.muted)),
    ]);
    frame.render_widget(
        Paragraph::new(address).alignment(Alignment::Center),
        address_area,
    );

    if phone_area.height == 0 {
        return;
    }
    let phone = Line::from(Span::styled(
        format!(" ☎ {} ", config.center_info.phone),
        Style::default()
            .bg(DEFAULT_THEME.frame_bg)
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ));
    let button = centered_row(phone_area, 0, phone.width() as u16);
    frame.render_widget(Paragraph::new(phone), button);
    hits.register(Control::Link(LinkTarget::Call), button);
}
