//! Card text area and the final-page donation action
//!
//! Line breaks in titles and bodies are preserved verbatim. Spacing comes from
//! the page's spacing tier; keyword placement from its keyword slot.

use crate::carousel::{KeywordSlot, Presentation};
use crate::links::LinkTarget;
use crate::ui::controls::{Control, HitMap};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Rows reserved for the donation button on the last page
const DONATE_HEIGHT: u16 = 4;
const DONATE_MAX_WIDTH: u16 = 40;

fn blank_lines(lines: &mut Vec<Line<'static>>, count: u16) {
    for _ in 0..count {
        lines.push(Line::default());
    }
}

fn keyword_chip(keyword: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {} ", keyword),
        Style::default()
            .bg(DEFAULT_THEME.primary_soft)
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Lay out the text of the current card as paragraph lines
pub fn card_lines(page: &Presentation) -> Vec<Line<'static>> {
    let tokens = page.spacing_tokens();
    let card = page.card;
    let mut lines = Vec::new();

    blank_lines(&mut lines, tokens.padding_top);

    if page.keyword_slot == KeywordSlot::Top {
        lines.push(keyword_chip(card.keyword));
        blank_lines(&mut lines, tokens.keyword_gap);
    }

    blank_lines(&mut lines, page.title_offset);
    let title_style = Style::default()
        .fg(DEFAULT_THEME.fg)
        .add_modifier(Modifier::BOLD);
    for row in card.title.split('\n') {
        lines.push(Line::from(Span::styled(row, title_style)));
    }
    lines.push(Line::default());

    // Subtitle, body, badge and bottom keyword are separated by the paragraph gap
    let mut blocks: Vec<Vec<Line<'static>>> = Vec::new();
    if let Some(subtitle) = card.subtitle {
        blocks.push(vec![Line::from(vec![
            Span::styled("▎", Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(
                subtitle,
                Style::default()
                    .fg(DEFAULT_THEME.primary_dark)
                    .add_modifier(Modifier::BOLD),
            ),
        ])]);
    }
    if let Some(body) = card.body {
        blocks.push(
            body.split('\n')
                .map(|row| Line::from(Span::styled(row, Style::default().fg(DEFAULT_THEME.body))))
                .collect(),
        );
    }
    if let Some(badge) = page.badge {
        blocks.push(vec![Line::from(Span::styled(
            format!(" {} ", badge),
            Style::default()
                .bg(DEFAULT_THEME.badge_bg)
                .fg(DEFAULT_THEME.badge_fg)
                .add_modifier(Modifier::BOLD),
        ))]);
    }
    if page.keyword_slot == KeywordSlot::Bottom {
        blocks.push(vec![Line::default(), keyword_chip(card.keyword)]);
    }

    for (i, block) in blocks.into_iter().enumerate() {
        if i > 0 {
            blank_lines(&mut lines, tokens.paragraph_gap);
        }
        lines.extend(block);
    }

    lines
}

/// Render the text content and, on the last page, the donation button
pub fn render_card_content(frame: &mut Frame, area: Rect, page: &Presentation, hits: &mut HitMap) {
    let tokens = page.spacing_tokens();
    let donate_height = if page.is_last_page { DONATE_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(donate_height),
            Constraint::Length(tokens.padding_bottom),
        ])
        .split(area);

    let text = Paragraph::new(card_lines(page))
        .block(Block::default().padding(Padding::horizontal(2)))
        .style(Style::default().bg(DEFAULT_THEME.frame_bg))
        .wrap(Wrap { trim: false });
    frame.render_widget(text, chunks[0]);

    if page.is_last_page {
        render_donate_button(frame, chunks[1], hits);
    }
}

fn render_donate_button(frame: &mut Frame, area: Rect, hits: &mut HitMap) {
    if area.height < 3 {
        return;
    }
    let width = area.width.saturating_sub(4).min(DONATE_MAX_WIDTH);
    let button_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height.min(DONATE_HEIGHT),
    };

    let label = vec![
        Line::from(Span::styled(
            "♥ 지금 바로 정기 후원하기",
            Style::default()
                .fg(DEFAULT_THEME.overlay_fg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "발달장애인의 내일을 지원합니다",
            Style::default().fg(DEFAULT_THEME.primary_soft),
        )),
    ];
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(DEFAULT_THEME.primary_dark))
                .style(Style::default().bg(DEFAULT_THEME.primary)),
        );
    frame.render_widget(button, button_area);
    hits.register(Control::Link(LinkTarget::Donation), button_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    fn page(index: usize) -> Presentation {
        Presentation::for_index(index).unwrap()
    }

    #[test]
    fn test_first_page_keyword_after_body() {
        let p = page(0);
        let rows = text_of(&card_lines(&p));
        let keyword_row = rows.iter().position(|r| r.contains(p.card.keyword)).unwrap();
        let title_row = rows.iter().position(|r| r.contains("지난 한 해")).unwrap();
        assert!(keyword_row > title_row);
        assert_eq!(rows.iter().filter(|r| r.contains(p.card.keyword)).count(), 1);
    }

    #[test]
    fn test_other_pages_keyword_before_title() {
        for index in 1..5 {
            let p = page(index);
            let rows = text_of(&card_lines(&p));
            let keyword_row = rows.iter().position(|r| r.contains(p.card.keyword)).unwrap();
            let first_title_row = p.card.title.split('\n').next().unwrap();
            let title_row = rows.iter().position(|r| r == first_title_row).unwrap();
            assert!(keyword_row < title_row, "page {}", index);
        }
    }

    #[test]
    fn test_title_line_breaks_preserved() {
        let p = page(1);
        let rows = text_of(&card_lines(&p));
        assert!(rows.contains(&"설립 5년, 그동안 쌓아온".to_string()));
        assert!(rows.contains(&"소중한 일상의 경험들".to_string()));
    }

    #[test]
    fn test_badge_shown_on_fourth_page_only() {
        let with_badge = text_of(&card_lines(&page(3)));
        assert!(with_badge.iter().any(|r| r.contains("월 1~2만원의 기적")));
        for index in [0, 1, 2, 4] {
            let rows = text_of(&card_lines(&page(index)));
            assert!(!rows.iter().any(|r| r.contains("월 1~2만원의 기적")));
        }
    }

    #[test]
    fn test_relaxed_tier_adds_padding() {
        let regular = card_lines(&page(2));
        let relaxed = card_lines(&page(3));
        let leading_blank = |lines: &[Line]| lines.iter().take_while(|l| l.spans.is_empty()).count();
        assert_eq!(leading_blank(&regular), 1);
        assert_eq!(leading_blank(&relaxed), 2);
    }
}
