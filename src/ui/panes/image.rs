//! Image panel: progress segments, page counter, image reference and caption
//!
//! Remote images are not fetched; the panel shows the URL where the picture
//! would be, sized by the page's image-height tier.

use crate::carousel::Presentation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Build the segmented progress line, one segment per card
pub fn progress_line(progress: &[bool], width: u16) -> Line<'static> {
    let count = progress.len() as u16;
    if count == 0 || width == 0 {
        return Line::default();
    }
    let gaps = count - 1;
    let segment = width.saturating_sub(gaps) / count;
    let segment = segment.max(1) as usize;

    let mut spans = Vec::with_capacity(progress.len() * 2);
    for (idx, filled) in progress.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        let color = if *filled {
            DEFAULT_THEME.primary
        } else {
            DEFAULT_THEME.progress_empty
        };
        spans.push(Span::styled("━".repeat(segment), Style::default().fg(color)));
    }
    Line::from(spans)
}

/// Render the image panel for the current page
pub fn render_image_panel(frame: &mut Frame, area: Rect, page: &Presentation) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.progress_empty))
        .style(Style::default().bg(DEFAULT_THEME.image_bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let progress_area = Rect { height: 1, ..inner };
    frame.render_widget(
        Paragraph::new(progress_line(&page.progress, inner.width)),
        progress_area,
    );

    if inner.height > 1 {
        let counter_area = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        let counter = Paragraph::new(Span::styled(
            format!(" {} ", page.page_counter),
            Style::default()
                .bg(DEFAULT_THEME.overlay_bg)
                .fg(DEFAULT_THEME.overlay_fg)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(counter, counter_area);
    }

    // Image reference in the remaining middle rows
    if inner.height > 3 {
        let middle = Rect {
            y: inner.y + 2,
            height: inner.height - 3,
            ..inner
        };
        let offset = middle.height.saturating_sub(2) / 2;
        let mut lines = vec![Line::default(); offset as usize];
        lines.push(Line::from(Span::styled(
            "[ image ]",
            Style::default()
                .fg(DEFAULT_THEME.muted)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            page.card.image,
            Style::default().fg(DEFAULT_THEME.muted),
        )));
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            middle,
        );
    }

    if let Some(caption) = page.attribution {
        if inner.height > 2 {
            let caption_area = Rect {
                y: inner.y + inner.height - 1,
                height: 1,
                ..inner
            };
            let caption = Paragraph::new(Span::styled(
                format!(" {} ", caption),
                Style::default()
                    .bg(DEFAULT_THEME.overlay_bg)
                    .fg(DEFAULT_THEME.overlay_fg),
            ))
            .alignment(Alignment::Right);
            frame.render_widget(caption, caption_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_has_one_segment_per_card() {
        let line = progress_line(&[true, true, false, false, false], 24);
        let segments: Vec<&Span> = line.spans.iter().filter(|s| s.content != " ").collect();
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0].style.fg, Some(DEFAULT_THEME.primary));
        assert_eq!(segments[1].style.fg, Some(DEFAULT_THEME.primary));
        assert_eq!(segments[2].style.fg, Some(DEFAULT_THEME.progress_empty));
        // (24 - 4 gaps) / 5 = 4 cells each
        assert_eq!(segments[0].content.chars().count(), 4);
    }

    #[test]
    fn test_progress_line_degenerate_width() {
        assert!(progress_line(&[true], 0).spans.is_empty());
        let narrow = progress_line(&[true, false, false], 2);
        assert_eq!(narrow.spans.len(), 5);
    }
}
