use crate::ui::app::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, active: Screen) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled("  uikata", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
        ];
        for (idx, screen) in Screen::ALL.iter().enumerate() {
            let style = if *screen == active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                text_style.add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(screen.title(), style));
            if idx + 1 < Screen::ALL.len() {
                spans.push(Span::styled("  │  ", separator_style));
            }
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
