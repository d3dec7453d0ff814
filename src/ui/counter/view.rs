use crate::ui::counter::state::{CounterState, DEFAULT, MAX, MIN};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct CounterView;

impl CounterView {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &CounterState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let value_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
        let legend_style = text_style.add_modifier(Modifier::DIM);

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("Counter value = ", text_style),
                Span::styled(state.value.to_string(), value_style),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Counter x2 = ", text_style),
                Span::styled(state.doubled().to_string(), value_style),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("MAX value = {MAX}, MIN value = {MIN}, Default value = {DEFAULT}"),
                legend_style,
            )),
            Line::from(""),
            Line::from(Span::styled("Up/+: add value   Down/-: remove value", legend_style)),
        ];

        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(Span::styled("Counter", Style::default().fg(ACCENT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
