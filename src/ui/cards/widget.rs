use crate::ui::cards::props::CardProps;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const CARD_HEIGHT: u16 = 4;

pub struct CardGallery;

impl CardGallery {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, cards: &[CardProps]) {
        let mut constraints: Vec<Constraint> = cards
            .iter()
            .map(|_| Constraint::Length(CARD_HEIGHT))
            .collect();
        constraints.push(Constraint::Min(0));

        let slots = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (card, slot) in cards.iter().zip(slots.iter()) {
            frame.render_widget(card_widget(card), *slot);
        }
    }
}

fn card_widget(props: &CardProps) -> Paragraph<'static> {
    let action_line = match &props.action {
        Some(action) => Line::from(Span::styled(
            format!("[ {} ]", action.text()),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };

    Paragraph::new(vec![Line::from(""), action_line])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", props.name),
                    Style::default().fg(ACCENT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}
