use crate::ui::palette::state::{ColorName, PaletteState};
use crate::ui::theme::{swatch_color, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

pub struct PaletteView;

impl PaletteView {
    pub fn new() -> Self {
        Self
    }

    /// Full-area background in the currently applied color.
    pub fn fill(&self, state: &PaletteState) -> Block<'static> {
        Block::default().style(Style::default().bg(swatch_color(state.selected)))
    }

    /// The swatch row, rendered as one centered line of labeled buttons.
    pub fn swatch_bar(&self, state: &PaletteState) -> Paragraph<'static> {
        let mut spans = Vec::with_capacity(state.swatches.len() * 2);
        for (idx, swatch) in state.swatches.iter().enumerate() {
            let mut style = Style::default()
                .fg(label_color(*swatch))
                .bg(swatch_color(*swatch));
            if idx == state.focused {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            spans.push(Span::styled(
                format!(" {}. {} ", idx + 1, swatch.as_str().to_uppercase()),
                style,
            ));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .style(Style::default().fg(HEADER_TEXT))
    }
}

/// Button text must stay readable on its own background.
fn label_color(swatch: ColorName) -> Color {
    match swatch {
        ColorName::Lavender | ColorName::Gray => Color::Rgb(0x11, 0x11, 0x11),
        _ => Color::Rgb(0xf5, 0xf5, 0xf5),
    }
}
