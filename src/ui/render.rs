use crate::ui::app::{App, Screen};
use crate::ui::cards::CardGallery;
use crate::ui::counter::CounterView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{bottom_bar, layout_regions};
use crate::ui::palette::PaletteView;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.screen()), header);
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::Counter => {
            let state = app.counter();
            frame.render_widget(CounterView::new().widget(&state), body);
        }
        Screen::Colors => {
            let state = app.palette();
            let view = PaletteView::new();
            frame.render_widget(view.fill(&state), body);
            let bar = bottom_bar(body, 2);
            frame.render_widget(view.swatch_bar(&state), bar);
        }
        Screen::Cards => {
            CardGallery::new().render(frame, body, app.cards());
        }
    }

    frame.render_widget(Footer::new().widget(footer, app.screen()), footer);
}
