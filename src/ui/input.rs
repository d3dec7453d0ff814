use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Global key routing: quit and screen switching first, then hand the
/// key to the focused screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_screen();
            return;
        }
        KeyCode::BackTab => {
            app.prev_screen();
            return;
        }
        _ => {}
    }

    app.on_key(key);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
