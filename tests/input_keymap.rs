mod common;

use common::{ctrl, make_app, press};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use uikata::ui::app::Screen;
use uikata::ui::input::handle_key;
use uikata::ui::palette::ColorName;

#[test]
fn up_arrow_increments_counter() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Up));
    assert_eq!(app.counter().value, 11);
}

#[test]
fn plus_and_minus_adjust_counter() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('+')));
    handle_key(&mut app, press(KeyCode::Char('+')));
    handle_key(&mut app, press(KeyCode::Char('-')));
    assert_eq!(app.counter().value, 11);
}

#[test]
fn counter_keys_only_act_on_counter_screen() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.screen(), Screen::Colors);

    handle_key(&mut app, press(KeyCode::Up));
    assert_eq!(app.counter().value, 10);
}

#[test]
fn tab_cycles_screens_forward() {
    let mut app = make_app();
    assert_eq!(app.screen(), Screen::Counter);

    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.screen(), Screen::Colors);

    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.screen(), Screen::Cards);

    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.screen(), Screen::Counter);
}

#[test]
fn back_tab_cycles_screens_backward() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::BackTab));
    assert_eq!(app.screen(), Screen::Cards);
}

#[test]
fn quit_keys_request_quit() {
    for key in [press(KeyCode::Char('q')), press(KeyCode::Esc), ctrl('q')] {
        let mut app = make_app();
        assert!(!app.should_quit());
        handle_key(&mut app, key);
        assert!(app.should_quit());
    }
}

#[test]
fn digit_selects_swatch_on_colors_screen() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Tab));

    handle_key(&mut app, press(KeyCode::Char('3')));
    assert_eq!(app.selected_color(), ColorName::Blue);
}

#[test]
fn digits_do_nothing_on_counter_screen() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Char('3')));
    assert_eq!(app.selected_color(), ColorName::Lavender);
    assert_eq!(app.counter().value, 10);
}

#[test]
fn enter_applies_focused_swatch() {
    let mut app = make_app();
    handle_key(&mut app, press(KeyCode::Tab));

    handle_key(&mut app, press(KeyCode::Right));
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.selected_color(), ColorName::Green);
}

#[test]
fn key_release_events_are_ignored() {
    let mut app = make_app();
    let release = KeyEvent::new_with_kind_and_state(
        KeyCode::Up,
        KeyModifiers::NONE,
        KeyEventKind::Release,
        KeyEventState::NONE,
    );

    handle_key(&mut app, release);
    assert_eq!(app.counter().value, 10);
}

#[test]
fn boundary_hammering_through_the_keymap_stays_clamped() {
    let mut app = make_app();
    for _ in 0..40 {
        handle_key(&mut app, press(KeyCode::Up));
    }
    assert_eq!(app.counter().value, 25);

    for _ in 0..80 {
        handle_key(&mut app, press(KeyCode::Down));
    }
    assert_eq!(app.counter().value, -5);
}
