use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let mut app = App::new(config)?;
    let tick_rate = Duration::from_millis(config.defaults.tick_ms);
    let events = EventHandler::new(tick_rate);

    // The rendering layer subscribes to the stores: a committed
    // transition comes back through the event channel and wakes the
    // loop, instead of waiting for the next tick.
    let notify = events.sender();
    app.on_counter_change(move |state| {
        tracing::debug!(value = state.value, doubled = state.doubled(), "counter committed");
        let _ = notify.send(AppEvent::StateChanged);
    });
    let notify = events.sender();
    app.on_palette_change(move |state| {
        tracing::debug!(selected = %state.selected, "palette committed");
        let _ = notify.send(AppEvent::StateChanged);
    });

    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::StateChanged) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
