use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

/// Events delivered to the main loop.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A store committed a new state; redraw without waiting for a tick.
    StateChanged,
}

/// Input thread plus channel plumbing.
///
/// The thread only produces events; it never touches app state. Sending
/// fails once the main loop drops the receiver, which is the thread's
/// signal to exit.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "input read failed");
                            break;
                        }
                    },
                    Ok(false) => {
                        // Timeout — no event
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "input poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender for injecting events from outside the input thread.
    /// Store subscriptions use this to wake the loop on commits.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
