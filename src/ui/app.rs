use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent};
use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::ui::cards::{demo_cards, CardProps};
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Store;
use crate::ui::palette::{ColorName, PaletteIntent, PaletteReducer, PaletteState, UnknownColor};

/// Screens the shell can show.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Counter,
    Colors,
    Cards,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Counter, Screen::Colors, Screen::Cards];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Counter => "Counter",
            Screen::Colors => "Colors",
            Screen::Cards => "Cards",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Screen::Counter => Screen::Colors,
            Screen::Colors => Screen::Cards,
            Screen::Cards => Screen::Counter,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Screen::Counter => Screen::Cards,
            Screen::Colors => Screen::Counter,
            Screen::Cards => Screen::Colors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen '{0}', expected counter, colors, or cards")]
pub struct UnknownScreen(pub String);

impl FromStr for Screen {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "counter" => Ok(Screen::Counter),
            "colors" => Ok(Screen::Colors),
            "cards" => Ok(Screen::Cards),
            other => Err(UnknownScreen(other.to_string())),
        }
    }
}

/// The application model: one store per stateful exercise, plus the
/// shell's own focus bookkeeping.
pub struct App {
    should_quit: bool,
    screen: Screen,
    counter: Store<CounterReducer>,
    palette: Store<PaletteReducer>,
    cards: Vec<CardProps>,
}

impl App {
    /// Build the app from validated configuration.
    ///
    /// Name resolution happens here: the start screen and swatch names
    /// are parsed against the typed vocabularies and reported as
    /// validation failures.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let screen =
            config
                .defaults
                .screen
                .parse()
                .map_err(|err: UnknownScreen| ConfigError::ValidationError {
                    message: err.to_string(),
                })?;

        let mut swatches = Vec::with_capacity(config.palette.swatches.len());
        for name in &config.palette.swatches {
            let color = name
                .parse()
                .map_err(|err: UnknownColor| ConfigError::ValidationError {
                    message: err.to_string(),
                })?;
            swatches.push(color);
        }

        Ok(Self {
            should_quit: false,
            screen,
            counter: Store::new(),
            palette: Store::with_state(PaletteState::with_swatches(swatches)),
            cards: demo_cards(),
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn next_screen(&mut self) {
        self.screen = self.screen.next();
    }

    pub fn prev_screen(&mut self) {
        self.screen = self.screen.prev();
    }

    /// Current counter reading.
    pub fn counter(&self) -> CounterState {
        self.counter.get()
    }

    /// Current color-switcher state.
    pub fn palette(&self) -> PaletteState {
        self.palette.get()
    }

    pub fn cards(&self) -> &[CardProps] {
        &self.cards
    }

    /// Observe committed counter transitions.
    pub fn on_counter_change(&mut self, listener: impl Fn(&CounterState) + Send + 'static) {
        self.counter.subscribe(listener);
    }

    /// Observe committed palette transitions.
    pub fn on_palette_change(&mut self, listener: impl Fn(&PaletteState) + Send + 'static) {
        self.palette.subscribe(listener);
    }

    pub fn on_tick(&mut self) {}

    /// Route a key to the focused screen's store.
    ///
    /// Global keys (quit, screen switching) are handled before this in
    /// `input::handle_key`; everything unrecognized is dropped.
    pub fn on_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Counter => match key.code {
                KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('k') => {
                    self.counter.dispatch(CounterIntent::Increment);
                }
                KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('j') => {
                    self.counter.dispatch(CounterIntent::Decrement);
                }
                _ => {}
            },
            Screen::Colors => match key.code {
                KeyCode::Left => self.palette.dispatch(PaletteIntent::FocusLeft),
                KeyCode::Right => self.palette.dispatch(PaletteIntent::FocusRight),
                KeyCode::Enter => self.palette.dispatch(PaletteIntent::Apply),
                KeyCode::Char(ch) if ch.is_ascii_digit() => {
                    let position = ch.to_digit(10).unwrap_or(0) as usize;
                    self.palette.dispatch(PaletteIntent::Select(position));
                }
                _ => {}
            },
            Screen::Cards => {}
        }
    }

    /// Applied background for the Colors screen, exposed for tests.
    pub fn selected_color(&self) -> ColorName {
        self.palette.get().selected
    }
}
