use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::ui::mvi::UiState;

/// Named background colors understood by the color switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorName {
    Lavender,
    Red,
    Green,
    Blue,
    Black,
    Gray,
    Olive,
}

/// Swatch row offered when no palette is configured.
///
/// Lavender is deliberately absent: it is the resting background, not a
/// button.
pub const DEFAULT_SWATCHES: [ColorName; 6] = [
    ColorName::Red,
    ColorName::Green,
    ColorName::Blue,
    ColorName::Black,
    ColorName::Gray,
    ColorName::Olive,
];

impl ColorName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Lavender => "lavender",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Blue => "blue",
            ColorName::Black => "black",
            ColorName::Gray => "gray",
            ColorName::Olive => "olive",
        }
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color name '{0}'")]
pub struct UnknownColor(pub String);

impl FromStr for ColorName {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lavender" => Ok(ColorName::Lavender),
            "red" => Ok(ColorName::Red),
            "green" => Ok(ColorName::Green),
            "blue" => Ok(ColorName::Blue),
            "black" => Ok(ColorName::Black),
            "gray" => Ok(ColorName::Gray),
            "olive" => Ok(ColorName::Olive),
            other => Err(UnknownColor(other.to_string())),
        }
    }
}

/// Color-switcher state: the swatch row, keyboard focus, and the applied
/// background.
///
/// Invariant: `swatches` is non-empty and `focused < swatches.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteState {
    pub swatches: Vec<ColorName>,
    pub focused: usize,
    pub selected: ColorName,
}

impl Default for PaletteState {
    fn default() -> Self {
        Self::with_swatches(DEFAULT_SWATCHES.to_vec())
    }
}

impl UiState for PaletteState {}

impl PaletteState {
    /// Start with a custom swatch row, resting on lavender.
    pub fn with_swatches(swatches: Vec<ColorName>) -> Self {
        debug_assert!(!swatches.is_empty());
        Self {
            swatches,
            focused: 0,
            selected: ColorName::Lavender,
        }
    }
}
