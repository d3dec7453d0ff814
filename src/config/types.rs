use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub palette: PaletteConfig,
}

/// Startup behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Screen shown at startup: "counter", "colors", or "cards".
    #[serde(default = "default_screen")]
    pub screen: String,
    /// Tick interval for the event loop in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

/// Swatch row offered by the background-color screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Selectable color names, in display order.
    #[serde(default = "default_swatches")]
    pub swatches: Vec<String>,
}

fn default_screen() -> String {
    "counter".to_string()
}

fn default_tick_ms() -> u64 {
    250
}

fn default_swatches() -> Vec<String> {
    ["red", "green", "blue", "black", "gray", "olive"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            screen: default_screen(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            swatches: default_swatches(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            palette: PaletteConfig::default(),
        }
    }
}
