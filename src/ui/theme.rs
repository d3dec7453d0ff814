use crate::ui::palette::ColorName;
use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);

/// Terminal color for a named swatch.
pub fn swatch_color(name: ColorName) -> Color {
    match name {
        ColorName::Lavender => Color::Rgb(0xe6, 0xe6, 0xfa),
        ColorName::Red => Color::Rgb(0xdc, 0x26, 0x26),
        ColorName::Green => Color::Rgb(0x16, 0xa3, 0x4a),
        ColorName::Blue => Color::Rgb(0x25, 0x63, 0xeb),
        ColorName::Black => Color::Rgb(0x00, 0x00, 0x00),
        ColorName::Gray => Color::Rgb(0x80, 0x80, 0x80),
        ColorName::Olive => Color::Rgb(0x80, 0x80, 0x00),
    }
}
