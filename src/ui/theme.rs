use crate::demo::satisfaction::Satisfaction;
use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x61, 0xaf, 0xef);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const BUTTON_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const LOG_EXPENSIVE: Color = Color::Rgb(0xf5, 0x9e, 0x0b);
pub const LOG_FACE: Color = Color::Rgb(0xa7, 0x8b, 0xfa);

/// Face colour per satisfaction class, red through green.
pub fn class_color(class: Satisfaction) -> Color {
    match class {
        Satisfaction::VeryDissatisfied => Color::Rgb(0xef, 0x44, 0x44),
        Satisfaction::SomewhatDissatisfied => Color::Rgb(0xf9, 0x73, 0x16),
        Satisfaction::Neither => Color::Rgb(0xea, 0xb3, 0x08),
        Satisfaction::SomewhatSatisfied => Color::Rgb(0x84, 0xcc, 0x16),
        Satisfaction::VerySatisfied => Color::Rgb(0x22, 0xc5, 0x5e),
    }
}
