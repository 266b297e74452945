use crossterm::style::{style, Color, Stylize};

use crate::processor::notice::Severity;

pub struct Theme {
    pub banner: Color,  // Blue
    pub info: Color,    // Green
    pub warning: Color, // Yellow
    pub error: Color,   // Red
}

pub const DEFAULT_THEME: Theme = Theme {
    banner: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    },
    info: Color::Rgb {
        r: 166,
        g: 227,
        b: 161,
    },
    warning: Color::Rgb {
        r: 249,
        g: 226,
        b: 175,
    },
    error: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    },
};

impl Theme {
    pub fn color_for(&self, severity: Severity) -> Color {
        match severity {
            Severity::Info => self.info,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }

    /// Wrap `text` in ANSI colour codes
    pub fn paint(&self, text: &str, color: Color) -> String {
        style(text).with(color).to_string()
    }
}
