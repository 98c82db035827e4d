use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// Near-black truecolor palette, the shell's default look.
#[derive(Debug)]
pub struct MidnightTheme {
    roles: ThemeRoles,
}

impl Default for MidnightTheme {
    fn default() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Rgb(10, 10, 12),
                surface: Color::Rgb(20, 20, 24),
                surface_muted: Color::Rgb(28, 28, 34),
                border: Color::Rgb(58, 58, 66),
                text: Color::Rgb(245, 245, 245),
                text_secondary: Color::Rgb(208, 208, 214),
                text_muted: Color::Rgb(134, 134, 144),
                accent: Color::Rgb(250, 250, 250),
                selection_bg: Color::Rgb(64, 64, 74),
                selection_fg: Color::Rgb(255, 255, 255),
                modal_bg: Color::Rgb(4, 4, 6),
            },
        }
    }
}

impl Theme for MidnightTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
