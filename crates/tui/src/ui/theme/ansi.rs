use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

/// Indexed-color fallback for terminals without truecolor support.
#[derive(Debug)]
pub struct AnsiTheme {
    roles: ThemeRoles,
}

impl Default for AnsiTheme {
    fn default() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Black,
                surface: Color::Black,
                surface_muted: Color::DarkGray,
                border: Color::DarkGray,
                text: Color::White,
                text_secondary: Color::Gray,
                text_muted: Color::DarkGray,
                accent: Color::White,
                selection_bg: Color::DarkGray,
                selection_fg: Color::White,
                modal_bg: Color::Black,
            },
        }
    }
}

impl Theme for AnsiTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
