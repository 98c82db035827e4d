use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the shell.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    /// Surface tone used once the page has scrolled past the bar.
    pub surface_muted: Color,
    pub border: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    pub accent: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,

    /// Backdrop color behind the overlay menu. Darker than the primary
    /// background so the panel reads as elevated.
    pub modal_bg: Color,
}

/// Theme trait exposing semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().accent } else { self.roles().border };
        Style::default().fg(color)
    }

    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    /// Style for panel-like containers.
    fn panel_style(&self) -> Style {
        Style::default().bg(self.roles().surface).fg(self.roles().text)
    }

    /// Style for the darkened backdrop behind the overlay menu.
    fn modal_background_style(&self) -> Style {
        Style::default().bg(self.roles().modal_bg)
    }

    fn accent_style(&self) -> Style {
        Style::default().fg(self.roles().accent)
    }
    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().accent).add_modifier(Modifier::BOLD)
    }
}
