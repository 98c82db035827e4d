//! Theme styling for the shell UI.
//!
//! Defines semantic theme roles, the default near-black palette, and an
//! indexed-color fallback for terminals without truecolor support. Prefer the
//! role-based style builders over hard-coded colors.

use std::env;

use ratatui::text::Span;
use tracing::debug;

pub mod ansi;
pub mod midnight;
pub mod roles;

pub use ansi::AnsiTheme;
pub use midnight::MidnightTheme;
pub use roles::{Theme, ThemeRoles};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorCapability {
    Truecolor,
    Ansi,
}

/// Selects the theme from the environment and terminal capabilities.
///
/// `ATRIUM_THEME=ansi` forces the fallback palette; otherwise the default
/// palette is used whenever the terminal advertises truecolor.
pub fn load() -> Box<dyn Theme> {
    if let Ok(name) = env::var("ATRIUM_THEME")
        && name.trim().eq_ignore_ascii_case("ansi")
    {
        return Box::new(AnsiTheme::default());
    }

    match detect_color_capability() {
        ColorCapability::Truecolor => Box::new(MidnightTheme::default()),
        ColorCapability::Ansi => {
            debug!("Truecolor not advertised; using the indexed-color palette.");
            Box::new(AnsiTheme::default())
        }
    }
}

fn detect_color_capability() -> ColorCapability {
    let color_term = env::var("COLORTERM").unwrap_or_default().to_ascii_lowercase();
    if color_term.contains("truecolor") || color_term.contains("24bit") {
        return ColorCapability::Truecolor;
    }
    let term = env::var("TERM").unwrap_or_default().to_ascii_lowercase();
    if term.contains("truecolor") {
        return ColorCapability::Truecolor;
    }
    ColorCapability::Ansi
}

/// Builds the alternating key/description spans for the bottom hint bar.
pub fn hint_spans<'a>(theme: &dyn Theme, pairs: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, description) in pairs {
        spans.push(Span::styled(*key, theme.accent_emphasis_style()));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
