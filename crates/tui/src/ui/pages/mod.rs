//! Routed page content.
//!
//! Pages are declarative: each module builds a static body of styled lines,
//! and a single [`PageView`] renders whichever body the current route names,
//! applying the shared scroll offset. Scroll-kind nav items resolve against
//! the anchor rows a body records while it is built.

mod about;
mod blog;
mod gallery;
mod home;
mod not_found;
mod projects;
mod uses;

use atrium_types::Route;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::Theme;

/// Builds the content view for a route.
pub(crate) fn view_for(route: Route) -> Box<dyn Component> {
    Box::new(PageView { route })
}

/// Row of the named anchor on the given route's page, if it has one.
pub(crate) fn anchor_row(route: Route, theme: &dyn Theme, anchor: &str) -> Option<u16> {
    body_for(route, theme).anchor(anchor)
}

fn body_for(route: Route, theme: &dyn Theme) -> PageBody {
    match route {
        Route::Home => home::body(theme),
        Route::Blog => blog::body(theme),
        Route::Projects => projects::body(theme),
        Route::About => about::body(theme),
        Route::Gallery => gallery::body(theme),
        Route::Uses => uses::body(theme),
        Route::NotFound => not_found::body(theme),
    }
}

/// A page body: styled lines plus the anchor rows recorded while building.
pub(crate) struct PageBody {
    lines: Vec<Line<'static>>,
    anchors: Vec<(&'static str, u16)>,
}

impl PageBody {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            anchors: Vec::new(),
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn title(&mut self, theme: &dyn Theme, text: &'static str) {
        self.lines.push(Line::from(Span::styled(
            text,
            theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED),
        )));
    }

    fn heading(&mut self, theme: &dyn Theme, text: &'static str) {
        self.lines.push(Line::from(Span::styled(text, theme.accent_emphasis_style())));
    }

    /// A heading that scroll-kind nav items can target by name.
    fn anchored_heading(&mut self, theme: &dyn Theme, anchor: &'static str, text: &'static str) {
        self.anchors.push((anchor, self.lines.len() as u16));
        self.heading(theme, text);
    }

    fn text(&mut self, theme: &dyn Theme, text: &'static str) {
        self.lines.push(Line::from(Span::styled(text, theme.text_primary_style())));
    }

    fn muted(&mut self, theme: &dyn Theme, text: &'static str) {
        self.lines.push(Line::from(Span::styled(text, theme.text_muted_style())));
    }

    fn entry(&mut self, theme: &dyn Theme, lead: &'static str, rest: &'static str) {
        self.lines.push(Line::from(vec![
            Span::styled(lead, theme.text_secondary_style().add_modifier(Modifier::BOLD)),
            Span::styled(rest, theme.text_muted_style()),
        ]));
    }

    pub(crate) fn anchor(&self, name: &str) -> Option<u16> {
        self.anchors.iter().find(|(anchor, _)| *anchor == name).map(|(_, row)| *row)
    }

    pub(crate) fn len(&self) -> u16 {
        self.lines.len() as u16
    }
}

/// Renders the current route's body with the shared scroll offset.
struct PageView {
    route: Route,
}

impl Component for PageView {
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let body = body_for(self.route, &*app.ctx.theme);
        let background = app.ctx.theme.roles().background;
        let foreground = app.ctx.theme.roles().text;

        app.content_scroll.set_viewport_height(area.height);
        app.content_scroll.set_content_height(body.len());

        let paragraph = Paragraph::new(Text::from(body.lines))
            .style(Style::default().bg(background).fg(foreground))
            .scroll((app.content_scroll.offset(), 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::MidnightTheme;

    #[test]
    fn home_records_the_contact_anchor() {
        let theme = MidnightTheme::default();
        let body = home::body(&theme);
        let row = body.anchor("contact").expect("home carries a contact anchor");
        assert!(row > 0);
        assert!(row < body.len());
    }

    #[test]
    fn home_extends_well_past_the_hide_fold() {
        let theme = MidnightTheme::default();
        assert!(home::body(&theme).len() > 120);
    }

    #[test]
    fn every_route_has_a_body() {
        let theme = MidnightTheme::default();
        for route in [
            Route::Home,
            Route::Blog,
            Route::Projects,
            Route::About,
            Route::Gallery,
            Route::Uses,
            Route::NotFound,
        ] {
            assert!(body_for(route, &theme).len() > 0);
        }
    }

    #[test]
    fn anchors_resolve_only_on_their_own_page() {
        let theme = MidnightTheme::default();
        assert!(anchor_row(Route::Home, &theme, "contact").is_some());
        assert!(anchor_row(Route::Blog, &theme, "contact").is_none());
        assert!(anchor_row(Route::Home, &theme, "missing").is_none());
    }
}
