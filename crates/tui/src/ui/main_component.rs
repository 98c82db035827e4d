//! Top-level view composition for the shell.
//!
//! `MainView` owns the component instances and performs the z-ordered event
//! dispatch: overlay menu first, then the dropdown panel, then the floating
//! bar, then the page content. Rendering is the pure image of the current
//! state: a hidden bar is simply not drawn, the dropdown and overlay only
//! appear while the reducer says they are open.

use atrium_types::{Effect, Msg, Route};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::components::more_menu::MoreMenuComponent;
use crate::ui::components::nav_bar::NavBarComponent;
use crate::ui::components::overlay_menu::OverlayMenuComponent;
use crate::ui::components::Component;
use crate::ui::pages;
use crate::ui::theme;

/// Rows consumed by the floating bar when it is visible.
const BAR_HEIGHT: u16 = 3;
/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: i32 = 3;

pub(crate) struct MainView {
    /// Current routed page view.
    content_view: Box<dyn Component>,
    nav_bar_view: NavBarComponent,
    more_menu_view: MoreMenuComponent,
    overlay_view: OverlayMenuComponent,
}

impl MainView {
    pub(crate) fn new(content_view: Box<dyn Component>) -> Self {
        Self {
            content_view,
            nav_bar_view: NavBarComponent,
            more_menu_view: MoreMenuComponent,
            overlay_view: OverlayMenuComponent,
        }
    }

    /// Swaps the content view for a new route and resets the page scroll.
    ///
    /// Not called directly by components; route changes arrive as
    /// `Effect::SwitchTo` and are applied by the runtime's navigation pass.
    pub(crate) fn set_current_route(&mut self, app: &mut App, route: Route) {
        app.route = route;
        app.content_scroll.reset();
        self.content_view = pages::view_for(route);
    }

    /// Adjusts the page scroll and feeds the new offset into the reducer.
    fn scroll_content_by(&mut self, app: &mut App, delta: i32) -> Vec<Effect> {
        app.content_scroll.scroll_by(delta);
        let offset = app.content_scroll.offset();
        app.update(&Msg::ScrollSample(offset))
    }

    fn scroll_content_to(&mut self, app: &mut App, bottom: bool) -> Vec<Effect> {
        if bottom {
            app.content_scroll.jump_to_bottom();
        } else {
            app.content_scroll.jump_to(0);
        }
        let offset = app.content_scroll.offset();
        app.update(&Msg::ScrollSample(offset))
    }
}

impl Component for MainView {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        let mut effects = app.update(msg);
        effects.extend(self.content_view.handle_message(app, msg));
        effects
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.nav.menu_open {
            return self.overlay_view.handle_key_events(app, key);
        }
        if app.nav.dropdown_open {
            return self.more_menu_view.handle_key_events(app, key);
        }
        match key.code {
            KeyCode::Char('p') => app.update(&Msg::PlayToggled),
            KeyCode::Char('m') => {
                let msg = if app.is_compact() { Msg::MenuToggled } else { Msg::DropdownToggled };
                app.update(&msg)
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Enter => self.nav_bar_view.handle_key_events(app, key),
            KeyCode::Down => self.scroll_content_by(app, 1),
            KeyCode::Up => self.scroll_content_by(app, -1),
            KeyCode::PageDown => {
                let page = i32::from(app.viewport.1.saturating_sub(BAR_HEIGHT));
                self.scroll_content_by(app, page.max(1))
            }
            KeyCode::PageUp => {
                let page = i32::from(app.viewport.1.saturating_sub(BAR_HEIGHT));
                self.scroll_content_by(app, -page.max(1))
            }
            KeyCode::Home => self.scroll_content_to(app, false),
            KeyCode::End => self.scroll_content_to(app, true),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // The very first press anywhere doubles as the audio unlock
                // gesture, before any hit dispatch.
                let mut effects = app.update(&Msg::PointerPressed);
                let position = Position::new(mouse.column, mouse.row);

                if app.nav.menu_open {
                    effects.extend(self.overlay_view.handle_mouse_events(app, mouse));
                    return effects;
                }
                if app.nav.dropdown_open && app.more_menu.panel_area.contains(position) {
                    effects.extend(self.more_menu_view.handle_mouse_events(app, mouse));
                    return effects;
                }
                // The bar sits above the dropdown's outside-press region.
                if app.nav_bar.last_area.contains(position) {
                    effects.extend(self.nav_bar_view.handle_mouse_events(app, mouse));
                    return effects;
                }
                if app.nav.dropdown_open {
                    effects.extend(app.update(&Msg::DropdownDismissed));
                }
                effects
            }
            MouseEventKind::ScrollDown if !app.nav.menu_open => self.scroll_content_by(app, WHEEL_STEP),
            MouseEventKind::ScrollUp if !app.nav.menu_open => self.scroll_content_by(app, -WHEEL_STEP),
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        // Full-frame background fill keeps partial redraws consistent.
        let background = Paragraph::new("").style(Style::default().bg(app.ctx.theme.roles().background));
        frame.render_widget(background, area);

        let bar_height = if app.nav.bar_visible { BAR_HEIGHT } else { 0 };
        let rows = Layout::vertical([
            Constraint::Length(bar_height),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

        self.content_view.render(frame, rows[1], app);

        if app.nav.bar_visible {
            self.nav_bar_view.render(frame, rows[0], app);
        } else {
            app.nav_bar.clear_areas();
        }

        if app.nav.dropdown_open {
            self.more_menu_view.render(frame, area, app);
        } else {
            app.more_menu.clear_areas();
        }

        if app.nav.menu_open {
            self.overlay_view.render(frame, area, app);
        } else {
            app.overlay.clear_areas();
        }

        let hints = Paragraph::new(Line::from(self.get_hint_spans(app))).style(app.ctx.theme.text_muted_style());
        frame.render_widget(hints, rows[2]);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let mut spans = vec![Span::styled("Hints:", app.ctx.theme.text_muted_style())];
        if app.nav.menu_open {
            spans.extend(self.overlay_view.get_hint_spans(app));
        } else if app.nav.dropdown_open {
            spans.extend(self.more_menu_view.get_hint_spans(app));
        } else {
            spans.extend(self.nav_bar_view.get_hint_spans(app));
            spans.extend(theme::hint_spans(&*app.ctx.theme, &[(" ↑/↓", " Scroll")]));
        }
        spans
    }
}
