use atrium_types::{Effect, Msg};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Margin, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::components::{Component, cycle_index, find_target_index_by_mouse_position};
use crate::ui::theme;

const PLAY_LABEL: &str = " ▶ play ";
const PAUSE_LABEL: &str = " ⏸ pause ";
const MORE_CLOSED_LABEL: &str = " More ▾ ";
const MORE_OPEN_LABEL: &str = " More ▴ ";
const MENU_CLOSED_LABEL: &str = " ≡ ";
const MENU_OPEN_LABEL: &str = " ✕ ";

/// The floating navigation bar.
///
/// Renders the inline item row, the "More" control, and the audio toggle on
/// wide terminals, or the compact "Menu" strip on narrow ones, and records
/// the hit rects for mouse dispatch. The bar itself holds no state: whether
/// it is drawn at all is the reducer's decision.
#[derive(Debug, Default)]
pub(crate) struct NavBarComponent;

impl NavBarComponent {
    fn render_wide(&self, frame: &mut Frame, inner: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let idle = theme.text_secondary_style();
        let active = theme.selection_style().add_modifier(Modifier::BOLD);
        let muted = theme.text_muted_style();

        let items = app.ctx.config.nav_items.clone();
        let mut item_areas = Vec::with_capacity(items.len());
        let mut x = inner.x.saturating_add(1);

        for (index, item) in items.iter().enumerate() {
            let label = format!(" {} ", item.name);
            let width = label.width() as u16;
            if x + width >= inner.right() {
                break;
            }
            let rect = Rect::new(x, inner.y, width, 1);
            let mut style = if app.nav.active_item == item.name { active } else { idle };
            if index == app.nav_bar.cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            frame.render_widget(Paragraph::new(label).style(style), rect);
            item_areas.push(rect);
            x = x.saturating_add(width + 1);
        }

        // Separator between the item row and the secondary controls.
        if x + 2 < inner.right() {
            frame.render_widget(Paragraph::new("│").style(muted), Rect::new(x, inner.y, 1, 1));
            x = x.saturating_add(2);
        }

        let more_label = if app.nav.dropdown_open { MORE_OPEN_LABEL } else { MORE_CLOSED_LABEL };
        let more_width = more_label.width() as u16;
        let more_area = if x + more_width < inner.right() {
            let rect = Rect::new(x, inner.y, more_width, 1);
            let style = if app.nav.dropdown_open { active } else { idle };
            frame.render_widget(Paragraph::new(more_label).style(style), rect);
            rect
        } else {
            Rect::default()
        };

        let audio_area = self.render_audio_toggle(frame, inner, app.nav.playing, idle, active);

        app.nav_bar.item_areas = item_areas;
        app.nav_bar.more_button_area = more_area;
        app.nav_bar.audio_button_area = audio_area;
        app.nav_bar.menu_button_area = Rect::default();
    }

    fn render_compact(&self, frame: &mut Frame, inner: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let idle = theme.text_secondary_style();
        let active = theme.selection_style().add_modifier(Modifier::BOLD);

        frame.render_widget(
            Paragraph::new("Menu").style(theme.text_primary_style().add_modifier(Modifier::BOLD)),
            Rect::new(inner.x.saturating_add(1), inner.y, 4u16.min(inner.width), 1),
        );

        let menu_label = if app.nav.menu_open { MENU_OPEN_LABEL } else { MENU_CLOSED_LABEL };
        let menu_width = menu_label.width() as u16;
        let menu_x = inner.right().saturating_sub(menu_width + 1);
        let menu_area = Rect::new(menu_x, inner.y, menu_width, 1);
        let menu_style = if app.nav.menu_open { active } else { idle };
        frame.render_widget(Paragraph::new(menu_label).style(menu_style), menu_area);

        let audio_inner = Rect::new(inner.x, inner.y, menu_x.saturating_sub(inner.x + 1), inner.height);
        let audio_area = self.render_audio_toggle(frame, audio_inner, app.nav.playing, idle, active);

        app.nav_bar.item_areas.clear();
        app.nav_bar.more_button_area = Rect::default();
        app.nav_bar.audio_button_area = audio_area;
        app.nav_bar.menu_button_area = menu_area;
    }

    /// Renders the play/pause affordance right-aligned inside `inner` and
    /// returns its rect.
    fn render_audio_toggle(&self, frame: &mut Frame, inner: Rect, playing: bool, idle: Style, active: Style) -> Rect {
        let label = if playing { PAUSE_LABEL } else { PLAY_LABEL };
        let width = label.width() as u16;
        if inner.width <= width + 1 {
            return Rect::default();
        }
        let rect = Rect::new(inner.right().saturating_sub(width + 1), inner.y, width, 1);
        let style = if playing { active } else { idle };
        frame.render_widget(Paragraph::new(label).style(style), rect);
        rect
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let item_count = app.ctx.config.nav_items.len();
        match key.code {
            KeyCode::Left => {
                app.nav_bar.cursor = cycle_index(app.nav_bar.cursor, item_count, false);
                Vec::new()
            }
            KeyCode::Right => {
                app.nav_bar.cursor = cycle_index(app.nav_bar.cursor, item_count, true);
                Vec::new()
            }
            KeyCode::Enter => match app.ctx.config.nav_items.get(app.nav_bar.cursor).cloned() {
                Some(item) => app.update(&Msg::ItemActivated(item)),
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let (x, y) = (mouse.column, mouse.row);
        let position = Position::new(x, y);

        if app.is_compact() {
            if app.nav_bar.menu_button_area.contains(position) {
                return app.update(&Msg::MenuToggled);
            }
            if app.nav_bar.audio_button_area.contains(position) {
                return app.update(&Msg::PlayToggled);
            }
            return Vec::new();
        }

        if let Some(index) = find_target_index_by_mouse_position(&app.nav_bar.last_area, &app.nav_bar.item_areas, x, y) {
            app.nav_bar.cursor = index;
            return match app.ctx.config.nav_items.get(index).cloned() {
                Some(item) => app.update(&Msg::ItemActivated(item)),
                None => Vec::new(),
            };
        }
        if app.nav_bar.more_button_area.contains(position) {
            return app.update(&Msg::DropdownToggled);
        }
        if app.nav_bar.audio_button_area.contains(position) {
            return app.update(&Msg::PlayToggled);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        // The scrolled state shifts the bar onto the muted surface tone.
        let background = if app.nav.scrolled {
            theme.roles().surface_muted
        } else {
            theme.roles().surface
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(false))
            .style(Style::default().bg(background).fg(theme.roles().text));
        frame.render_widget(block, area);

        let inner = area.inner(Margin::new(1, 1));
        if inner.height == 0 {
            app.nav_bar.clear_areas();
            return;
        }

        if app.is_compact() {
            self.render_compact(frame, inner, app);
        } else {
            self.render_wide(frame, inner, app);
        }
        app.nav_bar.last_area = area;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let toggle_hint = if app.is_compact() { (" m", " Menu") } else { (" m", " More") };
        theme::hint_spans(
            &*app.ctx.theme,
            &[(" ←/→", " Items"), (" Enter", " Open"), toggle_hint, (" p", " Music"), (" q", " Quit")],
        )
    }
}
