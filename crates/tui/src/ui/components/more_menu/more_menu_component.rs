use atrium_types::{Effect, Msg, NavItem};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Margin, Rect};
use ratatui::style::Modifier;
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::components::{Component, cycle_index, find_target_index_by_mouse_position};
use crate::ui::theme;

const MIN_PANEL_WIDTH: u16 = 18;

/// The "More" dropdown panel, anchored under its control in the bar.
///
/// Rendered only while the reducer says the dropdown is open; activation and
/// dismissal both flow back through reducer messages.
#[derive(Debug, Default)]
pub(crate) struct MoreMenuComponent;

fn item_label(item: &NavItem) -> String {
    match &item.icon {
        Some(icon) => format!(" {icon} {} ", item.name),
        None => format!(" {} ", item.name),
    }
}

impl Component for MoreMenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let item_count = app.ctx.config.more_items.len();
        match key.code {
            KeyCode::Esc => app.update(&Msg::DropdownDismissed),
            KeyCode::Up => {
                app.more_menu.cursor = cycle_index(app.more_menu.cursor, item_count, false);
                Vec::new()
            }
            KeyCode::Down => {
                app.more_menu.cursor = cycle_index(app.more_menu.cursor, item_count, true);
                Vec::new()
            }
            KeyCode::Enter => match app.ctx.config.more_items.get(app.more_menu.cursor).cloned() {
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
        match find_target_index_by_mouse_position(&app.more_menu.panel_area, &app.more_menu.item_areas, mouse.column, mouse.row) {
            Some(index) => {
                app.more_menu.cursor = index;
                match app.ctx.config.more_items.get(index).cloned() {
                    Some(item) => app.update(&Msg::ItemActivated(item)),
                    None => Vec::new(),
                }
            }
            // A press inside the panel but between rows selects nothing and
            // must not bubble into the outside-press dismissal.
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let items = app.ctx.config.more_items.clone();
        if items.is_empty() {
            app.more_menu.clear_areas();
            return;
        }

        let width = items
            .iter()
            .map(|item| item_label(item).width() as u16 + 2)
            .max()
            .unwrap_or(MIN_PANEL_WIDTH)
            .max(MIN_PANEL_WIDTH);
        let height = items.len() as u16 + 2;

        // Anchor under the "More" control, pulled left if the terminal edge
        // would cut the panel off.
        let anchor = app.nav_bar.more_button_area;
        let bar = app.nav_bar.last_area;
        let x = anchor.x.min(area.right().saturating_sub(width + 1));
        let y = bar.bottom().min(area.bottom().saturating_sub(1));
        let panel = Rect::new(x, y, width.min(area.width), height.min(area.bottom().saturating_sub(y)));

        frame.render_widget(Clear, panel);
        let theme = &*app.ctx.theme;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style(true))
            .style(theme.panel_style());
        frame.render_widget(block, panel);

        let idle = theme.text_secondary_style();
        let active = theme.selection_style().add_modifier(Modifier::BOLD);
        let inner = panel.inner(Margin::new(1, 1));
        let mut item_areas = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate().take(inner.height as usize) {
            let rect = Rect::new(inner.x, inner.y + index as u16, inner.width, 1);
            let mut style = if app.nav.active_item == item.name { active } else { idle };
            if index == app.more_menu.cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            frame.render_widget(Paragraph::new(item_label(item)).style(style), rect);
            item_areas.push(rect);
        }

        app.more_menu.panel_area = panel;
        app.more_menu.item_areas = item_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        theme::hint_spans(&*app.ctx.theme, &[(" ↑/↓", " Items"), (" Enter", " Open"), (" Esc", " Close")])
    }
}
