use atrium_types::{Effect, Msg, NavItem};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Margin, Position, Rect};
use ratatui::style::{Modifier, Stylize};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::app::App;
use crate::ui::components::{Component, cycle_index, find_target_index_by_mouse_position};
use crate::ui::theme;

/// The full-screen overlay menu for the compact layout.
///
/// Dims the page behind a backdrop and lists every item from both nav lists.
/// Presses inside the panel resolve items without reaching the backdrop;
/// presses on the backdrop dismiss the overlay.
#[derive(Debug, Default)]
pub(crate) struct OverlayMenuComponent;

fn combined_items(app: &App) -> Vec<NavItem> {
    app.ctx.config.all_items().cloned().collect()
}

fn item_label(item: &NavItem) -> String {
    match &item.icon {
        Some(icon) => format!(" {icon} {} ", item.name),
        None => format!("   {} ", item.name),
    }
}

impl Component for OverlayMenuComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let item_count = app.ctx.config.nav_items.len() + app.ctx.config.more_items.len();
        match key.code {
            KeyCode::Esc => app.update(&Msg::MenuDismissed),
            KeyCode::Up => {
                app.overlay.cursor = cycle_index(app.overlay.cursor, item_count, false);
                Vec::new()
            }
            KeyCode::Down => {
                app.overlay.cursor = cycle_index(app.overlay.cursor, item_count, true);
                Vec::new()
            }
            KeyCode::Enter => {
                let item = combined_items(app).get(app.overlay.cursor).cloned();
                match item {
                    Some(item) => app.update(&Msg::ItemActivated(item)),
                    None => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        let position = Position::new(mouse.column, mouse.row);
        if !app.overlay.panel_area.contains(position) {
            return app.update(&Msg::MenuDismissed);
        }
        match find_target_index_by_mouse_position(&app.overlay.panel_area, &app.overlay.item_areas, mouse.column, mouse.row) {
            Some(index) => {
                app.overlay.cursor = index;
                let item = combined_items(app).get(index).cloned();
                match item {
                    Some(item) => app.update(&Msg::ItemActivated(item)),
                    None => Vec::new(),
                }
            }
            // Inside the panel but between rows: swallowed, the backdrop
            // close must not fire.
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        // Dimmed backdrop over the whole page.
        frame.render_widget(Block::default().style(theme.modal_background_style()).dim(), area);

        let items = combined_items(app);
        let height = (items.len() as u16 + 2).min(area.height.saturating_sub(5).max(3));
        let panel = Rect::new(
            area.x.saturating_add(2),
            area.y.saturating_add(4),
            area.width.saturating_sub(4),
            height,
        );

        frame.render_widget(Clear, panel);
        let block = Block::default()
            .title(Span::styled("Menu", theme.text_secondary_style().add_modifier(Modifier::BOLD)))
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
            if index == app.overlay.cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            frame.render_widget(Paragraph::new(item_label(item)).style(style), rect);
            item_areas.push(rect);
        }

        app.overlay.panel_area = panel;
        app.overlay.item_areas = item_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        theme::hint_spans(&*app.ctx.theme, &[(" ↑/↓", " Items"), (" Enter", " Open"), (" Esc", " Close")])
    }
}
