use ratatui::layout::Rect;

/// Hit-rect and cursor state for the "More" dropdown panel.
#[derive(Debug, Default, Clone)]
pub struct MoreMenuState {
    /// Last rendered panel rect; presses outside it dismiss the dropdown.
    pub panel_area: Rect,
    /// Row rects, parallel to the "More" item list.
    pub item_areas: Vec<Rect>,
    /// Keyboard cursor over the items.
    pub cursor: usize,
}

impl MoreMenuState {
    /// Forgets recorded rects, e.g. when the panel is closed.
    pub fn clear_areas(&mut self) {
        self.panel_area = Rect::default();
        self.item_areas.clear();
    }
}
