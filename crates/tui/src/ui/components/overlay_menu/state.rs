use ratatui::layout::Rect;

/// Hit-rect and cursor state for the compact overlay menu.
#[derive(Debug, Default, Clone)]
pub struct OverlayMenuState {
    /// Last rendered menu panel rect; presses outside it hit the backdrop.
    pub panel_area: Rect,
    /// Row rects, parallel to the combined item list.
    pub item_areas: Vec<Rect>,
    /// Keyboard cursor over the items.
    pub cursor: usize,
}

impl OverlayMenuState {
    /// Forgets recorded rects, e.g. when the overlay is closed.
    pub fn clear_areas(&mut self) {
        self.panel_area = Rect::default();
        self.item_areas.clear();
    }
}
