use ratatui::layout::Rect;

/// Hit-rect and cursor state for the floating navigation bar.
///
/// The rects are recorded at render time and consulted for mouse dispatch;
/// they carry no rendering decisions of their own. While the bar is hidden
/// every rect is cleared, so presses fall through to whatever is underneath.
#[derive(Debug, Default, Clone)]
pub struct NavBarState {
    /// Last rendered area of the whole bar.
    pub last_area: Rect,
    /// Row rects for the inline items, parallel to the primary nav list.
    pub item_areas: Vec<Rect>,
    /// Rect of the "More" control (desktop layout only).
    pub more_button_area: Rect,
    /// Rect of the audio toggle.
    pub audio_button_area: Rect,
    /// Rect of the menu toggle (compact layout only).
    pub menu_button_area: Rect,
    /// Keyboard cursor over the primary items.
    pub cursor: usize,
}

impl NavBarState {
    /// Forgets every recorded rect, e.g. when the bar is hidden.
    pub fn clear_areas(&mut self) {
        self.last_area = Rect::default();
        self.item_areas.clear();
        self.more_button_area = Rect::default();
        self.audio_button_area = Rect::default();
        self.menu_button_area = Rect::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clearing_areas_keeps_the_cursor() {
        let mut state = NavBarState {
            last_area: Rect::new(0, 0, 80, 3),
            item_areas: vec![Rect::new(2, 1, 6, 1)],
            cursor: 3,
            ..NavBarState::default()
        };
        state.clear_areas();
        assert_eq!(state.last_area, Rect::default());
        assert!(state.item_areas.is_empty());
        assert_eq!(state.cursor, 3);
    }
}
