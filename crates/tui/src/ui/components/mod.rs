//! UI components for the Atrium shell: the floating navigation bar, the
//! "More" dropdown panel, and the compact overlay menu.

pub mod common;
pub mod component;
pub mod more_menu;
pub mod nav_bar;
pub mod overlay_menu;

pub(crate) use component::Component;

use ratatui::layout::{Position, Rect};

/// Resolves a press position to an item index.
///
/// Returns the index of the row rect containing the position, provided the
/// press landed inside the surrounding container at all.
pub(crate) fn find_target_index_by_mouse_position(container: &Rect, rows: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = Position::new(x, y);
    if !container.contains(position) {
        return None;
    }
    rows.iter().position(|rect| rect.contains(position))
}

/// Steps a cursor through `len` entries, wrapping at both ends.
pub(crate) fn cycle_index(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward { (index + 1) % len } else { (index + len - 1) % len }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_inside_a_row_resolves_its_index() {
        let container = Rect::new(0, 0, 30, 10);
        let rows = vec![Rect::new(1, 1, 10, 1), Rect::new(1, 3, 10, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 3), Some(1));
    }

    #[test]
    fn press_outside_the_container_resolves_nothing() {
        let container = Rect::new(0, 0, 30, 10);
        let rows = vec![Rect::new(1, 1, 10, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 40, 1), None);
    }

    #[test]
    fn press_between_rows_resolves_nothing() {
        let container = Rect::new(0, 0, 30, 10);
        let rows = vec![Rect::new(1, 1, 10, 1), Rect::new(1, 3, 10, 1)];
        assert_eq!(find_target_index_by_mouse_position(&container, &rows, 5, 2), None);
    }

    #[test]
    fn cursor_cycling_wraps_both_ways() {
        assert_eq!(cycle_index(0, 3, true), 1);
        assert_eq!(cycle_index(2, 3, true), 0);
        assert_eq!(cycle_index(0, 3, false), 2);
        assert_eq!(cycle_index(0, 0, true), 0);
    }
}
