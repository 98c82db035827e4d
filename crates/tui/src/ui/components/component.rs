//! Component abstraction for the Atrium TUI.
//!
//! Components are self-contained UI surfaces that translate input events into
//! reducer messages and render themselves into a provided `Rect`. They never
//! mutate navigation state directly: state transitions flow through
//! `App::update`, and components report the resulting effects back to the
//! runtime.

use atrium_types::{Effect, Msg};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::App;

/// A UI surface with its own rendering and event translation.
///
/// Event handlers return the effects requested by the transitions they fed
/// into the reducer; `render` is side-effect free except for frame drawing
/// and recording hit rects for mouse dispatch.
pub(crate) trait Component {
    /// Handle an application-level message this component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a key event routed to this component.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App);

    /// Key hints shown in the bottom bar while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}
