mod more_menu_component;
mod state;

pub(crate) use more_menu_component::MoreMenuComponent;
pub use state::MoreMenuState;
