use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distinguishes how activating a navigation item is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Navigates to a routed page (the item's `href` names a page path).
    Route,
    /// Scrolls the current page to a named anchor (the item's `href` names it).
    Scroll,
}

/// A single entry in one of the navigation lists.
///
/// Items are static data: the two lists (primary bar and "More" panel) are
/// fixed at startup and never mutated. The `name` doubles as the identity the
/// shell tracks as the active item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display name and identity of the item (e.g., "Blog").
    pub name: String,
    /// Route path or anchor name, depending on `kind`.
    pub href: String,
    /// How activation is resolved.
    pub kind: ItemKind,
    /// Optional short icon glyph. Prefer non-emoji symbols for consistent
    /// terminal rendering.
    #[serde(default)]
    pub icon: Option<String>,
}

impl NavItem {
    /// Creates a route-kind item.
    pub fn route(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            kind: ItemKind::Route,
            icon: None,
        }
    }

    /// Creates a scroll-kind item targeting an in-page anchor.
    pub fn scroll(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            kind: ItemKind::Scroll,
            icon: None,
        }
    }

    /// Attaches an icon glyph to the item.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Routed pages the shell can display.
///
/// `NotFound` is the fallback page for any path that matches no route; the
/// active navigation item is unaffected by the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Blog,
    Projects,
    About,
    Gallery,
    Uses,
    NotFound,
}

impl Route {
    /// Canonical path for the route.
    pub fn href(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Blog => "/blog",
            Route::Projects => "/project",
            Route::About => "/about",
            Route::Gallery => "/gallery",
            Route::Uses => "/uses",
            Route::NotFound => "/404",
        }
    }

    /// Human-readable page title.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Blog => "Blog",
            Route::Projects => "Projects",
            Route::About => "About",
            Route::Gallery => "Gallery",
            Route::Uses => "Uses",
            Route::NotFound => "Not Found",
        }
    }
}

/// Error returned when a path string names no routed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("path matches no routed page")]
pub struct ParseRouteError;

impl FromStr for Route {
    type Err = ParseRouteError;

    /// Exact string match on the canonical path. No normalization: trailing
    /// slashes and query fragments do not match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/" => Ok(Route::Home),
            "/blog" => Ok(Route::Blog),
            "/project" => Ok(Route::Projects),
            "/about" => Ok(Route::About),
            "/gallery" => Ok(Route::Gallery),
            "/uses" => Ok(Route::Uses),
            _ => Err(ParseRouteError),
        }
    }
}

/// Soundtrack source and initial level, read from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundtrackConfig {
    /// Remote URL of the track.
    pub url: String,
    /// Volume applied when the soundtrack is primed, in `0.0..=1.0`.
    pub volume: f32,
}

impl Default for SoundtrackConfig {
    fn default() -> Self {
        Self {
            url: "https://res.cloudinary.com/din8s15ri/video/upload/v1751588192/Marutsuke_Instrumental_mtppye.mp3".into(),
            volume: 0.5,
        }
    }
}

/// Read-only shell configuration loaded at startup.
///
/// Every field has a compiled-in default; a missing or partial config file is
/// not an error. Nothing in here is written back to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Items shown inline in the navigation bar.
    pub nav_items: Vec<NavItem>,
    /// Items tucked into the "More" dropdown panel.
    pub more_items: Vec<NavItem>,
    /// Soundtrack source and initial volume.
    pub soundtrack: SoundtrackConfig,
    /// Terminal widths below this render the compact layout.
    pub compact_width: u16,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            nav_items: vec![
                NavItem::route("Home", "/").with_icon("⌂"),
                NavItem::route("Blog", "/blog"),
                NavItem::route("Projects", "/project"),
                NavItem::route("About", "/about"),
                NavItem::scroll("Contact", "contact"),
            ],
            more_items: vec![
                NavItem::route("Gallery", "/gallery").with_icon("▦"),
                NavItem::route("Uses", "/uses").with_icon("⚙"),
            ],
            soundtrack: SoundtrackConfig::default(),
            compact_width: 80,
        }
    }
}

impl ShellConfig {
    /// Iterates the primary list followed by the "More" list, the order used
    /// for active-item resolution and for the compact overlay menu.
    pub fn all_items(&self) -> impl Iterator<Item = &NavItem> {
        self.nav_items.iter().chain(self.more_items.iter())
    }
}

/// Messages that drive the navigation controller's state transitions.
///
/// Every terminal event and every asynchronous outcome enters the reducer as
/// one of these; handlers are synchronous and atomic with respect to each
/// other because the event loop processes one message at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Periodic tick (soundtrack completion is polled on this cadence).
    Tick,
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// A new vertical content scroll offset was observed, in rows.
    ScrollSample(u16),
    /// A primary pointer press occurred anywhere in the terminal.
    PointerPressed,
    /// A navigation item was activated (bar, dropdown, or overlay).
    ItemActivated(NavItem),
    /// The "More" control was toggled.
    DropdownToggled,
    /// The dropdown was dismissed (outside press or escape).
    DropdownDismissed,
    /// The compact menu toggle was pressed.
    MenuToggled,
    /// The overlay menu was dismissed (backdrop press or escape).
    MenuDismissed,
    /// The audio control was toggled.
    PlayToggled,
    /// A playback start attempt was confirmed by the soundtrack.
    PlaybackStarted,
    /// A playback start attempt was rejected, with the reason.
    PlaybackRejected(String),
    /// The soundtrack signalled natural completion.
    PlaybackEnded,
}

/// Side effects requested by state transitions.
///
/// Effects describe what should happen; the command layer decides how, and
/// feeds any outcome back into the reducer as a [`Msg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Swap the content view to the given route.
    SwitchTo(Route),
    /// Scroll the current page to a named anchor.
    ScrollToAnchor(String),
    /// Prime the soundtrack after the first pointer press (preload, volume,
    /// conditional start).
    AudioUnlockRequested,
    /// Start playback.
    PlaybackStartRequested,
    /// Pause playback.
    PlaybackPauseRequested,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_item_icon_defaults_to_none() {
        let json = r#"{
            "name": "Blog",
            "href": "/blog",
            "kind": "route"
        }"#;
        let item: NavItem = serde_json::from_str(json).expect("deserialize NavItem");
        assert_eq!(item.name, "Blog");
        assert_eq!(item.kind, ItemKind::Route);
        assert!(item.icon.is_none());
    }

    #[test]
    fn route_paths_match_exactly() {
        assert_eq!("/blog".parse::<Route>(), Ok(Route::Blog));
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
        assert_eq!("/blog/".parse::<Route>(), Err(ParseRouteError));
        assert_eq!("/blog?tag=rust".parse::<Route>(), Err(ParseRouteError));
        assert_eq!("/nope".parse::<Route>(), Err(ParseRouteError));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: ShellConfig = serde_json::from_str(r#"{"compact_width": 60}"#).expect("deserialize ShellConfig");
        assert_eq!(config.compact_width, 60);
        assert_eq!(config.nav_items.len(), 5);
        assert_eq!(config.more_items.len(), 2);
        assert!((config.soundtrack.volume - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn default_items_name_home_exactly_once() {
        let config = ShellConfig::default();
        let homes = config.all_items().filter(|item| item.name == "Home").count();
        assert_eq!(homes, 1);
    }
}
