//! Application state and logic for the Atrium shell.
//!
//! This module owns the navigation controller: the cohesive [`NavState`]
//! record and the reducer that transitions it. Every terminal event and every
//! asynchronous playback outcome arrives as a [`Msg`]; the reducer applies the
//! transition and reports requested side effects, which the command layer
//! executes. Nothing in here touches the terminal or an audio device, so the
//! whole state machine is unit-testable without either.

use atrium_audio::Soundtrack;
use atrium_types::{Effect, ItemKind, Msg, Route, ShellConfig};
use tracing::{debug, warn};

use crate::ui::components::common::ScrollMetrics;
use crate::ui::components::more_menu::MoreMenuState;
use crate::ui::components::nav_bar::NavBarState;
use crate::ui::components::overlay_menu::OverlayMenuState;
use crate::ui::theme::{self, Theme};

/// Offsets below this row always reveal the bar, regardless of direction.
const TOP_REVEAL_ROWS: u16 = 10;
/// Offsets beyond this row render the bar with scrolled emphasis.
const SCROLL_EMPHASIS_ROWS: u16 = 20;
/// Downward motion past this row hides the bar.
const HIDE_FOLD_ROWS: u16 = 100;

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects like the shell configuration and the active
/// theme, so components read one place instead of threading references.
pub struct SharedCtx {
    /// Read-only shell configuration (nav lists, soundtrack, thresholds).
    pub config: ShellConfig,
    /// Active color theme.
    pub theme: Box<dyn Theme>,
}

impl SharedCtx {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            theme: theme::load(),
        }
    }
}

/// The navigation controller's cohesive state record.
///
/// The five flags and the active item name are the rendered state; the two
/// trailing fields are ephemeral bookkeeping for the next transition (previous
/// scroll sample, one-shot unlock guard) and never reach the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    /// Compact overlay menu visibility.
    pub menu_open: bool,
    /// True once the offset has passed the emphasis threshold.
    pub scrolled: bool,
    /// Soundtrack currently playing.
    pub playing: bool,
    /// "More" panel visibility.
    pub dropdown_open: bool,
    /// Whether the floating bar is shown or slid off-screen.
    pub bar_visible: bool,
    /// Name of the nav item considered current.
    pub active_item: String,
    /// Previous scroll sample, updated after every observation.
    last_offset: u16,
    /// One-shot guard for the first-press audio unlock gesture.
    unlocked: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            playing: false,
            dropdown_open: false,
            bar_visible: true,
            active_item: "Home".into(),
            last_offset: 0,
            unlocked: false,
        }
    }
}

/// The main application state.
///
/// Couples the navigation record with the per-surface hit-rect state the
/// components maintain at render time, the current route, and the mounted
/// soundtrack resource.
pub struct App {
    /// Shared, cross-cutting context (config, theme).
    pub ctx: SharedCtx,
    /// The navigation controller state record.
    pub nav: NavState,
    /// Currently displayed route.
    pub route: Route,
    /// Scroll position of the current page's content.
    pub content_scroll: ScrollMetrics,
    /// Last known terminal size as (columns, rows).
    pub viewport: (u16, u16),
    /// Bar hit rects, maintained by the nav bar component.
    pub nav_bar: NavBarState,
    /// Dropdown hit rects and cursor.
    pub more_menu: MoreMenuState,
    /// Overlay hit rects and cursor.
    pub overlay: OverlayMenuState,
    /// Soundtrack resource; `None` until mounted, and permanently `None` when
    /// audio is unavailable or disabled.
    soundtrack: Option<Box<dyn Soundtrack>>,
}

impl App {
    /// Creates the application state and resolves the active item once.
    ///
    /// The resolver searches the primary list then the "More" list for the
    /// first route-kind item whose `href` equals `initial_path` exactly. When
    /// nothing matches, the default active item ("Home") is retained and the
    /// NotFound page is displayed. The resolver never re-runs; later route
    /// changes go through item activation.
    pub fn new(ctx: SharedCtx, initial_path: &str) -> Self {
        let mut nav = NavState::default();
        if let Some(item) = ctx
            .config
            .all_items()
            .find(|item| item.kind == ItemKind::Route && item.href == initial_path)
        {
            nav.active_item = item.name.clone();
        }

        let route = initial_path.parse().unwrap_or_else(|_| {
            debug!(path = initial_path, "Startup path matches no route; showing the fallback page.");
            Route::NotFound
        });

        Self {
            ctx,
            nav,
            route,
            content_scroll: ScrollMetrics::default(),
            viewport: (0, 0),
            nav_bar: NavBarState::default(),
            more_menu: MoreMenuState::default(),
            overlay: OverlayMenuState::default(),
            soundtrack: None,
        }
    }

    /// Attaches the soundtrack resource.
    ///
    /// The resource is attached at most once per controller lifetime; a
    /// second mount is ignored. Playback does not start here.
    pub fn mount_soundtrack(&mut self, soundtrack: Box<dyn Soundtrack>) {
        if self.soundtrack.is_some() {
            debug!("Soundtrack already mounted; ignoring a second mount.");
            return;
        }
        self.soundtrack = Some(soundtrack);
    }

    /// Mutable access to the mounted soundtrack, if any.
    pub(crate) fn soundtrack_mut(&mut self) -> Option<&mut (dyn Soundtrack + 'static)> {
        self.soundtrack.as_deref_mut()
    }

    /// Polls the soundtrack's completion signal. False when nothing is
    /// mounted.
    pub fn take_soundtrack_ended(&mut self) -> bool {
        self.soundtrack.as_deref_mut().is_some_and(|track| track.take_ended())
    }

    /// Whether the terminal is narrow enough for the compact layout.
    pub fn is_compact(&self) -> bool {
        self.viewport.0 < self.ctx.config.compact_width
    }

    /// Updates the application state based on a message.
    ///
    /// This is the single reducer for the navigation controller. The two
    /// coupling rules live here as explicit transitions: hiding the bar
    /// forces the dropdown closed, and the dropdown and overlay menus are
    /// mutually exclusive.
    pub fn update(&mut self, msg: &Msg) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Msg::Tick => {}
            Msg::Resize(width, height) => {
                self.viewport = (*width, *height);
                // Each menu surface only exists under one layout: the overlay
                // under compact, the dropdown under wide.
                if self.is_compact() {
                    self.nav.dropdown_open = false;
                } else {
                    self.nav.menu_open = false;
                }
            }
            Msg::ScrollSample(offset) => {
                self.observe_scroll(*offset);
            }
            Msg::PointerPressed => {
                if !self.nav.unlocked {
                    self.nav.unlocked = true;
                    effects.push(Effect::AudioUnlockRequested);
                }
            }
            Msg::ItemActivated(item) => {
                self.nav.active_item = item.name.clone();
                self.nav.dropdown_open = false;
                self.nav.menu_open = false;
                match item.kind {
                    ItemKind::Route => match item.href.parse::<Route>() {
                        Ok(route) => effects.push(Effect::SwitchTo(route)),
                        Err(_) => {
                            warn!(href = %item.href, "Nav item names no routed page; showing the fallback page.");
                            effects.push(Effect::SwitchTo(Route::NotFound));
                        }
                    },
                    ItemKind::Scroll => effects.push(Effect::ScrollToAnchor(item.href.clone())),
                }
            }
            Msg::DropdownToggled => {
                if self.nav.dropdown_open {
                    self.nav.dropdown_open = false;
                } else if self.nav.bar_visible {
                    self.nav.dropdown_open = true;
                    self.nav.menu_open = false;
                    self.more_menu.cursor = 0;
                }
            }
            Msg::DropdownDismissed => {
                self.nav.dropdown_open = false;
            }
            Msg::MenuToggled => {
                self.nav.menu_open = !self.nav.menu_open;
                if self.nav.menu_open {
                    self.nav.dropdown_open = false;
                    self.overlay.cursor = 0;
                }
            }
            Msg::MenuDismissed => {
                self.nav.menu_open = false;
            }
            Msg::PlayToggled => {
                // Without a mounted resource every playback operation is a
                // no-op rather than an error.
                if self.soundtrack.is_none() {
                    return effects;
                }
                if self.nav.playing {
                    self.nav.playing = false;
                    effects.push(Effect::PlaybackPauseRequested);
                } else {
                    self.nav.playing = true;
                    effects.push(Effect::PlaybackStartRequested);
                }
            }
            Msg::PlaybackStarted => {
                self.nav.playing = true;
            }
            Msg::PlaybackRejected(reason) => {
                warn!(reason = %reason, "Playback start rejected.");
                self.nav.playing = false;
            }
            Msg::PlaybackEnded => {
                self.nav.playing = false;
            }
        }
        effects
    }

    /// Applies the scroll visibility rules to one offset sample.
    fn observe_scroll(&mut self, offset: u16) {
        self.nav.scrolled = offset > SCROLL_EMPHASIS_ROWS;
        if offset < TOP_REVEAL_ROWS {
            self.nav.bar_visible = true;
        } else if offset > self.nav.last_offset && offset > HIDE_FOLD_ROWS {
            self.nav.bar_visible = false;
            self.nav.dropdown_open = false;
        } else if offset < self.nav.last_offset {
            self.nav.bar_visible = true;
        }
        self.nav.last_offset = offset;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use atrium_audio::{PlaybackError, Preload};
    use atrium_types::NavItem;

    use super::*;
    use crate::cmd;

    #[derive(Default)]
    struct Counters {
        plays: AtomicUsize,
        pauses: AtomicUsize,
    }

    /// Scripted soundtrack: records calls, optionally rejects every start.
    struct FakeSoundtrack {
        counters: Arc<Counters>,
        reject_with: Option<String>,
        paused: bool,
        ended_once: bool,
    }

    impl FakeSoundtrack {
        fn new(counters: Arc<Counters>) -> Self {
            Self {
                counters,
                reject_with: None,
                paused: true,
                ended_once: false,
            }
        }

        fn rejecting(counters: Arc<Counters>, reason: &str) -> Self {
            Self {
                reject_with: Some(reason.into()),
                ..Self::new(counters)
            }
        }
    }

    impl Soundtrack for FakeSoundtrack {
        fn play(&mut self) -> Result<(), PlaybackError> {
            self.counters.plays.fetch_add(1, Ordering::SeqCst);
            match &self.reject_with {
                Some(reason) => Err(PlaybackError::Blocked(reason.clone())),
                None => {
                    self.paused = false;
                    Ok(())
                }
            }
        }

        fn pause(&mut self) {
            self.counters.pauses.fetch_add(1, Ordering::SeqCst);
            self.paused = true;
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn set_volume(&mut self, _volume: f32) {}

        fn set_preload(&mut self, _preload: Preload) {}

        fn take_ended(&mut self) -> bool {
            std::mem::take(&mut self.ended_once)
        }
    }

    fn test_app(initial_path: &str) -> App {
        App::new(SharedCtx::new(ShellConfig::default()), initial_path)
    }

    fn app_with_soundtrack() -> (App, Arc<Counters>) {
        let counters = Arc::new(Counters::default());
        let mut app = test_app("/");
        app.mount_soundtrack(Box::new(FakeSoundtrack::new(Arc::clone(&counters))));
        (app, counters)
    }

    /// Feeds offsets through the reducer, collecting the visibility and
    /// scrolled flags after each sample.
    fn feed_offsets(app: &mut App, offsets: &[u16]) -> (Vec<bool>, Vec<bool>) {
        let mut visible = Vec::new();
        let mut scrolled = Vec::new();
        for offset in offsets {
            app.update(&Msg::ScrollSample(*offset));
            visible.push(app.nav.bar_visible);
            scrolled.push(app.nav.scrolled);
        }
        (visible, scrolled)
    }

    /// Runs the reducer's effects through the command layer and feeds the
    /// outcome messages back, like the runtime does.
    fn settle(app: &mut App, effects: Vec<Effect>) {
        let commands = cmd::from_effects(app, effects);
        for msg in cmd::run_cmds(app, commands) {
            let follow_ups = app.update(&msg);
            assert!(follow_ups.is_empty(), "playback outcomes request no further effects");
        }
    }

    #[test]
    fn near_top_offsets_always_reveal_the_bar() {
        let mut app = test_app("/");
        feed_offsets(&mut app, &[0, 150, 200, 9]);
        assert!(app.nav.bar_visible);
        feed_offsets(&mut app, &[400, 5]);
        assert!(app.nav.bar_visible);
    }

    #[test]
    fn upward_motion_reveals_the_bar() {
        let mut app = test_app("/");
        feed_offsets(&mut app, &[50, 150, 250]);
        assert!(!app.nav.bar_visible);
        feed_offsets(&mut app, &[249]);
        assert!(app.nav.bar_visible);
        feed_offsets(&mut app, &[240, 230]);
        assert!(app.nav.bar_visible);
    }

    #[test]
    fn downward_motion_past_the_fold_hides_bar_and_dropdown_together() {
        let mut app = test_app("/");
        app.update(&Msg::DropdownToggled);
        assert!(app.nav.dropdown_open);

        feed_offsets(&mut app, &[50, 150]);
        assert!(!app.nav.bar_visible);
        assert!(!app.nav.dropdown_open);
    }

    #[test]
    fn downward_motion_before_the_fold_keeps_the_bar() {
        let mut app = test_app("/");
        feed_offsets(&mut app, &[30, 60, 90]);
        assert!(app.nav.bar_visible);
    }

    #[test]
    fn scrolled_tracks_only_the_most_recent_offset() {
        let mut app = test_app("/");
        let (_, scrolled) = feed_offsets(&mut app, &[25, 15, 21, 20]);
        assert_eq!(scrolled, vec![true, false, true, false]);
    }

    #[test]
    fn canonical_offset_scenario() {
        let mut app = test_app("/");
        let (visible, scrolled) = feed_offsets(&mut app, &[0, 50, 150, 140]);
        assert_eq!(visible, vec![true, true, false, true]);
        assert_eq!(scrolled, vec![false, true, true, true]);
    }

    #[test]
    fn unchanged_offset_leaves_visibility_alone() {
        let mut app = test_app("/");
        feed_offsets(&mut app, &[50, 150]);
        assert!(!app.nav.bar_visible);
        feed_offsets(&mut app, &[150]);
        assert!(!app.nav.bar_visible);
    }

    #[test]
    fn first_press_primes_playback_exactly_once() {
        let (mut app, counters) = app_with_soundtrack();
        assert!(!app.nav.playing);
        assert_eq!(counters.plays.load(Ordering::SeqCst), 0);

        let effects = app.update(&Msg::PointerPressed);
        assert_eq!(effects, vec![Effect::AudioUnlockRequested]);
        settle(&mut app, effects);
        assert_eq!(counters.plays.load(Ordering::SeqCst), 1);
        assert!(app.nav.playing);

        for _ in 0..3 {
            let effects = app.update(&Msg::PointerPressed);
            assert!(effects.is_empty());
        }
        assert_eq!(counters.plays.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rejected_unlock_is_swallowed() {
        let counters = Arc::new(Counters::default());
        let mut app = test_app("/");
        app.mount_soundtrack(Box::new(FakeSoundtrack::rejecting(Arc::clone(&counters), "policy")));

        let effects = app.update(&Msg::PointerPressed);
        settle(&mut app, effects);
        assert_eq!(counters.plays.load(Ordering::SeqCst), 1);
        assert!(!app.nav.playing);
    }

    #[test]
    fn toggle_twice_returns_to_the_original_state() {
        let (mut app, counters) = app_with_soundtrack();

        let effects = app.update(&Msg::PlayToggled);
        assert!(app.nav.playing);
        settle(&mut app, effects);

        let effects = app.update(&Msg::PlayToggled);
        assert!(!app.nav.playing);
        settle(&mut app, effects);

        assert_eq!(counters.plays.load(Ordering::SeqCst), 1);
        assert_eq!(counters.pauses.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn rejected_toggle_reverts_to_not_playing() {
        let counters = Arc::new(Counters::default());
        let mut app = test_app("/");
        app.mount_soundtrack(Box::new(FakeSoundtrack::rejecting(Arc::clone(&counters), "blocked")));

        let effects = app.update(&Msg::PlayToggled);
        assert!(app.nav.playing);
        settle(&mut app, effects);
        assert!(!app.nav.playing);
    }

    #[test]
    fn playback_operations_without_a_resource_are_no_ops() {
        let mut app = test_app("/");
        assert!(app.update(&Msg::PlayToggled).is_empty());
        assert!(!app.nav.playing);
        assert!(!app.take_soundtrack_ended());
    }

    #[test]
    fn soundtrack_mounts_at_most_once() {
        let (mut app, first) = app_with_soundtrack();
        let second = Arc::new(Counters::default());
        app.mount_soundtrack(Box::new(FakeSoundtrack::new(Arc::clone(&second))));

        let effects = app.update(&Msg::PlayToggled);
        settle(&mut app, effects);
        assert_eq!(first.plays.load(Ordering::SeqCst), 1);
        assert_eq!(second.plays.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn track_completion_resets_playing() {
        let (mut app, _) = app_with_soundtrack();
        let effects = app.update(&Msg::PlayToggled);
        settle(&mut app, effects);
        assert!(app.nav.playing);

        app.update(&Msg::PlaybackEnded);
        assert!(!app.nav.playing);
    }

    #[test]
    fn ended_signal_is_taken_once() {
        let mut app = test_app("/");
        let counters = Arc::new(Counters::default());
        let mut fake = FakeSoundtrack::new(counters);
        fake.ended_once = true;
        app.mount_soundtrack(Box::new(fake));

        assert!(app.take_soundtrack_ended());
        assert!(!app.take_soundtrack_ended());
    }

    #[test]
    fn overlay_selection_sets_active_item_and_closes() {
        let mut app = test_app("/");
        app.update(&Msg::Resize(60, 24));
        app.update(&Msg::MenuToggled);
        assert!(app.nav.menu_open);

        let effects = app.update(&Msg::ItemActivated(NavItem::route("Gallery", "/gallery")));
        assert!(!app.nav.menu_open);
        assert_eq!(app.nav.active_item, "Gallery");
        assert_eq!(effects, vec![Effect::SwitchTo(Route::Gallery)]);
    }

    #[test]
    fn dropdown_and_overlay_are_mutually_exclusive() {
        let mut app = test_app("/");
        app.update(&Msg::DropdownToggled);
        app.update(&Msg::MenuToggled);
        assert!(!(app.nav.dropdown_open && app.nav.menu_open));

        app.update(&Msg::MenuDismissed);
        app.update(&Msg::MenuToggled);
        app.update(&Msg::DropdownToggled);
        assert!(!(app.nav.dropdown_open && app.nav.menu_open));
    }

    #[test]
    fn dropdown_never_opens_while_the_bar_is_hidden() {
        let mut app = test_app("/");
        feed_offsets(&mut app, &[50, 150]);
        assert!(!app.nav.bar_visible);

        app.update(&Msg::DropdownToggled);
        assert!(!app.nav.dropdown_open);
    }

    #[test]
    fn scroll_item_activation_requests_an_anchor_scroll() {
        let mut app = test_app("/");
        let effects = app.update(&Msg::ItemActivated(NavItem::scroll("Contact", "contact")));
        assert_eq!(effects, vec![Effect::ScrollToAnchor("contact".into())]);
        assert_eq!(app.nav.active_item, "Contact");
    }

    #[test]
    fn unroutable_item_falls_back_to_the_not_found_page() {
        let mut app = test_app("/");
        let effects = app.update(&Msg::ItemActivated(NavItem::route("Elsewhere", "/elsewhere")));
        assert_eq!(effects, vec![Effect::SwitchTo(Route::NotFound)]);
        assert_eq!(app.nav.active_item, "Elsewhere");
    }

    #[test]
    fn startup_path_resolves_the_active_item() {
        let app = test_app("/blog");
        assert_eq!(app.nav.active_item, "Blog");
        assert_eq!(app.route, Route::Blog);
    }

    #[test]
    fn unknown_startup_path_keeps_the_default_active_item() {
        let app = test_app("/unknown");
        assert_eq!(app.nav.active_item, "Home");
        assert_eq!(app.route, Route::NotFound);
    }

    #[test]
    fn scroll_kind_items_do_not_resolve_the_startup_path() {
        // "contact" is a scroll target, not a route; an identical path must
        // not claim the active item.
        let app = test_app("contact");
        assert_eq!(app.nav.active_item, "Home");
    }

    #[test]
    fn leaving_the_compact_layout_closes_the_overlay() {
        let mut app = test_app("/");
        app.update(&Msg::Resize(60, 24));
        app.update(&Msg::MenuToggled);
        assert!(app.nav.menu_open);

        app.update(&Msg::Resize(120, 30));
        assert!(!app.nav.menu_open);
    }

    #[test]
    fn entering_the_compact_layout_closes_the_dropdown() {
        let mut app = test_app("/");
        app.update(&Msg::Resize(120, 30));
        app.update(&Msg::DropdownToggled);
        assert!(app.nav.dropdown_open);

        app.update(&Msg::Resize(60, 24));
        assert!(!app.nav.dropdown_open);
    }
}
