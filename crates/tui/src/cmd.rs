//! Effect execution layer.
//!
//! Translates the reducer's [`Effect`]s into imperative [`Cmd`]s and executes
//! them against the mounted soundtrack and the page scroll state. State
//! updates stay pure in `App::update`; this is the boundary where they touch
//! the outside world. Playback outcomes re-enter the update loop as messages,
//! so `playing` only changes through the reducer.
//!
//! Route switches are deliberately absent here: the runtime's navigation pass
//! consumes `Effect::SwitchTo` before commands are derived.

use atrium_audio::Preload;
use atrium_types::{Effect, Msg};
use tracing::{debug, warn};

use crate::app::App;
use crate::ui::pages;

/// Side-effectful commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq)]
pub enum Cmd {
    /// One-time unlock: eager preload, configured volume, and a start attempt
    /// if the track is currently paused.
    PrimePlayback { volume: f32 },
    /// Start playback; the outcome is reported back as a message.
    StartPlayback,
    /// Pause playback; always succeeds.
    PausePlayback,
    /// Jump the current page to a named anchor row.
    JumpToAnchor(String),
}

/// Converts effects into commands.
pub fn from_effects(app: &App, effects: Vec<Effect>) -> Vec<Cmd> {
    let mut commands = Vec::new();
    for effect in effects {
        match effect {
            Effect::AudioUnlockRequested => commands.push(Cmd::PrimePlayback {
                volume: app.ctx.config.soundtrack.volume,
            }),
            Effect::PlaybackStartRequested => commands.push(Cmd::StartPlayback),
            Effect::PlaybackPauseRequested => commands.push(Cmd::PausePlayback),
            Effect::ScrollToAnchor(anchor) => commands.push(Cmd::JumpToAnchor(anchor)),
            // Handled by the runtime's navigation pass.
            Effect::SwitchTo(_) => {}
        }
    }
    commands
}

/// Executes commands and returns the outcome messages to feed back into the
/// reducer.
pub fn run_cmds(app: &mut App, commands: Vec<Cmd>) -> Vec<Msg> {
    let mut out = Vec::new();
    for command in commands {
        match command {
            Cmd::PrimePlayback { volume } => {
                let Some(track) = app.soundtrack_mut() else {
                    debug!("No soundtrack mounted; the unlock gesture is a no-op.");
                    continue;
                };
                track.set_preload(Preload::Auto);
                track.set_volume(volume);
                if track.is_paused() {
                    match track.play() {
                        Ok(()) => out.push(Msg::PlaybackStarted),
                        // A refused first start is not an error surface; the
                        // controller simply stays in the not-playing state.
                        Err(error) => warn!(error = %error, "Soundtrack start blocked on unlock."),
                    }
                }
            }
            Cmd::StartPlayback => {
                let Some(track) = app.soundtrack_mut() else {
                    continue;
                };
                match track.play() {
                    Ok(()) => out.push(Msg::PlaybackStarted),
                    Err(error) => out.push(Msg::PlaybackRejected(error.to_string())),
                }
            }
            Cmd::PausePlayback => {
                if let Some(track) = app.soundtrack_mut() {
                    track.pause();
                }
            }
            Cmd::JumpToAnchor(anchor) => {
                match pages::anchor_row(app.route, &*app.ctx.theme, &anchor) {
                    Some(row) => {
                        app.content_scroll.jump_to(row);
                        // A programmatic jump obeys the same visibility rules
                        // as a user scroll.
                        out.push(Msg::ScrollSample(app.content_scroll.offset()));
                    }
                    None => warn!(anchor = %anchor, route = ?app.route, "Anchor not present on the current page."),
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use atrium_types::{Route, ShellConfig};

    use super::*;
    use crate::app::{App, SharedCtx};

    fn test_app(path: &str) -> App {
        App::new(SharedCtx::new(ShellConfig::default()), path)
    }

    #[test]
    fn anchor_jump_feeds_a_scroll_sample() {
        let mut app = test_app("/");
        app.content_scroll.set_viewport_height(20);
        app.content_scroll.set_content_height(200);

        let msgs = run_cmds(&mut app, vec![Cmd::JumpToAnchor("contact".into())]);
        assert_eq!(msgs.len(), 1);
        let Msg::ScrollSample(offset) = &msgs[0] else {
            panic!("expected a scroll sample, got {:?}", msgs[0]);
        };
        assert!(*offset > 0);
    }

    #[test]
    fn unknown_anchor_produces_no_messages() {
        let mut app = test_app("/");
        let msgs = run_cmds(&mut app, vec![Cmd::JumpToAnchor("nowhere".into())]);
        assert!(msgs.is_empty());
    }

    #[test]
    fn anchors_do_not_resolve_across_routes() {
        let mut app = test_app("/blog");
        assert_eq!(app.route, Route::Blog);
        let msgs = run_cmds(&mut app, vec![Cmd::JumpToAnchor("contact".into())]);
        assert!(msgs.is_empty());
    }

    #[test]
    fn playback_commands_without_a_soundtrack_are_no_ops() {
        let mut app = test_app("/");
        let msgs = run_cmds(
            &mut app,
            vec![Cmd::PrimePlayback { volume: 0.5 }, Cmd::StartPlayback, Cmd::PausePlayback],
        );
        assert!(msgs.is_empty());
    }

    #[test]
    fn route_switches_translate_to_no_command() {
        let app = test_app("/");
        let commands = from_effects(&app, vec![Effect::SwitchTo(Route::Blog)]);
        assert!(commands.is_empty());
    }
}
