//! Soundtrack capability for the Atrium shell.
//!
//! The navigation controller never talks to an audio device directly; it
//! drives a [`Soundtrack`] trait object injected at startup. That keeps the
//! playback lifecycle (unlock, toggle, ended) deterministic to test, since
//! fakes substitute for the real thing, and lets environments without audio
//! output degrade to "no audio" instead of failing.

use thiserror::Error;
use tracing::debug;

/// How eagerly the underlying source should be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preload {
    /// Fetch nothing until playback is requested.
    #[default]
    None,
    /// Fetch enough to know duration and format.
    Metadata,
    /// Fetch the whole source up front.
    Auto,
}

/// Error surfaced when a playback start attempt cannot proceed.
///
/// None of these are fatal to the shell: a rejected start leaves the
/// controller in the not-playing state and is logged as a warning.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The environment refused programmatic playback.
    #[error("playback blocked: {0}")]
    Blocked(String),
    /// No audio output device is available.
    #[error("no audio output device available")]
    NoDevice,
    /// The source could not be fetched or decoded.
    #[error("soundtrack source unavailable: {0}")]
    SourceUnavailable(String),
}

/// A single playable track.
///
/// `play` initiates without blocking and reports success or rejection
/// immediately; completion of the track is observed by polling
/// [`Soundtrack::take_ended`]. Implementations own whatever device or stream
/// state they need and release it on drop.
pub trait Soundtrack: Send {
    /// Attempts to start playback. A rejection is terminal for this attempt;
    /// callers retry only on an explicit later request.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pauses playback. Pausing an already-paused track is a no-op.
    fn pause(&mut self);

    /// Whether the track is currently paused (true before the first start).
    fn is_paused(&self) -> bool;

    /// Sets the output volume, clamped to `0.0..=1.0`.
    fn set_volume(&mut self, volume: f32);

    /// Sets the preload mode for the source.
    fn set_preload(&mut self, preload: Preload);

    /// Returns true once, after the track reaches natural completion.
    fn take_ended(&mut self) -> bool;
}

/// Device-less [`Soundtrack`] implementation.
///
/// Stands in when no audio output is available or audio was disabled: every
/// operation succeeds and updates internal state, nothing is audible, and the
/// track never completes. Useful for manual testing of the playback controls
/// and as the degraded-environment default.
#[derive(Debug)]
pub struct NullSoundtrack {
    source: String,
    paused: bool,
    volume: f32,
    preload: Preload,
}

impl NullSoundtrack {
    /// Creates a silent track for the given source URL.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        debug!(source = %source, "Using device-less soundtrack.");
        Self {
            source,
            paused: true,
            volume: 1.0,
            preload: Preload::None,
        }
    }

    /// The configured source URL.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Current volume level.
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Current preload mode.
    pub fn preload(&self) -> Preload {
        self.preload
    }
}

impl Soundtrack for NullSoundtrack {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn set_preload(&mut self, preload: Preload) {
        self.preload = preload;
    }

    fn take_ended(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_soundtrack_starts_paused() {
        let track = NullSoundtrack::new("https://example.com/track.mp3");
        assert!(track.is_paused());
        assert_eq!(track.preload(), Preload::None);
    }

    #[test]
    fn play_and_pause_track_state() {
        let mut track = NullSoundtrack::new("https://example.com/track.mp3");
        track.play().expect("null playback start");
        assert!(!track.is_paused());
        track.pause();
        assert!(track.is_paused());
    }

    #[test]
    fn volume_is_clamped() {
        let mut track = NullSoundtrack::new("https://example.com/track.mp3");
        track.set_volume(1.8);
        assert_eq!(track.volume(), 1.0);
        track.set_volume(-0.3);
        assert_eq!(track.volume(), 0.0);
    }

    #[test]
    fn null_track_never_completes() {
        let mut track = NullSoundtrack::new("https://example.com/track.mp3");
        track.play().expect("null playback start");
        assert!(!track.take_ended());
    }
}
