//! # Atrium TUI Library
//!
//! Terminal rendition of a personal-site shell: a floating navigation bar
//! with scroll-aware visibility, a "More" dropdown, a compact overlay menu,
//! and an optional soundtrack, composed over a set of routed pages.
//!
//! ## Architecture
//!
//! State lives in one place (`app::App`) and changes through one reducer
//! (`App::update`), which turns messages into new state plus requested
//! effects. The command layer (`cmd`) executes effects against the injected
//! soundtrack capability; components translate terminal input into messages
//! and render the current state. The runtime wires those pieces to a real
//! terminal.

mod app;
mod cmd;
mod ui;

use anyhow::Result;
use atrium_audio::Soundtrack;
use atrium_types::ShellConfig;

/// Runs the shell until the user quits.
///
/// `initial_path` is the location resolved once at startup to pick the active
/// nav item and the first page. `soundtrack` is the injected audio
/// capability; `None` runs the shell with playback operations as no-ops.
pub async fn run(config: ShellConfig, initial_path: &str, soundtrack: Option<Box<dyn Soundtrack>>) -> Result<()> {
    ui::runtime::run_app(config, initial_path, soundtrack).await
}
