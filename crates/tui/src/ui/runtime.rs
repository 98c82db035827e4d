//! Runtime: event loop and input routing for the shell.
//!
//! Responsibilities
//! - Own the terminal lifecycle (alternate screen, raw mode, mouse capture).
//! - Drive a single event loop over terminal input, a periodic tick, and
//!   Ctrl+C.
//! - Route events to `MainView`, execute the returned `Effect`s, and feed
//!   outcome messages back into the reducer until the queue drains.
//!
//! Input comes from a dedicated task that blocks on `crossterm::event::read`
//! and forwards events over a channel; keeping `poll` and `read` together
//! avoids lost events on some terminals. The tick exists to poll the
//! soundtrack's completion signal; nothing else in the shell is time-driven.

use std::time::Duration;

use anyhow::Result;
use atrium_audio::Soundtrack;
use atrium_types::{Effect, Msg, ShellConfig};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tokio::signal;

use crate::app::{App, SharedCtx};
use crate::cmd;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;
use crate::ui::pages;

/// Cadence at which the soundtrack's ended signal is polled.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Spawns a dedicated input task that blocks on terminal input and forwards
/// events over a channel.
async fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    tokio::spawn(async move {
        let poll_window = Duration::from_millis(16);
        loop {
            match event::poll(poll_window) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if sender.send(event).await.is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        tracing::warn!(error = %error, "Failed to read a terminal event.");
                        break;
                    }
                },
                Ok(false) => {}
                Err(error) => {
                    tracing::warn!(error = %error, "Failed to poll for terminal events.");
                    break;
                }
            }
        }
    });
    receiver
}

/// Puts the terminal into raw mode and enters the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restores terminal settings and leaves the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('q') || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Routes a raw terminal event to the view layer.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, &Msg::Resize(width, height)),
        _ => Vec::new(),
    }
}

/// Executes queued effects until none remain.
///
/// Route switches are applied first each round: they swap the content view
/// and reset the page scroll, and the fresh offset re-enters the reducer as a
/// scroll sample so the bar state stays consistent with the new page. The
/// remaining effects become commands whose outcome messages may queue further
/// effects.
fn drain_effects(app: &mut App, main_view: &mut MainView, effects: &mut Vec<Effect>) {
    while !effects.is_empty() {
        let mut batch = std::mem::take(effects);
        let switches: Vec<Effect> = batch
            .extract_if(0.., |effect| matches!(effect, Effect::SwitchTo(_)))
            .collect();
        for effect in switches {
            if let Effect::SwitchTo(route) = effect {
                main_view.set_current_route(app, route);
                effects.extend(main_view.handle_message(app, &Msg::ScrollSample(0)));
            }
        }

        let commands = cmd::from_effects(app, batch);
        for msg in cmd::run_cmds(app, commands) {
            effects.extend(main_view.handle_message(app, &msg));
        }
    }
}

/// Entry point for the shell runtime: terminal setup, the event loop, and
/// teardown. All subscriptions die with this function's locals.
pub async fn run_app(config: ShellConfig, initial_path: &str, soundtrack: Option<Box<dyn Soundtrack>>) -> Result<()> {
    let mut input_receiver = spawn_input_thread().await;

    let mut app = App::new(SharedCtx::new(config), initial_path);
    if let Some(track) = soundtrack {
        app.mount_soundtrack(track);
    }
    let mut main_view = MainView::new(pages::view_for(app.route));

    let mut terminal = setup_terminal()?;
    if let Ok((width, height)) = crossterm::terminal::size() {
        app.update(&Msg::Resize(width, height));
    }

    let mut ticker = time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    loop {
        let mut effects: Vec<Effect> = Vec::new();
        let mut needs_render = false;

        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(Event::Key(key)) if is_quit(&key) => break,
                    Some(event) => {
                        effects.extend(handle_input_event(&mut app, &mut main_view, event));
                        needs_render = true;
                    }
                    // Input channel closed; shut down cleanly.
                    None => break,
                }
            }
            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, &Msg::Tick));
                if app.take_soundtrack_ended() {
                    effects.extend(main_view.handle_message(&mut app, &Msg::PlaybackEnded));
                    needs_render = true;
                }
            }
            _ = signal::ctrl_c() => break,
        }

        if !effects.is_empty() {
            drain_effects(&mut app, &mut main_view, &mut effects);
            needs_render = true;
        }
        if needs_render {
            render(&mut terminal, &mut app, &mut main_view)?;
        }
    }

    cleanup_terminal(&mut terminal)?;
    Ok(())
}
