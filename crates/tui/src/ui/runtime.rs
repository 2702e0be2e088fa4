//! Runtime: terminal lifecycle and event loop for the demo application.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive the event loop that handles input and executes returned
//!   `Effect`s.
//! - Observe focus edges after every event so blur emissions happen exactly
//!   once per transition.
//!
//! Input comes from a dedicated OS thread that blocks on
//! `crossterm::event::read()` and forwards events over a channel; keeping
//! the blocking read off the async runtime ensures reliable event delivery
//! across terminals.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use numfield_types::Effect;
use ratatui::{Terminal, prelude::*};
use tokio::{signal, sync::mpsc};

use crate::app::{App, DemoOptions, FieldId};
use crate::ui::components::{Component, NumberInputComponent};
use crate::ui::main;

/// Spawn a dedicated input thread that blocks on terminal input and
/// forwards `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(100);
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    tracing::warn!("failed to read terminal event: {error}");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame by delegating to `ui::main::draw`.
fn render(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    fields: &mut [NumberInputComponent],
) -> Result<()> {
    // Rebuild focus just before rendering so structure changes are reflected
    app.rebuild_focus();
    terminal.draw(|frame| main::draw(frame, app, fields))?;
    Ok(())
}

/// Entry point for the demo runtime: sets up the terminal, spawns the input
/// thread, runs the event loop, and performs cleanup on exit.
pub async fn run_app(options: DemoOptions) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut app = App::new(&options)?;
    let mut fields = [
        NumberInputComponent::new(FieldId::Amount),
        NumberInputComponent::new(FieldId::Value),
    ];
    for component in fields.iter_mut() {
        component.init(&mut app)?;
    }

    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &mut fields, &mut input_receiver).await;
    cleanup_terminal(&mut terminal)?;
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    fields: &mut [NumberInputComponent],
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    render(terminal, app, fields)?;

    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                // A closed channel means the input thread died; shut down.
                let Some(input_event) = maybe_event else { break };
                if let Event::Key(key) = &input_event
                    && key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                let mut effects = handle_input_event(app, fields, input_event);
                effects.extend(app.sync_focus_transitions());
                apply_effects(app, effects);
            }
            _ = signal::ctrl_c() => break,
        }
        if app.should_quit {
            break;
        }
        render(terminal, app, fields)?;
    }
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(
    app: &mut App,
    fields: &mut [NumberInputComponent],
    input_event: Event,
) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => handle_key_event(app, fields, key_event),
        // Resizes are picked up by the next render.
        _ => Vec::new(),
    }
}

fn handle_key_event(
    app: &mut App,
    fields: &mut [NumberInputComponent],
    key: KeyEvent,
) -> Vec<Effect> {
    let any_focused = FieldId::ALL.iter().any(|field| app.field(*field).is_focused());

    match key.code {
        KeyCode::Tab => {
            if any_focused {
                app.focus.next();
            } else {
                app.focus.first();
            }
            return Vec::new();
        }
        KeyCode::BackTab => {
            if any_focused {
                app.focus.prev();
            } else {
                app.focus.first();
            }
            return Vec::new();
        }
        KeyCode::Esc => {
            if any_focused {
                // Blur without moving focus elsewhere.
                for field in FieldId::ALL {
                    app.field(field).f_input.set(false);
                }
                return Vec::new();
            }
            return vec![Effect::Quit];
        }
        KeyCode::Char('q') if !any_focused => return vec![Effect::Quit],
        _ => {}
    }

    let mut effects = Vec::new();
    for component in fields.iter_mut() {
        effects.extend(component.handle_key_events(app, key));
    }
    effects
}

fn apply_effects(app: &mut App, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Quit => app.should_quit = true,
            Effect::EmitUpdate(update) => {
                tracing::debug!(value = ?update.value, "number input update emitted");
            }
        }
    }
}
