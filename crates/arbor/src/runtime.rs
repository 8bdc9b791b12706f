use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::app::App;
use crate::ui;

mod event;
mod key_handler;
pub mod mode;
mod terminal;

pub(crate) type TuiTerminal = Terminal<CrosstermBackend<io::Stdout>>;

pub(crate) enum EventResult {
    Continue,
    Quit,
}

/// Runs the TUI event/render loop until the user exits.
///
/// # Errors
/// Returns an error if terminal setup, rendering, or event processing fails.
pub async fn run(app: &mut App) -> io::Result<()> {
    let _terminal_guard = terminal::TerminalGuard;
    let mut terminal = terminal::setup_terminal()?;

    // Crossterm reads block, so they live on a dedicated thread.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let shutdown = Arc::new(AtomicBool::new(false));
    event::spawn_event_reader(event_tx, Arc::clone(&shutdown));

    let mut tick = tokio::time::interval(Duration::from_millis(100));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = run_main_loop(app, &mut terminal, &mut event_rx, &mut tick).await;

    shutdown.store(true, Ordering::Relaxed);
    terminal.show_cursor()?;

    result
}

async fn run_main_loop(
    app: &mut App,
    terminal: &mut TuiTerminal,
    event_rx: &mut mpsc::UnboundedReceiver<crossterm::event::Event>,
    tick: &mut tokio::time::Interval,
) -> io::Result<()> {
    loop {
        app.process_pending_app_events();
        render_frame(app, terminal)?;

        if matches!(
            event::process_events(app, event_rx, tick).await,
            EventResult::Quit
        ) {
            break;
        }
    }

    Ok(())
}

fn render_frame(app: &App, terminal: &mut TuiTerminal) -> io::Result<()> {
    terminal.draw(|frame| {
        ui::render(
            frame,
            ui::RenderContext {
                mode: &app.mode,
                recent_entries: app.recent_entries(),
                status_message: app.status_message(),
                tree: app.tree(),
            },
        );
    })?;

    Ok(())
}
