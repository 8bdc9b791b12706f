use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::{Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::app::{App, AppEvent};
use crate::runtime::{EventResult, key_handler};

/// Forwards terminal events to `event_tx` until `shutdown` is raised or the
/// receiver is gone.
pub(crate) fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>, shutdown: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !shutdown.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(250)) {
                Ok(true) => {
                    if let Ok(event) = crossterm::event::read()
                        && event_tx.send(event).is_err()
                    {
                        break;
                    }
                }
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
}

/// Waits for the next terminal event, app event, or redraw tick and handles
/// everything already queued behind it.
pub(crate) async fn process_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    tick: &mut tokio::time::Interval,
) -> EventResult {
    enum LoopSignal {
        App(Option<AppEvent>),
        Terminal(Option<Event>),
        Tick,
    }

    let signal = tokio::select! {
        biased;
        event = event_rx.recv() => LoopSignal::Terminal(event),
        app_event = app.next_app_event() => LoopSignal::App(app_event),
        _ = tick.tick() => LoopSignal::Tick,
    };

    match signal {
        LoopSignal::App(Some(app_event)) => app.apply_app_event(app_event),
        LoopSignal::Terminal(None) => return EventResult::Quit,
        LoopSignal::Terminal(Some(event)) => {
            if matches!(process_event(app, event).await, EventResult::Quit) {
                return EventResult::Quit;
            }
        }
        LoopSignal::App(None) | LoopSignal::Tick => {}
    }

    // Drain queued keys so rapid presses are not handled one per frame.
    while let Ok(event) = event_rx.try_recv() {
        if matches!(process_event(app, event).await, EventResult::Quit) {
            return EventResult::Quit;
        }
    }

    EventResult::Continue
}

async fn process_event(app: &mut App, event: Event) -> EventResult {
    if let Event::Key(key) = event
        && key.kind != KeyEventKind::Release
    {
        return key_handler::handle_key_event(app, key).await;
    }

    EventResult::Continue
}
