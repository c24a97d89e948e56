//! Main TUI runner - entry point and event loop

use std::time::Duration;

use tokio::sync::mpsc;

use mycodo_app::config::Settings;
use mycodo_app::process::process_message;
use mycodo_app::{demo, signals, AppState, Message, PanelFeed};
use mycodo_core::prelude::*;

use super::{event, render, terminal};

/// Bounded capacity of the message channel shared by signals and panel feeds
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Run the dashboard until the user quits or a signal arrives.
///
/// With `demo` set, a background task fills the dashboard panels with
/// sample content.
pub async fn run(settings: Settings, demo: bool) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms);
    let mut state = AppState::with_settings(settings);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
    signals::spawn_signal_handler(msg_tx.clone());

    let demo_task = demo.then(|| {
        info!("Starting demo panel feed");
        demo::spawn_demo_feed(PanelFeed::new(msg_tx.clone()))
    });

    let result = run_loop(&mut term, &mut state, msg_rx, tick_rate);

    if let Some(task) = demo_task {
        task.abort();
    }
    terminal::restore();

    if let Err(ref e) = result {
        error!("Event loop failed: {}", e);
    }
    result
}

/// Main event loop: drain channel messages, draw, poll the terminal
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    tick_rate: Duration,
) -> Result<()> {
    while !state.should_quit() {
        // Signals and panel feeds
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll(tick_rate)? {
            process_message(state, message);
        }
    }

    info!("Shutting down");
    Ok(())
}
