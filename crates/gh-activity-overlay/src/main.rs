use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

mod actions;
mod listener;
mod logger;
mod middleware;
mod reducer;
mod snapshot;
mod state;
mod store;
mod theme;
mod views;

use actions::Action;
use gh_activity_config::AppConfig;
use middleware::{
    BroadcastMiddleware, Dispatcher, FlashTimerMiddleware, KeyboardMiddleware, LoggingMiddleware,
};
use state::AppState;
use store::Store;

type OverlayTerminal = Terminal<CrosstermBackend<io::Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // .env may carry RUST_LOG, so load it before the logger
    let _ = dotenvy::dotenv();

    let log_file = logger::init()?;
    log::info!("Starting gh-activity-overlay, logging to {}", log_file.display());

    let config = AppConfig::load();
    let broadcast_listener = listener::bind(&config.listen_addr).await?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(action_tx);

    let mut store = Store::new(AppState::new(config.clone()));
    store.add_middleware(LoggingMiddleware::new());
    store.add_middleware(KeyboardMiddleware::new());
    store.add_middleware(BroadcastMiddleware::new());
    store.add_middleware(FlashTimerMiddleware::new(config.flash_duration()));

    let server = tokio::spawn(listener::serve(broadcast_listener, dispatcher.clone()));
    spawn_input_thread(dispatcher.clone());

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, &mut store, &mut action_rx, &dispatcher).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    server.abort();

    if let Err(ref err) = result {
        log::error!("Overlay stopped with error: {:#}", err);
    }
    log::info!("Exiting gh-activity-overlay");
    result
}

async fn run_app(
    terminal: &mut OverlayTerminal,
    store: &mut Store,
    action_rx: &mut mpsc::UnboundedReceiver<Action>,
    dispatcher: &Dispatcher,
) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if let Some(path) = &store.state().config.html_output {
            if let Err(e) = snapshot::write_html(store.state(), path).await {
                log::warn!("{:#}", e);
            }
        }

        if !store.state().running {
            break;
        }

        let Some(action) = action_rx.recv().await else {
            break;
        };
        store.dispatch(action, dispatcher).await;

        // Apply everything already queued before drawing again
        while let Ok(action) = action_rx.try_recv() {
            store.dispatch(action, dispatcher).await;
        }
    }

    Ok(())
}

/// Poll crossterm on a dedicated thread and feed key presses into the store.
fn spawn_input_thread(dispatcher: Dispatcher) {
    thread::spawn(move || {
        while !dispatcher.is_closed() {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    log::error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    dispatcher.dispatch(Action::KeyPressed(key));
                }
                Ok(Event::Resize(_, _)) => dispatcher.dispatch(Action::Redraw),
                Ok(_) => {}
                Err(e) => {
                    log::error!("Failed to read terminal event: {}", e);
                    break;
                }
            }
        }
        log::debug!("Input thread stopped");
    });
}
