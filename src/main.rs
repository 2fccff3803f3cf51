mod app;
mod config;
mod logging;
mod quotes;
mod share;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::quotes::QuoteResolver;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg.clone());
    let resolver = QuoteResolver::new(&cfg.providers)?;

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(250));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // First quote before the first frame, silently; a failure shows as an
    // error notice over the empty panel.
    let topic = state.topic;
    handler::refresh_quote(&mut state, &resolver, topic).await;

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::FetchQuote { topic } => {
                    // Resolution blocks the loop, so show progress first
                    state.info_notice("Fetching a new quote...");
                    terminal.draw(|f| ui::render(f, &state))?;
                    if handler::refresh_quote(&mut state, &resolver, topic).await {
                        state.info_notice("Fetched a new quote");
                    }
                }
                Action::CopyQuote => {
                    if let Some(quote) = state.current_quote.clone() {
                        match share::copy_to_clipboard(&quote) {
                            Ok(()) => state.info_notice("Copied to clipboard"),
                            Err(e) => state.error_notice(format!("Copy failed: {}", e)),
                        }
                    }
                }
                Action::OpenShareLink => {
                    if let Some(quote) = state.current_quote.clone() {
                        match share::open_share_link(&quote, &state.config.share.hashtag) {
                            Ok(()) => state.info_notice("Opened share link in browser"),
                            Err(e) => state.error_notice(format!("Share failed: {}", e)),
                        }
                    }
                }
                Action::SaveQuote => {
                    if let Some(quote) = state.current_quote.clone() {
                        match share::save_to_file(&quote, &state.config.share.save_dir) {
                            Ok(path) => state.info_notice(format!("Saved {}", path.display())),
                            Err(e) => state.error_notice(format!("Save failed: {}", e)),
                        }
                    }
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
