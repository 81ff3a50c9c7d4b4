use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossbeam_channel::{Receiver, unbounded};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};

use mindspark::ai::ContentGateway;
use mindspark::models::GenerationResponse;
use mindspark::{App, Config, OpenRouterClient, logger, spawn_generation_worker, ui};

const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Ignoring unreadable config ({}), using defaults", e);
        Config::default()
    });
    logger::init(&config.log_file);
    logger::log(&format!(
        "Starting with model {} (config {})",
        config.model,
        Config::config_path().display()
    ));

    let (request_tx, request_rx) = unbounded();
    let (response_tx, response_rx) = unbounded::<GenerationResponse>();

    let generation_tx = match OpenRouterClient::new(config.model_config()) {
        Ok(client) => {
            let gateway: Arc<dyn ContentGateway> = Arc::new(client);
            spawn_generation_worker(gateway, config.clone(), response_tx, request_rx)?;
            Some(request_tx)
        }
        Err(e) => {
            logger::log(&format!("AI disabled: {}", e));
            None
        }
    };

    let mut app = App::new(generation_tx, config.model.clone());

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &mut app, &response_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exited with error: {}", e));
    }
    result
}

/// Raw mode plus alternate screen; raw mode is undone if the rest of the setup fails.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    undo_on_error(enter_alternate_screen(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn undo_on_error<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    responses: &Receiver<GenerationResponse>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        while let Ok(response) = responses.try_recv() {
            app.handle_generation(response);
        }

        if app.should_quit {
            logger::log("Quit requested");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_runs_cleanup() {
        let cleaned = Cell::new(false);
        let result: Result<()> = undo_on_error(Err(anyhow::anyhow!("no tty")), || cleaned.set(true));
        assert!(result.is_err());
        assert!(cleaned.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let cleaned = Cell::new(false);
        let result = undo_on_error(Ok(7), || cleaned.set(true));
        assert_eq!(result.unwrap(), 7);
        assert!(!cleaned.get());
    }
}
