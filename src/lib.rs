pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod logging;
pub mod report;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use app::events::{AppEvent, fetch_target, spawn_input_task};
use app::settings::{load_preferences, preferences_path};
use app::state::{AppState, initial_target};
use cli::Cli;
use crossterm::{
    event::{DisableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use data::service::WeatherService;
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::info;

pub async fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    if cli.one_shot {
        logging::init_stderr_logging()?;
        return run_one_shot(&cli).await;
    }
    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path)?;
    }

    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, &cli).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_inner(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: &Cli) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(cli);

    let size = terminal.size()?;
    tx.send(AppEvent::Input(Event::Resize(size.width, size.height)))
        .await?;
    tx.send(AppEvent::Bootstrap).await?;
    info!(width = size.width, height = size.height, "dashboard started");

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx).await?;
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx).await?;
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;
    }

    Ok(())
}

async fn run_one_shot(cli: &Cli) -> Result<()> {
    let target = initial_target(cli).context(
        "nothing to look up: pass a city, --lat/--lon, or allow device geolocation",
    )?;
    let preferences = preferences_path()
        .as_deref()
        .map(load_preferences)
        .unwrap_or_default()
        .with_cli_overrides(cli);

    let service = WeatherService::from_cli(cli);
    let bundle = fetch_target(&service, target).await?;
    print!("{}", report::summary(&bundle, preferences, cli.icon_mode()));
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        existing(panic);
    }));
}
