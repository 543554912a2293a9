use std::fs::{self, File};
use std::io::{self, Stderr};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use ratatui::Terminal;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use ratatui_image::picker::Picker;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use marquee::app::App;
use marquee::config::{ApiConfig, ConfigError};
use marquee::tmdb::{MovieApi, TmdbClient};
use marquee::ui;

const LOG_FILTER_VAR: &str = "MARQUEE_LOG";

/// The terminal belongs to the UI, so logs go to a file in the cache dir.
fn init_tracing() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("marquee");
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;
    let path = dir.join("marquee.log");
    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;

    let filter =
        EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(path)
}

fn build_api() -> Result<Option<Arc<dyn MovieApi>>> {
    match ApiConfig::from_env() {
        Ok(config) => {
            info!(?config, "configuration loaded");
            let client = TmdbClient::new(config).context("building HTTP client")?;
            let api: Arc<dyn MovieApi> = Arc::new(client);
            Ok(Some(api))
        }
        Err(ConfigError::MissingToken) => {
            warn!("no bearer token configured, showing setup screen");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<()> {
    let dotenv_result = dotenv();
    let log_path = init_tracing()?;
    match dotenv_result {
        Ok(path) => info!("Loaded environment from {:?}", path),
        Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
    }
    info!(log = %log_path.display(), "starting marquee");

    let api = build_api()?;

    // setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr(); // This is a special case. Normally using stdout is fine
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(api);
    match Picker::from_query_stdio() {
        Ok(picker) => app = app.with_picker(picker),
        Err(e) => {
            warn!(error = ?e, "terminal graphics query failed, using half blocks");
            app = app.with_picker(Picker::halfblocks());
        }
    }

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("marquee stopped");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stderr>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Pick up finished fetches and advance the throbber
        app.on_tick();

        // Poll for events with a timeout to allow UI updates
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => app.scroll(true),
                    MouseEventKind::ScrollUp => app.scroll(false),
                    _ => {}
                },
                _ => {}
            }
        }

        if app.exit {
            return Ok(());
        }
    }
}
