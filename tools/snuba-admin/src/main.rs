//! Snuba-Admin: admin console for a ClickHouse-backed Snuba cluster.
//!
//! Runs the interactive TUI by default; `configs`, `queries` and `nav` print
//! one snapshot as JSON or text and exit.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;
use tracing::{error, info};

use snuba_admin::api::AdminApiClient;
use snuba_admin::config::AdminConfig;
use snuba_admin::domain::{App, NavigationRegistry, PanelKind};
use snuba_admin::logging::{init_logging, LogTarget};
use snuba_admin::ui;

/// Snuba-Admin: runtime config and ClickHouse query console
#[derive(Parser, Debug)]
#[command(name = "snuba-admin", version)]
#[command(about = "Admin console for Snuba runtime configs and ClickHouse system queries")]
struct Args {
    /// Admin API root URL, must end with '/' [env: SNUBA_ADMIN_URL]
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Log filter, e.g. "debug" or "snuba_admin=trace" [env: SNUBA_ADMIN_LOG_LEVEL]
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append logs to this file [env: SNUBA_ADMIN_LOG_FILE]
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Run the console with built-in sample data (no API connection required)
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Interactive console (default)
    Tui,
    /// Print all runtime configs as JSON
    Configs,
    /// Print the predefined ClickHouse system queries as JSON
    Queries,
    /// Print the console's navigation sections
    Nav,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Tui);

    let config = AdminConfig::from_env().with_overrides(
        args.endpoint.clone(),
        args.log_level.clone(),
        args.log_file.clone(),
    );

    let target = if command == Command::Tui {
        LogTarget::Tui
    } else {
        LogTarget::Cli
    };
    init_logging(&config, target).context("failed to initialize logging")?;

    match command {
        Command::Tui => run_tui(&config, args.demo).await,
        Command::Configs => {
            let client = AdminApiClient::new(&config.base_url)?;
            let configs = client.get_configs().await.context("GET configs failed")?;
            // sorted for stable output
            let sorted: BTreeMap<_, _> = configs.into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&sorted)?);
            Ok(())
        }
        Command::Queries => {
            let client = AdminApiClient::new(&config.base_url)?;
            let queries = client
                .get_queries()
                .await
                .context("GET clickhouse_queries failed")?;
            println!("{}", serde_json::to_string_pretty(&queries)?);
            Ok(())
        }
        Command::Nav => {
            for (rank, entry) in NavigationRegistry::standard().entries().iter().enumerate() {
                println!(
                    "{:>2}  {:<12} {:<18} {}",
                    rank + 1,
                    entry.id,
                    entry.display,
                    entry.target.label()
                );
            }
            Ok(())
        }
    }
}

async fn run_tui(config: &AdminConfig, demo: bool) -> Result<()> {
    let app = Arc::new(Mutex::new(App::new()));

    let api_client = if demo {
        app.lock().await.load_demo_data();
        None
    } else {
        let client = AdminApiClient::new(&config.base_url)
            .with_context(|| format!("cannot use endpoint {}", config.base_url))?;
        Some(Arc::new(client))
    };
    info!(base_url = %config.base_url, demo, "starting console");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app, api_client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(error = %err, "console exited with error");
    }
    result.map_err(Into::into)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: Arc<Mutex<App>>,
    api_client: Option<Arc<AdminApiClient>>,
) -> io::Result<()> {
    loop {
        // Start any fetch the selected panel needs
        {
            let mut app_guard = app.lock().await;
            if let (Some(kind), Some(client)) = (app_guard.take_fetch_request(), &api_client) {
                spawn_fetch(client.clone(), app.clone(), kind);
            }
        }

        // Draw UI
        {
            let app_guard = app.lock().await;
            terminal.draw(|frame| {
                ui::render(frame, &app_guard);
            })?;
        }

        // Handle input with timeout so finished fetches get drawn
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    let mut app_guard = app.lock().await;
                    match key.code {
                        KeyCode::Char(c) => app_guard.handle_key(c),
                        KeyCode::Up => app_guard.select_prev(),
                        KeyCode::Down => app_guard.select_next(),
                        KeyCode::Esc => app_guard.handle_key('q'),
                        _ => {}
                    }
                }
            }
        }

        if app.lock().await.should_quit() {
            return Ok(());
        }
    }
}

/// Fetch one panel's data in the background and store the outcome.
fn spawn_fetch(client: Arc<AdminApiClient>, app: Arc<Mutex<App>>, kind: PanelKind) {
    tokio::spawn(async move {
        let result = kind.fetch(&client).await;
        app.lock().await.apply(kind, result);
    });
}
