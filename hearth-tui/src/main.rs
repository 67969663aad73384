//! Hearth welcome-screen entry point

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hearth_core::HearthConfig;
use hearth_tui::{ui, App, FileRecents};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = HearthConfig::load_or_default()?;

    // Initialize tracing; RUST_LOG wins over the configured level
    let level = config
        .launcher
        .as_ref()
        .and_then(|l| l.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hearth_core={level},hearth_tui={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    // Build the host collaborators the screen consumes
    let recents_path = config
        .launcher
        .as_ref()
        .and_then(|l| l.recents_file.clone())
        .unwrap_or_else(FileRecents::default_path);
    let registry = Arc::new(FileRecents::load(recents_path));

    // Create app state (performs the initial render)
    let mut app = App::new(&config, registry);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let res = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    // Hand the opened project to the editor shell
    if let Some(path) = app.opened_project.take() {
        println!("Opening {path}");
    }

    Ok(())
}

async fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|f| ui::render(f, app))?;

        // Poll for events with timeout
        if let Some(event) = App::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => {
                    app.handle_key_event(key).await?;
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Exit if requested
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
