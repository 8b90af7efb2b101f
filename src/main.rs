use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use reqwest::Url;
use roster::app::AppState;
use roster::remote::StoreClient;
use roster::{input, ui};
use std::io;
use std::time::Duration;

/// Event-poll interval; also paces toast expiry between key events
const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "A terminal task list client backed by a remote todo service", long_about = None)]
struct Cli {
    /// Base URL of the task storage service
    #[arg(short, long, default_value = "http://127.0.0.1:5000/")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let base_url = Url::parse(&cli.server)
        .map_err(|e| anyhow::anyhow!("Invalid server URL '{}': {}", cli.server, e))?;
    eprintln!("Using task service at: {}", base_url);

    let store = StoreClient::new(base_url);
    let mut app = AppState::new(store);

    // Initial sync; a failure shows up as an error toast over an empty list
    app.load_tasks().await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key).await?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Expire toasts
        app.tick();
    }
}
