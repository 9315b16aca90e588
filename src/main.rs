mod app;
mod config;
mod domain;
mod input;
mod notifications;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use config::{ensure_calma_dir, init_local_calma, load_settings, log_dir, save_settings, settings_file, Settings};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{Screen, SystemClock};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

#[derive(Parser)]
#[command(name = "calma")]
#[command(about = "Guided breathing, sleep and focus timers for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Open a screen directly (stress, sleep, focus, allergies)
    #[arg(short, long, value_parser = parse_screen)]
    screen: Option<Screen>,

    /// Continue a stopped exercise from where it paused instead of restarting it
    #[arg(long)]
    resume: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .calma directory in the current directory
    Init,
    /// List the breathing patterns
    Patterns,
}

fn parse_screen(arg: &str) -> Result<Screen, String> {
    Screen::from_arg(arg).ok_or_else(|| format!("unknown screen '{}'", arg))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let calma_dir = init_local_calma()?;
            save_settings(settings_file(&calma_dir), &Settings::default())?;
            println!("Initialized calma directory: {}", calma_dir.display());
            println!();
            println!("Settings live in {}.", settings_file(&calma_dir).display());
            println!("Run 'calma' to start a session.");
            Ok(())
        }
        Some(Commands::Patterns) => {
            for pattern in domain::patterns::all()? {
                println!("{:<20} {:<10} {}", pattern.name, pattern.table.rhythm(), pattern.summary);
            }
            Ok(())
        }
        None => run_tui(cli.screen, cli.resume),
    }
}

/// Send log output to `<calma dir>/logs/calma.log`; the terminal belongs to the UI
fn init_logging(calma_dir: &Path) -> Result<WorkerGuard> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let dir = log_dir(calma_dir);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, "calma.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calma=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(guard)
}

fn run_tui(screen: Option<Screen>, resume: bool) -> Result<()> {
    let calma_dir = ensure_calma_dir()?;
    let _guard = init_logging(&calma_dir)?;

    let mut settings = load_settings(settings_file(&calma_dir))?;
    if let Some(screen) = screen {
        settings.start_screen = screen;
    }
    if resume {
        settings.resume_from_elapsed = true;
    }
    tracing::info!(dir = %calma_dir.display(), ?settings, "starting calma");

    let mut app = AppState::new(&settings, Box::new(SystemClock::new()))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(error = %err, "session ended with an error");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    settings: &Settings,
) -> Result<()> {
    let tick_rate = ticker::tick_duration(settings.tick_ms);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick();
    }
}
