mod actions;
mod app;
mod input;
mod sound;
mod store;
mod view;

use anyhow::{Context, Result};
use app::{App, DEFAULT_RUN_SEED};
use crossterm::event::{self, Event as CEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use skirmish_data::{load_board, load_locale, load_timing_config};
use std::io::{self, stdout, IsTerminal};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use store::DemoStore;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const LOG_FILE: &str = "skirmish-cui.log";

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub locale: Option<String>,
    pub seed: Option<u64>,
    pub board: Option<PathBuf>,
    pub turn_seconds: Option<u32>,
    pub assets: Option<PathBuf>,
    pub muted: bool,
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let _log_guard = setup_logging()?;

    let assets = options
        .assets
        .clone()
        .unwrap_or_else(|| PathBuf::from("assets"));
    let mut app = bootstrap(&options, &assets)?;

    ensure_interactive_terminal()?;

    enable_raw_mode().map_err(|err| {
        anyhow::anyhow!(
            "failed to enable raw mode; ensure the process owns an interactive terminal: {err}"
        )
    })?;
    let mut stdout = stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let run_result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    tracing::info!("session finished");
    run_result
}

pub fn run_with_args(args: &[String]) -> Result<()> {
    let options = parse_options(args);
    run(options)
}

fn bootstrap(options: &LaunchOptions, assets: &Path) -> Result<App> {
    let timing = load_timing_config(assets).context("load timing config")?;
    let locale = load_locale(assets, options.locale.as_deref()).context("load locale")?;
    let seed = options.seed.unwrap_or(DEFAULT_RUN_SEED);
    let turn_seconds = options.turn_seconds.unwrap_or(timing.default_turn_seconds);

    let mut notes = Vec::new();
    let store = match options.board.as_ref() {
        Some(path) => {
            let report = load_board(path)
                .with_context(|| format!("load board from {}", path.display()))?;
            notes.extend(report.warnings.into_iter().map(|w| format!("warning: {w}")));
            DemoStore::from_board(report.board, turn_seconds)
        }
        None => DemoStore::deal(seed, turn_seconds),
    };
    tracing::info!(
        locale = locale.code(),
        seed,
        hand = store.hand.len(),
        opponent = store.opponent_cards.len(),
        "table ready"
    );

    let mut app = App::new(locale, timing, store, seed, options.muted);
    for note in notes {
        app.push_event_line(note);
    }
    Ok(app)
}

fn parse_options(args: &[String]) -> LaunchOptions {
    let mut options = LaunchOptions {
        locale: std::env::var("SKIRMISH_LANG").ok(),
        assets: std::env::var_os("SKIRMISH_ASSETS").map(PathBuf::from),
        ..LaunchOptions::default()
    };
    let mut idx = 0usize;
    while idx < args.len() {
        let value = args.get(idx + 1);
        match args[idx].as_str() {
            "--lang" | "-l" => {
                if let Some(value) = value {
                    options.locale = Some(value.clone());
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = value {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--board" => {
                if let Some(value) = value {
                    options.board = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--turn-seconds" => {
                if let Some(value) = value {
                    options.turn_seconds = value.parse::<u32>().ok();
                    idx += 1;
                }
            }
            "--assets" => {
                if let Some(value) = value {
                    options.assets = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            "--mute" => options.muted = true,
            _ => {}
        }
        idx += 1;
    }
    options
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| view::draw(frame, app))?;
        if event::poll(POLL_INTERVAL)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = input::map_key(key);
                actions::dispatch(app, action, Instant::now());
            }
        }
        app.on_tick(Instant::now());
    }
    Ok(())
}

fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = std::env::var_os("SKIRMISH_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("create log dir {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    // The terminal UI owns stdout, so logs only go to the file.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("install tracing subscriber")?;

    tracing::info!(log = %log_dir.join(LOG_FILE).display(), "logging initialized");
    Ok(guard)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn ensure_interactive_terminal() -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Ok(());
    }
    anyhow::bail!(
        "skirmish-cui requires an interactive TTY (run directly in a terminal, not a piped/headless shell)"
    );
}
