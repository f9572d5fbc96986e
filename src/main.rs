mod logging;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info::BUILD_VERSION;
use flappy::game::{tick, Game};
use flappy::input::{map_event, GameInput};
use flappy::GameConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Flappy Bird in the terminal.
#[derive(Parser, Debug)]
#[command(name = "flappy", version = BUILD_VERSION, about)]
struct Cli {
    /// JSON config file; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for obstacle placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if cli.print_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, version = BUILD_VERSION, "starting flappy");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(config);

    let mut terminal = setup_terminal()?;
    install_panic_hook();

    let result = run(&mut terminal, &mut game, &mut rng);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Leave the alternate screen before printing a panic, or the message is
/// lost with it.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

/// Frame loop: draw, wait for input until the frame is due, then advance
/// the simulation by the elapsed time.
fn run(terminal: &mut Tui, game: &mut Game, rng: &mut StdRng) -> anyhow::Result<()> {
    let frame_duration = Duration::from_millis(game.config.frame_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, game))?;

        let timeout = frame_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match map_event(event::read()?) {
                GameInput::Flap => game.queue_flap(),
                GameInput::Quit => {
                    tracing::info!(best = game.best, "quit");
                    return Ok(());
                }
                GameInput::Other => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame_duration {
            last_tick = Instant::now();
            tick(game, elapsed.as_millis() as u64, rng);
        }
    }
}
