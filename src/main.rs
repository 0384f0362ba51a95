use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use wrapsnake::config::{DEFAULT_SEED, THEME, TICK_INTERVAL_MS};
use wrapsnake::game::GameState;
use wrapsnake::input::{poll_input, GameInput};
use wrapsnake::renderer;
use wrapsnake::terminal_runtime::{install_panic_hook, TerminalSession};

#[derive(Debug, Parser)]
#[command(name = "wrapsnake", about = "Wrap-around grid Snake for the terminal")]
struct Cli {
    /// Seed for food placement. Non-numeric or zero values fall back to
    /// the default seed.
    seed: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let seed = resolve_seed(cli.seed.as_deref());

    install_panic_hook();

    let final_score = run(seed)?;
    println!("Score: {final_score:>4}");

    Ok(())
}

/// Resolves the seed argument, printing the advisory and active-seed
/// lines before the terminal UI takes over the screen.
fn resolve_seed(argument: Option<&str>) -> u64 {
    let parsed = argument.and_then(|raw| raw.parse::<u64>().ok()).filter(|seed| *seed != 0);

    if parsed.is_none() {
        println!("No seed given, using {DEFAULT_SEED}. Pass an integer seed as the first argument.");
    }

    let seed = parsed.unwrap_or(DEFAULT_SEED);
    println!("Seed: {seed}");
    seed
}

/// Runs the fixed-cadence session until a quit key, returning the final
/// score after the terminal is restored.
///
/// The terminal session comes up first: if it cannot initialize, the
/// process aborts before any game state exists.
fn run(seed: u64) -> io::Result<usize> {
    let mut session = TerminalSession::enter()?;
    let mut state = GameState::new(seed)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error.to_string()))?;
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);
    let mut last_tick = Instant::now();

    'session: loop {
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, &THEME))?;

        // Wait out the rest of the tick, waking early for key events so a
        // quit never has to sleep out the interval.
        loop {
            let remaining = tick_interval.saturating_sub(last_tick.elapsed());

            match poll_input(remaining)? {
                Some(GameInput::Quit) => break 'session,
                Some(GameInput::Direction(direction)) => state.request_direction(direction),
                None => {}
            }

            if last_tick.elapsed() >= tick_interval {
                break;
            }
        }

        state.tick();
        last_tick = Instant::now();
    }

    drop(session);
    Ok(state.score())
}
