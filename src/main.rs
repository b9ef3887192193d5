use std::io;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use grid_snake::config::{
    Grid, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_TICK_INTERVAL_MS,
    DEFAULT_UNIT_SIZE, THEME_CLASSIC,
};
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::{GameInput, InputMapper};
use grid_snake::renderer;
use grid_snake::terminal_runtime::{install_panic_hook, TerminalSession};

/// Cap on how long one input poll may block, so the loop stays responsive
/// even with long tick intervals.
const INPUT_POLL_CAP: Duration = Duration::from_millis(15);

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Screen width in pixels; must be a multiple of the unit size.
    #[arg(long, default_value_t = DEFAULT_SCREEN_WIDTH)]
    screen_width: u32,

    /// Screen height in pixels; must be a multiple of the unit size.
    #[arg(long, default_value_t = DEFAULT_SCREEN_HEIGHT)]
    screen_height: u32,

    /// Edge length of one grid cell in pixels.
    #[arg(long, default_value_t = DEFAULT_UNIT_SIZE)]
    unit: u32,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let grid = match Grid::from_screen(cli.screen_width, cli.screen_height, cli.unit) {
        Ok(grid) => grid,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            return ExitCode::from(2);
        }
    };

    install_panic_hook();

    match run(grid, Duration::from_millis(cli.tick_ms.max(1))) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Single-threaded event loop: draw, poll input, tick on the fixed interval.
///
/// All game-state mutation happens on this thread; input events are funneled
/// through the same loop, so ticks and heading requests never race.
fn run(grid: Grid, tick_interval: Duration) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mapper = InputMapper::new();
    let mut state = GameState::new(grid);
    let mut last_tick = Instant::now();

    loop {
        let snapshot = state.snapshot();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, &THEME_CLASSIC))?;

        let until_tick = tick_interval.saturating_sub(last_tick.elapsed());
        match mapper.poll(until_tick.min(INPUT_POLL_CAP))? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Direction(direction)) => state.request_heading(direction),
            Some(GameInput::Restart) => {
                // Only exposed on the game-over screen.
                if state.status() == GameStatus::Over {
                    state.restart();
                    last_tick = Instant::now();
                }
            }
            None => {}
        }

        if last_tick.elapsed() >= tick_interval {
            state.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
