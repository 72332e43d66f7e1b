use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bitlife::board::BitBoard;
use bitlife::config::Config;
use bitlife::driver;
use bitlife::pattern;
use bitlife::simulation::Simulation;
use bitlife::term::Terminal;

/// Environment variable holding the log filter, e.g. `BITLIFE_LOG=debug`
const LOG_ENV: &str = "BITLIFE_LOG";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they can be redirected away from the board, e.g. `2>bitlife.log`
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(std::env::args().skip(1))?;
    info!(
        width = config.width,
        height = config.height,
        style = ?config.style,
        "starting"
    );

    let mut board = BitBoard::new(config.width, config.height);
    pattern::load_pattern(&config.pattern, &mut board)
        .with_context(|| format!("Failed to load {}", config.pattern.display()))?;

    let mut sim = Simulation::from_board(board);

    let summary = {
        let mut terminal = Terminal::enter(config.style).context("Failed to set up the terminal")?;
        driver::run(&mut sim, &mut terminal)?
    };

    println!("stopped at tick {}", summary.generation);

    Ok(())
}
