mod broadcaster;
mod command;
mod config;
mod render;
mod runner;
mod scoreboard;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use tictactoe_engine::SessionRng;
use tictactoe_engine::config::Validate;
use tictactoe_engine::log;
use tictactoe_engine::logger::{LogLevel, init_logger};
use tictactoe_engine::tictactoe::{Difficulty, GameMode, TicTacToeSession, TicTacToeSessionSettings};

use broadcaster::TerminalBroadcaster;
use config::{get_config_manager, get_config_path};
use runner::{GameRunner, StatsManager};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    TwoPlayer,
    Computer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoPlayer => GameMode::TwoPlayer,
            ModeArg::Computer => GameMode::Computer,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tictactoe_client")]
#[command(about = "Play tic-tac-toe in the terminal, with a friend or against the computer")]
struct Args {
    /// Config file, defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// easy, medium, hard or expert
    #[arg(long)]
    difficulty: Option<String>,

    /// Fixes the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    delay_ms: Option<u64>,

    #[arg(long, default_value_t = false)]
    use_log_prefix: bool,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().unwrap_or_else(get_config_path);
    let mut config = get_config_manager(&config_path).get_config()?;

    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }
    if let Some(name) = args.difficulty.as_deref() {
        config.difficulty = Difficulty::from_name(name);
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(delay_ms) = args.delay_ms {
        config.computer_delay_ms = delay_ms;
    }
    if args.debug {
        config.log_level = LogLevel::Debug;
    }
    config.validate()?;

    let log_prefix = args.use_log_prefix.then(|| "TICTACTOE".to_string());
    init_logger(log_prefix, config.log_level);

    let stats_manager = StatsManager::from_yaml_file(config.stats_path(&config_path));
    let scoreboard = stats_manager.get_config().unwrap_or_else(|e| {
        log!("Ignoring unreadable statistics: {}", e);
        Default::default()
    });

    let rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {} mode at {} difficulty, seed {}",
        config.mode,
        config.difficulty,
        rng.seed()
    );

    let settings = TicTacToeSessionSettings {
        mode: config.mode,
        difficulty: config.difficulty,
    };
    let session = TicTacToeSession::new(
        settings,
        rng,
        TerminalBroadcaster::new(config.mode, scoreboard),
    );

    let mut runner = GameRunner::new(
        session,
        Duration::from_millis(config.computer_delay_ms),
        stats_manager,
    );
    runner.run().await?;

    Ok(())
}
