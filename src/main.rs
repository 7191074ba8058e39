//! Boggle Solver - CLI
//!
//! Word grid game with TUI and line-based modes, plus board solving and
//! benchmarking tools.

use anyhow::{Context, Result};
use boggle_solver::{
    commands::{SolveConfig, generate_boards, run_benchmark, run_play, solve_board},
    core::Lexicon,
    game::{Game, GameConfig, Mode},
    interactive::{App, run_tui},
    output::{print_benchmark_result, print_generated_boards, print_solve_result},
    wordlists::loader::load_lexicon,
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "boggle_solver",
    about = "Word grid game and solver: trace words through touching letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'all' (default, embedded list) or path to a word-per-line file
    #[arg(short, long, global = true, default_value = "all")]
    dictionary: String,

    /// Seed for board generation (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Board side length
    #[arg(long, global = true, default_value = "4")]
    size: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Tui {
        /// Round mode: timed (default) or endless
        #[arg(short, long, default_value = "timed", value_parser = parse_mode)]
        mode: Mode,

        /// Length of a timed round in seconds
        #[arg(long, default_value = "90")]
        duration: u32,
    },

    /// Simple line-based game without the TUI
    Play {
        /// Round mode: timed (default) or endless
        #[arg(short, long, default_value = "timed", value_parser = parse_mode)]
        mode: Mode,

        /// Length of a timed round in seconds
        #[arg(long, default_value = "90")]
        duration: u32,
    },

    /// List every word on a given board
    Solve {
        /// Board letters, rows separated by '/' or spaces (e.g. CATS/DOGE/BIRD/FISH)
        board: String,

        /// Show the cells each word is traced through
        #[arg(short, long)]
        paths: bool,

        /// Search from every starting cell in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Roll random boards and summarize them
    Generate {
        /// Number of boards to roll
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Benchmark solver performance on random boards
    Benchmark {
        /// Number of random boards to solve
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Solve each board on a single thread
        #[arg(long)]
        sequential: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to the TUI if no command given
    let command = cli.command.unwrap_or(Commands::Tui {
        mode: Mode::Timed,
        duration: boggle_solver::game::GAME_DURATION,
    });

    // Keep the alternate screen clean unless RUST_LOG asks for more
    let level = if matches!(command, Commands::Tui { .. }) {
        tracing::Level::ERROR
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let lexicon = load_lexicon(&cli.dictionary)?;
    let config = GameConfig::default().with_grid_size(cli.size);
    let mut rng = make_rng(cli.seed);

    match command {
        Commands::Tui { mode, duration } => {
            let game = Game::new(lexicon, config.with_duration(duration), rng);
            run_tui(App::new(game, mode))
        }
        Commands::Play { mode, duration } => {
            let mut game = Game::new(lexicon, config.with_duration(duration), rng);
            run_play(&mut game, mode)
        }
        Commands::Solve {
            board,
            paths,
            parallel,
        } => run_solve_command(board, paths, parallel, &lexicon),
        Commands::Generate { count } => {
            let boards = generate_boards(&lexicon, &config, count, &mut rng)
                .context("generating boards")?;
            print_generated_boards(&boards);
            Ok(())
        }
        Commands::Benchmark { count, sequential } => {
            println!("Solving {count} random boards...");
            let result = run_benchmark(&lexicon, &config, count, !sequential, &mut rng)
                .context("running benchmark")?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn parse_mode(name: &str) -> Result<Mode, String> {
    Mode::from_name(name)
        .ok_or_else(|| format!("unknown mode '{name}', expected 'timed' or 'endless'"))
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn run_solve_command(board: String, paths: bool, parallel: bool, lexicon: &Lexicon) -> Result<()> {
    let mut config = SolveConfig::new(board);
    config.show_paths = paths;
    config.parallel = parallel;

    let result = solve_board(&config, lexicon)?;
    print_solve_result(&result, paths);
    Ok(())
}
